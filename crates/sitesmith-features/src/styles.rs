//! Shared style group declarations
//!
//! Some component families legitimately share one stylesheet instead of a
//! private one each. That exemption lives here as a single declarative table
//! so the assembler (which decides what to emit) and the consistency checker
//! (which decides what to expect) can never drift apart. Ad hoc conditionals
//! on either side are exactly the defect class this table exists to prevent.

/// Component name -> shared style group id.
///
/// Group ids must not collide with the kebab-cased name of any component,
/// since grouped and private stylesheets live in the same directory.
pub const SHARED_STYLE_GROUPS: &[(&str, &str)] = &[
    ("LiveChat", "chat"),
    ("ChatWidget", "chat"),
    ("ChatMessage", "chat"),
    ("LoadingSpinner", "feedback"),
    ("ErrorFallback", "feedback"),
];

/// Shared group for a component, if it belongs to one
pub fn shared_style_group(component: &str) -> Option<&'static str> {
    SHARED_STYLE_GROUPS
        .iter()
        .find(|(name, _)| *name == component)
        .map(|(_, group)| *group)
}

/// Ordered, deduplicated group ids needed by a component set. Order follows
/// first appearance in `components` so style emission stays deterministic.
pub fn style_groups<S: AsRef<str>>(components: &[S]) -> Vec<&'static str> {
    let mut groups = Vec::new();
    for component in components {
        if let Some(group) = shared_style_group(component.as_ref()) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_family_shares_one_group() {
        assert_eq!(shared_style_group("LiveChat"), Some("chat"));
        assert_eq!(shared_style_group("ChatWidget"), Some("chat"));
        assert_eq!(shared_style_group("ChatMessage"), Some("chat"));
    }

    #[test]
    fn test_ungrouped_component_has_no_group() {
        assert_eq!(shared_style_group("Navigation"), None);
        assert_eq!(shared_style_group("ContactForm"), None);
    }

    #[test]
    fn test_style_groups_dedupe_in_order() {
        let components = ["LoadingSpinner", "LiveChat", "ChatMessage", "ErrorFallback"];
        assert_eq!(style_groups(&components), vec!["feedback", "chat"]);
    }

    #[test]
    fn test_group_ids_do_not_collide_with_component_style_names() {
        // Grouped and private stylesheets share a directory; a group id that
        // kebab-matches a component name would silently merge two files.
        let kebab = |name: &str| {
            let mut out = String::new();
            for (i, ch) in name.chars().enumerate() {
                if ch.is_uppercase() {
                    if i > 0 {
                        out.push('-');
                    }
                    out.extend(ch.to_lowercase());
                } else {
                    out.push(ch);
                }
            }
            out
        };
        for (component, group) in SHARED_STYLE_GROUPS {
            assert_ne!(&kebab(component), group);
        }
    }
}

//! Artifact path layout
//!
//! Single source of truth for where generated modules and their companion
//! style artifacts live. The assembler derives emitted paths from these
//! functions and the consistency checker re-derives expected paths from the
//! same functions; neither side may hardcode a path scheme of its own.

/// Core stylesheet emitted for every project
pub const GLOBAL_STYLE_PATH: &str = "src/styles/global.css";

pub fn page_module_path(token: &str) -> String {
    format!("src/pages/{}.jsx", pascal_case(token))
}

pub fn page_style_path(token: &str) -> String {
    format!("src/styles/pages/{token}.css")
}

pub fn component_module_path(name: &str) -> String {
    format!("src/components/{name}.jsx")
}

pub fn component_style_path(name: &str) -> String {
    format!("src/styles/components/{}.css", kebab_case(name))
}

/// Style path for a shared style group. Groups live in the same directory as
/// private component styles; group ids are chosen so they cannot collide with
/// a kebab-cased component name.
pub fn shared_style_path(group: &str) -> String {
    format!("src/styles/components/{group}.css")
}

/// `contact-form` -> `ContactForm`, `home` -> `Home`
pub fn pascal_case(token: &str) -> String {
    token
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `LiveChat` -> `live-chat`
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
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
}

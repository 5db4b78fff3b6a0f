//! Content resolver
//!
//! Resolution priority: externally supplied content first, then the static
//! per-industry table, then the table's default entry for unrecognized
//! industry codes. Every path upholds the same invariant: the resolved
//! bundle never has an empty services or testimonials list, because page
//! generators emit repeated blocks and assume at least one entry.

use sitesmith_core::{
    Configuration, ContentBundle, ExternalContent, ServiceEntry, TestimonialEntry,
};
use tracing::debug;

use crate::industries;

/// Resolve the content bundle for one configuration. Pure and total.
pub fn resolve(config: &Configuration) -> ContentBundle {
    match &config.external_content {
        Some(external) => {
            debug!("resolving content from external bundle");
            from_external(external, &config.business_name)
        }
        None => {
            debug!(industry = %config.industry_code, "resolving content from industry table");
            from_industry(&config.industry_code, config)
        }
    }
}

/// Map an external bundle into the resolved shape, synthesizing defaults for
/// missing sub-fields. Empty lists count as missing so the non-empty
/// invariant holds even for degenerate input.
fn from_external(external: &ExternalContent, business_name: &str) -> ContentBundle {
    let services = if external.services.is_empty() {
        default_services(business_name)
    } else {
        external
            .services
            .iter()
            .map(|entry| ServiceEntry::new(&entry.title, &entry.description))
            .collect()
    };

    let testimonials = if external.testimonials.is_empty() {
        vec![default_testimonial()]
    } else {
        external
            .testimonials
            .iter()
            .map(|entry| TestimonialEntry::new(&entry.name, &entry.text, entry.rating))
            .collect()
    };

    ContentBundle {
        hero_title: external
            .hero_title
            .clone()
            .unwrap_or_else(|| format!("Welcome to {business_name}")),
        hero_subtitle: external
            .hero_subtitle
            .clone()
            .unwrap_or_else(|| "Quality service you can rely on".to_string()),
        services,
        testimonials,
        about_text: external.about_text.clone().unwrap_or_else(|| {
            format!("{business_name} is committed to delivering quality work and honest service.")
        }),
        cta_primary: external
            .cta_primary
            .clone()
            .unwrap_or_else(|| "Contact Us".to_string()),
        cta_secondary: external
            .cta_secondary
            .clone()
            .unwrap_or_else(|| "Learn More".to_string()),
    }
}

fn from_industry(industry_code: &str, config: &Configuration) -> ContentBundle {
    let content = industries::lookup(industry_code);
    let name = config.business_name.as_str();

    let about_text = match &config.business.description {
        Some(description) if !description.is_empty() => description.clone(),
        _ => interpolate(content.about_text, name),
    };

    ContentBundle {
        hero_title: interpolate(content.hero_title, name),
        hero_subtitle: interpolate(content.hero_subtitle, name),
        services: content
            .services
            .iter()
            .map(|(title, description)| ServiceEntry::new(*title, *description))
            .collect(),
        testimonials: content
            .testimonials
            .iter()
            .map(|(who, text, rating)| TestimonialEntry::new(*who, *text, *rating))
            .collect(),
        about_text,
        cta_primary: content.cta_primary.to_string(),
        cta_secondary: content.cta_secondary.to_string(),
    }
}

/// Default three-entry service list used when an external bundle omits one
fn default_services(business_name: &str) -> Vec<ServiceEntry> {
    vec![
        ServiceEntry::new(
            "Our Services",
            format!("Professional solutions from {business_name}, tailored to your needs."),
        ),
        ServiceEntry::new(
            "Consultation",
            "Talk to us about what you need; advice is free.",
        ),
        ServiceEntry::new("Support", "We stay available long after the work is done."),
    ]
}

fn default_testimonial() -> TestimonialEntry {
    TestimonialEntry::new(
        "A satisfied customer",
        "Professional, punctual, and a pleasure to work with.",
        5,
    )
}

fn interpolate(template: &str, business_name: &str) -> String {
    template.replace("{business}", business_name)
}

//! Page module artifacts
//!
//! One module per resolved page token, populated from the resolved content
//! bundle. Tokens the resolver can produce all have a dedicated template; a
//! generic template covers anything else so the coverage invariant holds
//! even if the rule table grows before this module catches up.

use sitesmith_core::layout::pascal_case;
use sitesmith_core::{Artifact, ArtifactKind, Configuration, ContentBundle};
use sitesmith_features::ResolvedFeatures;

pub fn generate(
    config: &Configuration,
    resolved: &ResolvedFeatures,
    content: &ContentBundle,
) -> Vec<Artifact> {
    resolved
        .pages
        .iter()
        .map(|token| {
            Artifact::new(
                sitesmith_core::layout::page_module_path(token),
                page_module(token, config, content),
                ArtifactKind::Page,
            )
        })
        .collect()
}

fn page_module(token: &str, config: &Configuration, content: &ContentBundle) -> String {
    let name = pascal_case(token);
    let body = match token {
        "home" => home_body(content),
        "about" => about_body(config, content),
        "services" => services_body(content),
        "contact" => contact_body(config),
        "login" => auth_body("Sign In", "login"),
        "register" => auth_body("Create Account", "register"),
        "profile" => profile_body(),
        "chat" => chat_body(),
        "locations" => locations_body(config),
        "gallery" => gallery_body(),
        "blog" => blog_body(),
        "booking" => booking_body(),
        _ => generic_body(token),
    };

    format!(
        "import '../styles/pages/{token}.css';\n\
         {imports}\n\
         export default function {name}() {{\n\
         {i}return (\n\
         {i}{i}<main className=\"{token}-page\">\n\
         {body}\
         {i}{i}</main>\n\
         {i});\n\
         }}\n",
        imports = page_imports(token),
        i = "  ",
    )
}

fn page_imports(token: &str) -> String {
    let components: &[&str] = match token {
        "contact" => &["ContactForm"],
        "login" | "register" => &["AuthForm"],
        "profile" => &["UserProfile"],
        "chat" => &["LiveChat"],
        "locations" => &["LocationMap"],
        "gallery" => &["ImageGallery"],
        "blog" => &["BlogCard"],
        "booking" => &["BookingForm"],
        _ => &[],
    };
    components
        .iter()
        .map(|c| format!("import {c} from '../components/{c}';\n"))
        .collect()
}

fn home_body(content: &ContentBundle) -> String {
    let mut services = String::new();
    for entry in &content.services {
        services.push_str(&format!(
            "          <article>\n            <h3>{}</h3>\n            <p>{}</p>\n          </article>\n",
            entry.title, entry.description
        ));
    }
    let mut testimonials = String::new();
    for entry in &content.testimonials {
        testimonials.push_str(&format!(
            "          <blockquote>\n            <p>{text}</p>\n            <footer>{name} — {rating}/5</footer>\n          </blockquote>\n",
            text = entry.text,
            name = entry.name,
            rating = entry.rating,
        ));
    }
    format!(
        "      <section className=\"hero\">\n\
         \x20       <h1>{hero_title}</h1>\n\
         \x20       <p>{hero_subtitle}</p>\n\
         \x20       <a className=\"cta-primary\" href=\"/contact\">{cta_primary}</a>\n\
         \x20       <a className=\"cta-secondary\" href=\"/services\">{cta_secondary}</a>\n\
         \x20     </section>\n\
         \x20     <section className=\"services-preview\">\n\
         {services}\
         \x20     </section>\n\
         \x20     <section className=\"testimonials\">\n\
         {testimonials}\
         \x20     </section>\n",
        hero_title = content.hero_title,
        hero_subtitle = content.hero_subtitle,
        cta_primary = content.cta_primary,
        cta_secondary = content.cta_secondary,
    )
}

fn about_body(config: &Configuration, content: &ContentBundle) -> String {
    format!(
        "      <h1>About {business}</h1>\n\
         \x20     <p>{about}</p>\n",
        business = config.business_name,
        about = content.about_text,
    )
}

fn services_body(content: &ContentBundle) -> String {
    let mut items = String::new();
    for entry in &content.services {
        items.push_str(&format!(
            "        <li>\n          <h2>{}</h2>\n          <p>{}</p>\n        </li>\n",
            entry.title, entry.description
        ));
    }
    format!("      <h1>Services</h1>\n      <ul className=\"service-list\">\n{items}      </ul>\n")
}

fn contact_body(config: &Configuration) -> String {
    let email = config.business.email.as_deref().unwrap_or("hello@example.com");
    let phone = config.business.phone.as_deref().unwrap_or("");
    format!(
        "      <h1>Contact Us</h1>\n\
         \x20     <p>Email: {email}</p>\n\
         \x20     <p>Phone: {phone}</p>\n\
         \x20     <ContactForm />\n"
    )
}

fn auth_body(heading: &str, mode: &str) -> String {
    format!(
        "      <h1>{heading}</h1>\n\
         \x20     <AuthForm mode=\"{mode}\" />\n"
    )
}

fn profile_body() -> String {
    "      <h1>Your Profile</h1>\n      <UserProfile />\n".to_string()
}

fn chat_body() -> String {
    "      <h1>Chat With Us</h1>\n      <LiveChat />\n".to_string()
}

fn locations_body(config: &Configuration) -> String {
    let address = config.business.address.as_deref().unwrap_or("");
    format!(
        "      <h1>Find Us</h1>\n\
         \x20     <p>{address}</p>\n\
         \x20     <LocationMap />\n"
    )
}

fn gallery_body() -> String {
    "      <h1>Gallery</h1>\n      <ImageGallery />\n".to_string()
}

fn blog_body() -> String {
    "      <h1>Latest Posts</h1>\n      <BlogCard />\n".to_string()
}

fn booking_body() -> String {
    "      <h1>Book Now</h1>\n      <BookingForm />\n".to_string()
}

fn generic_body(token: &str) -> String {
    format!("      <h1>{}</h1>\n", pascal_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitesmith_core::{ServiceEntry, TestimonialEntry};

    fn content() -> ContentBundle {
        ContentBundle {
            hero_title: "Welcome".to_string(),
            hero_subtitle: "Sub".to_string(),
            services: vec![
                ServiceEntry::new("First", "One."),
                ServiceEntry::new("Second", "Two."),
            ],
            testimonials: vec![TestimonialEntry::new("Ann", "Loved it.", 5)],
            about_text: "Our story.".to_string(),
            cta_primary: "Go".to_string(),
            cta_secondary: "More".to_string(),
        }
    }

    #[test]
    fn test_one_artifact_per_page_token() {
        let config = Configuration::new("demo", "Acme");
        let resolved = sitesmith_features::resolve(&["auth", "chat"]);
        let artifacts = generate(&config, &resolved, &content());
        assert_eq!(artifacts.len(), resolved.pages.len());
        assert!(artifacts.iter().all(|a| a.kind == ArtifactKind::Page));
    }

    #[test]
    fn test_home_renders_every_service_and_testimonial() {
        let config = Configuration::new("demo", "Acme");
        let module = page_module("home", &config, &content());
        assert!(module.contains("First"));
        assert!(module.contains("Second"));
        assert!(module.contains("Loved it."));
        assert!(module.contains("Welcome"));
    }

    #[test]
    fn test_page_imports_companion_style() {
        let config = Configuration::new("demo", "Acme");
        let module = page_module("contact", &config, &content());
        assert!(module.contains("import '../styles/pages/contact.css'"));
        assert!(module.contains("<ContactForm />"));
    }

    #[test]
    fn test_unknown_token_gets_generic_template() {
        let config = Configuration::new("demo", "Acme");
        let module = page_module("press-kit", &config, &content());
        assert!(module.contains("export default function PressKit()"));
    }
}

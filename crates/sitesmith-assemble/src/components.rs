//! Component module artifacts

use sitesmith_core::layout::kebab_case;
use sitesmith_core::{Artifact, ArtifactKind, Configuration};
use sitesmith_features::{ResolvedFeatures, shared_style_group};

pub fn generate(config: &Configuration, resolved: &ResolvedFeatures) -> Vec<Artifact> {
    resolved
        .components
        .iter()
        .map(|name| {
            Artifact::new(
                sitesmith_core::layout::component_module_path(name),
                component_module(name, config),
                ArtifactKind::Component,
            )
        })
        .collect()
}

fn component_module(name: &str, config: &Configuration) -> String {
    // Grouped components import the family stylesheet, not a private one.
    let style_file = match shared_style_group(name) {
        Some(group) => group.to_string(),
        None => kebab_case(name),
    };

    format!(
        "import '../styles/components/{style_file}.css';\n\n\
         export default function {name}({props}) {{\n\
         {i}return (\n\
         {body}\
         {i});\n\
         }}\n",
        props = component_props(name),
        body = component_body(name, config),
        i = "  ",
    )
}

fn component_props(name: &str) -> &'static str {
    match name {
        "AuthForm" => "{ mode }",
        "ChatMessage" => "{ author, text }",
        "BlogCard" => "{ post }",
        _ => "",
    }
}

fn component_body(name: &str, config: &Configuration) -> String {
    let i = "  ";
    let class = kebab_case(name);
    let inner = match name {
        "Navigation" => format!(
            "{i}{i}<nav className=\"navigation\">\n\
             {i}{i}{i}<a className=\"brand\" href=\"/\">{business}</a>\n\
             {i}{i}{i}<a href=\"/about\">About</a>\n\
             {i}{i}{i}<a href=\"/services\">Services</a>\n\
             {i}{i}</nav>\n",
            business = config.business_name,
        ),
        "Footer" => format!(
            "{i}{i}<footer className=\"footer\">\n\
             {i}{i}{i}<p>{business}</p>\n\
             {i}{i}</footer>\n",
            business = config.business_name,
        ),
        "LoadingSpinner" => format!(
            "{i}{i}<div className=\"loading-spinner\" role=\"status\" aria-label=\"Loading\" />\n"
        ),
        "ErrorFallback" => format!(
            "{i}{i}<div className=\"error-fallback\" role=\"alert\">\n\
             {i}{i}{i}<p>Something went wrong. Please try again.</p>\n\
             {i}{i}</div>\n"
        ),
        "AuthForm" => format!(
            "{i}{i}<form className=\"auth-form\">\n\
             {i}{i}{i}<input type=\"email\" name=\"email\" placeholder=\"Email\" required />\n\
             {i}{i}{i}<input type=\"password\" name=\"password\" placeholder=\"Password\" required />\n\
             {i}{i}{i}<button type=\"submit\">{{mode === 'register' ? 'Create Account' : 'Sign In'}}</button>\n\
             {i}{i}</form>\n"
        ),
        "ContactForm" => format!(
            "{i}{i}<form className=\"contact-form\">\n\
             {i}{i}{i}<input type=\"text\" name=\"name\" placeholder=\"Your name\" required />\n\
             {i}{i}{i}<input type=\"email\" name=\"email\" placeholder=\"Email\" required />\n\
             {i}{i}{i}<textarea name=\"message\" placeholder=\"How can we help?\" required />\n\
             {i}{i}{i}<button type=\"submit\">Send</button>\n\
             {i}{i}</form>\n"
        ),
        "LiveChat" => format!(
            "{i}{i}<section className=\"live-chat\">\n\
             {i}{i}{i}<div className=\"message-list\" />\n\
             {i}{i}{i}<input type=\"text\" placeholder=\"Type a message\" />\n\
             {i}{i}</section>\n"
        ),
        "ChatMessage" => format!(
            "{i}{i}<div className=\"chat-message\">\n\
             {i}{i}{i}<strong>{{author}}</strong>\n\
             {i}{i}{i}<span>{{text}}</span>\n\
             {i}{i}</div>\n"
        ),
        "ChatWidget" => format!(
            "{i}{i}<button className=\"chat-widget\" aria-label=\"Open chat\">💬</button>\n"
        ),
        "LocationMap" => format!(
            "{i}{i}<div className=\"location-map\" data-provider=\"osm\" />\n"
        ),
        _ => format!("{i}{i}<div className=\"{class}\" />\n"),
    };
    inner
}

//! Per-industry fallback content
//!
//! Process-wide immutable lookup data, loaded once and never mutated at
//! request time. Text fields may carry a `{business}` placeholder which the
//! resolver replaces with the configured business name.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Industry code used when the configured code is unrecognized
pub const DEFAULT_INDUSTRY: &str = "general";

/// Static content for one industry
pub struct IndustryContent {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub services: &'static [(&'static str, &'static str)],
    pub testimonials: &'static [(&'static str, &'static str, u8)],
    pub about_text: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

static INDUSTRY_TABLE: LazyLock<HashMap<&'static str, IndustryContent>> = LazyLock::new(|| {
    let mut table = HashMap::new();

    table.insert(
        "restaurant",
        IndustryContent {
            hero_title: "Welcome to {business}",
            hero_subtitle: "Fresh ingredients, honest cooking, and a table waiting for you",
            services: &[
                ("Dine In", "A warm dining room with a seasonal menu that changes weekly."),
                ("Takeaway", "Your favourite dishes, packed fresh and ready when you arrive."),
                ("Private Events", "Set menus and a dedicated team for groups of any size."),
            ],
            testimonials: &[
                ("Maria G.", "The tasting menu was the highlight of our anniversary.", 5),
                ("Tom R.", "Consistently great food and the staff remember your name.", 5),
            ],
            about_text: "{business} started as a small family kitchen and grew into a neighbourhood favourite. Every dish is prepared from scratch with locally sourced ingredients.",
            cta_primary: "Book a Table",
            cta_secondary: "View Menu",
        },
    );

    table.insert(
        "fitness",
        IndustryContent {
            hero_title: "Train Stronger at {business}",
            hero_subtitle: "Coaching, community, and equipment that keeps up with you",
            services: &[
                ("Personal Training", "One-on-one sessions built around your goals and schedule."),
                ("Group Classes", "High-energy classes for every level, from beginner to advanced."),
                ("Nutrition Plans", "Practical meal planning that works with your training."),
            ],
            testimonials: &[
                ("Dana K.", "Down 12kg and stronger than I have ever been.", 5),
                ("Leo M.", "The coaches actually care about your progress.", 5),
            ],
            about_text: "{business} was built on a simple idea: fitness should be coached, not sold. Our trainers meet you where you are and move you forward.",
            cta_primary: "Start Free Trial",
            cta_secondary: "See Classes",
        },
    );

    table.insert(
        "technology",
        IndustryContent {
            hero_title: "{business} — Software That Ships",
            hero_subtitle: "From prototype to production without the drama",
            services: &[
                ("Product Development", "Full-cycle delivery from discovery workshops to launch."),
                ("Cloud & DevOps", "Infrastructure that scales with your traffic, not your headcount."),
                ("Consulting", "Senior engineers embedded with your team when it matters."),
            ],
            testimonials: &[
                ("CTO, fintech startup", "They shipped in eight weeks what our vendor quoted a year for.", 5),
                ("Head of Product", "Rare mix of engineering depth and product sense.", 5),
            ],
            about_text: "{business} is a senior engineering team that partners with companies to design, build, and run software products that matter.",
            cta_primary: "Get in Touch",
            cta_secondary: "Our Work",
        },
    );

    table.insert(
        "healthcare",
        IndustryContent {
            hero_title: "Care You Can Trust at {business}",
            hero_subtitle: "Modern medicine with an old-fashioned bedside manner",
            services: &[
                ("General Practice", "Same-week appointments with physicians who listen."),
                ("Preventive Care", "Screenings and checkups that catch problems early."),
                ("Telehealth", "Secure video consultations from wherever you are."),
            ],
            testimonials: &[
                ("Patient since 2019", "The first practice where I never feel rushed.", 5),
                ("Sarah W.", "Booking online and being seen on time. Imagine that.", 5),
            ],
            about_text: "{business} brings together experienced clinicians and modern tooling to deliver care that is personal, punctual, and evidence-based.",
            cta_primary: "Book Appointment",
            cta_secondary: "Our Services",
        },
    );

    table.insert(
        "retail",
        IndustryContent {
            hero_title: "Discover {business}",
            hero_subtitle: "Curated products, fair prices, and fast delivery",
            services: &[
                ("Online Store", "Browse the full catalogue and check out in under a minute."),
                ("Click & Collect", "Order ahead and pick up in store the same day."),
                ("Easy Returns", "Thirty days, no questions, free return shipping."),
            ],
            testimonials: &[
                ("Verified buyer", "Ordered Monday, wearing it Wednesday. Quality is excellent.", 5),
                ("Jess P.", "Customer service actually answered and actually helped.", 4),
            ],
            about_text: "{business} selects every product in its range by hand. If we would not buy it ourselves, we do not sell it.",
            cta_primary: "Shop Now",
            cta_secondary: "New Arrivals",
        },
    );

    table.insert(
        "beauty",
        IndustryContent {
            hero_title: "Look and Feel Your Best at {business}",
            hero_subtitle: "Treatments tailored to you, by people who love their craft",
            services: &[
                ("Hair Styling", "Cuts, colour, and styling from award-winning stylists."),
                ("Skin Care", "Facials and treatments matched to your skin, not a menu."),
                ("Nails", "Manicures and pedicures in a space built to relax."),
            ],
            testimonials: &[
                ("Amira S.", "I have never trusted anyone else with my colour since.", 5),
                ("Nina T.", "Booked online in seconds, best facial I have had.", 5),
            ],
            about_text: "{business} is a salon built around one principle: you should leave feeling better than when you walked in. Every treatment starts with a consultation, not a price list.",
            cta_primary: "Book Appointment",
            cta_secondary: "Price List",
        },
    );

    table.insert(
        DEFAULT_INDUSTRY,
        IndustryContent {
            hero_title: "Welcome to {business}",
            hero_subtitle: "Quality service you can rely on",
            services: &[
                ("Our Services", "Professional solutions tailored to your needs."),
                ("Consultation", "Talk to us about what you need; advice is free."),
                ("Support", "We stay available long after the work is done."),
            ],
            testimonials: &[("A satisfied customer", "Professional, punctual, and a pleasure to work with.", 5)],
            about_text: "{business} is committed to delivering quality work and honest service to every customer.",
            cta_primary: "Contact Us",
            cta_secondary: "Learn More",
        },
    );

    table
});

/// Look up industry content by code, falling back to the default entry for
/// unrecognized codes. The table always contains the default entry, so this
/// never fails.
pub fn lookup(industry_code: &str) -> &'static IndustryContent {
    INDUSTRY_TABLE
        .get(industry_code)
        .unwrap_or_else(|| &INDUSTRY_TABLE[DEFAULT_INDUSTRY])
}

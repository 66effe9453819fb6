//! Deterministic fallback structure.

use pp_schema::{
    Card, ColorScheme, Field, FieldKind, Layout, Link, Props, Section, SectionKind,
    WebsiteStructure,
};

/// Title of the fallback structure.
pub const FALLBACK_TITLE: &str = "AI Generated Website";

/// Fixed structure used when acquisition fails.
///
/// Pure: identical inputs give identical structures. Contains a navigation
/// bar with four links, a hero, a three-card feature grid and a three-field
/// contact form.
#[must_use]
pub fn fallback_structure(color_scheme: ColorScheme, layout: Layout) -> WebsiteStructure {
    let navigation = Section::new(SectionKind::Navigation, "Navigation", "")
        .with_components(&["Navigation"])
        .with_props(Props {
            links: vec![
                Link::new("Home", "#home"),
                Link::new("About", "#about"),
                Link::new("Services", "#services"),
                Link::new("Contact", "#contact"),
            ],
            ..Props::default()
        });

    let hero = Section::new(
        SectionKind::Hero,
        "Welcome to Your AI Website",
        "This website was generated using advanced AI and PromptPixel components",
    )
    .with_components(&["Button", "Typography"])
    .with_props(Props {
        variant: Some(color_scheme.as_str().to_owned()),
        size: Some("lg".to_owned()),
        ..Props::default()
    });

    let features = Section::new(
        SectionKind::Features,
        "Key Features",
        "Discover what makes us special",
    )
    .with_components(&["Card", "Grid"])
    .with_props(Props {
        cards: vec![
            card(
                "Modern Design",
                "Built with the latest design principles",
                "Learn More",
            ),
            card("Responsive", "Works perfectly on all devices", "View Demo"),
            card(
                "Fast Loading",
                "Optimized for speed and performance",
                "Test Speed",
            ),
        ],
        ..Props::default()
    });

    let contact = Section::new(
        SectionKind::Contact,
        "Get In Touch",
        "We'd love to hear from you",
    )
    .with_components(&["Form", "Button"])
    .with_props(Props {
        fields: vec![
            Field::new(FieldKind::Text, "name", "Full Name", "Enter your name"),
            Field::new(FieldKind::Email, "email", "Email", "Enter your email"),
            Field::new(FieldKind::Textarea, "message", "Message", "Your message"),
        ],
        ..Props::default()
    });

    WebsiteStructure {
        title: FALLBACK_TITLE.to_owned(),
        description: format!(
            "Generated using PromptPixel components with the {} theme and {} layout",
            color_scheme.as_str(),
            layout.as_str()
        ),
        sections: vec![navigation, hero, features, contact],
        color_scheme,
        layout,
    }
    .with_design(color_scheme, layout)
}

fn card(title: &str, content: &str, footer: &str) -> Card {
    Card {
        title: title.to_owned(),
        content: content.to_owned(),
        image: None,
        footer: Some(footer.to_owned()),
    }
}

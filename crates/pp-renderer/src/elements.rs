//! Composable element renderers.
//!
//! Each renderer is a pure function returning an [`Element`]. Section
//! renderers compose them; they can also be used on their own.

use pp_schema::{Card, Field, Link};

use crate::node::{Element, Node};

/// Button style variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Text style for [`typography`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    H1,
    H2,
    H3,
    Paragraph,
}

impl TextStyle {
    fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Paragraph => "p",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::H1 => "pp-typography--h1",
            Self::H2 => "pp-typography--h2",
            Self::H3 => "pp-typography--h3",
            Self::Paragraph => "pp-typography--p",
        }
    }
}

pub fn button(text: &str, variant: ButtonVariant, size: ButtonSize) -> Element {
    let mut class = format!("pp-button pp-button--{}", variant.as_str());
    match size {
        ButtonSize::Sm => class.push_str(" pp-button--sm"),
        ButtonSize::Md => {}
        ButtonSize::Lg => class.push_str(" pp-button--lg"),
    }
    Element::new("button")
        .class(class)
        .attr("type", "button")
        .text(text)
}

pub fn typography(text: &str, style: TextStyle) -> Element {
    Element::new(style.tag()).class(style.class()).text(text)
}

/// Card with a header, body and optional footer.
///
/// The footer region is emitted only for a non-empty footer string.
pub fn card(card: &Card) -> Element {
    let header = Element::new("div").class("pp-card__header").child(
        Element::new("h3")
            .class("pp-card__title")
            .text(card.title.as_str()),
    );
    let content = Element::new("div").class("pp-card__content").child(
        Element::new("p")
            .class("pp-card__description")
            .text(card.content.as_str()),
    );

    let mut el = Element::new("div").class("pp-card").child(header).child(content);
    if let Some(footer) = card.footer_text() {
        el = el.child(
            Element::new("div")
                .class("pp-card__footer")
                .child(button(footer, ButtonVariant::Outline, ButtonSize::Sm)),
        );
    }
    el
}

/// Sticky navigation bar with a brand label and links in order.
pub fn navigation(brand: &str, links: &[Link]) -> Element {
    let menu = Element::new("div")
        .class("pp-nav__menu")
        .with_children(links.iter().map(|link| {
            Node::from(
                Element::new("a")
                    .class("pp-nav__link")
                    .attr("href", link.href.as_str())
                    .text(link.text.as_str()),
            )
        }));

    Element::new("nav").class("pp-navigation").child(
        Element::new("div").class("pp-container").child(
            Element::new("div")
                .class("pp-nav")
                .child(Element::new("div").class("pp-nav__brand").text(brand))
                .child(menu),
        ),
    )
}

/// Hero block with a title, subtitle and two calls to action.
pub fn hero(title: &str, subtitle: &str) -> Element {
    let actions = Element::new("div")
        .class("pp-hero__actions")
        .child(button("Get Started", ButtonVariant::Default, ButtonSize::Lg))
        .child(button("Learn More", ButtonVariant::Outline, ButtonSize::Lg));

    Element::new("section").class("pp-hero").child(
        Element::new("div").class("pp-container").child(
            Element::new("div")
                .class("pp-hero__content")
                .child(typography(title, TextStyle::H1))
                .child(typography(subtitle, TextStyle::Paragraph))
                .child(actions),
        ),
    )
}

/// Form with one group per field and a trailing submit button.
pub fn form(fields: &[Field]) -> Element {
    let groups = fields.iter().map(|field| Node::from(form_field(field)));
    let submit = Element::new("button")
        .class("pp-button pp-button--default")
        .attr("type", "submit")
        .text("Submit");

    Element::new("form")
        .class("pp-form")
        .with_children(groups)
        .child(Element::new("div").class("pp-form__actions").child(submit))
}

fn form_field(field: &Field) -> Element {
    let label = Element::new("label")
        .class("pp-label")
        .attr("for", field.name.as_str())
        .text(field.label.as_str());

    let input = if field.kind.is_multiline() {
        Element::new("textarea")
            .class("pp-textarea")
            .attr("id", field.name.as_str())
            .attr("name", field.name.as_str())
            .attr("placeholder", field.placeholder.as_str())
    } else {
        Element::new("input")
            .class("pp-input")
            .attr("type", field.kind.as_str())
            .attr("id", field.name.as_str())
            .attr("name", field.name.as_str())
            .attr("placeholder", field.placeholder.as_str())
    };

    Element::new("div")
        .class("pp-form__group")
        .child(label)
        .child(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pp_schema::FieldKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_button_classes() {
        let html = button("Go", ButtonVariant::Outline, ButtonSize::Lg).render();
        assert_eq!(
            html,
            r#"<button class="pp-button pp-button--outline pp-button--lg" type="button">Go</button>"#
        );
    }

    #[test]
    fn test_button_medium_has_no_size_modifier() {
        let html = button("Go", ButtonVariant::Default, ButtonSize::Md).render();
        assert!(html.contains(r#"class="pp-button pp-button--default""#));
    }

    #[test]
    fn test_typography_styles() {
        assert_eq!(
            typography("Hi", TextStyle::H2).render(),
            "<h2 class=\"pp-typography--h2\">Hi</h2>\n"
        );
        assert_eq!(
            typography("Body", TextStyle::Paragraph).render(),
            "<p class=\"pp-typography--p\">Body</p>\n"
        );
    }

    #[test]
    fn test_card_without_footer() {
        let html = card(&Card {
            title: "Fast".to_owned(),
            content: "Very".to_owned(),
            ..Card::default()
        })
        .render();
        assert!(html.contains("pp-card__title"));
        assert!(html.contains("Very"));
        assert!(!html.contains("pp-card__footer"));
    }

    #[test]
    fn test_card_with_footer() {
        let html = card(&Card {
            title: "Fast".to_owned(),
            content: "Very".to_owned(),
            image: None,
            footer: Some("Test Speed".to_owned()),
        })
        .render();
        assert!(html.contains("pp-card__footer"));
        assert!(html.contains(">Test Speed</button>"));
    }

    #[test]
    fn test_navigation_links_in_order() {
        let links = [Link::new("Home", "#home"), Link::new("About", "#about")];
        let html = navigation("Brand", &links).render();
        let home = html.find("#home").unwrap();
        let about = html.find("#about").unwrap();
        assert!(home < about);
        assert_eq!(html.matches("pp-nav__link").count(), 2);
        assert!(html.contains("<div class=\"pp-nav__brand\">Brand</div>"));
    }

    #[test]
    fn test_navigation_empty_menu() {
        let html = navigation("Brand", &[]).render();
        assert!(html.contains("<div class=\"pp-nav__menu\"></div>"));
    }

    #[test]
    fn test_hero_has_two_large_actions() {
        let html = hero("Welcome", "Hello").render();
        assert!(html.contains("<h1 class=\"pp-typography--h1\">Welcome</h1>"));
        assert!(html.contains("pp-button--default pp-button--lg\" type=\"button\">Get Started"));
        assert!(html.contains("pp-button--outline pp-button--lg\" type=\"button\">Learn More"));
    }

    #[test]
    fn test_form_fields_and_submit() {
        let fields = [
            Field::new(FieldKind::Email, "email", "Email", "you@example.com"),
            Field::new(FieldKind::Textarea, "message", "Message", "Say hi"),
        ];
        let html = form(&fields).render();
        assert!(html.contains(
            r#"<input class="pp-input" type="email" id="email" name="email" placeholder="you@example.com">"#
        ));
        assert!(html.contains(
            r#"<textarea class="pp-textarea" id="message" name="message" placeholder="Say hi"></textarea>"#
        ));
        assert!(html.contains(r#"type="submit">Submit</button>"#));
    }

    #[test]
    fn test_form_without_fields_still_submits() {
        let html = form(&[]).render();
        assert!(!html.contains("pp-form__group"));
        assert!(html.contains(r#"type="submit""#));
    }
}

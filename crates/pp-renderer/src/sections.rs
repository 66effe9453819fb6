//! Section dispatch.

use pp_schema::{Section, SectionKind};

use crate::elements::{self, TextStyle};
use crate::node::{Element, Node};

/// Render one section by its type.
///
/// Types without a dedicated renderer use the generic content renderer.
#[must_use]
pub fn render_section(section: &Section) -> Element {
    match section.kind {
        SectionKind::Hero => elements::hero(&section.title, &section.content),
        SectionKind::Navigation => elements::navigation(&section.title, &section.props.links),
        SectionKind::Cards | SectionKind::Features => card_grid(section),
        SectionKind::Contact => contact(section),
        SectionKind::Content
        | SectionKind::Footer
        | SectionKind::Gallery
        | SectionKind::Testimonials
        | SectionKind::Faq => content(section),
    }
}

fn wrap(kind: SectionKind, inner: impl IntoIterator<Item = Node>) -> Element {
    Element::new("section")
        .class(format!("pp-section pp-section--{}", kind.as_str()))
        .child(Element::new("div").class("pp-container").with_children(inner))
}

fn card_grid(section: &Section) -> Element {
    let grid = Element::new("div")
        .class("pp-grid pp-grid--3")
        .with_children(section.props.cards.iter().map(|c| Node::from(elements::card(c))));
    wrap(
        section.kind,
        [
            Node::from(elements::typography(&section.title, TextStyle::H2)),
            Node::from(grid),
        ],
    )
}

fn contact(section: &Section) -> Element {
    let intro = Element::new("div")
        .class("pp-contact__intro")
        .child(elements::typography(&section.title, TextStyle::H2))
        .child(elements::typography(&section.content, TextStyle::Paragraph));
    wrap(
        section.kind,
        [Node::from(intro), Node::from(elements::form(&section.props.fields))],
    )
}

fn content(section: &Section) -> Element {
    wrap(
        section.kind,
        [
            Node::from(elements::typography(&section.title, TextStyle::H2)),
            Node::from(elements::typography(&section.content, TextStyle::Paragraph)),
        ],
    )
}

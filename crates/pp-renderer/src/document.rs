//! Document assembly.

use pp_schema::WebsiteStructure;

use crate::node::{Element, Node};
use crate::palette::Palette;
use crate::sections::render_section;

const THEME_CSS: &str = include_str!("../assets/theme.css");

/// Text of the fixed footer block.
pub const FOOTER_TEXT: &str = "Generated by PromptPixel";

/// Render a structure to a complete HTML document.
#[must_use]
pub fn render(structure: &WebsiteStructure) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n");
    document(structure).write_to(&mut html);
    html
}

/// Build the `<html>` tree for a structure.
#[must_use]
pub fn document(structure: &WebsiteStructure) -> Node {
    let palette = Palette::for_scheme(structure.color_scheme);

    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "UTF-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1.0"),
        )
        .child(Element::new("title").text(structure.title.as_str()))
        .child(
            Element::new("meta")
                .attr("name", "description")
                .attr("content", structure.description.as_str()),
        )
        .child(
            Element::new("style")
                .child(Node::raw(palette.css_vars()))
                .child(Node::raw(THEME_CSS)),
        );

    let footer = Element::new("footer").class("pp-section pp-footer").child(
        Element::new("div")
            .class("pp-container")
            .child(Element::new("p").class("pp-typography--p").text(FOOTER_TEXT)),
    );

    let body = Element::new("body")
        .class(format!("pp-layout--{}", structure.layout.as_str()))
        .with_children(
            structure
                .sections
                .iter()
                .map(|section| Node::from(render_section(section))),
        )
        .child(footer);

    Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(body)
        .into()
}

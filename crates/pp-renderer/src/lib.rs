//! HTML renderer for PromptPixel website structures.
//!
//! Rendering is a pure, total function from a [`WebsiteStructure`] to one
//! self-contained HTML document. No network, storage, or global state.
//!
//! # Architecture
//!
//! - [`Node`]/[`Element`]: a small component tree. Text and attribute values
//!   are escaped once, when the tree is written out.
//! - [`elements`]: composable element renderers (button, card, typography,
//!   navigation, hero, form), each returning an [`Element`].
//! - [`render_section`]: closed dispatch from section type to renderer, with
//!   generic content as the default arm.
//! - [`render`]: document assembly (head, stylesheet, sections, footer).
//!
//! Every generated class name carries the `pp-` prefix.
//!
//! # Example
//!
//! ```
//! use pp_schema::{ColorScheme, Layout, Section, SectionKind, WebsiteStructure};
//!
//! let structure = WebsiteStructure {
//!     title: "Hello".to_owned(),
//!     description: String::new(),
//!     sections: vec![Section::new(SectionKind::Content, "About", "We bake.")],
//!     color_scheme: ColorScheme::Accent,
//!     layout: Layout::Default,
//! };
//! let html = pp_renderer::render(&structure);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("We bake."));
//! ```
//!
//! [`WebsiteStructure`]: pp_schema::WebsiteStructure

mod document;
pub mod elements;
mod node;
mod palette;
mod sections;

pub use document::{FOOTER_TEXT, document, render};
pub use node::{Element, Node, escape_html};
pub use palette::Palette;
pub use sections::render_section;

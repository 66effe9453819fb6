//! Website structure schema for PromptPixel.
//!
//! A [`WebsiteStructure`] is the typed contract between structure acquisition
//! (which produces it from model output or the fallback) and the renderer
//! (which consumes it). Deserialization is lenient about values and strict
//! about shapes:
//!
//! - Unknown section types become [`SectionKind::Content`]
//! - Unknown color schemes and layouts resolve to their defaults
//! - Missing or `null` strings and lists become empty
//! - A missing `sections` list, or one that is not a list, is an error
//!
//! # Example
//!
//! ```
//! use pp_schema::{SectionKind, WebsiteStructure};
//!
//! let json = r#"{
//!     "title": "Bakery",
//!     "description": "Fresh bread",
//!     "sections": [{"type": "marquee", "title": "Hello", "content": "World"}]
//! }"#;
//! let structure = WebsiteStructure::from_json(json).unwrap();
//! assert_eq!(structure.sections[0].kind, SectionKind::Content);
//! ```

mod de;
mod error;
mod kinds;
mod props;
mod structure;

pub use error::SchemaError;
pub use kinds::{ColorScheme, Layout, SectionKind};
pub use props::{Card, Field, FieldKind, Link, Props};
pub use structure::{MAX_SECTIONS, Section, WebsiteStructure};

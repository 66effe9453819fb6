//! Website structure and sections.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::error::SchemaError;
use crate::kinds::{ColorScheme, Layout, SectionKind};
use crate::props::Props;

/// Maximum number of sections accepted in a structure.
pub const MAX_SECTIONS: usize = 32;

/// Typed description of a website.
///
/// Section order is render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteStructure {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default)]
    pub layout: Layout,
}

/// One section of a website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type", default)]
    pub kind: SectionKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Referenced UI component names. Advisory only.
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Props,
}

impl Section {
    /// Create a section with empty components and props.
    pub fn new(kind: SectionKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            content: content.into(),
            components: Vec::new(),
            props: Props::default(),
        }
    }

    #[must_use]
    pub fn with_components(mut self, components: &[&str]) -> Self {
        self.components = components.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

impl WebsiteStructure {
    /// Parse and validate a structure document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if the text is not a structure-shaped JSON
    /// object and [`SchemaError::Invalid`] if it fails [`validate`](Self::validate).
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        let structure: Self = serde_json::from_str(text)?;
        structure.validate()?;
        Ok(structure)
    }

    /// Check structural rules that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] when the title is blank or there are
    /// more than [`MAX_SECTIONS`] sections.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.title.trim().is_empty() {
            return Err(SchemaError::invalid("title", "cannot be empty"));
        }
        if self.sections.len() > MAX_SECTIONS {
            return Err(SchemaError::invalid(
                "sections",
                format!(
                    "has {} entries, at most {MAX_SECTIONS} allowed",
                    self.sections.len()
                ),
            ));
        }
        Ok(())
    }

    /// Replace the color scheme and layout with the requested values.
    ///
    /// Sections without a `color` or `layout` hint take the new names.
    #[must_use]
    pub fn with_design(mut self, color_scheme: ColorScheme, layout: Layout) -> Self {
        self.color_scheme = color_scheme;
        self.layout = layout;
        for props in self.sections.iter_mut().map(|s| &mut s.props) {
            props
                .color
                .get_or_insert_with(|| color_scheme.as_str().to_owned());
            props.layout.get_or_insert_with(|| layout.as_str().to_owned());
        }
        self
    }

    /// Serialize as indented JSON for export.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

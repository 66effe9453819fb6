//! Section properties.
//!
//! The shape of [`Props`] is shared by every section type; each renderer
//! reads only the parts relevant to it. List fields are never absent, so
//! renderers can iterate them unconditionally.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::de::{null_as_default, string_or_none};

/// Free-form styling hints plus the typed lists used by specific sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    /// Visual variant hint (e.g., "primary", "outline").
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub variant: Option<String>,
    /// Size hint (e.g., "sm", "md", "lg").
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<String>,
    /// Color hint. Advisory; the structure's color scheme drives rendering.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<String>,
    /// Layout hint. Advisory; the structure's layout drives rendering.
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout: Option<String>,
    /// Cards for `cards` and `features` sections.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub cards: Vec<Card>,
    /// Links for `navigation` sections.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<Link>,
    /// Form fields for `contact` sections.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub fields: Vec<Field>,
}

/// A card in a grid section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Image URL. Advisory; not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Footer text. A footer region is rendered only when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Card {
    /// Footer text if present and non-empty.
    #[must_use]
    pub fn footer_text(&self) -> Option<&str> {
        self.footer.as_deref().filter(|f| !f.is_empty())
    }
}

/// A navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default = "default_href", deserialize_with = "href_or_default")]
    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

fn default_href() -> String {
    "#".to_owned()
}

fn href_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_href))
}

/// A contact form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placeholder: String,
}

impl Field {
    pub fn new(
        kind: FieldKind,
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
        }
    }
}

/// Input type of a form field. Unknown types are treated as `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
}

impl FieldKind {
    /// Parse a field type. Returns `None` for unknown types.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "email" => Some(Self::Email),
            "tel" => Some(Self::Tel),
            "textarea" => Some(Self::Textarea),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Textarea => "textarea",
        }
    }

    /// Whether this field renders as a multi-line input.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        self == Self::Textarea
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = string_or_none(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

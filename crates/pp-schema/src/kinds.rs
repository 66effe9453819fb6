//! Closed enumerations used by the structure schema.
//!
//! Every enum parses from its wire string with [`parse`](ColorScheme::parse)
//! and maps back with `as_str`. Deserialization never fails on an unknown
//! value: it resolves to the enum's default instead.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Named color token bundle applied to rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl ColorScheme {
    /// All supported schemes, in display order.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Accent];

    /// Parse a scheme name. Returns `None` for unknown names.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "accent" => Some(Self::Accent),
            _ => None,
        }
    }

    /// Resolve a scheme name, falling back to [`ColorScheme::Primary`].
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
        }
    }
}

/// Overall page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    #[default]
    Default,
    Centered,
    Wide,
}

impl Layout {
    /// All supported layouts, in display order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Centered, Self::Wide];

    /// Parse a layout name. Returns `None` for unknown names.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Self::Default),
            "centered" => Some(Self::Centered),
            "wide" => Some(Self::Wide),
            _ => None,
        }
    }

    /// Resolve a layout name, falling back to [`Layout::Default`].
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Centered => "centered",
            Self::Wide => "wide",
        }
    }
}

/// Section type tag.
///
/// Only some kinds have a dedicated renderer; the rest render as generic
/// content. Unrecognized tags deserialize as [`SectionKind::Content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionKind {
    Hero,
    Navigation,
    #[default]
    Content,
    Cards,
    Contact,
    Footer,
    Gallery,
    Testimonials,
    Faq,
    Features,
}

impl SectionKind {
    /// Parse a section type tag. Returns `None` for unknown tags.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Some(Self::Hero),
            "navigation" => Some(Self::Navigation),
            "content" => Some(Self::Content),
            "cards" => Some(Self::Cards),
            "contact" => Some(Self::Contact),
            "footer" => Some(Self::Footer),
            "gallery" => Some(Self::Gallery),
            "testimonials" => Some(Self::Testimonials),
            "faq" => Some(Self::Faq),
            "features" => Some(Self::Features),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Navigation => "navigation",
            Self::Content => "content",
            Self::Cards => "cards",
            Self::Contact => "contact",
            Self::Footer => "footer",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Faq => "faq",
            Self::Features => "features",
        }
    }
}

macro_rules! string_enum_serde {
    ($ty:ty, $lenient:expr) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = crate::de::string_or_none(deserializer)?;
                Ok(raw.as_deref().map_or_else(Self::default, $lenient))
            }
        }
    };
}

string_enum_serde!(ColorScheme, ColorScheme::resolve);
string_enum_serde!(Layout, Layout::resolve);
string_enum_serde!(SectionKind, |s| SectionKind::parse(s).unwrap_or_default());

//! Color scheme token lookup.

use pp_schema::ColorScheme;

/// Color tokens derived from a [`ColorScheme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub foreground: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Fixed lookup from scheme to tokens.
    #[must_use]
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Primary => Self {
                primary: "#2563eb",
                foreground: "#ffffff",
                accent: "#1d4ed8",
            },
            ColorScheme::Secondary => Self {
                primary: "#64748b",
                foreground: "#ffffff",
                accent: "#475569",
            },
            ColorScheme::Accent => Self {
                primary: "#f59e0b",
                foreground: "#ffffff",
                accent: "#d97706",
            },
        }
    }

    /// Look up tokens by scheme name. Unknown names use the primary scheme.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        Self::for_scheme(ColorScheme::resolve(name))
    }

    /// CSS custom property block for the document root.
    #[must_use]
    pub fn css_vars(&self) -> String {
        format!(
            ":root {{\n  --pp-primary: {};\n  --pp-primary-foreground: {};\n  --pp-accent: {};\n}}\n",
            self.primary, self.foreground, self.accent
        )
    }
}

//! User-facing generation settings and prompt composition.

use std::fmt::Write;

use pp_schema::{ColorScheme, Layout};

/// Canned website descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Template {
    #[default]
    Custom,
    TechStartup,
    Portfolio,
    Restaurant,
    Ecommerce,
    Blog,
    Agency,
    SaasPlatform,
    Educational,
}

impl Template {
    /// All templates, in display order.
    pub const ALL: [Self; 9] = [
        Self::Custom,
        Self::TechStartup,
        Self::Portfolio,
        Self::Restaurant,
        Self::Ecommerce,
        Self::Blog,
        Self::Agency,
        Self::SaasPlatform,
        Self::Educational,
    ];

    /// Parse a display name or kebab-case slug, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s) || t.display_name().eq_ignore_ascii_case(s))
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Custom => "Custom",
            Self::TechStartup => "Tech Startup",
            Self::Portfolio => "Portfolio",
            Self::Restaurant => "Restaurant",
            Self::Ecommerce => "E-commerce",
            Self::Blog => "Blog",
            Self::Agency => "Agency",
            Self::SaasPlatform => "SaaS Platform",
            Self::Educational => "Educational",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::TechStartup => "tech-startup",
            Self::Portfolio => "portfolio",
            Self::Restaurant => "restaurant",
            Self::Ecommerce => "ecommerce",
            Self::Blog => "blog",
            Self::Agency => "agency",
            Self::SaasPlatform => "saas-platform",
            Self::Educational => "educational",
        }
    }

    /// Canned website description. Empty for [`Template::Custom`].
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Custom => "",
            Self::TechStartup => {
                "A modern landing page for an AI-powered productivity tool. Include a hero \
                 with a product demo call to action, a feature showcase, customer \
                 testimonials, pricing tiers, a team section and a contact form."
            }
            Self::Portfolio => {
                "A creative portfolio for a UI/UX designer. Include a hero with a personal \
                 brand, a gallery of featured projects, a skills section, client \
                 testimonials, an about section and a contact form."
            }
            Self::Restaurant => {
                "An elegant website for a fine dining restaurant. Include a hero with a \
                 reservation call to action, menu categories with prices, a gallery of \
                 dishes, the chef's story, guest reviews, opening hours and a booking form."
            }
            Self::Ecommerce => {
                "An online store for a sustainable fashion brand. Include a product \
                 showcase hero, featured categories, a best sellers grid, the brand's \
                 sustainability story, customer reviews and a newsletter signup."
            }
            Self::Blog => {
                "A professional technology blog. Include a featured article hero, a grid \
                 of recent posts, category navigation, an author bio and a newsletter \
                 subscription form."
            }
            Self::Agency => {
                "A digital marketing agency website. Include a results-focused hero, a \
                 services showcase, case studies, team profiles, client statistics and a \
                 lead generation contact form."
            }
            Self::SaasPlatform => {
                "A landing page for a project management SaaS. Include a problem and \
                 solution hero, a feature overview, integrations, customer success \
                 stories, pricing plans and a demo booking form."
            }
            Self::Educational => {
                "A website for an online coding bootcamp. Include a hero with an \
                 enrollment call to action, a course catalog with difficulty levels, \
                 instructor profiles, student stories and an application form."
            }
        }
    }
}

/// Style requests added to the prompt. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Enhancements {
    pub animations: bool,
    pub icons: bool,
    pub responsive: bool,
    pub gradients: bool,
    pub interactive: bool,
    pub accessibility: bool,
}

impl Default for Enhancements {
    fn default() -> Self {
        Self {
            animations: true,
            icons: true,
            responsive: true,
            gradients: true,
            interactive: true,
            accessibility: true,
        }
    }
}

/// Requested amount of text per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentDepth {
    Minimal,
    #[default]
    Standard,
    Detailed,
    Comprehensive,
}

impl ContentDepth {
    pub const ALL: [Self; 4] = [
        Self::Minimal,
        Self::Standard,
        Self::Detailed,
        Self::Comprehensive,
    ];

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|d| d.as_str().eq_ignore_ascii_case(s))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Standard => "Standard",
            Self::Detailed => "Detailed",
            Self::Comprehensive => "Comprehensive",
        }
    }
}

/// Options that shape the prompt but do not trigger regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedOptions {
    max_sections: u8,
    pub content_depth: ContentDepth,
    pub placeholder_images: bool,
}

impl AdvancedOptions {
    pub const MIN_SECTIONS: u8 = 3;
    pub const MAX_SECTIONS: u8 = 10;

    #[must_use]
    pub fn max_sections(&self) -> u8 {
        self.max_sections
    }

    /// Set the section limit, clamped to the supported range.
    pub fn set_max_sections(&mut self, max_sections: u8) {
        self.max_sections = max_sections.clamp(Self::MIN_SECTIONS, Self::MAX_SECTIONS);
    }
}

impl Default for AdvancedOptions {
    fn default() -> Self {
        Self {
            max_sections: 6,
            content_depth: ContentDepth::default(),
            placeholder_images: true,
        }
    }
}

/// Current user settings for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    /// Free-form description. Overrides the template text when non-blank.
    pub prompt: String,
    pub template: Template,
    pub color_scheme: ColorScheme,
    pub layout: Layout,
    pub temperature: f32,
    pub enhancements: Enhancements,
    pub advanced: AdvancedOptions,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            template: Template::default(),
            color_scheme: ColorScheme::default(),
            layout: Layout::default(),
            temperature: 0.7,
            enhancements: Enhancements::default(),
            advanced: AdvancedOptions::default(),
        }
    }
}

impl GenerationSettings {
    /// Prompt text in effect: the explicit prompt, else the template text.
    #[must_use]
    pub fn effective_prompt(&self) -> &str {
        if self.prompt.trim().is_empty() {
            self.template.description()
        } else {
            &self.prompt
        }
    }

    /// Whether there is anything to generate from.
    #[must_use]
    pub fn has_prompt(&self) -> bool {
        !self.effective_prompt().trim().is_empty()
    }

    /// Snapshot of the settings that participate in change detection.
    #[must_use]
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            prompt: self.effective_prompt().to_owned(),
            template: self.template,
            color_scheme: self.color_scheme,
            layout: self.layout,
            temperature: self.temperature,
            enhancements: self.enhancements,
        }
    }
}

/// Change-detection snapshot of [`GenerationSettings`].
///
/// Advanced options are not part of it: changing them alone never starts an
/// automatic generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    pub prompt: String,
    pub template: Template,
    pub color_scheme: ColorScheme,
    pub layout: Layout,
    pub temperature: f32,
    pub enhancements: Enhancements,
}

impl Fingerprint {
    #[must_use]
    pub fn has_prompt(&self) -> bool {
        !self.prompt.trim().is_empty()
    }
}

/// Build the text submitted for acquisition.
///
/// Appends an "Additional Requirements" list derived from the enhancement
/// flags and advanced options to the effective prompt.
#[must_use]
pub fn compose_prompt(settings: &GenerationSettings) -> String {
    let e = &settings.enhancements;
    let a = &settings.advanced;
    let pick = |on: bool, yes: &'static str, no: &'static str| if on { yes } else { no };

    let mut text = String::with_capacity(1024);
    text.push_str(settings.effective_prompt().trim());
    text.push_str("\n\nAdditional Requirements:\n");
    let _ = writeln!(text, "- Include {} main sections maximum", a.max_sections());
    let _ = writeln!(text, "- Content detail level: {}", a.content_depth.as_str());
    for line in [
        pick(e.animations, "Include animations and transitions", "Minimal animations"),
        pick(e.icons, "Use icons", "Text-only elements"),
        pick(e.responsive, "Mobile-first responsive design", "Desktop-focused"),
        pick(e.gradients, "Modern gradients and visual effects", "Flat design"),
        pick(
            e.interactive,
            "Interactive hover effects and micro-interactions",
            "Static elements",
        ),
        pick(e.accessibility, "WCAG accessibility compliance", "Basic accessibility"),
        pick(
            a.placeholder_images,
            "Include placeholder images with proper alt text",
            "Text-only content",
        ),
    ] {
        let _ = writeln!(text, "- {line}");
    }
    text.push_str("\nMake it professional, modern and complete.");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_template_parse() {
        assert_eq!(Template::parse("Tech Startup"), Some(Template::TechStartup));
        assert_eq!(Template::parse("tech-startup"), Some(Template::TechStartup));
        assert_eq!(Template::parse("SAAS-PLATFORM"), Some(Template::SaasPlatform));
        assert_eq!(Template::parse("E-commerce"), Some(Template::Ecommerce));
        assert_eq!(Template::parse("wedding"), None);
    }

    #[test]
    fn test_only_custom_template_is_empty() {
        for template in Template::ALL {
            assert_eq!(
                template.description().is_empty(),
                template == Template::Custom,
                "{}",
                template.display_name()
            );
        }
    }

    #[test]
    fn test_effective_prompt_prefers_explicit_text() {
        let mut settings = GenerationSettings {
            template: Template::Restaurant,
            ..GenerationSettings::default()
        };
        assert_eq!(settings.effective_prompt(), Template::Restaurant.description());
        assert!(settings.has_prompt());

        settings.prompt = "A taco truck".to_owned();
        assert_eq!(settings.effective_prompt(), "A taco truck");
    }

    #[test]
    fn test_custom_template_without_prompt_is_blank() {
        let settings = GenerationSettings {
            prompt: "   ".to_owned(),
            ..GenerationSettings::default()
        };
        assert!(!settings.has_prompt());
        assert!(!settings.fingerprint().has_prompt());
    }

    #[test]
    fn test_fingerprint_tracks_design_and_enhancements() {
        let base = GenerationSettings {
            prompt: "A bakery".to_owned(),
            ..GenerationSettings::default()
        };

        let mut changed = base.clone();
        changed.color_scheme = ColorScheme::Accent;
        assert_ne!(base.fingerprint(), changed.fingerprint());

        let mut changed = base.clone();
        changed.enhancements.icons = false;
        assert_ne!(base.fingerprint(), changed.fingerprint());

        let mut changed = base.clone();
        changed.temperature = 0.9;
        assert_ne!(base.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn test_fingerprint_ignores_advanced_options() {
        let base = GenerationSettings {
            prompt: "A bakery".to_owned(),
            ..GenerationSettings::default()
        };
        let mut changed = base.clone();
        changed.advanced.set_max_sections(9);
        changed.advanced.content_depth = ContentDepth::Comprehensive;
        changed.advanced.placeholder_images = false;
        assert_eq!(base.fingerprint(), changed.fingerprint());
    }

    #[test]
    fn test_max_sections_clamped() {
        let mut options = AdvancedOptions::default();
        assert_eq!(options.max_sections(), 6);
        options.set_max_sections(1);
        assert_eq!(options.max_sections(), 3);
        options.set_max_sections(50);
        assert_eq!(options.max_sections(), 10);
    }

    #[test]
    fn test_content_depth_parse() {
        assert_eq!(ContentDepth::parse("detailed"), Some(ContentDepth::Detailed));
        assert_eq!(ContentDepth::parse("huge"), None);
    }

    #[test]
    fn test_compose_prompt_defaults() {
        let settings = GenerationSettings {
            prompt: "  A bakery  ".to_owned(),
            ..GenerationSettings::default()
        };
        let text = compose_prompt(&settings);
        assert!(text.starts_with("A bakery\n\nAdditional Requirements:\n"));
        assert!(text.contains("- Include 6 main sections maximum\n"));
        assert!(text.contains("- Content detail level: Standard\n"));
        assert!(text.contains("- Include animations and transitions\n"));
        assert!(text.contains("- WCAG accessibility compliance\n"));
        assert!(text.contains("- Include placeholder images with proper alt text\n"));
    }

    #[test]
    fn test_compose_prompt_disabled_flags() {
        let mut settings = GenerationSettings {
            prompt: "A bakery".to_owned(),
            enhancements: Enhancements {
                animations: false,
                icons: false,
                responsive: false,
                gradients: false,
                interactive: false,
                accessibility: false,
            },
            ..GenerationSettings::default()
        };
        settings.advanced.placeholder_images = false;
        let text = compose_prompt(&settings);
        for line in [
            "- Minimal animations",
            "- Text-only elements",
            "- Desktop-focused",
            "- Flat design",
            "- Static elements",
            "- Basic accessibility",
            "- Text-only content",
        ] {
            assert!(text.contains(line), "missing {line}");
        }
    }
}

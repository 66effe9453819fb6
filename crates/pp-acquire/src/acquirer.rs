//! Acquisition pipeline with fallback.

use pp_schema::{ColorScheme, Layout, WebsiteStructure};
use tracing::{debug, warn};

use crate::client::{ModelClient, ModelRequest, SamplingParams};
use crate::error::AcquireError;
use crate::fallback::fallback_structure;
use crate::instruction::{build_instruction, request_text, strip_code_fence};

/// Outcome of one acquisition.
#[derive(Debug)]
pub enum Acquisition {
    /// The model produced a valid structure.
    Generated(WebsiteStructure),
    /// Acquisition failed and the fixed structure was substituted.
    Fallback {
        structure: WebsiteStructure,
        reason: AcquireError,
    },
}

impl Acquisition {
    #[must_use]
    pub fn structure(&self) -> &WebsiteStructure {
        match self {
            Self::Generated(structure) | Self::Fallback { structure, .. } => structure,
        }
    }

    #[must_use]
    pub fn into_structure(self) -> WebsiteStructure {
        match self {
            Self::Generated(structure) | Self::Fallback { structure, .. } => structure,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// User-facing notice for a fallback, `None` when generated.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Generated(_) => None,
            Self::Fallback { reason, .. } => {
                Some(format!("Model request failed, using fallback structure: {reason}"))
            }
        }
    }
}

/// Obtains website structures from a [`ModelClient`].
#[derive(Debug)]
pub struct Acquirer<C> {
    client: C,
    sampling: SamplingParams,
}

impl<C: ModelClient> Acquirer<C> {
    /// Create an acquirer with default sampling parameters.
    pub fn new(client: C) -> Self {
        Self {
            client,
            sampling: SamplingParams::default(),
        }
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingParams) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn sampling(&self) -> SamplingParams {
        self.sampling
    }

    /// Acquire a structure using the configured sampling parameters.
    pub fn acquire(
        &self,
        user_prompt: &str,
        color_scheme: ColorScheme,
        layout: Layout,
    ) -> Acquisition {
        self.acquire_with(user_prompt, color_scheme, layout, self.sampling)
    }

    /// Acquire a structure with explicit sampling parameters.
    ///
    /// Never fails: any error yields [`Acquisition::Fallback`]. The returned
    /// structure always carries the requested color scheme and layout.
    pub fn acquire_with(
        &self,
        user_prompt: &str,
        color_scheme: ColorScheme,
        layout: Layout,
        sampling: SamplingParams,
    ) -> Acquisition {
        match self.try_acquire(user_prompt, color_scheme, layout, sampling) {
            Ok(structure) => {
                debug!(
                    title = %structure.title,
                    sections = structure.sections.len(),
                    "Structure generated"
                );
                Acquisition::Generated(structure.with_design(color_scheme, layout))
            }
            Err(reason) => {
                warn!(error = %reason, "Acquisition failed, using fallback structure");
                Acquisition::Fallback {
                    structure: fallback_structure(color_scheme, layout),
                    reason,
                }
            }
        }
    }

    fn try_acquire(
        &self,
        user_prompt: &str,
        color_scheme: ColorScheme,
        layout: Layout,
        sampling: SamplingParams,
    ) -> Result<WebsiteStructure, AcquireError> {
        let instruction = build_instruction(color_scheme, layout);
        let request = ModelRequest {
            text: request_text(&instruction, user_prompt),
            sampling,
        };
        let reply = self.client.generate(&request)?;
        Ok(WebsiteStructure::from_json(strip_code_fence(&reply))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::fallback::FALLBACK_TITLE;
    use crate::mock::ScriptedClient;
    use pp_schema::SchemaError;
    use pretty_assertions::assert_eq;

    const REPLY: &str = r#"{
        "title": "Crust & Crumb",
        "description": "Neighbourhood bakery",
        "sections": [{"type": "hero", "title": "Fresh daily", "content": "Since 1998"}],
        "color_scheme": "primary",
        "layout": "default"
    }"#;

    #[test]
    fn test_generated_structure() {
        let acquirer = Acquirer::new(ScriptedClient::new().with_reply(REPLY));
        let result = acquirer.acquire("A bakery", ColorScheme::Primary, Layout::Default);
        assert!(!result.is_fallback());
        assert_eq!(result.notice(), None);
        assert_eq!(result.structure().title, "Crust & Crumb");
    }

    #[test]
    fn test_fenced_reply_is_accepted() {
        let fenced = format!("```json\n{REPLY}\n```");
        let acquirer = Acquirer::new(ScriptedClient::new().with_reply(fenced));
        let result = acquirer.acquire("A bakery", ColorScheme::Primary, Layout::Default);
        assert!(!result.is_fallback());
    }

    #[test]
    fn test_requested_design_overrides_model() {
        let acquirer = Acquirer::new(ScriptedClient::new().with_reply(REPLY));
        let structure = acquirer
            .acquire("A bakery", ColorScheme::Accent, Layout::Wide)
            .into_structure();
        assert_eq!(structure.color_scheme, ColorScheme::Accent);
        assert_eq!(structure.layout, Layout::Wide);
    }

    #[test]
    fn test_request_carries_prompt_and_sampling() {
        let sampling = SamplingParams {
            temperature: 1.2,
            top_p: 0.5,
            max_output_tokens: 2048,
        };
        let acquirer = Acquirer::new(ScriptedClient::new().with_reply(REPLY)).with_sampling(sampling);
        let _ = acquirer.acquire("A bakery", ColorScheme::Secondary, Layout::Centered);

        let requests = acquirer.client().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].sampling, sampling);
        assert!(requests[0].text.ends_with("\n\nUser Request: A bakery"));
        assert!(requests[0].text.contains(r#"color scheme "secondary""#));
    }

    #[test]
    fn test_model_error_falls_back() {
        let client = ScriptedClient::new().with_error(ModelError::HttpResponse {
            status: 503,
            body: "overloaded".to_owned(),
        });
        let result = Acquirer::new(client).acquire("x", ColorScheme::Accent, Layout::Wide);
        assert!(result.is_fallback());
        assert!(result.notice().unwrap().contains("503"));
        assert_eq!(
            result.into_structure(),
            fallback_structure(ColorScheme::Accent, Layout::Wide)
        );
    }

    #[test]
    fn test_prose_reply_falls_back() {
        let client = ScriptedClient::new().with_reply("Sure! Here is your website.");
        let result = Acquirer::new(client).acquire("x", ColorScheme::Primary, Layout::Default);
        assert!(matches!(
            result,
            Acquisition::Fallback {
                reason: AcquireError::Schema(SchemaError::Json(_)),
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_sections_fall_back() {
        let client = ScriptedClient::new().with_reply(r#"{"title": "T", "sections": "none"}"#);
        let result = Acquirer::new(client).acquire("x", ColorScheme::Primary, Layout::Default);
        assert!(result.is_fallback());
        assert_eq!(result.structure().title, FALLBACK_TITLE);
    }

    #[test]
    fn test_invalid_structure_falls_back() {
        let client = ScriptedClient::new().with_reply(r#"{"title": "", "sections": []}"#);
        let result = Acquirer::new(client).acquire("x", ColorScheme::Primary, Layout::Default);
        assert!(matches!(
            result,
            Acquisition::Fallback {
                reason: AcquireError::Schema(SchemaError::Invalid { .. }),
                ..
            }
        ));
    }
}

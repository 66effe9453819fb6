//! Model instruction text.

use std::fmt::Write;

use pp_schema::{ColorScheme, Layout};

/// Component kinds the model may reference.
pub const COMPONENT_CATALOG: &[(&str, &str)] = &[
    ("Button", "Primary, Secondary, Outline, Ghost variants"),
    ("Card", "With header, content, footer"),
    ("Typography", "Heading (h1-h3), Paragraph"),
    ("Navigation", "Brand and menu links"),
    ("Form", "Input, Textarea"),
    ("Grid", "Responsive 3-column layouts"),
    ("Hero", "Large impact sections"),
    ("Gallery", "Image showcases"),
    ("Testimonials", "Customer feedback"),
    ("FAQ", "Question and answer sections"),
];

const PREAMBLE: &str = "You are an expert web developer and UI designer. \
Generate a complete, modern website structure for the user request below, \
using only the listed components.";

/// Build the instruction for one request.
///
/// Embeds the component catalog, the requested design and the exact JSON
/// shape the reply must have.
#[must_use]
pub fn build_instruction(color_scheme: ColorScheme, layout: Layout) -> String {
    let scheme = color_scheme.as_str();
    let layout = layout.as_str();

    let mut text = String::with_capacity(2048);
    text.push_str(PREAMBLE);
    text.push_str("\n\nAvailable components:\n");
    for (name, summary) in COMPONENT_CATALOG {
        let _ = writeln!(text, "- {name}: {summary}");
    }
    let _ = write!(
        text,
        r##"
IMPORTANT: Use color scheme "{scheme}" and layout type "{layout}".

Respond with a single JSON object and nothing else:
{{
  "title": "Website title",
  "description": "Meta description",
  "sections": [
    {{
      "type": "hero|navigation|content|cards|contact|footer|gallery|testimonials|faq|features",
      "title": "Section title",
      "content": "Section content",
      "components": ["component1", "component2"],
      "props": {{
        "variant": "primary|secondary|outline",
        "size": "sm|md|lg",
        "color": "{scheme}",
        "layout": "{layout}",
        "cards": [{{"title": "Card title", "content": "Card description", "image": "placeholder-url", "footer": "Card footer"}}],
        "links": [{{"text": "Link text", "href": "#section"}}],
        "fields": [{{"type": "text|email|tel|textarea", "name": "field_name", "label": "Field Label", "placeholder": "Enter..."}}]
      }}
    }}
  ],
  "color_scheme": "{scheme}",
  "layout": "{layout}"
}}

Make the website modern, accessible and complete. Use realistic content."##
    );
    text
}

/// Combine the instruction with the user's request.
#[must_use]
pub fn request_text(instruction: &str, user_prompt: &str) -> String {
    format!("{instruction}\n\nUser Request: {user_prompt}")
}

/// Trim the reply and remove a surrounding code fence.
///
/// Handles both a `json`-tagged and an untagged fence. A missing closing
/// fence is tolerated.
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_instruction_embeds_design() {
        let text = build_instruction(ColorScheme::Accent, Layout::Wide);
        assert!(text.contains(r#"Use color scheme "accent" and layout type "wide""#));
        assert!(text.contains(r#""color_scheme": "accent""#));
        assert!(text.contains(r#""layout": "wide""#));
    }

    #[test]
    fn test_instruction_lists_catalog() {
        let text = build_instruction(ColorScheme::Primary, Layout::Default);
        for (name, _) in COMPONENT_CATALOG {
            assert!(text.contains(&format!("- {name}: ")), "missing {name}");
        }
    }

    #[test]
    fn test_instruction_describes_shape() {
        let text = build_instruction(ColorScheme::Primary, Layout::Default);
        for field in ["\"title\"", "\"description\"", "\"sections\"", "\"props\"", "\"fields\""] {
            assert!(text.contains(field), "missing {field}");
        }
    }

    #[test]
    fn test_request_text() {
        assert_eq!(
            request_text("Build it.", "A bakery"),
            "Build it.\n\nUser Request: A bakery"
        );
    }

    #[test]
    fn test_strip_json_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_untagged_fence() {
        assert_eq!(strip_code_fence("  ```\n{}\n```  \n"), "{}");
    }

    #[test]
    fn test_strip_unfenced_text() {
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_unterminated_fence() {
        assert_eq!(strip_code_fence("```json\n{}"), "{}");
    }
}

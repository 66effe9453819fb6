//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] naming `field` if a referenced variable
/// without a default is unset or not valid unicode.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} {}", e.var_name, describe(&e.cause)),
        })
}

fn describe(cause: &std::env::VarError) -> &'static str {
    match cause {
        std::env::VarError::NotPresent => "not set",
        std::env::VarError::NotUnicode(_) => "is not valid unicode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(
            expand_env("https://example.com", "model.base_url").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_set_variable_expands() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("PP_CONFIG_TEST_EXPAND_SET", "abc123") };
        assert_eq!(
            expand_env("key-${PP_CONFIG_TEST_EXPAND_SET}", "model.api_key").unwrap(),
            "key-abc123"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_env("${PP_CONFIG_TEST_EXPAND_UNSET:-fallback}", "model.name").unwrap(),
            "fallback"
        );
        assert_eq!(
            expand_env("${PP_CONFIG_TEST_EXPAND_UNSET:-}", "model.api_key").unwrap(),
            ""
        );
    }

    #[test]
    fn test_unset_without_default_errors() {
        let err = expand_env("${PP_CONFIG_TEST_EXPAND_MISSING}", "model.api_key").unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "model.api_key");
                assert_eq!(message, "${PP_CONFIG_TEST_EXPAND_MISSING} not set");
            }
            other => panic!("expected EnvVar, got {other:?}"),
        }
    }
}

//! Configuration management for PromptPixel.
//!
//! Parses `pp.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `model.api_key`
//! - `model.base_url`
//! - `model.name`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use pp_schema::{ColorScheme, Layout};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override model API key.
    pub api_key: Option<String>,
    /// Override model name.
    pub model: Option<String>,
    /// Override sampling temperature.
    pub temperature: Option<f32>,
    /// Override default color scheme.
    pub color_scheme: Option<String>,
    /// Override default layout.
    pub layout: Option<String>,
    /// Override automatic regeneration flag.
    pub automatic: Option<bool>,
    /// Override debounce interval in seconds.
    pub debounce_secs: Option<f64>,
    /// Override export directory.
    pub export_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pp.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative model connection.
    pub model: ModelConfig,
    /// Sampling parameters.
    pub sampling: SamplingConfig,
    /// Regeneration scheduling.
    pub scheduler: SchedulerConfig,
    /// Initial design choices.
    pub design: DesignConfig,
    /// Export configuration (paths are relative strings from TOML).
    export: ExportConfigRaw,

    /// Resolved export configuration (set after loading).
    #[serde(skip)]
    pub export_resolved: ExportConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Generative model connection settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// API key. Empty means offline mode.
    pub api_key: String,
    /// API base URL.
    pub base_url: String,
    /// Model name.
    pub name: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: "${GEMINI_API_KEY:-}".to_owned(),
            base_url: "https://generativelanguage.googleapis.com".to_owned(),
            name: "gemini-2.0-flash-exp".to_owned(),
            timeout_secs: 60,
        }
    }
}

impl ModelConfig {
    /// Whether an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Sampling parameters for model requests.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_output_tokens: 4096,
        }
    }
}

/// Regeneration scheduler settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Regenerate automatically when settings change.
    pub automatic: bool,
    /// Minimum interval between automatic generations, in seconds.
    pub debounce_secs: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            automatic: true,
            debounce_secs: 1.0,
        }
    }
}

impl SchedulerConfig {
    /// Debounce interval. Call after validation.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::try_from_secs_f64(self.debounce_secs).unwrap_or_default()
    }
}

/// Initial design choices.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub color_scheme: String,
    pub layout: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default().as_str().to_owned(),
            layout: Layout::default().as_str().to_owned(),
        }
    }
}

impl DesignConfig {
    /// Configured color scheme. Unknown names resolve to the default.
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        ColorScheme::resolve(&self.color_scheme)
    }

    /// Configured layout. Unknown names resolve to the default.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::resolve(&self.layout)
    }
}

/// Raw export configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ExportConfigRaw {
    dir: Option<String>,
}

/// Resolved export configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ExportConfig {
    /// Directory artifacts are written to.
    pub dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`model.api_key`").
        field: String,
        /// Error message (e.g., "${`GEMINI_API_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pp.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated once more after the overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or a value is out of range.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            let mut config = Self::default_with_cwd();
            config.expand_env_vars()?;
            config
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_key) = &settings.api_key {
            self.model.api_key.clone_from(api_key);
        }
        if let Some(model) = &settings.model {
            self.model.name.clone_from(model);
        }
        if let Some(temperature) = settings.temperature {
            self.sampling.temperature = temperature;
        }
        if let Some(color_scheme) = &settings.color_scheme {
            self.design.color_scheme.clone_from(color_scheme);
        }
        if let Some(layout) = &settings.layout {
            self.design.layout.clone_from(layout);
        }
        if let Some(automatic) = settings.automatic {
            self.scheduler.automatic = automatic;
        }
        if let Some(debounce_secs) = settings.debounce_secs {
            self.scheduler.debounce_secs = debounce_secs;
        }
        if let Some(export_dir) = &settings.export_dir {
            self.export_resolved.dir.clone_from(export_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_config_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            model: ModelConfig::default(),
            sampling: SamplingConfig::default(),
            scheduler: SchedulerConfig::default(),
            design: DesignConfig::default(),
            export: ExportConfigRaw::default(),
            export_resolved: ExportConfig {
                dir: base.join("site"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_model()?;
        self.validate_sampling()?;
        self.validate_scheduler()?;
        self.validate_design()?;
        Ok(())
    }

    fn validate_model(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.model.base_url, "model.base_url")?;
        require_http_url(&self.model.base_url, "model.base_url")?;
        require_non_empty(&self.model.name, "model.name")?;
        if self.model.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "model.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_sampling(&self) -> Result<(), ConfigError> {
        const MAX_TOKENS: u32 = 65_536;

        let s = &self.sampling;
        if !(0.0..=2.0).contains(&s.temperature) {
            return Err(ConfigError::Validation(
                "sampling.temperature must be between 0.0 and 2.0".to_owned(),
            ));
        }
        if !(s.top_p > 0.0 && s.top_p <= 1.0) {
            return Err(ConfigError::Validation(
                "sampling.top_p must be greater than 0.0 and at most 1.0".to_owned(),
            ));
        }
        if s.max_output_tokens == 0 || s.max_output_tokens > MAX_TOKENS {
            return Err(ConfigError::Validation(format!(
                "sampling.max_output_tokens must be between 1 and {MAX_TOKENS}"
            )));
        }
        Ok(())
    }

    fn validate_scheduler(&self) -> Result<(), ConfigError> {
        const MAX_DEBOUNCE_SECS: f64 = 60.0;

        let debounce = self.scheduler.debounce_secs;
        if !debounce.is_finite() || !(0.0..=MAX_DEBOUNCE_SECS).contains(&debounce) {
            return Err(ConfigError::Validation(format!(
                "scheduler.debounce_secs must be between 0 and {MAX_DEBOUNCE_SECS}"
            )));
        }
        Ok(())
    }

    fn validate_design(&self) -> Result<(), ConfigError> {
        if ColorScheme::parse(&self.design.color_scheme).is_none() {
            return Err(ConfigError::Validation(format!(
                "design.color_scheme must be one of primary, secondary, accent (got {:?})",
                self.design.color_scheme
            )));
        }
        if Layout::parse(&self.design.layout).is_none() {
            return Err(ConfigError::Validation(format!(
                "design.layout must be one of default, centered, wide (got {:?})",
                self.design.layout
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.model.api_key = expand::expand_env(&self.model.api_key, "model.api_key")?;
        self.model.base_url = expand::expand_env(&self.model.base_url, "model.base_url")?;
        self.model.name = expand::expand_env(&self.model.name, "model.name")?;
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.export_resolved = ExportConfig {
            dir: config_dir.join(self.export.dir.as_deref().unwrap_or("site")),
        };
    }
}

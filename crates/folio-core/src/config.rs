//! Configuration management for folio.
//!
//! Loads configuration from ${FOLIO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content;
use crate::theme::Theme;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Returns the trimmed value when it is present and not blank.
fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

pub mod paths {
    //! Path resolution for folio configuration and data directories.
    //!
    //! FOLIO_HOME resolution order:
    //! 1. FOLIO_HOME environment variable (if set)
    //! 2. ~/.config/folio (default)
    //! 3. ./.folio when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the folio home directory.
    pub fn folio_home() -> PathBuf {
        if let Ok(home) = std::env::var("FOLIO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".folio"),
            |h| h.join(".config").join("folio"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        folio_home().join("config.toml")
    }

    /// Returns the default directory for log files.
    pub fn log_dir() -> PathBuf {
        folio_home().join("logs")
    }

    /// Returns the path of the plain-text portfolio export.
    pub fn export_path() -> PathBuf {
        folio_home().join("portfolio.txt")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Gemini model used by the assistant
    pub model: String,

    /// Sampling temperature for assistant replies
    pub temperature: f64,

    /// Optional inline persona prompt
    pub persona_prompt: Option<String>,

    /// Optional path to a file containing the persona prompt
    pub persona_prompt_file: Option<String>,

    /// Colour theme
    pub theme: Theme,

    /// Link copied by "Share Profile"
    pub profile_url: String,

    /// Provider configuration (API keys, base URLs).
    pub providers: ProvidersConfig,

    /// Contact form mail service.
    pub mail: MailConfig,

    /// Résumé document location.
    pub resume: ResumeConfig,

    /// Log level and destination.
    pub logging: LoggingConfig,
}

impl Config {
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    const DEFAULT_PROFILE_URL: &str = "https://github.com/rhamconsigna";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Saves only the theme field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_theme(theme: Theme) -> Result<()> {
        Self::save_theme_to(&paths::config_path(), theme)
    }

    /// Saves only the theme field to a specific config file path.
    ///
    /// An existing file is edited in place so the user's other values and
    /// comments survive; otherwise the commented template is written.
    pub fn save_theme_to(path: &Path, theme: Theme) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["theme"] = value(theme.id());

        Self::write_config(path, &doc.to_string())
    }

    /// Returns the persona prompt for the assistant.
    ///
    /// Resolution order: `persona_prompt_file`, then `persona_prompt`, then the
    /// built-in persona. Blank values are skipped.
    pub fn effective_persona_prompt(&self) -> Result<String> {
        if let Some(path_str) = &self.persona_prompt_file {
            let path = Path::new(path_str);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read persona prompt file: {path_str}"))?;
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }

        Ok(non_blank(self.persona_prompt.as_ref())
            .unwrap_or_else(|| content::PERSONA_PROMPT.trim())
            .to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
            persona_prompt: None,
            persona_prompt_file: None,
            theme: Theme::default(),
            profile_url: Self::DEFAULT_PROFILE_URL.to_string(),
            providers: ProvidersConfig::default(),
            mail: MailConfig::default(),
            resume: ResumeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Provider-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub gemini: ProviderConfig,
}

/// Provider configuration entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderConfig {
    /// Optional API key (overrides environment variable).
    pub api_key: Option<String>,
    /// Optional API base URL (for proxies).
    pub base_url: Option<String>,
}

impl ProviderConfig {
    /// Returns the effective API key if set and non-empty.
    pub fn effective_api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_ref())
    }

    /// Returns the effective base URL if set and non-empty.
    pub fn effective_base_url(&self) -> Option<&str> {
        non_blank(self.base_url.as_ref())
    }
}

/// EmailJS settings for the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key (sent as `user_id`).
    pub public_key: String,
    /// Optional API base URL (for proxies and tests).
    pub base_url: Option<String>,
}

impl MailConfig {
    const DEFAULT_SERVICE_ID: &str = "service_u8xe0qr";
    const DEFAULT_TEMPLATE_ID: &str = "template_vvmcuct";
    const DEFAULT_PUBLIC_KEY: &str = "DYbwVBHhZt2Xyx85S";

    /// Returns the effective base URL if set and non-empty.
    pub fn effective_base_url(&self) -> Option<&str> {
        non_blank(self.base_url.as_ref())
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            service_id: Self::DEFAULT_SERVICE_ID.to_string(),
            template_id: Self::DEFAULT_TEMPLATE_ID.to_string(),
            public_key: Self::DEFAULT_PUBLIC_KEY.to_string(),
            base_url: None,
        }
    }
}

/// Résumé document settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// Where the document is served from.
    pub url: Option<String>,
    /// File name used when saving a download.
    pub file_name: String,
    /// Directory downloads are written to.
    pub download_dir: Option<String>,
}

impl ResumeConfig {
    const DEFAULT_FILE_NAME: &str = "Rham_Consigna_CV.pdf";

    /// Returns the effective document URL if set and non-empty.
    pub fn effective_url(&self) -> Option<&str> {
        non_blank(self.url.as_ref())
    }

    /// Returns the directory a download should land in.
    ///
    /// Resolution order: configured `download_dir` (with `~/` expanded), the
    /// platform download directory, the current directory.
    pub fn effective_download_dir(&self) -> PathBuf {
        match non_blank(self.download_dir.as_ref()) {
            Some(dir) => expand_home(dir),
            None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            url: None,
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
            download_dir: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when RUST_LOG is unset.
    pub level: String,
    /// Directory for the TUI log file.
    pub directory: Option<String>,
}

impl LoggingConfig {
    const DEFAULT_LEVEL: &str = "info";

    /// Returns the directory the TUI log file is written to.
    pub fn effective_directory(&self) -> PathBuf {
        non_blank(self.directory.as_ref()).map_or_else(paths::log_dir, expand_home)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::DEFAULT_LEVEL.to_string(),
            directory: None,
        }
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.theme, Theme::Classic);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "model = \"gemini-2.5-pro\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.mail.service_id, "service_u8xe0qr");
        assert_eq!(config.resume.file_name, "Rham_Consigna_CV.pdf");
    }

    #[test]
    fn test_default_template_parses_to_defaults() {
        let config: Config = toml::from_str(default_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.model, defaults.model);
        assert_eq!(config.theme, defaults.theme);
        assert_eq!(config.profile_url, defaults.profile_url);
        assert_eq!(config.mail.template_id, defaults.mail.template_id);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("gemini-2.5-flash"));
        assert!(contents.contains("# persona_prompt ="));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let err = Config::init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_persona_file_wins_over_inline() {
        let dir = tempdir().unwrap();
        let prompt_file = dir.path().join("persona.txt");
        fs::write(&prompt_file, "file persona").unwrap();

        let config = Config {
            persona_prompt_file: Some(prompt_file.to_str().unwrap().to_string()),
            persona_prompt: Some("inline persona".to_string()),
            ..Default::default()
        };

        assert_eq!(config.effective_persona_prompt().unwrap(), "file persona");
    }

    #[test]
    fn test_persona_falls_back_to_builtin() {
        let config = Config {
            persona_prompt: Some("   ".to_string()),
            ..Default::default()
        };

        let persona = config.effective_persona_prompt().unwrap();
        assert!(persona.starts_with("You are Reum"));
    }

    #[test]
    fn test_gemini_base_url_empty_is_none() {
        let config = Config {
            providers: ProvidersConfig {
                gemini: ProviderConfig {
                    base_url: Some("   ".to_string()),
                    ..Default::default()
                },
            },
            ..Default::default()
        };
        assert_eq!(config.providers.gemini.effective_base_url(), None);
    }

    #[test]
    fn test_gemini_api_key_loaded_from_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[providers.gemini]\napi_key = \" secret \"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.providers.gemini.effective_api_key(), Some("secret"));
    }

    #[test]
    fn test_save_theme_creates_file_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        Config::save_theme_to(&config_path, Theme::Sakura).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, Theme::Sakura);

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# folio configuration"));
        assert!(contents.contains("# Colour theme"));
    }

    #[test]
    fn test_save_theme_preserves_other_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"# my tweaks
model = "gemini-2.5-pro"
temperature = 0.2

[resume]
url = "https://cv.example.com/cv.pdf"
"#,
        )
        .unwrap();

        Config::save_theme_to(&config_path, Theme::Sakura).unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.theme, Theme::Sakura);
        assert_eq!(config.model, "gemini-2.5-pro");
        assert!((config.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(
            config.resume.effective_url(),
            Some("https://cv.example.com/cv.pdf")
        );

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# my tweaks"));
    }

    #[test]
    fn test_save_theme_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join("dir").join("config.toml");

        Config::save_theme_to(&config_path, Theme::Classic).unwrap();

        assert!(config_path.exists());
        assert!(!config_path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_download_dir_uses_configured_value() {
        let resume = ResumeConfig {
            download_dir: Some("/tmp/cv".to_string()),
            ..Default::default()
        };
        assert_eq!(resume.effective_download_dir(), PathBuf::from("/tmp/cv"));
    }
}

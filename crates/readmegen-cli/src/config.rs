//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `READMEGEN__SECTION__KEY`
//! 3. Config file (`--config`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use readmegen_core::domain::{Field, Licence, Question, readme_questions, validation};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults offered by the question sequence.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Directory under which `{title}` is placed when no target is given.
    pub output_root: String,
    /// Licence pre-selected in the licence menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                output_root: "./output".into(),
                licence: None,
            },
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it the default location is read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix("READMEGEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let loaded: Self = config
            .try_deserialize()
            .context("Configuration has an unexpected shape")?;
        loaded.check()?;
        Ok(loaded)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.readmegen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "readmegen", "readmegen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".readmegen.toml"))
    }

    /// The question list with configured defaults applied.
    pub fn questions(&self) -> Vec<Question> {
        let licence = self.licence().ok().flatten();
        readme_questions()
            .into_iter()
            .map(|question| match question.field {
                Field::TargetDir => question.with_default(self.target_dir_default()),
                Field::Licence => match licence {
                    Some(licence) => question.with_default(licence.as_str()),
                    None => question,
                },
                _ => question,
            })
            .collect()
    }

    /// `{output_root}/{title}`, the placeholder expanded at prompt time.
    pub fn target_dir_default(&self) -> String {
        let root = self.defaults.output_root.trim_end_matches('/');
        format!("{root}/{{title}}")
    }

    fn licence(&self) -> anyhow::Result<Option<Licence>> {
        self.defaults
            .licence
            .as_deref()
            .map(|name| {
                name.parse::<Licence>()
                    .with_context(|| format!("defaults.licence = {name:?}"))
            })
            .transpose()
    }

    fn check(&self) -> anyhow::Result<()> {
        validation::target_dir(&self.defaults.output_root)
            .map_err(|message| anyhow::anyhow!("defaults.output_root: {message}"))?;
        self.licence()?;
        Ok(())
    }

    /// Write the defaults as TOML to `path`.
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        let toml = toml::to_string_pretty(&Self::default())
            .context("Failed to serialise default config")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))
    }
}

//! # configs
//!
//! Typed runtime settings for the liveblog core, layered from an optional
//! `liveblog.toml` file and `LIVEBLOG_*` environment overrides.

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LiveblogSettings {
    /// Highlight vocabulary terms (the `highlights` taxonomy in the original
    /// deployment). Posts may only carry a highlight drawn from this list.
    #[serde(default = "default_highlights")]
    pub highlights: Vec<String>,

    /// Whether new posts publish immediately.
    #[serde(default = "default_status")]
    pub default_status: bool,
}

fn default_highlights() -> Vec<String> {
    ["breaking", "key-event", "summary"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_status() -> bool {
    true
}

impl Default for LiveblogSettings {
    fn default() -> Self {
        Self {
            highlights: default_highlights(),
            default_status: default_status(),
        }
    }
}

impl LiveblogSettings {
    /// Loads settings. Missing file and missing variables fall back to the
    /// defaults above, so a bare environment always yields a working config.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let settings: Self = Config::builder()
            .add_source(File::new("liveblog", FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("LIVEBLOG").separator("__"))
            .build()?
            .try_deserialize()?;
        tracing::debug!(terms = settings.highlights.len(), "loaded liveblog settings");
        Ok(settings)
    }
}

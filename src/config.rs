//! Site configuration module.
//!
//! Handles loading and validating the optional `config.toml` that
//! sits next to the artwork files in the data directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! template = "classic"                 # Page shell: "classic" or "sidebar"
//! image_dir = "img"                    # Prefix of every gallery image src
//! artwork_pages_dir = "artwork-pages"  # Per-artwork pages (sidebar shell only)
//! ```
//!
//! Every key has a default, so a config file only lists the keys it changes.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which page shell the gallery grid is embedded into.
///
/// The two shells differ in their surrounding markup and in where a grid
/// item links to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Header with logo and address, top navigation, footer. Items link to `#`.
    #[default]
    Classic,
    /// Collapsible sidebar navigation. Items link to their own artwork page.
    Sidebar,
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page shell the grid is rendered into.
    pub template: TemplateVariant,
    /// Directory, relative to the generated page, holding the artwork images.
    pub image_dir: String,
    /// Directory, relative to the generated page, holding per-artwork pages.
    pub artwork_pages_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            template: TemplateVariant::default(),
            image_dir: "img".to_string(),
            artwork_pages_dir: "artwork-pages".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate that both directory prefixes are usable as relative URL paths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_relative_dir("image_dir", &self.image_dir)?;
        validate_relative_dir("artwork_pages_dir", &self.artwork_pages_dir)?;
        Ok(())
    }
}

fn validate_relative_dir(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{key} must not be empty")));
    }
    if value.starts_with('/') || value.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "{key} must be a relative path without leading or trailing '/'"
        )));
    }
    Ok(())
}

/// Load `config.toml` from the data directory.
///
/// A missing file yields [`SiteConfig::default`]. Keys absent from the file
/// keep their default values.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Artwork Gallery Configuration
# =============================
# Place this file in the data directory, next to the artwork .yml files.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Page shell the gallery grid is rendered into.
#   "classic" - header with logo, top navigation, footer; items link to "#"
#   "sidebar" - sidebar navigation; items link to <artwork_pages_dir>/<name>.html
template = "classic"

# Directory holding the artwork images, relative to the generated page.
# Each grid item shows <image_dir>/<first image of the artwork>.
image_dir = "img"

# Directory holding one HTML page per artwork (used by the sidebar shell).
artwork_pages_dir = "artwork-pages"
"##
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Paper geometry and typesetting defaults, built once at startup and passed
/// explicitly to the components that need them.
///
/// Every field has a built-in default; a config file only needs to name the
/// values it wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Width of the physical paper the index prints on, in inches.
    pub paper_width: f64,
    /// Height of the physical paper, in inches.
    pub paper_height: f64,
    /// Total slack per axis the printer needs to print the whole page, in inches.
    pub min_margin: f64,
    /// Space between index columns, as a TeX length.
    pub gutter: String,
    /// Hanging indent of wrapped index lines, as a TeX length.
    pub indent: String,
    /// Command used to compile the generated document.
    pub tex_command: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paper_width: 8.5,
            paper_height: 11.0,
            min_margin: 1.0,
            gutter: "0.75em".to_string(),
            indent: "0.75em".to_string(),
            tex_command: "pdflatex".to_string(),
        }
    }
}

impl Settings {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mindex");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Paper dimensions as an `(x, y)` pair, in inches.
    pub fn paper_dims(&self) -> (f64, f64) {
        (self.paper_width, self.paper_height)
    }

    /// Footer printed at the bottom of the index unless the user replaces it.
    pub fn default_closing() -> String {
        format!(
            "Automatically generated by Mindex {} on \\today.",
            env!("CARGO_PKG_VERSION")
        )
    }
}

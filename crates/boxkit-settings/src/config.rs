//! Job configuration for BoxKit
//!
//! A configuration file names the design to render, optionally overrides the
//! material settings, and says how the cut paths are written out. JSON and
//! TOML files are supported, chosen by extension.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use boxkit_core::CanvasSettings;
use boxkit_generators::Design;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shape of the emitted cut paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lines and arcs as drawn
    #[default]
    Segments,
    /// Arcs split into short lines
    Polylines,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Largest arc step in degrees when writing polylines
    pub arc_step_degrees: f64,
    /// Indent the JSON output
    pub pretty: bool,
    /// Output file; standard output when unset
    pub file: Option<PathBuf>,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Segments,
            arc_step_degrees: 5.0,
            pretty: true,
            file: None,
        }
    }
}

/// Complete job configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Material settings applied on top of the design's own
    pub canvas: Option<CanvasSettings>,
    pub design: Design,
    pub output: OutputSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> SettingsResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileFormat::Json),
        Some("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!(path = %path.display(), design = config.design.name(), "loaded config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if let Some(canvas) = &self.canvas {
            canvas
                .validate()
                .map_err(|e| SettingsError::InvalidSetting {
                    key: "canvas".to_string(),
                    reason: e.to_string(),
                })?;
        }
        self.resolved_design()
            .canvas()
            .validate()
            .map_err(|e| SettingsError::InvalidSetting {
                key: "design".to_string(),
                reason: e.to_string(),
            })?;

        let step = self.output.arc_step_degrees;
        if !(step > 0.0 && step <= 90.0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "output.arc_step_degrees".to_string(),
                value: step.to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The design with the canvas override applied.
    pub fn resolved_design(&self) -> Design {
        let mut design = self.design.clone();
        if let Some(canvas) = self.canvas {
            design.set_canvas(canvas);
        }
        design
    }

    /// Platform config location, `<config dir>/boxkit/config.toml`.
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(dir.join("boxkit").join("config.toml"))
    }

    /// Creates the directory holding [`Config::default_path`].
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let path = Self::default_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(path)
    }
}

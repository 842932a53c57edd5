use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::ConfigError;
use crate::latex::RenderSettings;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Where and how rendered files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Preamble settings
    #[serde(default)]
    pub latex: LatexConfig,

    /// Deck checks
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output file settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    // @field: Target directory; next to the input when unset
    #[serde(default)]
    pub directory: Option<String>,

    // @field: Appended to the file stem (after the language, if any)
    #[serde(default = "default_output_suffix")]
    pub suffix: String,

    // @field: Output file extension
    #[serde(default = "default_output_extension")]
    pub extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            suffix: default_output_suffix(),
            extension: default_output_extension(),
        }
    }
}

/// Beamer preamble settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LatexConfig {
    /// Options for `\documentclass`
    #[serde(default = "default_document_class_options")]
    pub document_class_options: String,

    /// Beamer theme package
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            document_class_options: default_document_class_options(),
            theme: default_theme(),
        }
    }
}

impl LatexConfig {
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            document_class_options: self.document_class_options.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// Deck check settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ValidationConfig {
    /// Treat warnings as failures in `check`
    #[serde(default)]
    pub strict: bool,

    /// Run the checks before rendering and log their findings
    #[serde(default)]
    pub check_before_render: bool,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_output_suffix() -> String {
    "_output".to_string()
}

fn default_output_extension() -> String {
    "tex".to_string()
}

fn default_document_class_options() -> String {
    RenderSettings::default().document_class_options
}

fn default_theme() -> String {
    RenderSettings::default().theme
}

impl Config {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a file, or defaults when it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path.as_ref(), json)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let required = [
            ("output.suffix", &self.output.suffix),
            ("output.extension", &self.output.extension),
            ("latex.theme", &self.latex.theme),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if self.output.suffix.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "output.suffix".to_string(),
                message: "must not contain path separators".to_string(),
            });
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            latex: LatexConfig::default(),
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

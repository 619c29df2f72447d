//! Generation defaults and runtime configuration

use crate::error::{Error, Result};
use crate::qr::ErrorCorrectionLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination used when neither the command line nor configuration names one
pub const DEFAULT_OUTPUT: &str = "qr.png";

/// Rendering options for a single generation
///
/// | option            | default   |
/// |-------------------|-----------|
/// | `box_size`        | `10`      |
/// | `border`          | `4`       |
/// | `error_correction`| `M`       |
/// | `fill_color`      | `"black"` |
/// | `back_color`      | `"white"` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Pixels per module (raster output only)
    pub box_size: u32,
    /// Quiet-zone width in modules
    pub border: u32,
    /// Error correction level
    pub error_correction: ErrorCorrectionLevel,
    /// Foreground color specifier
    pub fill_color: String,
    /// Background color specifier
    pub back_color: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 4,
            error_correction: ErrorCorrectionLevel::M,
            fill_color: "black".to_string(),
            back_color: "white".to_string(),
        }
    }
}

/// Top-level configuration file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QrgenConfig {
    /// Overrides of the built-in generation defaults
    pub defaults: DefaultOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl QrgenConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::debug!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["qrgen.toml", "qrgen.yaml", "qrgen.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("qrgen");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a TOML or YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{other}', expected toml/yaml"
            ))),
        }
    }

    /// Apply `QRGEN_*` overrides looked up through `var`.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.defaults.apply_overrides(&var);
        self.logging.apply_overrides(&var);
    }
}

/// Optional overrides layered over [`GenerationOptions::default`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultOptions {
    /// Destination file
    pub output: Option<PathBuf>,
    /// Pixels per module
    pub size: Option<u32>,
    /// Quiet-zone width in modules
    pub border: Option<u32>,
    /// Error correction level
    pub ec: Option<ErrorCorrectionLevel>,
    /// Foreground color
    pub fill_color: Option<String>,
    /// Background color
    pub bg_color: Option<String>,
}

impl DefaultOptions {
    fn apply_overrides(&mut self, var: &impl Fn(&str) -> Option<String>) {
        if let Some(output) = var("QRGEN_OUTPUT").filter(|v| !v.trim().is_empty()) {
            self.output = Some(PathBuf::from(output));
        }
        if let Some(size) = var("QRGEN_SIZE").and_then(|v| v.parse::<u32>().ok()) {
            if size > 0 {
                self.size = Some(size);
            }
        }
        if let Some(border) = var("QRGEN_BORDER").and_then(|v| v.parse::<u32>().ok()) {
            self.border = Some(border);
        }
        if let Some(ec) = var("QRGEN_EC").and_then(|v| v.parse().ok()) {
            self.ec = Some(ec);
        }
        if let Some(color) = var("QRGEN_FILL_COLOR") {
            self.fill_color = Some(color);
        }
        if let Some(color) = var("QRGEN_BG_COLOR") {
            self.bg_color = Some(color);
        }
    }

    /// Layer `overrides` on top of `self`; set fields in `overrides` win.
    pub fn overlay(self, overrides: DefaultOptions) -> Self {
        Self {
            output: overrides.output.or(self.output),
            size: overrides.size.or(self.size),
            border: overrides.border.or(self.border),
            ec: overrides.ec.or(self.ec),
            fill_color: overrides.fill_color.or(self.fill_color),
            bg_color: overrides.bg_color.or(self.bg_color),
        }
    }

    /// Fill unset fields from the built-in defaults.
    pub fn resolve(self) -> Result<(PathBuf, GenerationOptions)> {
        let base = GenerationOptions::default();

        let box_size = self.size.unwrap_or(base.box_size);
        if box_size == 0 {
            return Err(Error::Config("Box size must be at least 1".to_string()));
        }

        let options = GenerationOptions {
            box_size,
            border: self.border.unwrap_or(base.border),
            error_correction: self.ec.unwrap_or(base.error_correction),
            fill_color: self.fill_color.unwrap_or(base.fill_color),
            back_color: self.bg_color.unwrap_or(base.back_color),
        };
        let output = self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok((output, options))
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRGEN_LOG_LEVEL`)
    pub level: String,
    /// ANSI colors on stderr
    pub color: bool,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            color: false,
        }
    }
}

impl LoggingOptions {
    fn apply_overrides(&mut self, var: &impl Fn(&str) -> Option<String>) {
        if let Some(level) = var("QRGEN_LOG_LEVEL") {
            self.level = level;
        }
        if let Some(color) = var("QRGEN_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
    }
}

//! Input resolution and request assembly
//!
//! Nothing here writes files or encodes symbols. The only side effect is
//! reading the optional input file.

use crate::config::GenerationOptions;
use crate::error::{Error, Result};
use crate::qr::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};

const NO_INPUT: &str = "No input provided. Pass text/URL as positional arg or use --input-file.";

/// Where the payload text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Text(String),
    /// UTF-8 file whose full contents are the payload
    File(PathBuf),
}

impl InputSource {
    /// Pick the source from the command-line inputs. A file always wins over text.
    pub fn select(text: Option<String>, file: Option<PathBuf>) -> Option<Self> {
        match (file, text) {
            (Some(path), _) => Some(Self::File(path)),
            (None, Some(text)) => Some(Self::Text(text)),
            (None, None) => None,
        }
    }

    /// Read the payload.
    pub fn read(self) -> Result<String> {
        let data = match self {
            Self::Text(text) => text,
            Self::File(path) => read_input_file(&path)?,
        };

        if data.is_empty() {
            return Err(Error::Usage(NO_INPUT.to_string()));
        }
        Ok(data)
    }
}

fn read_input_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::Usage(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let data = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "Read payload from file");
    Ok(data)
}

/// Resolve the payload from a positional argument and an optional input file.
pub fn resolve_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    InputSource::select(text, file)
        .ok_or_else(|| Error::Usage(NO_INPUT.to_string()))?
        .read()
}

/// Everything needed to produce one QR image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Text to encode
    pub data: String,
    /// Destination file; its extension selects the output format
    pub output_path: PathBuf,
    /// Rendering options
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Assemble a request.
    pub fn new(
        data: impl Into<String>,
        output_path: impl Into<PathBuf>,
        options: GenerationOptions,
    ) -> Self {
        Self {
            data: data.into(),
            output_path: output_path.into(),
            options,
        }
    }

    /// Output format derived from the destination extension.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.output_path)
    }
}

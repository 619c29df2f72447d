//! QR code encoder and the generation entry point

use crate::error::{Error, Result};
use crate::qr::{Color, ErrorCorrectionLevel, ModuleGrid, OutputFormat, raster, svg};
use crate::request::GenerationRequest;
use qrcode::QrCode;
use std::fs;
use std::path::PathBuf;

/// QR code encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct QrEncoder {
    ec_level: ErrorCorrectionLevel,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ec_level(ec_level: ErrorCorrectionLevel) -> Self {
        Self { ec_level }
    }

    /// Encode text into the smallest symbol that fits it at this encoder's level.
    pub fn encode(&self, data: &str) -> Result<ModuleGrid> {
        let code =
            QrCode::with_error_correction_level(data.as_bytes(), self.ec_level.to_ec_level())?;
        let grid = ModuleGrid::from_code(code);

        tracing::debug!(
            version = ?grid.version(),
            ec = %self.ec_level,
            width = grid.width(),
            bytes = data.len(),
            "Encoded QR symbol"
        );

        Ok(grid)
    }
}

/// Write the QR image described by `request` and return the path written.
///
/// The destination's parent directories are created when missing and an
/// existing file is overwritten.
pub fn generate(request: &GenerationRequest) -> Result<PathBuf> {
    if request.data.trim().is_empty() {
        return Err(Error::Validation(
            "Input 'data' must be a non-empty string".to_string(),
        ));
    }

    let destination = request.output_path.clone();
    let format = request.output_format();
    let options = &request.options;

    // Colors are parsed before anything touches the filesystem
    let raster_colors = match format {
        OutputFormat::Raster => Some((
            options.fill_color.parse::<Color>()?,
            options.back_color.parse::<Color>()?,
        )),
        OutputFormat::Vector => None,
    };

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let grid = QrEncoder::with_ec_level(options.error_correction).encode(&request.data)?;

    match raster_colors {
        Some((fill, back)) => {
            let img = raster::render_raster(&grid, options.box_size, options.border, fill, back)?;
            raster::save_raster(&img, &destination)?;
        }
        None => {
            // box_size has no meaning for vector output
            let doc = svg::render_svg(
                &grid,
                options.border,
                &options.fill_color,
                &options.back_color,
            );
            fs::write(&destination, doc)?;
        }
    }

    tracing::info!(path = %destination.display(), ?format, "Saved QR image");
    Ok(destination)
}

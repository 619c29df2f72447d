//! QR code encoding and rendering
//!
//! The symbol itself (version selection, Reed-Solomon blocks, masking) comes
//! from the `qrcode` crate. This module maps our options onto it, picks the
//! renderer from the destination extension and writes the result.

mod color;
mod encoder;
mod raster;
mod svg;

pub use color::Color;
pub use encoder::{QrEncoder, generate};
pub use raster::render_raster;
pub use svg::render_svg;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Error correction level of the generated symbol
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ErrorCorrectionLevel {
    /// Recovers ~7% of damaged codewords
    #[value(name = "L")]
    #[serde(alias = "l")]
    L,
    /// Recovers ~15% of damaged codewords
    #[default]
    #[value(name = "M")]
    #[serde(alias = "m")]
    M,
    /// Recovers ~25% of damaged codewords
    #[value(name = "Q")]
    #[serde(alias = "q")]
    Q,
    /// Recovers ~30% of damaged codewords
    #[value(name = "H")]
    #[serde(alias = "h")]
    H,
}

impl ErrorCorrectionLevel {
    /// Approximate share of the symbol that can be restored.
    pub fn recovery_percent(self) -> u8 {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }

    /// Matching constant of the `qrcode` encoder.
    pub fn to_ec_level(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(label)
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(format!(
                "Unsupported error correction level '{value}', expected L, M, Q or H"
            )),
        }
    }
}

impl From<ErrorCorrectionLevel> for qrcode::EcLevel {
    fn from(level: ErrorCorrectionLevel) -> Self {
        level.to_ec_level()
    }
}

/// Image technology used for the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pixel image (PNG unless the extension names another raster format)
    Raster,
    /// SVG document
    Vector,
}

impl OutputFormat {
    /// `.svg` (any case) selects vector output; everything else is raster.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Vector,
            _ => Self::Raster,
        }
    }
}

/// Encoded symbol and its module matrix, shared by both renderers
pub struct ModuleGrid {
    code: qrcode::QrCode,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Wrap an encoded symbol.
    pub fn from_code(code: qrcode::QrCode) -> Self {
        let modules = code
            .to_colors()
            .into_iter()
            .map(|c| c == qrcode::Color::Dark)
            .collect();

        Self { code, modules }
    }

    /// The symbol as produced by the `qrcode` encoder.
    pub fn code(&self) -> &qrcode::QrCode {
        &self.code
    }

    /// Modules per side, excluding the quiet zone.
    pub fn width(&self) -> usize {
        self.code.width()
    }

    /// Symbol version chosen by the encoder.
    pub fn version(&self) -> qrcode::Version {
        self.code.version()
    }

    /// Whether the module at column `x`, row `y` is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width() + x]
    }

    /// Number of dark modules in the symbol.
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|dark| **dark).count()
    }

    /// Iterate `(x, y)` coordinates of dark modules in row-major order.
    pub fn dark_modules(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width();
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, dark)| **dark)
            .map(move |(i, _)| (i % width, i / width))
    }
}

impl fmt::Debug for ModuleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleGrid")
            .field("version", &self.version())
            .field("width", &self.width())
            .finish()
    }
}

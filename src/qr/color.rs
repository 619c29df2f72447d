//! Color specifiers for raster output

use crate::error::{Error, Result};
use image::Rgba;
use std::str::FromStr;

/// RGBA color parsed from a CSS color specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Rgba<u8>);

impl Color {
    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgba([r, g, b, 255]))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(value.trim())
            .map_err(|e| Error::Color(format!("'{value}': {e}")))?;
        Ok(Self(Rgba(parsed.to_rgba8())))
    }
}

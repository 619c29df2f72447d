//! Raster rendering of a module grid

use crate::error::{Error, Result};
use crate::qr::{Color, ModuleGrid};
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use std::path::Path;

/// Largest pixel buffer the raster path will allocate (RGBA bytes)
pub const MAX_IMAGE_BYTES: u64 = 1 << 30;

/// Paint `grid` into an RGBA image, `box_size` pixels per module and a
/// quiet zone of `border` modules on each side.
pub fn render_raster(
    grid: &ModuleGrid,
    box_size: u32,
    border: u32,
    fill: Color,
    back: Color,
) -> Result<RgbaImage> {
    if box_size == 0 {
        return Err(Error::Validation("Box size must be at least 1 pixel".to_string()));
    }

    let modules = grid.width() as u64 + 2 * u64::from(border);
    let side = modules.saturating_mul(u64::from(box_size));
    let bytes = side.saturating_mul(side).saturating_mul(4);
    if bytes > MAX_IMAGE_BYTES {
        return Err(Error::Image(format!(
            "Image of {modules} modules at {box_size}px per module would need {bytes} bytes \
             (limit {MAX_IMAGE_BYTES})"
        )));
    }
    // Bounded by MAX_IMAGE_BYTES above
    let side = side as u32;

    let symbol = grid
        .code()
        .render::<Rgba<u8>>()
        .quiet_zone(false)
        .module_dimensions(box_size, box_size)
        .dark_color(fill.0)
        .light_color(back.0)
        .build();

    let mut canvas = RgbaImage::from_pixel(side, side, back.0);
    let offset = i64::from(border) * i64::from(box_size);
    imageops::replace(&mut canvas, &symbol, offset, offset);

    Ok(canvas)
}

/// Write a rendered image to `path` as PNG, whatever its extension.
pub fn save_raster(img: &RgbaImage, path: &Path) -> Result<()> {
    tracing::debug!(path = %path.display(), "Writing PNG image");
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(data: &str) -> ModuleGrid {
        ModuleGrid::from_code(qrcode::QrCode::new(data.as_bytes()).expect("encode"))
    }

    #[test]
    fn test_dimensions_include_border() {
        let grid = grid("hello");
        let img = render_raster(&grid, 6, 2, Color::rgb(0, 0, 0), Color::rgb(255, 255, 255))
            .unwrap();
        assert_eq!(img.width(), (21 + 4) * 6);
        assert_eq!(img.height(), img.width());
    }

    #[test]
    fn test_border_uses_back_color_and_modules_fill() {
        let grid = grid("hello");
        let fill = Color::rgb(10, 20, 30);
        let back = Color::rgb(200, 210, 220);
        let img = render_raster(&grid, 3, 4, fill, back).unwrap();

        assert_eq!(*img.get_pixel(0, 0), back.0);
        assert_eq!(*img.get_pixel(11, 11), back.0);
        // Top-left finder corner sits right after the quiet zone
        assert_eq!(*img.get_pixel(12, 12), fill.0);
        assert_eq!(*img.get_pixel(14, 14), fill.0);
    }

    #[test]
    fn test_pixels_follow_module_grid() {
        let grid = grid("pixels follow modules");
        let (box_size, border) = (4, 1);
        let black = Color::rgb(0, 0, 0);
        let white = Color::rgb(255, 255, 255);
        let img = render_raster(&grid, box_size, border, black, white).unwrap();

        for y in 0..grid.width() {
            for x in 0..grid.width() {
                let px = (border + x as u32) * box_size + 1;
                let py = (border + y as u32) * box_size + 2;
                let dark = img.get_pixel(px, py).0[0] == 0;
                assert_eq!(dark, grid.is_dark(x, y), "module ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_transparent_background_is_kept() {
        let grid = grid("hello");
        let back = Color(Rgba([0, 0, 0, 0]));
        let img = render_raster(&grid, 2, 4, Color::rgb(0, 0, 0), back).unwrap();
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(8, 8).0[3], 255);
    }

    #[test]
    fn test_zero_border() {
        let grid = grid("hello");
        let img = render_raster(&grid, 1, 0, Color::rgb(0, 0, 0), Color::rgb(255, 255, 255))
            .unwrap();
        assert_eq!(img.width(), 21);
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_zero_box_size_rejected() {
        let grid = grid("hello");
        let err = render_raster(&grid, 0, 4, Color::rgb(0, 0, 0), Color::rgb(255, 255, 255))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_huge_box_size_is_an_error() {
        let grid = grid("hi");
        for box_size in [100_000, 100_000_000, u32::MAX] {
            let err = render_raster(
                &grid,
                box_size,
                4,
                Color::rgb(0, 0, 0),
                Color::rgb(255, 255, 255),
            )
            .unwrap_err();
            assert!(matches!(err, Error::Image(_)), "box size {box_size}");
        }
    }
}

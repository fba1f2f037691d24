//! # Image Service
//!
//! Loads product photos from disk and prepares them for PDF embedding, and
//! computes aspect-preserving fits of an image into a bounding box.
//!
//! Every image is decoded to RGB pixels with a separate alpha channel for
//! SMask transparency. Oversized photos are downscaled with a Lanczos
//! filter before embedding — catalog cards are ~2.5 cm tall, a 4000 px
//! phone photo would only bloat the file.
//!
//! Load failures are per-card recoverable by design: the card layout engine
//! substitutes a placeholder label and the run continues.

use std::path::Path;

use image::imageops::FilterType;
use thiserror::Error;

/// Why a product photo could not be embedded. Never fatal to the run.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image not found: {0}")]
    NotFound(String),
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// A decoded image ready for PDF embedding.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// width * height * 3 bytes (RGB).
    pub rgb: Vec<u8>,
    /// width * height bytes (grayscale alpha). None if fully opaque.
    pub alpha: Option<Vec<u8>>,
    pub width_px: u32,
    pub height_px: u32,
}

/// Load and decode an image file, downscaling if either dimension exceeds
/// `max_px`.
pub fn load(path: &Path, max_px: u32) -> Result<LoadedImage, ImageError> {
    if !path.exists() {
        return Err(ImageError::NotFound(path.display().to_string()));
    }
    let decoded = image::open(path).map_err(|source| ImageError::Decode {
        path: path.display().to_string(),
        source,
    })?;

    let decoded = if decoded.width() > max_px || decoded.height() > max_px {
        decoded.resize(max_px, max_px, FilterType::Lanczos3)
    } else {
        decoded
    };

    Ok(split_channels(&decoded.to_rgba8()))
}

/// Split RGBA pixels into the RGB + optional alpha layout the PDF
/// serializer consumes.
fn split_channels(rgba: &image::RgbaImage) -> LoadedImage {
    let pixel_count = (rgba.width() * rgba.height()) as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    let mut alpha = Vec::with_capacity(pixel_count);
    let mut has_transparency = false;

    for pixel in rgba.pixels() {
        rgb.push(pixel[0]);
        rgb.push(pixel[1]);
        rgb.push(pixel[2]);
        alpha.push(pixel[3]);
        if pixel[3] != 255 {
            has_transparency = true;
        }
    }

    LoadedImage {
        rgb,
        alpha: if has_transparency { Some(alpha) } else { None },
        width_px: rgba.width(),
        height_px: rgba.height(),
    }
}

/// An image placement inside a bounding box: draw dimensions plus the
/// centering offsets from the box origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedBox {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Fit an image of intrinsic pixel size into a box, preserving aspect ratio
/// and centering the result.
///
/// A zero intrinsic height would divide by zero; such an image is treated
/// as square (ratio 1.0) instead.
pub fn fit_box(
    intrinsic_width: u32,
    intrinsic_height: u32,
    box_width: f64,
    box_height: f64,
) -> FittedBox {
    let img_ratio = if intrinsic_height == 0 {
        1.0
    } else {
        intrinsic_width as f64 / intrinsic_height as f64
    };
    let box_ratio = box_width / box_height;

    let (width, height) = if img_ratio > box_ratio {
        // Relatively wider than the box: constrain by width.
        (box_width, box_width / img_ratio)
    } else {
        (box_height * img_ratio, box_height)
    };

    FittedBox {
        width,
        height,
        offset_x: (box_width - width) / 2.0,
        offset_y: (box_height - height) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_image_constrained_by_width() {
        let fit = fit_box(200, 100, 50.0, 50.0);
        assert!((fit.width - 50.0).abs() < 1e-9);
        assert!((fit.height - 25.0).abs() < 1e-9);
        assert!((fit.offset_x - 0.0).abs() < 1e-9);
        assert!((fit.offset_y - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_fit_tall_image_constrained_by_height() {
        let fit = fit_box(100, 200, 50.0, 50.0);
        assert!((fit.height - 50.0).abs() < 1e-9);
        assert!((fit.width - 25.0).abs() < 1e-9);
        assert!((fit.offset_x - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_fit_preserves_aspect_and_containment() {
        for &(iw, ih) in &[(640u32, 480u32), (480, 640), (1, 1000), (1000, 1), (3, 2)] {
            let fit = fit_box(iw, ih, 141.7, 70.9);
            assert!(fit.width <= 141.7 + 1e-9);
            assert!(fit.height <= 70.9 + 1e-9);
            let want = iw as f64 / ih as f64;
            assert!((fit.width / fit.height - want).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fit_zero_height_does_not_divide_by_zero() {
        let fit = fit_box(100, 0, 40.0, 20.0);
        assert!(fit.width.is_finite() && fit.height.is_finite());
        // Treated as square.
        assert!((fit.width - 20.0).abs() < 1e-9);
        assert!((fit.height - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let err = load(Path::new("no/such/imagen.png"), 1024).unwrap_err();
        assert!(matches!(err, ImageError::NotFound(_)));
    }

    #[test]
    fn test_load_corrupt_file_is_decode_error() {
        let dir = std::env::temp_dir().join("folleto-image-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rota.png");
        std::fs::write(&path, b"esto no es un png").unwrap();

        let err = load(&path, 1024).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }

    #[test]
    fn test_load_decodes_png_fixture() {
        let dir = std::env::temp_dir().join("folleto-image-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pixel.png");

        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 255, 0, 255]));
        img.save(&path).unwrap();

        let loaded = load(&path, 1024).unwrap();
        assert_eq!((loaded.width_px, loaded.height_px), (2, 1));
        assert_eq!(loaded.rgb, vec![255, 0, 0, 0, 255, 0]);
        assert!(loaded.alpha.is_none(), "fully opaque should have no alpha");
    }

    #[test]
    fn test_load_keeps_transparency() {
        let dir = std::env::temp_dir().join("folleto-image-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("translucent.png");

        let mut img = image::RgbaImage::new(1, 1);
        img.put_pixel(0, 0, image::Rgba([0, 0, 255, 128]));
        img.save(&path).unwrap();

        let loaded = load(&path, 1024).unwrap();
        assert_eq!(loaded.alpha.as_deref(), Some(&[128u8][..]));
    }

    #[test]
    fn test_load_downscales_oversized() {
        let dir = std::env::temp_dir().join("folleto-image-tests");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("big.png");

        let img = image::RgbaImage::from_pixel(64, 32, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let loaded = load(&path, 16).unwrap();
        assert_eq!((loaded.width_px, loaded.height_px), (16, 8));
    }
}

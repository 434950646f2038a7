//! Pixel-level image operations.
//!
//! Everything here is a deterministic wrapper over the `image` and
//! `imageproc` crates. The [`ImageOps`] trait exists so the extraction
//! sweep can run against a test double; [`ImageProcessor`] is the single
//! production implementation.

use image::{DynamicImage, GrayImage, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use snapsight_types::FaceRegion;

/// Outline color for highlighted regions.
const OUTLINE: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Outline thickness, in pixels.
const OUTLINE_WIDTH: i32 = 2;

/// Grayscale and binarization operations used by the extraction sweep.
pub trait ImageOps {
    /// Convert an image to single-channel grayscale. Total: never fails
    /// for a decoded image.
    fn grayscale(&self, image: &DynamicImage) -> GrayImage;

    /// Threshold a grayscale image into two levels: pixels with intensity
    /// at or above `threshold` become white (255), the rest black (0).
    fn binarize(&self, image: &GrayImage, threshold: u8) -> GrayImage;
}

/// Production [`ImageOps`] backed by the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageProcessor;

impl ImageOps for ImageProcessor {
    fn grayscale(&self, image: &DynamicImage) -> GrayImage {
        grayscale(image)
    }

    fn binarize(&self, image: &GrayImage, threshold: u8) -> GrayImage {
        binarize(image, threshold)
    }
}

/// Convert an image to single-channel grayscale.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Binarize a grayscale image at the given cutoff.
///
/// The comparison is `>=`: a pixel exactly at the cutoff maps to white.
pub fn binarize(image: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if pixel.0[0] >= threshold { u8::MAX } else { 0 };
    }
    out
}

/// Crop one image per region, clamping regions to the image bounds.
pub fn crop_regions(image: &DynamicImage, regions: &[FaceRegion]) -> Vec<DynamicImage> {
    regions
        .iter()
        .map(|region| {
            let x = region.x.max(0) as u32;
            let y = region.y.max(0) as u32;
            image.crop_imm(x, y, region.width, region.height)
        })
        .collect()
}

/// Outline each region in red on a fresh RGBA copy of the image.
///
/// The input image is left untouched.
pub fn draw_rectangles(image: &DynamicImage, regions: &[FaceRegion]) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    for region in regions {
        for inset in 0..OUTLINE_WIDTH {
            let width = region.width.saturating_sub(2 * inset as u32);
            let height = region.height.saturating_sub(2 * inset as u32);
            if width == 0 || height == 0 {
                break;
            }
            let rect = Rect::at(region.x + inset, region.y + inset).of_size(width, height);
            draw_hollow_rect_mut(&mut canvas, rect, OUTLINE);
        }
    }
    canvas
}

//! Inpainting of the masked watermark region.
//!
//! Reconstruction itself is delegated to the [`inpaint`](::inpaint) crate's
//! Telea fast marching implementation. This module adds the checks the batch
//! driver relies on: mask and image sizes must agree, every non-zero mask value
//! counts as masked, and the search radius is kept within `1..=100`.

use ::inpaint::ImageInpaint as _;
use image::{GrayImage, ImageBuffer, Luma, Pixel};
use tracing::debug;

use crate::error::{Error, Result};

/// Search radius used for watermark removal, in pixels.
pub const DEFAULT_INPAINT_RADIUS: i32 = 7;

/// Largest search radius passed on to the fast marching fill.
pub const MAX_INPAINT_RADIUS: i32 = 100;

/// Fill every pixel where `mask` is non-zero, in place, using the Telea fast
/// marching method with the given search `radius`.
///
/// Radii below 1 are treated as 1 and radii above [`MAX_INPAINT_RADIUS`] as
/// that maximum. Pixels outside the mask are left untouched.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the mask and image sizes differ, or
/// [`Error::Inpaint`] if the fill itself fails.
pub fn inpaint_in_place<P>(
    image: &mut ImageBuffer<P, Vec<u8>>,
    mask: &GrayImage,
    radius: i32,
) -> Result<()>
where
    P: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    if mask.dimensions() != (width, height) {
        return Err(Error::DimensionMismatch {
            width,
            height,
            mask_width: mask.width(),
            mask_height: mask.height(),
        });
    }

    let masked = mask.pixels().filter(|p| p[0] != 0).count();
    if masked == 0 {
        return Ok(());
    }

    let radius = effective_radius(radius);
    debug!(masked, radius, "inpainting masked region");

    let binary = binarize(mask);
    image
        .telea_inpaint(&binary, radius)
        .map_err(|e| Error::Inpaint(e.to_string()))
}

/// Return a copy of `image` with the masked region reconstructed.
///
/// # Errors
///
/// See [`inpaint_in_place`].
pub fn inpaint<P>(
    image: &ImageBuffer<P, Vec<u8>>,
    mask: &GrayImage,
    radius: i32,
) -> Result<ImageBuffer<P, Vec<u8>>>
where
    P: Pixel<Subpixel = u8>,
{
    let mut result = image.clone();
    inpaint_in_place(&mut result, mask, radius)?;
    Ok(result)
}

fn effective_radius(radius: i32) -> i32 {
    radius.clamp(1, MAX_INPAINT_RADIUS)
}

/// Anti-aliased fringe pixels are masked too.
fn binarize(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([if mask.get_pixel(x, y)[0] == 0 { 0 } else { 255 }])
    })
}

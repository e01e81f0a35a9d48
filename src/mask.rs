//! Watermark mask generation.
//!
//! The watermark is assumed to be a line of text rendered with a known typeface,
//! scale and stroke thickness, centered on the image. This module measures that
//! text, centers it on a canvas of the image's size and rasterizes it into a
//! single-channel mask: `255` under the glyph strokes, `0` elsewhere, with
//! anti-aliased values along the stroke edges.
//!
//! # Centering
//!
//! With a measured box of `tw x th`, the text anchor is
//! `x = (width - tw) / 2` and `y = (height + th) / 2`, where `y` is the
//! baseline. [`TextMetrics::height`] spans from the baseline to the top of the
//! cap line (half a stroke included), so the cap box ends up vertically
//! centered.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use image::{GrayImage, Luma};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::font::{self, CAP_HEIGHT, DESCENT};

/// Watermark text used when none is given.
pub const DEFAULT_TEXT: &str = "SAMPLE";

/// Default scale factor: font units to pixels for the stroke font.
pub const DEFAULT_SCALE: f32 = 6.0;

/// Default stroke thickness in pixels.
pub const DEFAULT_THICKNESS: u32 = 18;

/// Largest scale factor accepted from the command line.
pub const MAX_SCALE: f32 = 100.0;

/// Largest stroke thickness accepted from the command line.
pub const MAX_THICKNESS: u32 = 1000;

/// Upper bound on shrink iterations for [`FitPolicy::ScaleDown`].
const MAX_FIT_STEPS: usize = 32;

/// Shrink factor applied at least once per [`FitPolicy::ScaleDown`] step.
const MAX_FIT_FACTOR: f32 = 0.95;

/// Typeface the watermark text is rendered with.
#[derive(Clone, Default)]
pub enum Typeface {
    /// Built-in single-stroke vector font (see [`crate::font`]).
    #[default]
    Simplex,
    /// Outline font loaded from a TrueType/OpenType file. Glyph outlines are
    /// filled and then widened by the stroke thickness.
    TrueType(Arc<FontVec>),
}

impl Typeface {
    /// Load a TrueType or OpenType font from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Font`] if the file cannot be read or is not a valid font.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| Error::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::TrueType(Arc::new(font)))
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simplex => f.write_str("Simplex"),
            Self::TrueType(_) => f.write_str("TrueType"),
        }
    }
}

/// Rendering parameters of the watermark, identical for every image of a batch.
#[derive(Debug, Clone)]
pub struct WatermarkSpec {
    /// Watermark text.
    pub text: String,
    /// Typeface the text is rendered with.
    pub typeface: Typeface,
    /// Scale factor from font units to pixels.
    pub scale: f32,
    /// Stroke thickness in pixels.
    pub thickness: u32,
}

impl Default for WatermarkSpec {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            typeface: Typeface::Simplex,
            scale: DEFAULT_SCALE,
            thickness: DEFAULT_THICKNESS,
        }
    }
}

impl WatermarkSpec {
    /// Replace the watermark text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Replace the scale factor.
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Replace the stroke thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Replace the typeface.
    #[must_use]
    pub fn with_typeface(mut self, typeface: Typeface) -> Self {
        self.typeface = typeface;
        self
    }
}

/// What to do when the measured text does not fit the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Render anyway; strokes outside the canvas are dropped.
    #[default]
    Clip,
    /// Shrink scale and thickness proportionally until the text fits.
    ScaleDown,
    /// Refuse with [`Error::WatermarkTooLarge`].
    Fail,
}

/// Measured box of the rendered text, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    /// Width, including half a stroke on each side.
    pub width: u32,
    /// Height from the baseline to the top of the cap line.
    pub height: u32,
    /// Depth below the baseline.
    pub baseline: u32,
}

impl TextMetrics {
    /// Height including the part below the baseline.
    #[must_use]
    pub fn full_height(&self) -> u32 {
        self.height.saturating_add(self.baseline)
    }

    /// Whether the box fits a `width x height` canvas.
    #[must_use]
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.width <= width && self.full_height() <= height
    }
}

/// Measure the box the watermark text occupies when rendered with `spec`.
///
/// Dimensions saturate at `u32::MAX` instead of overflowing.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn measure_text(spec: &WatermarkSpec) -> TextMetrics {
    let half_up = spec.thickness.div_ceil(2);
    let half_down = spec.thickness / 2;

    match &spec.typeface {
        Typeface::Simplex => {
            let advance = font::text_advance(&spec.text) as f32 * spec.scale;
            let descent = if font::text_descends(&spec.text) {
                (DESCENT * spec.scale).round() as u32
            } else {
                0
            };
            TextMetrics {
                width: (advance.round() as u32).saturating_add(spec.thickness),
                height: ((CAP_HEIGHT * spec.scale).round() as u32).saturating_add(half_up),
                baseline: descent.saturating_add(half_down),
            }
        }
        Typeface::TrueType(font) => {
            let scaled = font.as_scaled(PxScale::from(CAP_HEIGHT * spec.scale));
            let mut advance = 0.0_f32;
            let mut prev = None;
            for c in spec.text.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = prev {
                    advance += scaled.kern(prev, id);
                }
                advance += scaled.h_advance(id);
                prev = Some(id);
            }
            TextMetrics {
                width: (advance.max(0.0).ceil() as u32).saturating_add(spec.thickness),
                height: (scaled.ascent().max(0.0).ceil() as u32).saturating_add(half_up),
                baseline: ((-scaled.descent()).max(0.0).ceil() as u32).saturating_add(half_down),
            }
        }
    }
}

/// Anchor (left edge, baseline) that centers `metrics` on a `width x height` canvas.
///
/// Uses floor division, so the result may be negative when the text is larger
/// than the canvas.
#[must_use]
pub fn text_anchor(width: u32, height: u32, metrics: &TextMetrics) -> (i64, i64) {
    let x = (i64::from(width) - i64::from(metrics.width)).div_euclid(2);
    let y = (i64::from(height) + i64::from(metrics.height)).div_euclid(2);
    (x, y)
}

/// Generate the watermark mask for a `width x height` image.
///
/// The returned mask always has exactly the requested dimensions. `fit` decides
/// what happens when the measured text is larger than the canvas.
///
/// # Errors
///
/// Returns [`Error::WatermarkTooLarge`] when `fit` is [`FitPolicy::Fail`] and the
/// text does not fit.
pub fn generate_mask(
    height: u32,
    width: u32,
    spec: &WatermarkSpec,
    fit: FitPolicy,
) -> Result<GrayImage> {
    if spec.text.is_empty() {
        return Ok(GrayImage::new(width, height));
    }

    let metrics = measure_text(spec);
    if metrics.fits(width, height) {
        return Ok(render_mask(height, width, spec));
    }

    match fit {
        FitPolicy::Clip => {
            warn!(
                text_width = metrics.width,
                text_height = metrics.full_height(),
                width,
                height,
                "watermark text exceeds the image, clipping"
            );
            Ok(render_mask(height, width, spec))
        }
        FitPolicy::ScaleDown => {
            let fitted = scale_to_fit(spec, width, height);
            debug!(
                scale = fitted.scale,
                thickness = fitted.thickness,
                "scaled watermark text down to fit"
            );
            Ok(render_mask(height, width, &fitted))
        }
        FitPolicy::Fail => Err(Error::WatermarkTooLarge {
            width,
            height,
            text_width: metrics.width,
            text_height: metrics.full_height(),
        }),
    }
}

/// Generate the mask for `text` with the default typeface, scale and thickness.
///
/// Oversized text is clipped to the canvas.
#[must_use]
pub fn generate_text_mask(height: u32, width: u32, text: &str) -> GrayImage {
    let spec = WatermarkSpec::default().with_text(text);
    render_mask(height, width, &spec)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn scale_to_fit(spec: &WatermarkSpec, width: u32, height: u32) -> WatermarkSpec {
    let mut fitted = spec.clone();
    for _ in 0..MAX_FIT_STEPS {
        let metrics = measure_text(&fitted);
        if metrics.fits(width, height) || metrics.width == 0 {
            break;
        }
        let factor = (width as f32 / metrics.width as f32)
            .min(height as f32 / metrics.full_height().max(1) as f32)
            .min(MAX_FIT_FACTOR);
        fitted.scale *= factor;
        fitted.thickness = ((fitted.thickness as f32 * factor).round() as u32).max(1);
    }
    fitted
}

fn render_mask(height: u32, width: u32, spec: &WatermarkSpec) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 || spec.text.is_empty() {
        return mask;
    }

    let metrics = measure_text(spec);
    let (x, y) = text_anchor(width, height, &metrics);
    debug!(
        text = %spec.text,
        text_width = metrics.width,
        text_height = metrics.height,
        x,
        y,
        "rendering watermark mask"
    );

    match &spec.typeface {
        Typeface::Simplex => draw_simplex(&mut mask, spec, x, y),
        Typeface::TrueType(font) => draw_truetype(&mut mask, font, spec, &metrics, x, y),
    }
    mask
}

#[allow(clippy::cast_precision_loss)]
fn draw_simplex(mask: &mut GrayImage, spec: &WatermarkSpec, x: i64, y: i64) {
    let radius = spec.thickness.max(1) as f32 / 2.0;
    let left = x as f32 + spec.thickness as f32 / 2.0;
    let baseline = y as f32;

    let mut pen = 0.0_f32;
    for c in spec.text.chars() {
        let glyph = font::glyph(c);
        for stroke in glyph.strokes {
            let points: Vec<(f32, f32)> = stroke
                .iter()
                .map(|&(gx, gy)| {
                    (
                        left + (pen + f32::from(gx)) * spec.scale,
                        baseline - f32::from(gy) * spec.scale,
                    )
                })
                .collect();
            match points.as_slice() {
                [p] => stroke_segment(mask, *p, *p, radius),
                _ => {
                    for pair in points.windows(2) {
                        stroke_segment(mask, pair[0], pair[1], radius);
                    }
                }
            }
        }
        pen += f32::from(glyph.advance);
    }
}

/// Draw an anti-aliased segment with a round pen of `radius`, clipped to the mask.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn stroke_segment(mask: &mut GrayImage, a: (f32, f32), b: (f32, f32), radius: f32) {
    let (w, h) = mask.dimensions();
    let reach = radius + 1.0;

    let min_x = (a.0.min(b.0) - reach).floor().max(0.0);
    let max_x = (a.0.max(b.0) + reach).ceil().min(w as f32 - 1.0);
    let min_y = (a.1.min(b.1) - reach).floor().max(0.0);
    let max_y = (a.1.max(b.1) + reach).ceil().min(h as f32 - 1.0);
    if min_x > max_x || min_y > max_y {
        return;
    }

    for py in min_y as u32..=max_y as u32 {
        for px in min_x as u32..=max_x as u32 {
            let d = distance_to_segment((px as f32, py as f32), a, b);
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let value = (coverage * 255.0).round() as u8;
                let pixel = mask.get_pixel_mut(px, py);
                pixel[0] = pixel[0].max(value);
            }
        }
    }
}

fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > f32::EPSILON {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Fill the glyph outlines into a local coverage buffer, widen it by the stroke
/// radius and blit it onto the mask at `(x, y)`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn draw_truetype(
    mask: &mut GrayImage,
    font: &FontVec,
    spec: &WatermarkSpec,
    metrics: &TextMetrics,
    x: i64,
    y: i64,
) {
    let scale = PxScale::from(CAP_HEIGHT * spec.scale);
    let scaled = font.as_scaled(scale);

    let local_w = (metrics.width as usize).saturating_add(2);
    let local_h = (metrics.full_height() as usize).saturating_add(2);
    let mut coverage = vec![0.0_f32; local_w * local_h];

    let local_baseline = metrics.height as f32;
    let mut cursor_x = spec.thickness as f32 / 2.0;
    let mut prev = None;

    for c in spec.text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            cursor_x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(cursor_x, local_baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, cov| {
                let lx = gx as i64 + bounds.min.x as i64;
                let ly = gy as i64 + bounds.min.y as i64;
                if lx >= 0 && ly >= 0 && (lx as usize) < local_w && (ly as usize) < local_h {
                    let idx = ly as usize * local_w + lx as usize;
                    coverage[idx] = coverage[idx].max(cov);
                }
            });
        }
        cursor_x += scaled.h_advance(id);
        prev = Some(id);
    }

    let widened = widen(&coverage, local_w, local_h, spec.thickness / 2);

    let top = y - i64::from(metrics.height);
    let (w, h) = mask.dimensions();
    for ly in 0..local_h {
        let gy = top + ly as i64;
        if gy < 0 || gy >= i64::from(h) {
            continue;
        }
        for lx in 0..local_w {
            let gx = x + lx as i64;
            if gx < 0 || gx >= i64::from(w) {
                continue;
            }
            let value = (widened[ly * local_w + lx].clamp(0.0, 1.0) * 255.0).round() as u8;
            if value > 0 {
                let pixel = mask.get_pixel_mut(gx as u32, gy as u32);
                *pixel = Luma([pixel[0].max(value)]);
            }
        }
    }
}

/// Grey-level dilation with a disc of `radius` pixels.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn widen(coverage: &[f32], w: usize, h: usize, radius: u32) -> Vec<f32> {
    if radius == 0 {
        return coverage.to_vec();
    }
    let r = radius as isize;
    let offsets: Vec<(isize, isize)> = (-r..=r)
        .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx * dx + dy * dy <= r * r)
        .collect();

    let mut out = vec![0.0_f32; coverage.len()];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let mut best = 0.0_f32;
            for &(dx, dy) in &offsets {
                let (sx, sy) = (x + dx, y + dy);
                if sx >= 0 && sy >= 0 && (sx as usize) < w && (sy as usize) < h {
                    best = best.max(coverage[sy as usize * w + sx as usize]);
                }
            }
            out[y as usize * w + x as usize] = best;
        }
    }
    out
}

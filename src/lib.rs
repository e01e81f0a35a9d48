//! Remove a known, centered text watermark from images.
//!
//! The watermark is assumed to be a single line of text with a known typeface,
//! scale and stroke thickness, centered on every image of a batch. For each image
//! this crate renders that text into a binary mask of the image's size and fills
//! the masked region with fast marching (Telea) inpainting from the
//! [`inpaint`](::inpaint) crate.
//!
//! # Quick Start
//!
//! ```no_run
//! use text_watermark_removal::{ProcessOptions, WatermarkEngine, WatermarkSpec};
//!
//! let opts = ProcessOptions {
//!     spec: WatermarkSpec::default().with_text("PROOF"),
//!     ..ProcessOptions::default()
//! };
//! let engine = WatermarkEngine::new(opts);
//! let mut img = image::open("photo.jpg").unwrap().to_rgb8();
//! engine.remove(&mut img).unwrap();
//! img.save("cleaned.jpg").unwrap();
//! ```
//!
//! # Batches
//!
//! ```no_run
//! use std::path::Path;
//! use text_watermark_removal::WatermarkEngine;
//!
//! let engine = WatermarkEngine::default();
//! let report = engine
//!     .process_directory(Path::new("in"), Path::new("out"))
//!     .unwrap();
//! println!("Successful: {}, Failed: {}", report.succeeded(), report.failed());
//! ```

#![deny(missing_docs)]

mod engine;
pub mod error;
pub mod font;
pub mod inpaint;
pub mod mask;

pub use crate::engine::{
    is_supported_image, list_images, save_image, BatchEvent, BatchReport, FileOutcome, FileReport,
    ProcessOptions, WatermarkEngine,
};
pub use crate::error::{Error, Result};
pub use crate::inpaint::{inpaint, inpaint_in_place, DEFAULT_INPAINT_RADIUS, MAX_INPAINT_RADIUS};
pub use crate::mask::{
    generate_mask, generate_text_mask, measure_text, text_anchor, FitPolicy, TextMetrics,
    Typeface, WatermarkSpec,
};

//! Error types for the text-watermark-removal crate.

use std::path::PathBuf;

/// Errors that can occur while generating masks, inpainting and processing batches.
///
/// Decode failures of individual files are not reported through this type by the
/// batch driver; they are recorded as a failed [`FileOutcome`](crate::FileOutcome)
/// and the batch continues. Every variant returned from
/// [`WatermarkEngine::process_directory`](crate::WatermarkEngine::process_directory)
/// aborts the remaining batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The mask does not have the same dimensions as the image.
    #[error("mask is {mask_width}x{mask_height} but image is {width}x{height}")]
    DimensionMismatch {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Mask width in pixels.
        mask_width: u32,
        /// Mask height in pixels.
        mask_height: u32,
    },

    /// The fast marching fill failed.
    #[error("inpainting failed: {0}")]
    Inpaint(String),

    /// The rendered watermark text does not fit on the canvas.
    #[error("watermark text ({text_width}x{text_height}) does not fit a {width}x{height} image")]
    WatermarkTooLarge {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
        /// Measured text width in pixels.
        text_width: u32,
        /// Measured text height in pixels, including the descender.
        text_height: u32,
    },

    /// A TrueType font could not be read or parsed.
    #[error("failed to load font {path}: {reason}")]
    Font {
        /// Path of the font file.
        path: PathBuf,
        /// Why loading failed.
        reason: String,
    },

    /// The input directory could not be listed.
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// An error occurred during image processing (load, save, encode).
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let io_err = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io_err.to_string().contains("gone"));

        let unsupported = Error::UnsupportedFormat("gif".to_string());
        assert!(unsupported.to_string().contains("gif"));

        let mismatch = Error::DimensionMismatch {
            width: 10,
            height: 20,
            mask_width: 30,
            mask_height: 40,
        };
        let msg = mismatch.to_string();
        assert!(msg.contains("30x40"));
        assert!(msg.contains("10x20"));

        let too_large = Error::WatermarkTooLarge {
            width: 100,
            height: 50,
            text_width: 732,
            text_height: 160,
        };
        assert!(too_large.to_string().contains("732x160"));

        let inpaint = Error::Inpaint("no data".to_string());
        assert!(inpaint.to_string().contains("no data"));
    }

    #[test]
    fn directory_errors_name_the_path() {
        let err = Error::ReadDir {
            path: PathBuf::from("/no/such/dir"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir"));
        assert!(msg.contains("missing"));
    }
}

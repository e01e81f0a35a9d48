//! Batch watermark removal engine.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, RgbImage};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::inpaint::{inpaint_in_place, DEFAULT_INPAINT_RADIUS};
use crate::mask::{self, FitPolicy, WatermarkSpec};

/// Options controlling watermark processing behavior.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Text, typeface, scale and thickness of the watermark.
    pub spec: WatermarkSpec,
    /// Inpainting search radius in pixels.
    pub radius: i32,
    /// What to do when the watermark text does not fit an image.
    pub fit: FitPolicy,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            spec: WatermarkSpec::default(),
            radius: DEFAULT_INPAINT_RADIUS,
            fit: FitPolicy::Clip,
        }
    }
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The watermark region was inpainted and the result written.
    Cleaned,
    /// The file was skipped; the batch went on.
    Failed {
        /// Human-readable reason.
        reason: String,
    },
}

/// Result of processing a single image file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path of the input file.
    pub path: PathBuf,
    /// Outcome for this file.
    pub outcome: FileOutcome,
}

impl FileReport {
    /// Whether the file was cleaned and written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == FileOutcome::Cleaned
    }
}

/// Per-file reports of a completed batch, in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per image file found in the input directory.
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// Whether the input directory contained no image files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files cleaned and written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    /// Number of files skipped.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.files.len() - self.succeeded()
    }
}

/// Progress of a running batch.
#[derive(Debug, Clone, Copy)]
pub enum BatchEvent<'a> {
    /// The input directory was listed; `total` image files will be processed.
    Listed {
        /// Number of image files found.
        total: usize,
    },
    /// A file has been handled.
    Processed(&'a FileReport),
}

/// Removes a fixed, centered text watermark from images.
///
/// The engine holds the per-run [`ProcessOptions`]; the same watermark is
/// assumed on every image it processes.
#[derive(Debug, Clone, Default)]
pub struct WatermarkEngine {
    opts: ProcessOptions,
}

impl WatermarkEngine {
    /// Create an engine for the given options.
    #[must_use]
    pub fn new(opts: ProcessOptions) -> Self {
        Self { opts }
    }

    /// Options this engine was created with.
    #[must_use]
    pub fn options(&self) -> &ProcessOptions {
        &self.opts
    }

    /// Build the watermark mask for an image of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WatermarkTooLarge`] if the text does not fit and the fit
    /// policy is [`FitPolicy::Fail`].
    pub fn mask_for(&self, width: u32, height: u32) -> Result<GrayImage> {
        mask::generate_mask(height, width, &self.opts.spec, self.opts.fit)
    }

    /// Remove the watermark from an image in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask cannot be generated or inpainting fails.
    pub fn remove(&self, image: &mut RgbImage) -> Result<()> {
        let mask = self.mask_for(image.width(), image.height())?;
        inpaint_in_place(image, &mask, self.opts.radius)
    }

    /// Process a single image file: load, mask, inpaint, save.
    ///
    /// A file that cannot be decoded yields a [`FileOutcome::Failed`] report.
    ///
    /// # Errors
    ///
    /// Mask generation, inpainting and write failures are returned as errors;
    /// callers processing a batch should stop on them.
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<FileReport> {
        let dyn_img = match image::open(input) {
            Ok(img) => img,
            Err(e) => {
                warn!(path = %input.display(), error = %e, "could not read image");
                return Ok(FileReport {
                    path: input.to_path_buf(),
                    outcome: FileOutcome::Failed {
                        reason: format!("Could not read image: {e}"),
                    },
                });
            }
        };

        let mut rgb_img = dyn_img.into_rgb8();
        debug!(
            path = %input.display(),
            width = rgb_img.width(),
            height = rgb_img.height(),
            "decoded image"
        );

        self.remove(&mut rgb_img)?;
        save_image(&rgb_img, output)?;
        info!(path = %output.display(), "watermark removed");

        Ok(FileReport {
            path: input.to_path_buf(),
            outcome: FileOutcome::Cleaned,
        })
    }

    /// Process all supported images directly inside `input_dir`.
    ///
    /// Files are handled one after another, in file name order. Results are
    /// written to `output_dir` (created if missing) under the same file names.
    ///
    /// # Errors
    ///
    /// Returns an error, abandoning the rest of the batch, if the output
    /// directory cannot be created, the input directory cannot be listed, or
    /// any file fails after it was decoded.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        self.process_directory_with(input_dir, output_dir, |_| {})
    }

    /// Like [`process_directory`](Self::process_directory), calling `observe`
    /// once the input directory is listed and again after every file.
    ///
    /// Files reported through `observe` before a batch-fatal error have already
    /// been handled, even though the error discards the [`BatchReport`].
    ///
    /// # Errors
    ///
    /// Same as [`process_directory`](Self::process_directory).
    pub fn process_directory_with<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        mut observe: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        if !output_dir.exists() {
            std::fs::create_dir_all(output_dir).map_err(|source| Error::CreateOutputDir {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        let entries = list_images(input_dir)?;
        observe(BatchEvent::Listed {
            total: entries.len(),
        });

        let mut report = BatchReport::default();
        for input_path in entries {
            let Some(filename) = input_path.file_name() else {
                continue;
            };
            let output_path = output_dir.join(filename);
            let file = self.process_file(&input_path, &output_path)?;
            observe(BatchEvent::Processed(&file));
            report.files.push(file);
        }
        Ok(report)
    }
}

/// List the supported image files directly inside `dir`, sorted by path.
///
/// # Errors
///
/// Returns [`Error::ReadDir`] if the directory cannot be read.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| is_supported_image(p))
        .collect();
    entries.sort();
    Ok(entries)
}

/// Check if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" | "tif"
        ),
        None => false,
    }
}

/// Save an RGB image, choosing the format from the file extension.
///
/// # Errors
///
/// Returns an error if the format is unsupported or writing fails.
pub fn save_image(img: &RgbImage, path: &Path) -> Result<()> {
    let format =
        ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;

    match format {
        ImageFormat::Jpeg => {
            let file = std::fs::File::create(path)?;
            let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(file, 95);
            encoder.encode_image(img)?;
        }
        ImageFormat::Png | ImageFormat::Bmp | ImageFormat::Tiff => {
            img.save_with_format(path, format)?;
        }
        _ => {
            return Err(Error::UnsupportedFormat(format!("{format:?}")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_supported_image_accepts_allow_listed_formats() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.JPEG")));
        assert!(is_supported_image(Path::new("photo.png")));
        assert!(is_supported_image(Path::new("photo.bmp")));
        assert!(is_supported_image(Path::new("photo.TIFF")));
        assert!(is_supported_image(Path::new("photo.tif")));
    }

    #[test]
    fn is_supported_image_rejects_other_files() {
        assert!(!is_supported_image(Path::new("photo.gif")));
        assert!(!is_supported_image(Path::new("photo.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("photo")));
    }

    #[test]
    fn batch_report_tallies_outcomes() {
        let report = BatchReport {
            files: vec![
                FileReport {
                    path: PathBuf::from("a.png"),
                    outcome: FileOutcome::Cleaned,
                },
                FileReport {
                    path: PathBuf::from("b.png"),
                    outcome: FileOutcome::Failed {
                        reason: "corrupt".to_string(),
                    },
                },
                FileReport {
                    path: PathBuf::from("c.png"),
                    outcome: FileOutcome::Cleaned,
                },
            ],
        };
        assert!(!report.is_empty());
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(BatchReport::default().is_empty());
    }

    #[test]
    fn default_options_match_watermark_policy() {
        let opts = ProcessOptions::default();
        assert_eq!(opts.radius, 7);
        assert_eq!(opts.fit, FitPolicy::Clip);
        assert_eq!(opts.spec.text, "SAMPLE");
        assert_eq!(opts.spec.thickness, 18);
    }

    #[test]
    fn remove_leaves_pixels_outside_mask_untouched() {
        let spec = WatermarkSpec::default().with_scale(1.5).with_thickness(4);
        let engine = WatermarkEngine::new(ProcessOptions {
            spec,
            ..ProcessOptions::default()
        });
        #[allow(clippy::cast_possible_truncation)]
        let original = RgbImage::from_fn(240, 80, |x, y| {
            image::Rgb([(x % 256) as u8, (y * 3 % 256) as u8, 128])
        });
        let mask = engine.mask_for(240, 80).unwrap();
        let mut cleaned = original.clone();
        engine.remove(&mut cleaned).unwrap();

        for (x, y, m) in mask.enumerate_pixels() {
            if m[0] == 0 {
                assert_eq!(cleaned.get_pixel(x, y), original.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn remove_fails_for_oversized_text_with_fail_policy() {
        let engine = WatermarkEngine::new(ProcessOptions {
            fit: FitPolicy::Fail,
            ..ProcessOptions::default()
        });
        let mut img = RgbImage::new(64, 64);
        assert!(matches!(
            engine.remove(&mut img),
            Err(Error::WatermarkTooLarge { .. })
        ));
    }

    #[test]
    fn missing_input_still_creates_output_directory() {
        let output = tempfile::tempdir().unwrap();
        let out_dir = output.path().join("new");
        let err = WatermarkEngine::default()
            .process_directory(Path::new("/no/such/input/dir"), &out_dir)
            .unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
        assert!(out_dir.is_dir());
    }

    #[test]
    fn observer_sees_files_before_batch_fatal_error() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.png"), b"not an image").unwrap();
        RgbImage::new(32, 32)
            .save(input.path().join("b.png"))
            .unwrap();

        let engine = WatermarkEngine::new(ProcessOptions {
            fit: FitPolicy::Fail,
            ..ProcessOptions::default()
        });
        let mut listed = None;
        let mut seen = Vec::new();
        let err = engine
            .process_directory_with(input.path(), output.path(), |event| match event {
                BatchEvent::Listed { total } => listed = Some(total),
                BatchEvent::Processed(file) => seen.push(file.clone()),
            })
            .unwrap_err();

        assert!(matches!(err, Error::WatermarkTooLarge { .. }));
        assert_eq!(listed, Some(2));
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].path.file_name().unwrap(), "a.png");
        assert!(!seen[0].is_success());
    }

    #[test]
    fn save_image_rejects_unknown_extension() {
        let img = RgbImage::new(4, 4);
        let err = save_image(&img, Path::new("out.xyz")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}

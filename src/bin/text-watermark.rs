use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use text_watermark_removal::mask::{DEFAULT_SCALE, DEFAULT_THICKNESS, MAX_SCALE, MAX_THICKNESS};
use text_watermark_removal::{
    BatchEvent, FileOutcome, FileReport, FitPolicy, ProcessOptions, Typeface, WatermarkEngine,
    WatermarkSpec, DEFAULT_INPAINT_RADIUS, MAX_INPAINT_RADIUS,
};

#[derive(Parser)]
#[command(
    name = "text-watermark",
    about = "Remove a known, centered text watermark from a directory of images",
    version,
    after_help = "The watermark is assumed to be the given text, centered on every image.\n\
                  Its strokes are masked and filled in with fast marching inpainting."
)]
struct Cli {
    /// Input directory containing images to remove watermarks from
    input_dir: PathBuf,

    /// Output directory to save images (created if missing)
    output_dir: PathBuf,

    /// Watermark text to look for
    #[arg(long, default_value = "SAMPLE")]
    text: String,

    /// Scale factor of the watermark text
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f32,

    /// Stroke thickness of the watermark text in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_THICKNESS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_THICKNESS))
    )]
    thickness: u32,

    /// Inpainting search radius in pixels
    #[arg(
        long,
        default_value_t = DEFAULT_INPAINT_RADIUS,
        value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_INPAINT_RADIUS))
    )]
    radius: i32,

    /// TrueType/OpenType font to render the text with (default: built-in stroke font)
    #[arg(long)]
    font: Option<PathBuf>,

    /// What to do when the text is larger than an image
    #[arg(long, value_enum, default_value_t = FitArg::Clip)]
    fit: FitArg,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    /// Render anyway and drop what falls outside the image
    Clip,
    /// Shrink the text until it fits
    ScaleDown,
    /// Stop the batch
    Fail,
}

impl From<FitArg> for FitPolicy {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Clip => FitPolicy::Clip,
            FitArg::ScaleDown => FitPolicy::ScaleDown,
            FitArg::Fail => FitPolicy::Fail,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose && cli.quiet {
        eprintln!("Error: Cannot specify both --verbose and --quiet");
        process::exit(1);
    }

    if !(cli.scale.is_finite() && cli.scale > 0.0 && cli.scale <= MAX_SCALE) {
        eprintln!("Error: Scale must be a positive number no larger than {MAX_SCALE}");
        process::exit(1);
    }

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else if cli.quiet {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Batch-fatal errors are reported but do not change the exit status.
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
    }
}

fn run(cli: &Cli) -> text_watermark_removal::Result<()> {
    let typeface = match &cli.font {
        Some(path) => Typeface::load(path)?,
        None => Typeface::Simplex,
    };

    let opts = ProcessOptions {
        spec: WatermarkSpec::default()
            .with_text(cli.text.clone())
            .with_scale(cli.scale)
            .with_thickness(cli.thickness)
            .with_typeface(typeface),
        radius: cli.radius,
        fit: cli.fit.into(),
    };
    let engine = WatermarkEngine::new(opts);

    let quiet = cli.quiet;
    let report = engine.process_directory_with(&cli.input_dir, &cli.output_dir, |event| match event {
        BatchEvent::Listed { total } => {
            if total > 0 && !quiet {
                println!("Found {total} images to process");
            }
        }
        BatchEvent::Processed(file) => print_file(file, quiet),
    })?;

    if report.is_empty() {
        if !quiet {
            println!("No image files found in {}", cli.input_dir.display());
        }
    } else if !quiet {
        println!("Processing complete:");
        println!("- Successful: {}", report.succeeded());
        println!("- Failed: {}", report.failed());
    }
    Ok(())
}

fn print_file(file: &FileReport, quiet: bool) {
    let filename = file.path.file_name().map_or_else(
        || file.path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    );
    match &file.outcome {
        FileOutcome::Cleaned => {
            if !quiet {
                println!("[OK] {filename}");
            }
        }
        FileOutcome::Failed { reason } => eprintln!("[FAIL] {filename}: {reason}"),
    }
}

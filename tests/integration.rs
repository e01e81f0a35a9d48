use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use text_watermark_removal::{
    generate_text_mask, Error, FileOutcome, FitPolicy, ProcessOptions, WatermarkEngine,
    WatermarkSpec,
};

fn small_opts(text: &str) -> ProcessOptions {
    ProcessOptions {
        spec: WatermarkSpec::default()
            .with_text(text)
            .with_scale(1.5)
            .with_thickness(4),
        ..ProcessOptions::default()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn landscape(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) % 64 + 96) as u8,
        ])
    })
}

fn stamp_watermark(img: &mut RgbImage, spec: &WatermarkSpec) {
    let mask = text_watermark_removal::generate_mask(
        img.height(),
        img.width(),
        spec,
        FitPolicy::Clip,
    )
    .unwrap();
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] > 0 {
            img.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn batch_with_corrupt_file_counts_it_as_failed() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("cleaned");

    landscape(200, 80).save(input.path().join("a.png")).unwrap();
    landscape(180, 90).save(input.path().join("b.bmp")).unwrap();
    landscape(160, 70).save(input.path().join("c.jpg")).unwrap();
    fs::write(input.path().join("d.png"), b"definitely not a png").unwrap();
    fs::write(input.path().join("notes.txt"), b"ignored").unwrap();
    fs::create_dir(input.path().join("nested.png")).unwrap();

    let engine = WatermarkEngine::new(small_opts("SAMPLE"));
    let report = engine.process_directory(input.path(), &out_dir).unwrap();

    assert_eq!(report.files.len(), 4);
    assert_eq!(report.succeeded(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(file_names(&out_dir), vec!["a.png", "b.bmp", "c.jpg"]);

    let failed = report
        .files
        .iter()
        .find(|f| !f.is_success())
        .expect("one failed file");
    assert_eq!(failed.path.file_name().unwrap(), "d.png");
    assert!(matches!(failed.outcome, FileOutcome::Failed { .. }));
}

#[test]
fn empty_input_creates_output_and_reports_nothing() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let out_dir = output.path().join("deep").join("er");

    let engine = WatermarkEngine::default();
    let report = engine.process_directory(input.path(), &out_dir).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.succeeded(), 0);
    assert_eq!(report.failed(), 0);
    assert!(out_dir.is_dir());
}

#[test]
fn missing_input_directory_is_batch_fatal() {
    let output = tempfile::tempdir().unwrap();
    let engine = WatermarkEngine::default();
    let err = engine
        .process_directory(Path::new("/no/such/input/dir"), output.path())
        .unwrap_err();
    assert!(matches!(err, Error::ReadDir { .. }));
}

#[test]
fn lowercase_watermark_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("lower.png");
    let output = dir.path().join("lower_out.png");

    let opts = small_opts("sample");
    let mut stamped = RgbImage::from_pixel(240, 90, Rgb([120, 30, 200]));
    stamp_watermark(&mut stamped, &opts.spec);
    stamped.save(&input).unwrap();

    let engine = WatermarkEngine::new(opts);
    assert!(engine.process_file(&input, &output).unwrap().is_success());

    let cleaned = image::open(&output).unwrap().to_rgb8();
    assert!(cleaned.pixels().all(|p| *p != Rgb([255, 255, 255])));
}

#[test]
fn oversized_text_with_fail_policy_aborts_batch() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    landscape(64, 64).save(input.path().join("tiny.png")).unwrap();

    let engine = WatermarkEngine::new(ProcessOptions {
        fit: FitPolicy::Fail,
        ..ProcessOptions::default()
    });
    let err = engine
        .process_directory(input.path(), output.path())
        .unwrap_err();
    assert!(matches!(err, Error::WatermarkTooLarge { .. }));
    assert!(!output.path().join("tiny.png").exists());
}

#[test]
fn output_keeps_pixels_outside_the_mask() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");

    let opts = small_opts("SAMPLE");
    let mut original = landscape(240, 90);
    stamp_watermark(&mut original, &opts.spec);
    original.save(&input).unwrap();

    let engine = WatermarkEngine::new(opts);
    let report = engine.process_file(&input, &output).unwrap();
    assert!(report.is_success());

    let cleaned = image::open(&output).unwrap().to_rgb8();
    assert_eq!(cleaned.dimensions(), original.dimensions());

    let mask = engine.mask_for(240, 90).unwrap();
    let mut restored = 0usize;
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] == 0 {
            assert_eq!(cleaned.get_pixel(x, y), original.get_pixel(x, y));
        } else if *cleaned.get_pixel(x, y) != Rgb([255, 255, 255]) {
            restored += 1;
        }
    }
    assert!(restored > 0);
}

#[test]
fn default_watermark_is_removed_from_a_large_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    let output = dir.path().join("photo_out.png");

    let mut original = RgbImage::from_pixel(900, 300, Rgb([40, 90, 60]));
    stamp_watermark(&mut original, &WatermarkSpec::default());
    original.save(&input).unwrap();

    let engine = WatermarkEngine::default();
    assert!(engine.process_file(&input, &output).unwrap().is_success());

    let cleaned = image::open(&output).unwrap().to_rgb8();
    let expected = [40u8, 90, 60];
    for p in cleaned.pixels() {
        assert!(
            p.0.iter().zip(expected).all(|(&v, e)| v.abs_diff(e) <= 1),
            "{p:?}"
        );
    }
}

#[test]
fn different_text_changes_mask_and_output() {
    let sample = generate_text_mask(90, 240, "SAMPLE");
    let proof = generate_text_mask(90, 240, "PROOF");
    assert_ne!(sample.as_raw(), proof.as_raw());

    let mut stamped = landscape(240, 90);
    stamp_watermark(&mut stamped, &small_opts("SAMPLE").spec);

    let mut with_sample = stamped.clone();
    WatermarkEngine::new(small_opts("SAMPLE"))
        .remove(&mut with_sample)
        .unwrap();
    let mut with_proof = stamped.clone();
    WatermarkEngine::new(small_opts("PROOF"))
        .remove(&mut with_proof)
        .unwrap();

    assert_ne!(with_sample.as_raw(), with_proof.as_raw());
}

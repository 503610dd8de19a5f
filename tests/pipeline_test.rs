// Integration tests for the full byte-in/byte-out pipeline

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use std::io::Cursor;

use squarify::{DEFAULT_OUTPUT_SIZE, ImageProcessor, Rgb, TransparencyMode, TransparencyOptions};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn encode_png(img: ImageBuffer<Rgba<u8>, Vec<u8>>) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .expect("failed to encode test image");
    cursor.into_inner()
}

fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    encode_png(ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 255])
    }))
}

#[test]
fn test_output_round_trip_is_lossless() {
    init_logger();
    let processor = ImageProcessor::default();
    let result = processor
        .process(&gradient_png(120, 80), 120, &TransparencyOptions::default())
        .expect("pipeline should succeed");

    let first = image::load_from_memory(&result.png_bytes)
        .expect("output should decode")
        .to_rgba8();
    assert_eq!(first.dimensions(), (120, 120));

    // PNG 无损：再编码再解码后像素完全一致
    let reencoded = encode_png(first.clone());
    let second = image::load_from_memory(&reencoded)
        .expect("re-encoded output should decode")
        .to_rgba8();

    assert_eq!(first.dimensions(), second.dimensions());
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_pipeline_is_idempotent_byte_for_byte() {
    init_logger();
    let processor = ImageProcessor::default();
    let png = gradient_png(90, 45);
    let options = TransparencyOptions {
        enabled: true,
        auto_detect: false,
        mode: TransparencyMode::SimilarityFalloff,
        color: Rgb::new(255, 255, 255),
    };

    let first = processor.process(&png, 60, &options).expect("first run failed");
    let second = processor.process(&png, 60, &options).expect("second run failed");

    assert_eq!(first.png_bytes, second.png_bytes);
    assert_eq!(first.natural_max_size, second.natural_max_size);
    assert_eq!(first.used_size, second.used_size);
}

#[test]
fn test_default_output_size_applies_to_large_inputs() {
    let processor = ImageProcessor::default();
    let result = processor
        .process(
            &gradient_png(800, 600),
            DEFAULT_OUTPUT_SIZE,
            &TransparencyOptions::default(),
        )
        .expect("pipeline should succeed");

    assert_eq!(result.natural_max_size, 800);
    assert_eq!(result.used_size, DEFAULT_OUTPUT_SIZE);
}

#[test]
fn test_clamp_is_reported_not_silent() {
    let processor = ImageProcessor::default();
    let result = processor
        .process(&gradient_png(400, 200), 1000, &TransparencyOptions::default())
        .expect("pipeline should succeed");

    assert_eq!(result.natural_max_size, 400);
    assert_eq!(result.used_size, 400);

    let output = image::load_from_memory(&result.png_bytes).expect("output should decode");
    assert_eq!(output.width(), result.used_size);
}

#[test]
fn test_exact_match_background_removal_end_to_end() {
    let processor = ImageProcessor::default();

    // 白色背景、中心一块不透明红色
    let img = ImageBuffer::from_fn(40, 20, |x, y| {
        if (10..30).contains(&x) && (5..15).contains(&y) {
            Rgba([200u8, 0, 0, 255])
        } else {
            Rgba([255u8, 255, 255, 255])
        }
    });
    let options = TransparencyOptions {
        enabled: true,
        auto_detect: true,
        mode: TransparencyMode::ExactMatch,
        color: Rgb::new(0, 0, 0),
    };

    let result = processor
        .process(&encode_png(img), 40, &options)
        .expect("pipeline should succeed");

    assert_eq!(result.detected_color, Some(Rgb::new(255, 255, 255)));
    assert_eq!(result.detected_color_hex().as_deref(), Some("#ffffff"));

    let output = image::load_from_memory(&result.png_bytes)
        .expect("output should decode")
        .to_rgba8();
    assert_eq!(output.dimensions(), (40, 40));

    // 居中后内容位于第 [10, 30) 行；背景白色被移除，红色保持不透明
    assert_eq!(output.get_pixel(0, 10)[3], 0);
    assert_eq!(output.get_pixel(20, 20), &Rgba([200, 0, 0, 255]));
    // 画布补白区域本身全透明
    assert_eq!(output.get_pixel(0, 0)[3], 0);
}

#[test]
fn test_disabled_transparency_passes_rgba_through() {
    let processor = ImageProcessor::default();
    let img = ImageBuffer::from_pixel(16, 16, Rgba([1u8, 2, 3, 255]));

    let result = processor
        .process(&encode_png(img), 16, &TransparencyOptions::default())
        .expect("pipeline should succeed");

    let output = image::load_from_memory(&result.png_bytes)
        .expect("output should decode")
        .to_rgba8();
    assert!(output.pixels().all(|p| p == &Rgba([1, 2, 3, 255])));
    assert!(result.detected_color.is_none());
    assert!(result.detected_color_hex().is_none());
}

#[test]
fn test_invalid_desired_size_produces_no_output() {
    let processor = ImageProcessor::default();
    let result = processor.process(&gradient_png(10, 10), 0, &TransparencyOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_transparency_options_serde_round_trip() {
    let options = TransparencyOptions {
        enabled: true,
        auto_detect: false,
        mode: TransparencyMode::SimilarityFalloff,
        color: Rgb::new(10, 20, 30),
    };

    let json = serde_json::to_string(&options).expect("serialize failed");
    assert!(json.contains("\"falloff\""));

    let parsed: TransparencyOptions = serde_json::from_str(&json).expect("deserialize failed");
    assert!(parsed.enabled);
    assert_eq!(parsed.mode, TransparencyMode::SimilarityFalloff);
    assert_eq!(parsed.color, Rgb::new(10, 20, 30));
}

// Property tests for the geometry and alpha contracts

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use proptest::prelude::*;

use squarify::squarify::squarify;
use squarify::transparency::apply_transparency;
use squarify::{Rgb, TransparencyMode};

fn gradient_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 255])
    })
}

proptest! {
    // 收紧永远偏向较小值：used = min(desired, max(w, h))
    #[test]
    fn used_size_is_clamped_to_natural_max(
        width in 1u32..=64,
        height in 1u32..=64,
        desired in 1u32..=128,
    ) {
        let input = gradient_image(width, height);
        let output = squarify(&input, desired, FilterType::Triangle).expect("squarify failed");

        let natural = width.max(height);
        prop_assert_eq!(output.natural_max_size, natural);
        prop_assert_eq!(output.used_size, desired.min(natural));
        prop_assert_eq!(output.raster.dimensions(), (output.used_size, output.used_size));
    }

    // 不缩放时内容按整除偏移精确落位，补白区域保持全透明
    #[test]
    fn content_is_centered_with_floor_offsets(
        width in 1u32..=48,
        height in 1u32..=48,
    ) {
        let input = gradient_image(width, height);
        let natural = width.max(height);
        let output = squarify(&input, natural, FilterType::Triangle).expect("squarify failed");

        let offset_x = (natural - width) / 2;
        let offset_y = (natural - height) / 2;

        // 四角像素原样落位
        prop_assert_eq!(
            output.raster.get_pixel(offset_x, offset_y),
            input.get_pixel(0, 0)
        );
        prop_assert_eq!(
            output.raster.get_pixel(offset_x + width - 1, offset_y + height - 1),
            input.get_pixel(width - 1, height - 1)
        );

        // 贴图区域之外全透明
        for (x, y, pixel) in output.raster.enumerate_pixels() {
            let inside = (offset_x..offset_x + width).contains(&x)
                && (offset_y..offset_y + height).contains(&y);
            if !inside {
                prop_assert_eq!(pixel, &Rgba([0, 0, 0, 0]));
            }
        }
    }

    // 已是方形且目标为自然上限时，输出与输入逐像素一致
    #[test]
    fn square_input_at_natural_size_is_identity(side in 1u32..=48) {
        let input = gradient_image(side, side);
        let output = squarify(&input, side, FilterType::Triangle).expect("squarify failed");
        prop_assert_eq!(output.raster.as_raw(), input.as_raw());
    }

    // 精确匹配模式只产生二值 alpha
    #[test]
    fn exact_match_alpha_is_binary(
        r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
        tr in any::<u8>(), tg in any::<u8>(), tb in any::<u8>(),
    ) {
        let mut image = RgbaImage::from_fn(4, 4, |x, y| {
            Rgba([r, g, b, ((x + y * 4) * 16) as u8])
        });
        apply_transparency(
            &mut image,
            Rgb::new(tr, tg, tb),
            TransparencyMode::ExactMatch,
            false,
        );
        prop_assert!(image.pixels().all(|p| p[3] == 0 || p[3] == 255));
    }

    // 淡出模式：alpha 恒等于最大通道差，RGB 原样保留
    #[test]
    fn falloff_alpha_equals_max_channel_distance(
        r in any::<u8>(), g in any::<u8>(), b in any::<u8>(),
        tr in any::<u8>(), tg in any::<u8>(), tb in any::<u8>(),
    ) {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([r, g, b, 77]));
        apply_transparency(
            &mut image,
            Rgb::new(tr, tg, tb),
            TransparencyMode::SimilarityFalloff,
            false,
        );

        let expected = r.abs_diff(tr).max(g.abs_diff(tg)).max(b.abs_diff(tb));
        for pixel in image.pixels() {
            prop_assert_eq!(pixel.0, [r, g, b, expected]);
        }
    }
}

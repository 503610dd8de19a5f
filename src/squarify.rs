//! # 方形化模块
//!
//! ## 设计思路
//!
//! 把“矩形 → 方形”的过程拆成三个确定性步骤：按自然最大边长铺一张全透明
//! 画布、把原图覆盖式居中贴入、再缩放到收紧后的目标尺寸。两项派生尺寸
//! （自然上限与实际采用值）随结果一并返回，宿主展示不依赖任何隐式状态。
//!
//! ## 实现思路
//!
//! - 期望尺寸按 `min(desired, max(w, h))` 收紧，只缩不放。
//! - 贴图用 `copy_from` 覆盖写入：源像素（含其 alpha）直接替换画布像素，
//!   不做 alpha 混合。
//! - 缩放优先走 `fast_image_resize` 卷积，失败时回退 `image::imageops`。
//! - 目标尺寸等于自然上限时跳过缩放，画布原样返回。

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{GenericImage, RgbaImage};

use crate::error::ImageError;
use crate::model::SquarifiedImage;

/// 将矩形画布填充为方形并缩放到收紧后的目标尺寸。
///
/// `desired_size` 为 0 属于契约违规，直接返回 `InvalidParameter`。
///
/// # 示例
/// ```rust
/// use image::RgbaImage;
/// use image::imageops::FilterType;
/// use squarify::squarify::squarify;
///
/// let input = RgbaImage::new(400, 200);
/// let output = squarify(&input, 1000, FilterType::Triangle)?;
/// assert_eq!(output.natural_max_size, 400);
/// assert_eq!(output.used_size, 400); // 期望值被收紧到自然上限
/// # Ok::<(), squarify::error::ImageError>(())
/// ```
pub fn squarify(
    raster: &RgbaImage,
    desired_size: u32,
    filter: FilterType,
) -> Result<SquarifiedImage, ImageError> {
    if desired_size == 0 {
        return Err(ImageError::InvalidParameter(
            "期望输出尺寸必须大于 0".to_string(),
        ));
    }

    let (width, height) = raster.dimensions();
    let natural_max_size = width.max(height);
    let used_size = desired_size.min(natural_max_size);

    // RgbaImage::new 初始化为全零，即全透明背景
    let mut canvas = RgbaImage::new(natural_max_size, natural_max_size);

    let offset_x = (natural_max_size - width) / 2;
    let offset_y = (natural_max_size - height) / 2;
    canvas
        .copy_from(raster, offset_x, offset_y)
        .map_err(|e| ImageError::InvalidParameter(format!("画布合成失败：{}", e)))?;

    let raster = if used_size == natural_max_size {
        canvas
    } else {
        resize_square(&canvas, used_size, filter)?
    };

    Ok(SquarifiedImage {
        raster,
        natural_max_size,
        used_size,
    })
}

/// 将方形画布缩放到目标边长。
///
/// 优先使用 `fast_image_resize`，失败时回退到 `image` 自带缩放。
fn resize_square(
    canvas: &RgbaImage,
    target_size: u32,
    filter: FilterType,
) -> Result<RgbaImage, ImageError> {
    match resize_with_fast_image_resize(canvas, target_size, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!("⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}", err);
            Ok(image::imageops::resize(canvas, target_size, target_size, filter))
        }
    }
}

fn resize_with_fast_image_resize(
    canvas: &RgbaImage,
    target_size: u32,
    filter: FilterType,
) -> Result<RgbaImage, ImageError> {
    let (src_width, src_height) = canvas.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        canvas.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| ImageError::Encode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_size, target_size, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| ImageError::Encode(format!("fast_image_resize 执行失败：{}", e)))?;

    RgbaImage::from_raw(target_size, target_size, dst_image.into_vec())
        .ok_or_else(|| ImageError::Encode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}

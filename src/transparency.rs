//! # 背景透明化模块
//!
//! ## 设计思路
//!
//! 把“背景色 → alpha 通道”的改写做成纯转换：输入画布原地改写 alpha，
//! 生效的目标色作为返回值交还调用方，核心不持有任何展示状态。
//!
//! ## 实现思路
//!
//! - 自动探测：取原始画布 (0,0) 像素的 RGB 作为目标色。这是刻意保留的
//!   简化启发式（假定背景延伸到左上角），不做泛化。
//! - 精确匹配：RGB 与目标色完全一致、或原 alpha 已为 0 的像素置全透明，
//!   其余像素一律置全不透明（二值 alpha，丢弃原有半透明）。
//! - 相似度淡出：alpha 取三个通道与目标色的最大绝对差。归一化到 [0,1]
//!   后的差值乘回 255 与 8 位域的 `abs_diff` 完全等价，因此全程整数运算，
//!   不存在浮点截断或 NaN。

use image::RgbaImage;

use crate::color::Rgb;
use crate::model::TransparencyMode;

/// 原地改写画布的 alpha 通道，返回实际生效的目标色。
///
/// `auto_detect` 为真时忽略 `target`，以 (0,0) 像素的 RGB 取而代之；
/// 返回值即探测结果，供宿主展示颜色与十六进制串。
/// 画布尺寸不变，RGB 通道原样保留，无失败路径。
pub fn apply_transparency(
    raster: &mut RgbaImage,
    target: Rgb,
    mode: TransparencyMode,
    auto_detect: bool,
) -> Rgb {
    let effective = if auto_detect {
        let corner = raster.get_pixel(0, 0);
        Rgb::new(corner[0], corner[1], corner[2])
    } else {
        target
    };

    match mode {
        TransparencyMode::ExactMatch => {
            for pixel in raster.pixels_mut() {
                let matches_target = pixel[0] == effective.r
                    && pixel[1] == effective.g
                    && pixel[2] == effective.b;
                pixel[3] = if matches_target || pixel[3] == 0 { 0 } else { 255 };
            }
        }
        TransparencyMode::SimilarityFalloff => {
            for pixel in raster.pixels_mut() {
                let distance = pixel[0]
                    .abs_diff(effective.r)
                    .max(pixel[1].abs_diff(effective.g))
                    .max(pixel[2].abs_diff(effective.b));
                pixel[3] = distance;
            }
        }
    }

    effective
}

//! # 请求与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入语义”和“流水线结果”解耦：
//! - `TransparencyOptions` 表示宿主提交的透明化配置
//! - `SquarifiedImage` 表示方形化阶段输出（含派生尺寸）
//! - `PipelineResult` 表示单次流水线调用的完整结果
//!
//! ## 实现思路
//!
//! 宿主可见的配置类型派生 serde，方便前端/配置文件直接往返；
//! 中间结果只携带宿主展示所需的派生数据，不暴露内部细节。

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// 未指定时的默认输出边长（像素）。
pub const DEFAULT_OUTPUT_SIZE: u32 = 500;

/// 透明化 alpha 策略。
///
/// 两种模式互斥且必须显式选择，不存在隐式回退。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransparencyMode {
    /// 仅精确命中目标色的像素置为全透明，其余像素一律全不透明。
    #[serde(rename = "exact")]
    ExactMatch,
    /// 按与目标色的最大通道差作为 alpha，相近颜色平滑淡出。
    #[serde(rename = "falloff")]
    SimilarityFalloff,
}

impl TransparencyMode {
    /// 从外部字符串解析模式。
    pub fn from_str(mode: &str) -> Result<Self, crate::error::ImageError> {
        match mode.trim().to_lowercase().as_str() {
            "exact" => Ok(Self::ExactMatch),
            "falloff" => Ok(Self::SimilarityFalloff),
            other => Err(crate::error::ImageError::InvalidParameter(format!(
                "未知透明化模式：{}（可选：exact / falloff）",
                other
            ))),
        }
    }

    /// 将模式输出为稳定字符串。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactMatch => "exact",
            Self::SimilarityFalloff => "falloff",
        }
    }
}

/// 透明化配置（宿主可见）。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransparencyOptions {
    /// 是否启用背景透明化。
    pub enabled: bool,
    /// 是否用左上角像素自动探测背景色（启用时忽略 `color`）。
    pub auto_detect: bool,
    /// alpha 策略。
    pub mode: TransparencyMode,
    /// 待移除的背景色。
    pub color: Rgb,
}

impl Default for TransparencyOptions {
    /// 默认值与交互层初始状态一致：不启用、不探测、精确匹配、白色背景。
    fn default() -> Self {
        Self {
            enabled: false,
            auto_detect: false,
            mode: TransparencyMode::ExactMatch,
            color: Rgb::new(255, 255, 255),
        }
    }
}

/// 方形化阶段输出：结果画布与两项派生尺寸。
#[derive(Debug)]
pub struct SquarifiedImage {
    /// 方形化并缩放后的画布。
    pub raster: RgbaImage,
    /// 输入的自然最大边长 `max(width, height)`。
    pub natural_max_size: u32,
    /// 实际采用的输出边长（期望值按自然上限收紧后的结果）。
    pub used_size: u32,
}

/// 单次流水线调用的完整结果。
///
/// 仅在全链路成功时产生；任何阶段失败都不会返回部分结果。
#[derive(Debug)]
pub struct PipelineResult {
    /// PNG 编码后的输出字节（RGBA，8 位通道，无损）。
    pub png_bytes: Vec<u8>,
    /// 输入图片宽度（像素），供宿主展示“输入分辨率”。
    pub input_width: u32,
    /// 输入图片高度（像素）。
    pub input_height: u32,
    /// 输入的自然最大边长。
    pub natural_max_size: u32,
    /// 实际采用的输出边长。
    pub used_size: u32,
    /// 自动探测生效时的背景色；未启用探测则为 `None`。
    pub detected_color: Option<Rgb>,
}

impl PipelineResult {
    /// 探测到的背景色的十六进制串，供宿主直接展示。
    pub fn detected_color_hex(&self) -> Option<String> {
        self.detected_color.map(Rgb::to_hex)
    }
}

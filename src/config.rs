//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ProcessConfig`，保证运行时行为可观测、可调整、可测试。
//! 其中缩放档位（quality / balanced / speed）作为高层语义，映射到底层重采样滤镜。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的平衡配置。
//! - `ResizeProfile` 负责档位字符串解析与反向输出。
//! - `apply_resize_profile` 将档位转换为具体滤镜。
//! - `infer_resize_profile` 用于从当前配置反推档位（给宿主展示状态）。

use image::imageops::FilterType;

use crate::error::ImageError;

/// 图片流水线配置。
///
/// 字段覆盖了解码资源上限与缩放滤镜两类策略。
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
    /// 方形画布缩放到目标尺寸时使用的滤镜。
    pub resize_filter: FilterType,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
            resize_filter: FilterType::Triangle,
        }
    }
}

/// 缩放质量档位（面向产品/用户语义）。
///
/// - `Quality`：尽量保真
/// - `Balanced`：质量与速度平衡
/// - `Speed`：优先处理速度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeProfile {
    Quality,
    Balanced,
    Speed,
}

impl ResizeProfile {
    /// 从外部字符串解析档位。
    ///
    /// # 示例
    /// ```rust
    /// use squarify::config::ResizeProfile;
    ///
    /// let p = ResizeProfile::from_str("balanced")?;
    /// assert_eq!(p.as_str(), "balanced");
    /// # Ok::<(), squarify::error::ImageError>(())
    /// ```
    pub fn from_str(profile: &str) -> Result<Self, ImageError> {
        match profile.trim().to_lowercase().as_str() {
            "quality" => Ok(Self::Quality),
            "balanced" => Ok(Self::Balanced),
            "speed" => Ok(Self::Speed),
            other => Err(ImageError::InvalidParameter(format!(
                "未知缩放档位：{}（可选：quality / balanced / speed）",
                other
            ))),
        }
    }

    /// 将档位输出为稳定字符串，供宿主展示与持久化。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quality => "quality",
            Self::Balanced => "balanced",
            Self::Speed => "speed",
        }
    }
}

impl ProcessConfig {
    /// 基于当前参数反推缩放档位。
    ///
    /// 用于“当前生效档位”查询场景。
    pub(crate) fn infer_resize_profile(&self) -> ResizeProfile {
        match self.resize_filter {
            FilterType::CatmullRom | FilterType::Lanczos3 => ResizeProfile::Quality,
            FilterType::Nearest => ResizeProfile::Speed,
            _ => ResizeProfile::Balanced,
        }
    }

    /// 应用指定缩放档位到实际参数。
    ///
    /// 保持“档位语义稳定”，便于宿主按档位切换而无需了解底层滤镜。
    pub(crate) fn apply_resize_profile(&mut self, profile: ResizeProfile) {
        match profile {
            ResizeProfile::Quality => {
                self.resize_filter = FilterType::CatmullRom;
            }
            ResizeProfile::Balanced => {
                self.resize_filter = FilterType::Triangle;
            }
            ResizeProfile::Speed => {
                self.resize_filter = FilterType::Nearest;
            }
        }
    }
}

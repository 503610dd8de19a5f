//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `ImageProcessor` 只负责流程编排与配置管理，不做任何像素计算。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 解码字节并统一转换 RGBA
//! 3. 可选执行背景透明化
//! 4. 方形化并缩放
//! 5. 编码 PNG 输出
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ProcessConfig>>` 支持运行时动态切档。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `decode/transparency/squarify/encode/total` 阶段耗时，便于性能诊断。
//! - 单次调用同步完成，调用之间无共享可变状态，顺序调用无需额外同步。

use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::config::{ProcessConfig, ResizeProfile};
use crate::error::ImageError;
use crate::model::{PipelineResult, TransparencyOptions};
use crate::squarify::squarify;
use crate::transparency::apply_transparency;

/// 图片流水线处理器。
///
/// 封装配置状态并编排各子模块实现完整的“字节进、字节出”流程。
pub struct ImageProcessor {
    config: Arc<RwLock<ProcessConfig>>,
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new(ProcessConfig::default())
    }
}

impl ImageProcessor {
    /// 根据初始配置创建处理器。
    ///
    /// # 示例
    /// ```rust
    /// use squarify::config::ProcessConfig;
    /// use squarify::processor::ImageProcessor;
    ///
    /// let processor = ImageProcessor::new(ProcessConfig::default());
    /// ```
    pub fn new(config: ProcessConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次请求链路使用一致参数。
    fn config_snapshot(&self) -> Result<ProcessConfig, ImageError> {
        self.config
            .read()
            .map(|cfg| cfg.clone())
            .map_err(|_| ImageError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    /// 设置缩放质量档位。
    pub fn set_resize_profile(&self, profile: ResizeProfile) -> Result<(), ImageError> {
        let mut config = self
            .config
            .write()
            .map_err(|_| ImageError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        config.apply_resize_profile(profile);

        log::info!(
            "⚙️ 已切换缩放档位：{:?}（filter={:?}）",
            profile,
            config.resize_filter
        );

        Ok(())
    }

    /// 获取当前生效档位。
    pub fn get_resize_profile(&self) -> Result<ResizeProfile, ImageError> {
        let config = self
            .config
            .read()
            .map_err(|_| ImageError::ResourceLimit("配置读取锁已中毒".to_string()))?;
        Ok(config.infer_resize_profile())
    }

    /// 处理主入口：解码、透明化、方形化、编码的完整链路。
    ///
    /// 任一阶段失败即整体失败，不产生部分结果。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use squarify::model::TransparencyOptions;
    /// use squarify::processor::ImageProcessor;
    ///
    /// let processor = ImageProcessor::default();
    /// let result = processor.process(&png_bytes, 500, &TransparencyOptions::default())?;
    /// println!("{}x{}", result.used_size, result.used_size);
    /// # Ok::<(), squarify::error::ImageError>(())
    /// ```
    pub fn process(
        &self,
        bytes: &[u8],
        desired_size: u32,
        transparency: &TransparencyOptions,
    ) -> Result<PipelineResult, ImageError> {
        if desired_size == 0 {
            return Err(ImageError::InvalidParameter(
                "期望输出尺寸必须大于 0".to_string(),
            ));
        }

        let config = self.config_snapshot()?;
        let total_start = Instant::now();

        let decode_start = Instant::now();
        let mut raster = self.decode_rgba(bytes, &config)?;
        let (input_width, input_height) = raster.dimensions();
        let decode_elapsed = decode_start.elapsed();

        let transparency_start = Instant::now();
        let detected_color = if transparency.enabled {
            let effective = apply_transparency(
                &mut raster,
                transparency.color,
                transparency.mode,
                transparency.auto_detect,
            );
            transparency.auto_detect.then_some(effective)
        } else {
            None
        };
        let transparency_elapsed = transparency_start.elapsed();

        let squarify_start = Instant::now();
        let squarified = squarify(&raster, desired_size, config.resize_filter)?;
        let squarify_elapsed = squarify_start.elapsed();

        let encode_start = Instant::now();
        let png_bytes = Self::encode_png(&squarified.raster)?;
        let encode_elapsed = encode_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图片处理完成 - {}x{} -> {}x{} decode={}ms transparency={}ms squarify={}ms encode={}ms total={}ms",
            input_width,
            input_height,
            squarified.used_size,
            squarified.used_size,
            decode_elapsed.as_millis(),
            transparency_elapsed.as_millis(),
            squarify_elapsed.as_millis(),
            encode_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(PipelineResult {
            png_bytes,
            input_width,
            input_height,
            natural_max_size: squarified.natural_max_size,
            used_size: squarified.used_size,
            detected_color,
        })
    }
}

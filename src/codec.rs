//! # 编解码模块
//!
//! ## 设计思路
//!
//! 将“字节 → RGBA 画布 → PNG 字节”的两端集中管理，并在关键节点增加资源上限控制。
//! 优先做尺寸检查，再进行完整解码，降低恶意输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素与内存上限快速拒绝
//! 3. 完整解码并统一转换 RGBA，校验字节长度一致性
//! 4. 输出端固定编码为 PNG（无损，保留 alpha）

use std::io::Cursor;

use image::{ImageFormat, ImageReader, RgbaImage};

use crate::config::ProcessConfig;
use crate::error::ImageError;
use crate::processor::ImageProcessor;

impl ImageProcessor {
    /// 将原始字节解码为统一的 RGBA 画布。
    pub(crate) fn decode_rgba(
        &self,
        bytes: &[u8],
        config: &ProcessConfig,
    ) -> Result<RgbaImage, ImageError> {
        let _format: ImageFormat = image::guess_format(bytes)
            .map_err(|e| ImageError::Decode(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(bytes)?;
        self.validate_pixel_limits(config, header_width, header_height)?;
        self.validate_decoded_memory_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(bytes)
            .map_err(|e| ImageError::Decode(format!("图片解码失败：{}", e)))?;

        let raw_width = decoded.width();
        let raw_height = decoded.height();
        self.validate_pixel_limits(config, raw_width, raw_height)?;
        self.validate_decoded_memory_limits(config, raw_width, raw_height)?;

        // 后续阶段假定四通道，这里无条件转换
        let rgba = decoded.to_rgba8();

        let expected_len = (raw_width as usize)
            .checked_mul(raw_height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ImageError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if rgba.as_raw().len() != expected_len {
            return Err(ImageError::Decode("解码后像素数据长度异常".to_string()));
        }

        log::info!(
            "✅ 图片解码成功 - 尺寸: {}x{} 输入字节: {}KB",
            raw_width,
            raw_height,
            bytes.len() / 1024
        );

        Ok(rgba)
    }

    /// 将 RGBA 画布编码为 PNG 字节。
    pub(crate) fn encode_png(raster: &RgbaImage) -> Result<Vec<u8>, ImageError> {
        let mut bytes = Vec::new();
        raster
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| ImageError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(bytes)
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ImageError> {
        let cursor = Cursor::new(bytes);
        let reader = ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ImageError::Decode(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ImageError::Decode(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        &self,
        config: &ProcessConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ImageError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ImageError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ImageError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        &self,
        config: &ProcessConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ImageError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ImageError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(ImageError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}

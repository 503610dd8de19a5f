//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图片流水线中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! ## 实现思路
//!
//! - `Decode` / `Encode`：解码或编码阶段失败，单次调用即终止。
//! - `InvalidParameter`：调用方参数违反契约（输出尺寸为 0、颜色串格式错误等）。
//! - `ResourceLimit`：像素/内存上限拦截，属于主动拒绝而非意外失败。

/// 图片流水线统一错误类型。
///
/// 所有错误对单次流水线调用都是终止性的：不会产生部分输出。
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// 输入字节无法解码为图片。
    #[error("解码错误：{0}")]
    Decode(String),

    /// 输出字节编码失败（罕见，通常意味着资源或格式缺陷）。
    #[error("编码错误：{0}")]
    Encode(String),

    /// 调用方参数违反契约。
    #[error("参数错误：{0}")]
    InvalidParameter(String),

    /// 超出像素数或内存估算上限。
    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl From<ImageError> for String {
    /// 兼容部分仍使用字符串错误的宿主调用点。
    fn from(error: ImageError) -> Self {
        error.to_string()
    }
}

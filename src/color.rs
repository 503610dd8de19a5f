//! # 颜色模型模块
//!
//! ## 设计思路
//!
//! 背景色是“要移除的色相”，不携带 alpha 分量，与像素数据解耦。
//! 十六进制字符串是宿主层（取色器、配置文件）与核心之间的稳定交换格式。
//!
//! ## 实现思路
//!
//! - `from_hex` 接受 `#rrggbb`、`rrggbb` 与 `#rgb` 三种常见写法。
//! - `to_hex` 固定输出小写 `#rrggbb`，大写展示由宿主层自行转换。
//! - 解析失败统一映射为 `ImageError::InvalidParameter`。

use serde::{Deserialize, Serialize};

use crate::error::ImageError;

/// RGB 三元组（每通道 8 位），表示待移除的背景色相。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从十六进制字符串解析颜色。
    ///
    /// # 示例
    /// ```rust
    /// use squarify::color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#0a141e")?, Rgb::new(10, 20, 30));
    /// assert_eq!(Rgb::from_hex("fff")?, Rgb::new(255, 255, 255));
    /// # Ok::<(), squarify::error::ImageError>(())
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, ImageError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let invalid = || {
            ImageError::InvalidParameter(format!(
                "无法解析颜色：{}（支持 #rrggbb / rrggbb / #rgb）",
                text
            ))
        };

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #rgb 简写：每位数字按 0xf -> 0xff 方式扩展
                let expand = |nibble: &str| -> Result<u8, ImageError> {
                    let value = u8::from_str_radix(nibble, 16).map_err(|_| invalid())?;
                    Ok(value * 17)
                };
                Ok(Self::new(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// 输出稳定的小写十六进制串，供宿主展示与持久化。
    ///
    /// # 示例
    /// ```rust
    /// use squarify::color::Rgb;
    ///
    /// assert_eq!(Rgb::new(10, 20, 30).to_hex(), "#0a141e");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

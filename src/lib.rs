//! # Squarify — 图片方形化流水线（库入口）
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │               宿主层（Web UI / CLI / 服务端）             │
//! │                                                          │
//! │   抓取字节 ── 交互控件 ── 下载触发 ── 通知展示            │
//! │        │  （均不属于本库职责）                            │
//! └────────┼─────────────────────────────────────────────────┘
//!          ↕ 字节进（任意常见格式）/ 字节出（PNG）
//! ┌────────┼─────────────────────────────────────────────────┐
//! │        ↕              核心 (squarify)                     │
//! │                                                          │
//! │  ┌─ processor ── ImageProcessor（流程编排 + 阶段耗时）     │
//! │  │    ├─ codec          解码·资源上限·PNG 编码             │
//! │  │    ├─ transparency   背景色 → alpha（精确 / 淡出）      │
//! │  │    └─ squarify       方形画布·居中贴图·收紧缩放         │
//! │  │                                                       │
//! │  ├─ config ───── ProcessConfig + ResizeProfile            │
//! │  ├─ model ────── 透明化配置 / 流水线结果                   │
//! │  ├─ color ────── Rgb + 十六进制往返                        │
//! │  └─ error ────── ImageError（统一错误类型）                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `ImageError`，所有公开操作的失败分支 |
//! | [`color`] | 背景色 `Rgb` 值类型与十六进制字符串往返 |
//! | [`config`] | 资源上限与缩放滤镜配置、质量档位映射 |
//! | [`model`] | 透明化配置、方形化输出、流水线结果模型 |
//! | [`transparency`] | 背景色转透明：精确匹配与相似度淡出两种 alpha 策略 |
//! | [`squarify`] | 方形画布铺设、覆盖式居中贴图、收紧后缩放 |
//! | [`processor`] | `ImageProcessor`：解码 → 透明化 → 方形化 → 编码的编排 |
//!
//! 单次 [`processor::ImageProcessor::process`] 调用同步完成；并发提交的
//! 串行化（例如处理中禁用触发控件）由宿主层负责。

pub mod color;
pub mod config;
pub mod error;
pub mod model;
pub mod processor;
pub mod squarify;
pub mod transparency;

mod codec;

pub use color::Rgb;
pub use config::{ProcessConfig, ResizeProfile};
pub use error::ImageError;
pub use model::{
    DEFAULT_OUTPUT_SIZE, PipelineResult, SquarifiedImage, TransparencyMode, TransparencyOptions,
};
pub use processor::ImageProcessor;

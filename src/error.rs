//! # 错误类型模块
//!
//! 螺旋编解码核心本身是全函数，不会失败；这里的错误只来自比特串解析
//! 和图像读写这两个边界。应用层 (`handler`) 再用 `anyhow` 为它们附加上下文。

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// 比特串中出现了 '0' 和 '1' 以外的字符。
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBit { found: char, position: usize },

    /// 缩放系数必须至少为 1。
    #[error("scale factor must be at least 1, got {0}")]
    InvalidScale(u32),

    /// 图像尺寸小于一个缩放块，无法采样出任何单元格。
    #[error("image of {width}x{height} pixels is smaller than one {scale}x{scale} block")]
    ImageTooSmall { width: u32, height: u32, scale: u32 },

    /// 放大后的图像尺寸超出 `u32` 范围。
    #[error("grid of {cells} cells cannot be upscaled by {scale}")]
    ImageTooLarge { cells: usize, scale: u32 },

    /// 动画至少需要一帧。
    #[error("an animation needs at least one frame")]
    NoFrames,

    /// `image` crate 报告的编解码错误。
    #[error("image error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

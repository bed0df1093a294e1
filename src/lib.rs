//! # pyxpiral 库
//!
//! 本库包含螺旋位图编解码器的核心逻辑：比特打包 (`bits`)、螺旋游标 (`spiral`)、
//! 网格编解码 (`codec`) 与旋转动画序列 (`rotation`)，以及图像读写和命令行等外围模块。

// 声明库包含的所有模块。

pub mod bits;
pub mod cli;
pub mod codec;
pub mod color;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod imaging;
pub mod rotation;
pub mod spiral;

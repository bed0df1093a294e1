//! # 命令处理逻辑模块
//!
//! 包含处理编码与解码两种模式的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用螺旋编解码核心以及向用户报告结果。

use crate::bits;
use crate::cli::{DecodeArgs, EncodeArgs};
use crate::codec;
use crate::color::Color;
use crate::constants::{BORDER, GIF_SUFFIX};
use crate::imaging;
use crate::rotation;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 动画文件路径：在静态图像路径之后追加 `.gif`。
pub fn animation_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(GIF_SUFFIX);
    PathBuf::from(name)
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 处理编码模式的执行逻辑。
///
/// 将消息编码为静态位图写入 `args.output`，再生成旋转动画写入 `args.output` + `.gif`。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `force`。
/// * 缩放系数无效，或无法写入图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let gif_path = animation_path(&args.output);
    ensure_writable(&args.output, args.force)?;
    ensure_writable(&gif_path, args.force)?;

    let fg = Color::from_packed(args.bits_color);
    let bg = Color::from_packed(args.bg_color);
    let message = args.message.as_bytes();

    let bit_sequence = bits::to_bits(message);
    let grid = codec::encode(&bit_sequence, fg, bg, args.step_size, BORDER);
    info!(
        "encoded {} bytes as {} bits on a {}x{} grid",
        message.len(),
        bit_sequence.len(),
        grid.width(),
        grid.height()
    );

    imaging::save_grid(&grid, &args.output, args.scale).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    let frames = rotation::encode_fractal(message, fg, bg, args.step_size, args.rotation_step);
    let frame_count = imaging::save_animation(
        frames,
        &gif_path,
        args.scale,
        args.frame_duration,
        args.loops,
    )
    .with_context(|| {
        format!(
            "Unable to write to target animation file: {}",
            gif_path.to_string_lossy().red().bold()
        )
    })?;
    info!("wrote {} animation frames", frame_count);

    println!(
        "Generated {} and {}",
        args.output.to_string_lossy().green().bold(),
        gif_path.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理解码模式的执行逻辑。
///
/// 读取图像、按 `scale` 缩小为每比特一个单元格的网格，沿螺旋读回消息并打印到标准输出。
/// 无法解码的字节以 U+FFFD 替换。
///
/// # Errors
///
/// 如果无法读取图像文件，或图像小于一个缩放块，将返回错误。
pub fn handle_decode(args: DecodeArgs) -> Result<String> {
    let grid = imaging::load_grid(&args.image, args.scale).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!("sampled a {}x{} grid", grid.width(), grid.height());

    let bg = Color::from_packed(args.bg_color);
    let message = codec::decode_message(&grid, bg, args.step_size);

    println!(
        "Decoded {}: {}",
        args.image.to_string_lossy().green().bold(),
        message
    );

    Ok(message)
}

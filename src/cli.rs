//! # 命令行接口模块
//!
//! 使用 `clap` 定义程序的命令行参数。`--encode` 与 `--decode` 互斥且必选其一，
//! 其余参数是两种模式共用的编码/解码选项。

use crate::constants::{
    DEFAULT_BG_COLOR, DEFAULT_BITS_COLOR, DEFAULT_FRAME_DURATION_MS, DEFAULT_LOOPS,
    DEFAULT_OUTPUT_FILENAME, DEFAULT_ROTATION_STEP, DEFAULT_SCALE, DEFAULT_STEP_SIZE,
};
use clap::{Args, Parser};
use std::path::PathBuf;

/// 伪 DataMatrix 编解码器：沿正方形螺旋把任意文本画成位图和 GIF 动画，反之亦然。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "伪 DataMatrix 编解码器：沿正方形螺旋把任意文本画成位图和 GIF 动画，或从位图中读回文本。"
)]
pub struct Cli {
    #[command(flatten)]
    pub mode: Mode,

    /// 每个比特在图像中占据的正方形边长 (像素)。
    #[arg(long, default_value_t = DEFAULT_SCALE, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: u32,

    /// 比特值 0 的颜色 (打包整数，支持十进制或 0x 十六进制)。
    #[arg(long, default_value_t = DEFAULT_BG_COLOR, value_parser = parse_packed_color)]
    pub bg_color: u32,

    /// 比特值 1 的颜色 (打包整数，支持十进制或 0x 十六进制)。
    #[arg(long, default_value_t = DEFAULT_BITS_COLOR, value_parser = parse_packed_color)]
    pub bits_color: u32,

    /// 螺旋上相邻比特之间的距离。
    #[arg(long, default_value_t = DEFAULT_STEP_SIZE, value_parser = parse_positive)]
    pub step_size: usize,

    /// GIF 每帧旋转的比特数。
    #[arg(long, default_value_t = DEFAULT_ROTATION_STEP)]
    pub rotation_step: usize,

    /// GIF 每帧持续时间 (毫秒)。
    #[arg(long, default_value_t = DEFAULT_FRAME_DURATION_MS)]
    pub frame_duration: u32,

    /// GIF 循环次数 (0 表示无限循环)。
    #[arg(long, default_value_t = DEFAULT_LOOPS)]
    pub loops: u16,

    /// 输出文件名，GIF 动画会在其后追加 `.gif`。
    #[arg(long, default_value = DEFAULT_OUTPUT_FILENAME)]
    pub output_filename: PathBuf,

    /// 如果输出文件已存在，则强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 工作模式：编码一条消息，或解码一张图像。
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct Mode {
    /// 要编码的消息。
    #[arg(long, value_name = "MESSAGE")]
    pub encode: Option<String>,

    /// 要解码的图像文件路径。
    #[arg(long, value_name = "INPUT_FILE")]
    pub decode: Option<PathBuf>,
}

/// 'encode' 模式所需的参数。
#[derive(Debug, Clone)]
pub struct EncodeArgs {
    pub message: String,
    pub output: PathBuf,
    pub scale: u32,
    pub bits_color: u32,
    pub bg_color: u32,
    pub step_size: usize,
    pub rotation_step: usize,
    pub frame_duration: u32,
    pub loops: u16,
    pub force: bool,
}

/// 'decode' 模式所需的参数。
#[derive(Debug, Clone)]
pub struct DecodeArgs {
    pub image: PathBuf,
    pub scale: u32,
    pub bg_color: u32,
    pub step_size: usize,
}

/// 解析后的命令。
#[derive(Debug)]
pub enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
}

impl Cli {
    /// 按互斥的模式参数拆分为具体命令。
    pub fn into_command(self) -> Command {
        match (self.mode.encode, self.mode.decode) {
            (_, Some(image)) => Command::Decode(DecodeArgs {
                image,
                scale: self.scale,
                bg_color: self.bg_color,
                step_size: self.step_size,
            }),
            (message, None) => Command::Encode(EncodeArgs {
                message: message.unwrap_or_default(),
                output: self.output_filename,
                scale: self.scale,
                bits_color: self.bits_color,
                bg_color: self.bg_color,
                step_size: self.step_size,
                rotation_step: self.rotation_step,
                frame_duration: self.frame_duration,
                loops: self.loops,
                force: self.force,
            }),
        }
    }
}

/// 解析打包颜色值，接受十进制 (`255`) 或十六进制 (`0xFF`)。
pub fn parse_packed_color(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid color value '{s}': {e}"))
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("value must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid number '{s}': {e}")),
    }
}

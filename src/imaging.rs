//! # 图像读写模块
//!
//! 在 [`Grid`] 与光栅图像之间转换：写出时按像素复制放大，读取时对每个
//! `downscale x downscale` 块取左上角像素缩小。动画使用 GIF 编码。

use crate::color::Color;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::spiral::Position;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, ImageFormat, ImageReader, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn image_error(path: &Path) -> impl FnOnce(image::ImageError) -> Error + '_ {
    move |source| Error::Image {
        path: path.to_path_buf(),
        source,
    }
}

/// 将网格按 `upscale` 倍像素复制为 RGB 图像。
pub fn grid_to_image(grid: &Grid, upscale: u32) -> Result<RgbImage> {
    if upscale == 0 {
        return Err(Error::InvalidScale(upscale));
    }

    let too_large = || Error::ImageTooLarge {
        cells: grid.cells().len(),
        scale: upscale,
    };
    let width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(upscale))
        .ok_or_else(too_large)?;
    let height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(upscale))
        .ok_or_else(too_large)?;

    Ok(RgbImage::from_fn(width, height, |x, y| {
        let position = Position::new((y / upscale) as isize, (x / upscale) as isize);
        grid.get(position).unwrap_or_default().into()
    }))
}

/// 将图像缩小为网格：每个 `downscale x downscale` 块取左上角像素。
///
/// 不足一个完整块的右侧和底部像素被丢弃。
pub fn image_to_grid(image: &DynamicImage, downscale: u32) -> Result<Grid> {
    if downscale == 0 {
        return Err(Error::InvalidScale(downscale));
    }

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (cols, rows) = (width / downscale, height / downscale);
    if cols == 0 || rows == 0 {
        return Err(Error::ImageTooSmall {
            width,
            height,
            scale: downscale,
        });
    }

    Ok(Grid::from_fn(cols as usize, rows as usize, |row, col| {
        Color::from(*rgb.get_pixel(col as u32 * downscale, row as u32 * downscale))
    }))
}

/// 读取图像文件并缩小为网格。格式按文件内容识别，与扩展名无关。
pub fn load_grid(path: &Path, downscale: u32) -> Result<Grid> {
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(image_error(path))?;
    image_to_grid(&image, downscale)
}

/// 按扩展名选择静态图像格式。只接受本构建能写出的无损格式，其余一律使用 BMP。
pub fn still_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(
            format @ (ImageFormat::Bmp
            | ImageFormat::Png
            | ImageFormat::Tiff
            | ImageFormat::WebP
            | ImageFormat::Qoi),
        ) if format.writing_enabled() => format,
        _ => ImageFormat::Bmp,
    }
}

/// 将网格放大后写入图像文件。格式见 [`still_format`]。
pub fn save_grid(grid: &Grid, path: &Path, upscale: u32) -> Result<()> {
    let format = still_format(path);
    grid_to_image(grid, upscale)?
        .save_with_format(path, format)
        .map_err(image_error(path))
}

/// 将一组网格写为 GIF 动画。`loops` 为 0 时无限循环。
pub fn save_animation<I>(
    frames: I,
    path: &Path,
    upscale: u32,
    frame_duration_ms: u32,
    loops: u16,
) -> Result<usize>
where
    I: IntoIterator<Item = Grid>,
{
    let delay = Delay::from_numer_denom_ms(frame_duration_ms, 1);
    let frames = frames
        .into_iter()
        .map(|grid| -> Result<Frame> {
            let rgba = DynamicImage::ImageRgb8(grid_to_image(&grid, upscale)?).to_rgba8();
            Ok(Frame::from_parts(rgba, 0, 0, delay))
        })
        .collect::<Result<Vec<Frame>>>()?;

    if frames.is_empty() {
        return Err(Error::NoFrames);
    }
    let count = frames.len();

    let mut encoder = GifEncoder::new(BufWriter::new(File::create(path)?));
    let repeat = match loops {
        0 => Repeat::Infinite,
        n => Repeat::Finite(n),
    };
    encoder.set_repeat(repeat).map_err(image_error(path))?;
    encoder.encode_frames(frames).map_err(image_error(path))?;

    Ok(count)
}

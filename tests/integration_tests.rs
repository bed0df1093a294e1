use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use pyxpiral::{
    cli::{DecodeArgs, EncodeArgs},
    handler::{animation_path, handle_decode, handle_encode},
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 一个辅助函数，用默认参数构造编码命令
fn encode_args(message: &str, output: &Path) -> EncodeArgs {
    EncodeArgs {
        message: message.to_string(),
        output: output.to_path_buf(),
        scale: 10,
        bits_color: 0xFF,
        bg_color: 0x00,
        step_size: 1,
        rotation_step: 1,
        frame_duration: 100,
        loops: 0,
        force: false,
    }
}

fn decode_args(image: PathBuf, encode: &EncodeArgs) -> DecodeArgs {
    DecodeArgs {
        image,
        scale: encode.scale,
        bg_color: encode.bg_color,
        step_size: encode.step_size,
    }
}

/// 验证从编码到解码的完整流程
#[test]
fn test_handle_encode_and_decode_integration() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("message.bmp");
    let message = "Never go full electro (AKA Keep calm and read bits cycling in squared spirals).";

    let args = encode_args(message, &output);
    handle_encode(args.clone())?;

    assert!(output.exists(), "Static image should be created.");
    let gif_path = animation_path(&output);
    assert_eq!(gif_path, dir.path().join("message.bmp.gif"));
    assert!(gif_path.exists(), "Animation should be created.");

    let decoded = handle_decode(decode_args(output, &args))?;
    assert_eq!(decoded, message, "Decoded text must match the original.");

    Ok(())
}

/// 验证非默认缩放、颜色和步长同样可以往返
#[test]
fn test_custom_options_round_trip() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("custom.png");
    let message = "螺旋 spiral ✓";

    let args = EncodeArgs {
        scale: 3,
        bits_color: 0x00FF_8000,
        bg_color: 0x0000_40FF,
        step_size: 2,
        rotation_step: 4,
        ..encode_args(message, &output)
    };
    handle_encode(args.clone())?;

    let decoded = handle_decode(decode_args(output, &args))?;
    assert_eq!(decoded, message);

    Ok(())
}

/// 验证无法无损写出的扩展名 (如 .jpg) 退回 BMP，且仍可解码
#[test]
fn test_lossy_extension_falls_back_to_bmp() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("x.jpg");
    let message = "stored losslessly";

    let args = encode_args(message, &output);
    handle_encode(args.clone())?;

    let header = fs::read(&output)?;
    assert!(header.starts_with(b"BM"), "Still image should be written as BMP.");
    assert!(animation_path(&output).exists());

    assert_eq!(handle_decode(decode_args(output, &args))?, message);

    Ok(())
}

/// 验证 GIF 动画的帧数等于旋转周期
#[test]
fn test_animation_frame_count() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("a.bmp");

    // "A" 编码为 8 个比特，每帧旋转 2 位 -> 8 / gcd(8, 2) = 4 帧
    let args = EncodeArgs {
        rotation_step: 2,
        loops: 3,
        ..encode_args("A", &output)
    };
    handle_encode(args)?;

    let decoder = GifDecoder::new(BufReader::new(File::open(animation_path(&output))?))?;
    let frames = decoder.into_frames().collect_frames()?;
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| f.buffer().dimensions() == (40, 40)));

    Ok(())
}

/// 验证空消息同样可以编码并解码为空字符串
#[test]
fn test_empty_message() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("empty.bmp");

    let args = encode_args("", &output);
    handle_encode(args.clone())?;

    let image = image::open(&output)?;
    assert_eq!((image.width(), image.height()), (20, 20));

    assert_eq!(handle_decode(decode_args(output, &args))?, "");

    Ok(())
}

/// 验证覆盖保护机制以及 `force` 标志是否按预期工作
#[test]
fn test_overwrite_protection_and_force_flag() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let output = dir.path().join("dest.bmp");

    fs::write(&output, "this is a dummy file to be overwritten")?;

    let result = handle_encode(encode_args("some text", &output));
    assert!(result.is_err(), "Execution should fail without force when file exists.");
    if let Err(e) = result {
        assert!(e.to_string().contains("Output file already exists"));
    }

    let result = handle_encode(EncodeArgs {
        force: true,
        ..encode_args("some text", &output)
    });
    assert!(result.is_ok(), "Execution should succeed with force when file exists.");

    let content = fs::read(&output)?;
    assert_ne!(content, b"this is a dummy file to be overwritten");

    Ok(())
}

/// 验证解码不存在或过小的图像时返回错误
#[test]
fn test_handle_decode_errors() -> anyhow::Result<()> {
    let dir = tempdir()?;

    let missing = DecodeArgs {
        image: dir.path().join("missing.bmp"),
        scale: 10,
        bg_color: 0,
        step_size: 1,
    };
    let result = handle_decode(missing);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("Unable to read image file"));
    }

    let tiny = dir.path().join("tiny.png");
    image::RgbImage::new(4, 4).save(&tiny)?;
    let result = handle_decode(DecodeArgs {
        image: tiny,
        scale: 10,
        bg_color: 0,
        step_size: 1,
    });
    assert!(result.is_err());

    Ok(())
}

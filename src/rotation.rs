//! # 旋转序列模块
//!
//! 为 GIF 动画生成同一消息的一组帧：每帧绘制当前比特串，然后把倒数第二位
//! 往前的 `rotation_step` 个比特移到最前面，并在末尾重新补上终止位 `1`。
//! 终止位不参与旋转，实际旋转的是它之前的有效比特。

use crate::bits::{self, BitSequence};
use crate::codec;
use crate::color::Color;
use crate::constants::BORDER;
use crate::grid::Grid;

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// 动画帧数：`bit_len / gcd(bit_len, rotation_step)`。
///
/// `rotation_step` 为 0 时只有一帧。
pub fn frame_count(bit_len: usize, rotation_step: usize) -> usize {
    match gcd(bit_len, rotation_step) {
        0 => 0,
        divisor => bit_len / divisor,
    }
}

/// 对比特串做一次旋转：`bits[start..n-1] + bits[..start] + "1"`，
/// 其中 `start = max(n - rotation_step - 1, 0)`。
pub fn rotate(bits: &BitSequence, rotation_step: usize) -> BitSequence {
    let slice = bits.as_slice();
    let Some(end) = slice.len().checked_sub(1) else {
        return BitSequence::from(vec![true]);
    };
    let start = end.saturating_sub(rotation_step);

    slice[start..end]
        .iter()
        .chain(&slice[..start])
        .copied()
        .chain(std::iter::once(true))
        .collect()
}

/// 惰性产生动画帧的迭代器。每帧依赖上一帧旋转后的状态，不可重放；
/// 需要重新生成时请再次调用 [`encode_fractal`]。
#[derive(Debug, Clone)]
pub struct Frames {
    bits: BitSequence,
    remaining: usize,
    fg: Color,
    bg: Color,
    step: usize,
    rotation_step: usize,
}

impl Iterator for Frames {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let grid = codec::encode(&self.bits, self.fg, self.bg, self.step, BORDER);
        self.bits = rotate(&self.bits, self.rotation_step);
        Some(grid)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Frames {}

/// 为消息生成旋转动画的帧序列。
pub fn encode_fractal(
    message: &[u8],
    fg: Color,
    bg: Color,
    step: usize,
    rotation_step: usize,
) -> Frames {
    let bits = bits::to_bits(message);
    let remaining = frame_count(bits.len(), rotation_step);
    log::debug!(
        "{} frames for {} bits rotated by {}",
        remaining,
        bits.len(),
        rotation_step
    );
    Frames {
        bits,
        remaining,
        fg,
        bg,
        step,
        rotation_step,
    }
}

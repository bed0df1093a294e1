//! # 网格编解码模块
//!
//! 沿螺旋把比特序列绘制到网格上 (编码)，或从网格上读回比特 (解码)。
//!
//! 编码网格的边长为 `side + border`：螺旋从 `(offset, offset + border)` 出发，
//! 因此网格左侧留出一列、底部留出一行背景色。解码端只知道网格行数，
//! 从 `(o - border, o)` 出发，其中 `o = center_offset(rows - border) + border`，
//! 正好落回编码时的起点。

use crate::bits::{self, BitSequence};
use crate::color::Color;
use crate::constants::BORDER;
use crate::grid::Grid;
use crate::spiral::{Position, SpiralCursor, center_offset, grid_side};
use log::debug;

fn encode_origin(side: usize, border: usize) -> Position {
    let offset = center_offset(side);
    Position::new(offset, offset + border as isize)
}

fn decode_origin(rows: usize, border: usize) -> Position {
    let offset = center_offset(rows.saturating_sub(border)) + border as isize;
    Position::new(offset - border as isize, offset)
}

/// 以单位步长、原点为起点时螺旋覆盖的行列范围 (含端点)。
#[derive(Debug, Clone, Copy, Default)]
struct SpiralExtent {
    min_row: isize,
    max_row: isize,
    min_col: isize,
    max_col: isize,
}

impl SpiralExtent {
    fn of(bit_count: usize) -> Self {
        SpiralCursor::new(bit_count, Position::new(0, 0), 1).fold(Self::default(), |e, p| Self {
            min_row: e.min_row.min(p.row),
            max_row: e.max_row.max(p.row),
            min_col: e.min_col.min(p.col),
            max_col: e.max_col.max(p.col),
        })
    }

    /// 按 `step` 缩放后，从编码起点出发是否完全落在边长 `side + border` 的网格内。
    fn fits(&self, side: usize, step: usize, border: usize) -> bool {
        let step = step as isize;
        let last = (side + border) as isize - 1;
        let origin = encode_origin(side, border);
        origin.row + self.min_row * step >= 0
            && origin.row + self.max_row * step <= last
            && origin.col + self.min_col * step >= 0
            && origin.col + self.max_col * step <= last
    }
}

/// 编码 `bit_count` 个比特所需的网格边长 (不含边框)。
///
/// 起点是 `grid_side(bit_count * step)`。`step` 为 1 时螺旋总能放下；
/// 更大的步长会让螺旋超出该边长，此时增大边长直到螺旋的外包矩形放得下。
/// 外包矩形只需遍历一次螺旋即可得到。
pub fn encoded_side(bit_count: usize, step: usize, border: usize) -> usize {
    let mut side = grid_side(bit_count.saturating_mul(step));
    if bit_count == 0 {
        return side;
    }
    let extent = SpiralExtent::of(bit_count);
    while !extent.fits(side, step, border) {
        side += 1;
    }
    side
}

/// 将比特序列沿螺旋绘制到一个新的正方形网格上。
///
/// 比特 1 绘制为 `fg`，比特 0 绘制为 `bg`，其余单元格为 `bg`。
pub fn encode(bits: &BitSequence, fg: Color, bg: Color, step: usize, border: usize) -> Grid {
    let side = encoded_side(bits.len(), step, border);
    let mut grid = Grid::square(side + border, bg);
    let origin = encode_origin(side, border);

    debug!(
        "painting {} bits on a {}x{} grid from ({}, {}) with step {}",
        bits.len(),
        side + border,
        side + border,
        origin.row,
        origin.col,
        step
    );

    SpiralCursor::new(bits.len(), origin, step)
        .zip(bits.iter())
        .for_each(|(position, bit)| {
            let painted = grid.set(position, if bit { fg } else { bg });
            debug_assert!(painted, "spiral left the grid at {position:?}");
        });

    grid
}

/// 从网格上沿螺旋读回比特序列，并去掉尾部的 `0` 和终止位。
///
/// 与 `bg` 完全相同的单元格读作 0，其他颜色读作 1，网格之外的坐标读作 0。
/// 网格必须已缩小为每个比特一个单元格。
pub fn decode(grid: &Grid, bg: Color, step: usize, border: usize) -> BitSequence {
    let rows = grid.height();
    let bit_count = rows * rows;
    let origin = decode_origin(rows, border);

    debug!(
        "reading {} cells from a {}x{} grid starting at ({}, {})",
        bit_count,
        grid.width(),
        rows,
        origin.row,
        origin.col
    );

    let mut bits: BitSequence = SpiralCursor::new(bit_count, origin, step)
        .map(|position| grid.get(position).is_some_and(|color| color != bg))
        .collect();
    bits.trim_trailing_zeros();
    bits.pop();
    bits
}

/// 把消息编码为网格，使用默认边框。
pub fn encode_message(message: &[u8], fg: Color, bg: Color, step: usize) -> Grid {
    encode(&bits::to_bits(message), fg, bg, step, BORDER)
}

/// 从网格解码出消息文本，使用默认边框。无效的 UTF-8 序列以 U+FFFD 替换。
pub fn decode_message(grid: &Grid, bg: Color, step: usize) -> String {
    bits::from_bits_lossy(&decode(grid, bg, step, BORDER))
}

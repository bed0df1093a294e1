//! # 螺旋游标模块
//!
//! 按向外扩展的正方形螺旋顺序生成网格坐标：先 `+行`，再 `+列`，
//! 然后 `-行`、`-列`，每转向两次，单方向的行程加一 (1, 1, 2, 2, 3, 3, ...)。
//!
//! 游标是纯函数式的：相同的 `(count, origin, step)` 总是产生相同的坐标序列，
//! 解码端因此可以独立地重新推导出编码时的访问顺序。

/// 网格坐标。可以为负，也可以超出网格；由 [`crate::grid::Grid`] 判断是否落在网格内。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// 行、列方向上的单位移动，按转向顺序排列。
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// 正方形螺旋坐标迭代器。恰好产生 `count` 个坐标。
///
/// 需要重放时，用相同参数构造一个新实例即可。
#[derive(Debug, Clone)]
pub struct SpiralCursor {
    position: Position,
    remaining: usize,
    step: isize,
    /// 行方向和列方向当前的行程长度。
    runs: [usize; 2],
    direction: usize,
    /// 在当前行程中已走的步数 (取模后为 0 表示需要转向)。
    progress: usize,
}

impl SpiralCursor {
    pub fn new(count: usize, origin: Position, step: usize) -> Self {
        Self {
            position: origin,
            remaining: count,
            step: step as isize,
            runs: [1, 1],
            direction: 0,
            progress: 0,
        }
    }
}

impl Iterator for SpiralCursor {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.position;
        let (dr, dc) = DIRECTIONS[self.direction];
        self.position = Position::new(
            current.row + dr * self.step,
            current.col + dc * self.step,
        );

        if self.progress == 0 {
            self.runs[self.direction % 2] += 1;
            self.direction = (self.direction + 1) % DIRECTIONS.len();
        }
        self.progress = (self.progress + 1) % self.runs[self.direction % 2];

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SpiralCursor {}

/// 能容纳 `bit_count` 个单元格的最小正方形边长，即满足 `s * s >= bit_count` 的最小 `s`。
pub fn grid_side(bit_count: usize) -> usize {
    let mut side = (bit_count as f64).sqrt() as usize;
    while side.saturating_mul(side) > bit_count {
        side -= 1;
    }
    while side.saturating_mul(side) < bit_count {
        side += 1;
    }
    side
}

/// 边长为 `side` 的正方形中螺旋起点的偏移量，`(side - 1) / 2` (截断除法)。
pub fn center_offset(side: usize) -> isize {
    (side as isize - 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_moves_follow_square_spiral() {
        let visited: Vec<(isize, isize)> = SpiralCursor::new(10, Position::new(0, 0), 1)
            .map(|p| (p.row, p.col))
            .collect();
        assert_eq!(
            visited,
            vec![
                (0, 0),
                (1, 0),
                (1, 1),
                (0, 1),
                (-1, 1),
                (-1, 0),
                (-1, -1),
                (0, -1),
                (1, -1),
                (2, -1),
            ]
        );
    }

    #[test]
    fn step_scales_every_move() {
        let visited: Vec<Position> = SpiralCursor::new(4, Position::new(5, 5), 3).collect();
        assert_eq!(
            visited,
            vec![
                Position::new(5, 5),
                Position::new(8, 5),
                Position::new(8, 8),
                Position::new(5, 8),
            ]
        );
    }

    #[test]
    fn center_offset_truncates_towards_zero() {
        assert_eq!(center_offset(0), 0);
        assert_eq!(center_offset(1), 0);
        assert_eq!(center_offset(4), 1);
        assert_eq!(center_offset(5), 2);
    }
}

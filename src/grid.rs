//! # 网格模块
//!
//! 颜色单元格组成的二维数组，按 `(行, 列)` 寻址。编码产生正方形网格，
//! 但从图像读取的网格可以是任意矩形。

use crate::color::Color;
use crate::spiral::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// 创建一个 `width x height` 的网格，所有单元格填充为 `fill`。
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn square(side: usize, fill: Color) -> Self {
        Self::new(side, side, fill)
    }

    /// 按 `(row, col)` 逐格调用 `f` 构造网格。
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 行数。解码依据行数推导网格边长。
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row).ok()?;
        let col = usize::try_from(position.col).ok()?;
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    /// 读取单元格；坐标在网格之外时返回 `None`。
    pub fn get(&self, position: Position) -> Option<Color> {
        self.index(position).map(|i| self.cells[i])
    }

    /// 写入单元格；坐标在网格之外时不做任何事并返回 `false`。
    pub fn set(&mut self, position: Position, color: Color) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// 按行优先顺序遍历所有单元格。
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }
}

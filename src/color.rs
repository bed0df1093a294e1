/// 单元格颜色 (R, G, B)。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 从打包整数构造颜色：按大端 4 字节看待 `packed`，丢弃最高字节，
    /// 其余三个字节依次作为 R、G、B。
    ///
    /// 例如 `0x00FF8000` 得到 `(0xFF, 0x80, 0x00)`，`0xFF` 得到 `(0, 0, 0xFF)`。
    pub const fn from_packed(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Self { r, g, b }
    }

    pub const fn to_packed(self) -> u32 {
        u32::from_be_bytes([0, self.r, self.g, self.b])
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb([color.r, color.g, color.b])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [r, g, b] = pixel.0;
        Self { r, g, b }
    }
}

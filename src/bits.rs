//! # 比特打包模块
//!
//! 把消息字节看作一个大端无符号整数，取其二进制表示 (不含前导零)，
//! 再在末尾追加一个终止位 `1`。解码时反向操作。
//!
//! 终止位使解码端在剥离尾部的 `0` 之后仍能准确定位消息结尾。

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// 有序的比特序列。
///
/// 由 [`to_bits`] 产生的序列总是以 `1` 结尾，长度为 `bit_length(message) + 1`。
/// 解码得到的序列已去掉终止位，因此不保证这一点。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence(Vec<bool>);

impl BitSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.0.pop()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// 去掉末尾所有的 `0`。
    pub fn trim_trailing_zeros(&mut self) {
        while self.0.last() == Some(&false) {
            self.0.pop();
        }
    }
}

impl From<Vec<bool>> for BitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|&bit| f.write_str(if bit { "1" } else { "0" }))
    }
}

impl FromStr for BitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(Error::InvalidBit { found, position }),
            })
            .collect()
    }
}

/// 将消息编码为带终止位的比特序列。
///
/// 前导零字节不参与整数表示，因此全零或空消息都只得到 `"1"`。
pub fn to_bits(message: &[u8]) -> BitSequence {
    let mut bits: BitSequence = message
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .skip_while(|&bit| !bit)
        .collect();
    bits.push(true);
    bits
}

/// 将比特序列当作二进制整数，还原为完整字节。
///
/// 高位不足一个字节时在左侧补零。非空但全为零的输入对应整数 0，
/// 还原为单个 `0x00` 字节；空输入还原为空。
pub fn from_bits(bits: &BitSequence) -> Vec<u8> {
    if bits.is_empty() {
        return Vec::new();
    }

    let significant: Vec<bool> = bits.iter().skip_while(|&bit| !bit).collect();
    if significant.is_empty() {
        return vec![0];
    }

    let padding = (8 - significant.len() % 8) % 8;
    let padded: Vec<bool> = std::iter::repeat_n(false, padding)
        .chain(significant)
        .collect();

    padded
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit as u8))
        .collect()
}

/// 与 [`from_bits`] 相同，但把结果按 UTF-8 解释为文本。
///
/// 无法解码的字节序列以 U+FFFD 替换，不会返回错误。
pub fn from_bits_lossy(bits: &BitSequence) -> String {
    String::from_utf8_lossy(&from_bits(bits)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_byte_drops_leading_zero() {
        assert_eq!(to_bits(b"A").to_string(), "10000011");
    }

    #[test]
    fn parse_rejects_other_characters() {
        let err = "10x1".parse::<BitSequence>().unwrap_err();
        assert!(matches!(err, Error::InvalidBit { found: 'x', position: 2 }));
    }

    #[test]
    fn odd_nibble_count_is_left_padded() {
        // 0b1_0100_0001 = 0x141 -> 01 41
        let bits: BitSequence = "101000001".parse().unwrap();
        assert_eq!(from_bits(&bits), vec![0x01, 0x41]);
    }
}

//! Byte level helpers for locating markers and rendering packed date fields.

/// How a packed date/time byte is rendered
/// as two decimal-looking digits before calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digits {
    /// Raw hexadecimal digits, e.g. `0x24` -> "24", `0x0F` -> "0F".
    /// Non-BCD bytes produce text that fails validation.
    Hex,
    /// Hexadecimal digits if both nibbles are decimal (i.e. valid BCD),
    /// otherwise the binary value in decimal, e.g. `0x0F` -> "15".
    BcdOrBinary,
}

impl Digits {
    /// Render `value` as (at least) two digits.
    pub fn render(&self, value: u8) -> String {
        match self {
            Self::Hex => format!("{value:02X}"),
            Self::BcdOrBinary => match is_bcd(value) {
                true => format!("{value:02X}"),
                false => format!("{value:02}"),
            },
        }
    }
}

/// Returns `true` if both nibbles are in range 0-9.
pub(crate) fn is_bcd(value: u8) -> bool {
    value >> 4 <= 9 && value & 0x0F <= 9
}

/// Returns the offset of the first occurrence of `needle`
/// in `haystack`, starting at `start`, where the match must
/// begin before `end` (exclusive).
pub(crate) fn find_from(haystack: &[u8], needle: &[u8], start: usize, end: usize) -> Option<usize> {
    let end = end.min(haystack.len().saturating_sub(needle.len()) + 1);
    (start..end).find(|i| haystack[*i..].starts_with(needle))
}

/// 13-bit packet identifier from TS header bytes 1 and 2.
pub(crate) fn pid(byte1: u8, byte2: u8) -> u16 {
    ((byte1 as u16 & 0x1F) << 8) | byte2 as u16
}

//! Padding strategies for the transposition cipher.
//!
//! Each strategy yields exactly one deterministic pad byte, used to complete
//! a ragged final matrix row before transposition and to identify synthetic
//! padding positions during decode.

/// Deterministic single-byte padding strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Padding {
    /// Pads with `0x00`.
    #[default]
    Zero,
    /// Pads with `0x01`.
    One,
    /// Pads with an arbitrary byte value.
    Byte(u8),
}

impl Padding {
    /// Returns the fill value for this strategy.
    pub fn pad_byte(self) -> u8 {
        match self {
            Padding::Zero => 0,
            Padding::One => 1,
            Padding::Byte(value) => value,
        }
    }

    /// Fills `buffer[start..]` with the pad byte. A start index at or past
    /// the end of the buffer fills nothing.
    pub fn add_padding(self, buffer: &mut [u8], start: usize) {
        if let Some(tail) = buffer.get_mut(start..) {
            tail.fill(self.pad_byte());
        }
    }
}

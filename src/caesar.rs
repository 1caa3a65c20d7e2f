//! Caesar cipher: fixed additive shift over the byte ring.
//!
//! `c = (p + shift) mod 256` and `p = (c - shift) mod 256`. The modulus is
//! the word-size alphabet (all 256 byte values), not a specific charset
//! table, so arbitrary binary input round-trips.

use crate::cipher::{check_stream_bounds, Direction, StreamCipher};
use crate::error::CipherError;
use crate::params::{resolve_key, CaesarKey, CipherKey, CipherParameter, KeyKind};

/// Byte-ring alphabet size.
const ALPHABET_SIZE: i32 = 256;

/// Caesar stream cipher.
///
/// # Examples
///
/// ```
/// use classicrypt::{CaesarCipher, CaesarKey, CipherKey, CipherParameter, Direction, StreamCipher};
///
/// let key = CipherParameter::Key(CipherKey::Caesar(CaesarKey::new(5)));
///
/// let mut cipher = CaesarCipher::new();
/// cipher.init(Direction::Encrypt, &key).unwrap();
///
/// let plaintext = b"attack at dawn";
/// let mut ciphertext = vec![0u8; plaintext.len()];
/// cipher.process(plaintext, 0, &mut ciphertext, 0).unwrap();
///
/// cipher.init(Direction::Decrypt, &key).unwrap();
/// let mut recovered = vec![0u8; ciphertext.len()];
/// cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
/// assert_eq!(recovered, plaintext);
/// ```
#[derive(Debug, Default)]
pub struct CaesarCipher {
    state: Option<(Direction, CaesarKey)>,
}

impl CaesarCipher {
    /// Creates a new, uninitialized Caesar cipher.
    pub fn new() -> Self {
        CaesarCipher { state: None }
    }

    /// Applies the shift to a single byte in the given direction.
    fn transform(direction: Direction, key: &CaesarKey, byte: u8) -> u8 {
        let shift = match direction {
            Direction::Encrypt => key.shift(),
            Direction::Decrypt => -key.shift(),
        };
        (i32::from(byte) + shift).rem_euclid(ALPHABET_SIZE) as u8
    }
}

impl StreamCipher for CaesarCipher {
    fn init(
        &mut self,
        direction: Direction,
        parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        match resolve_key(parameter, KeyKind::Caesar)? {
            CipherKey::Caesar(key) => {
                self.state = Some((direction, key));
                Ok(())
            }
            // resolve_key already rejected every other variant.
            _ => Err(CipherError::InvalidParameter),
        }
    }

    fn process(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, CipherError> {
        let (direction, key) = self.state.ok_or(CipherError::NotInitialized)?;
        let len = check_stream_bounds(input, in_off, output, out_off)?;
        for i in 0..len {
            output[out_off + i] = Self::transform(direction, &key, input[in_off + i]);
        }
        Ok(len)
    }

    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        let (direction, key) = self.state.ok_or(CipherError::NotInitialized)?;
        Ok(Self::transform(direction, &key, input))
    }

    fn reset(&mut self) {}
}

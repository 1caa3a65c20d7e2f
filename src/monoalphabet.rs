//! Monoalphabet substitution cipher: arbitrary byte-to-byte mapping.
//!
//! Encryption is a direct table lookup; decryption reverse-scans the table
//! for the first entry whose value matches the ciphertext byte. Bulk calls
//! degrade silently on unmapped bytes (the output position is left untouched
//! and the set of offenders is logged), while `process_byte` fails hard with
//! [`CipherError::KeyNotFound`]. The asymmetry is preserved from the
//! original engine.

use std::collections::BTreeSet;

use crate::cipher::{check_stream_bounds, Direction, StreamCipher};
use crate::error::CipherError;
use crate::params::{resolve_key, CipherKey, CipherParameter, KeyKind, MonoalphabetKey};

/// Monoalphabet substitution stream cipher.
#[derive(Debug, Default)]
pub struct MonoalphabetCipher {
    state: Option<(Direction, MonoalphabetKey)>,
}

impl MonoalphabetCipher {
    /// Creates a new, uninitialized Monoalphabet cipher.
    pub fn new() -> Self {
        MonoalphabetCipher { state: None }
    }

    /// Looks up a single byte in the bound direction.
    fn lookup(direction: Direction, key: &MonoalphabetKey, byte: u8) -> Option<u8> {
        match direction {
            Direction::Encrypt => key.lookup(byte),
            Direction::Decrypt => key.reverse_lookup(byte),
        }
    }
}

impl StreamCipher for MonoalphabetCipher {
    fn init(
        &mut self,
        direction: Direction,
        parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        match resolve_key(parameter, KeyKind::Monoalphabet)? {
            CipherKey::Monoalphabet(key) => {
                self.state = Some((direction, key));
                Ok(())
            }
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
        let (direction, key) = match &self.state {
            Some((d, k)) => (*d, k),
            None => return Err(CipherError::NotInitialized),
        };
        let len = check_stream_bounds(input, in_off, output, out_off)?;
        let mut unmapped = BTreeSet::new();
        for i in 0..len {
            let byte = input[in_off + i];
            match Self::lookup(direction, key, byte) {
                Some(mapped) => output[out_off + i] = mapped,
                // Output position deliberately left untouched.
                None => {
                    unmapped.insert(byte);
                }
            }
        }
        if !unmapped.is_empty() {
            tracing::warn!(
                ?direction,
                ?unmapped,
                "bytes without a mapping entry were left untransformed"
            );
        }
        Ok(len)
    }

    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        let (direction, key) = self.state.as_ref().ok_or(CipherError::NotInitialized)?;
        Self::lookup(*direction, key, input).ok_or(CipherError::KeyNotFound { byte: input })
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rot1_param() -> CipherParameter {
        let mapping: BTreeMap<u8, u8> = (b'a'..=b'z')
            .map(|b| (b, if b == b'z' { b'a' } else { b + 1 }))
            .collect();
        CipherParameter::Key(CipherKey::Monoalphabet(MonoalphabetKey::new(mapping)))
    }

    #[test]
    fn test_roundtrip() {
        let param = rot1_param();
        let plaintext = b"hello";
        let mut ciphertext = [0u8; 5];
        let mut recovered = [0u8; 5];

        let mut cipher = MonoalphabetCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        cipher.process(plaintext, 0, &mut ciphertext, 0).unwrap();
        assert_eq!(&ciphertext, b"ifmmp");

        cipher.init(Direction::Decrypt, &param).unwrap();
        cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
        assert_eq!(&recovered, plaintext);
    }

    #[test]
    fn test_bulk_leaves_unmapped_positions_untouched() {
        let param = rot1_param();
        let mut cipher = MonoalphabetCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();

        // ' ' and '!' have no mapping entry; their output slots keep the
        // buffer's default value.
        let plaintext = b"ab !z";
        let mut output = [0u8; 5];
        let written = cipher.process(plaintext, 0, &mut output, 0).unwrap();
        assert_eq!(written, 5);
        assert_eq!(&output, &[b'b', b'c', 0, 0, b'a']);
    }

    #[test]
    fn test_process_byte_unmapped_fails_hard() {
        let param = rot1_param();
        let mut cipher = MonoalphabetCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        assert_eq!(cipher.process_byte(b'a').unwrap(), b'b');
        assert_eq!(
            cipher.process_byte(b'!'),
            Err(CipherError::KeyNotFound { byte: b'!' })
        );
    }

    #[test]
    fn test_decrypt_unmatched_ciphertext_degrades() {
        let param = rot1_param();
        let mut cipher = MonoalphabetCipher::new();
        cipher.init(Direction::Decrypt, &param).unwrap();

        // '!' appears in no mapping value; bulk decrypt leaves the slot.
        let ciphertext = b"b!";
        let mut output = [0u8; 2];
        cipher.process(ciphertext, 0, &mut output, 0).unwrap();
        assert_eq!(&output, &[b'a', 0]);

        // Single-byte decrypt on the same byte fails hard.
        assert_eq!(
            cipher.process_byte(b'!'),
            Err(CipherError::KeyNotFound { byte: b'!' })
        );
    }

    #[test]
    fn test_process_before_init_fails() {
        let mut cipher = MonoalphabetCipher::new();
        assert_eq!(cipher.process_byte(0), Err(CipherError::NotInitialized));
    }
}

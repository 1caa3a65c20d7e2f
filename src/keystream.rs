//! Keystream cipher family: Vigenère, Vernam, and one-time pad.
//!
//! All three combine a caller-supplied keystream positionally with the
//! input. Vigenère and the one-time pad add modulo the key's modulus;
//! Vernam XORs and folds the result into the modulus ring. The engine does
//! not repeat the keystream: every bulk call requires
//! `keystream.len() >= input.len()`, checked on each call rather than
//! cached. `process_byte` uses only the first keystream element.

use crate::cipher::{check_stream_bounds, Direction, StreamCipher};
use crate::error::CipherError;
use crate::params::{resolve_key, CipherKey, CipherParameter, KeyKind, KeystreamKey};

/// How a keystream element is combined with an input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    /// Modular addition (subtraction on decrypt).
    ModularAdd,
    /// XOR folded into the modulus ring (XOR again on decrypt).
    Xor,
}

/// Shared implementation behind the three public keystream ciphers.
#[derive(Debug)]
struct KeystreamCore {
    combine: Combine,
    state: Option<(Direction, KeystreamKey)>,
}

impl KeystreamCore {
    fn new(combine: Combine) -> Self {
        KeystreamCore {
            combine,
            state: None,
        }
    }

    fn init(
        &mut self,
        direction: Direction,
        parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        match resolve_key(parameter, KeyKind::Keystream)? {
            CipherKey::Keystream(key) => {
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
        let modulus = i32::from(key.modulus());
        let len = check_stream_bounds(input, in_off, output, out_off)?;
        if key.keystream().len() < len {
            return Err(CipherError::InvalidArgument {
                reason: "key length must be >= plaintext/ciphertext length",
            });
        }
        for i in 0..len {
            output[out_off + i] = combine_byte(
                self.combine,
                direction,
                modulus,
                input[in_off + i],
                key.keystream()[i],
            );
        }
        Ok(len)
    }

    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        let (direction, key) = match &self.state {
            Some((d, k)) => (*d, k),
            None => return Err(CipherError::NotInitialized),
        };
        let first = *key
            .keystream()
            .first()
            .ok_or(CipherError::InvalidArgument {
                reason: "key length must be >= plaintext/ciphertext length",
            })?;
        Ok(combine_byte(
            self.combine,
            direction,
            i32::from(key.modulus()),
            input,
            first,
        ))
    }
}

/// Combines one input byte with one keystream element.
fn combine_byte(combine: Combine, direction: Direction, modulus: i32, byte: u8, key_byte: u8) -> u8 {
    let p = i32::from(byte);
    let k = i32::from(key_byte);
    match (combine, direction) {
        (Combine::ModularAdd, Direction::Encrypt) => (p + k).rem_euclid(modulus) as u8,
        (Combine::ModularAdd, Direction::Decrypt) => (p - k).rem_euclid(modulus) as u8,
        // XOR is its own inverse inside the full byte ring; the modulo fold
        // matches the original engine for smaller rings.
        (Combine::Xor, _) => (p ^ k).rem_euclid(modulus) as u8,
    }
}

macro_rules! keystream_cipher {
    ($(#[$doc:meta])* $name:ident, $combine:expr) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name {
            core: KeystreamCore,
        }

        impl $name {
            /// Creates a new, uninitialized cipher.
            pub fn new() -> Self {
                $name {
                    core: KeystreamCore::new($combine),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl StreamCipher for $name {
            fn init(
                &mut self,
                direction: Direction,
                parameter: &CipherParameter,
            ) -> Result<(), CipherError> {
                self.core.init(direction, parameter)
            }

            fn process(
                &mut self,
                input: &[u8],
                in_off: usize,
                output: &mut [u8],
                out_off: usize,
            ) -> Result<usize, CipherError> {
                self.core.process(input, in_off, output, out_off)
            }

            fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
                self.core.process_byte(input)
            }

            fn reset(&mut self) {}
        }
    };
}

keystream_cipher!(
    /// Vigenère cipher: `c = (p + key[i]) mod m`.
    VigenereCipher,
    Combine::ModularAdd
);

keystream_cipher!(
    /// Vernam cipher: `c = (p XOR key[i]) mod m`.
    VernamCipher,
    Combine::Xor
);

keystream_cipher!(
    /// One-time pad: modular addition with a keystream meant to be used once.
    /// The engine does not track reuse; that discipline is the caller's.
    OtpCipher,
    Combine::ModularAdd
);

#[cfg(test)]
mod tests {
    use super::*;

    fn keystream_param(keystream: Vec<u8>) -> CipherParameter {
        CipherParameter::Key(CipherKey::Keystream(KeystreamKey::new(keystream)))
    }

    #[test]
    fn test_vigenere_roundtrip() {
        let param = keystream_param((0u8..=255).collect());
        let plaintext = b"Hello World !!@#$%^&&*(*(+_)(*&=-0";
        let mut ciphertext = vec![0u8; plaintext.len()];
        let mut recovered = vec![0u8; plaintext.len()];

        let mut cipher = VigenereCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        cipher.process(plaintext, 0, &mut ciphertext, 0).unwrap();

        cipher.init(Direction::Decrypt, &param).unwrap();
        cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
        assert_eq!(&recovered, plaintext);
    }

    #[test]
    fn test_vernam_xor_is_self_inverse() {
        let param = keystream_param(vec![0xAA; 16]);
        let plaintext = [0x0F; 16];
        let mut ciphertext = [0u8; 16];
        let mut recovered = [0u8; 16];

        let mut cipher = VernamCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        cipher.process(&plaintext, 0, &mut ciphertext, 0).unwrap();
        assert_eq!(ciphertext, [0xA5; 16]);

        cipher.init(Direction::Decrypt, &param).unwrap();
        cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_otp_roundtrip() {
        let param = keystream_param(vec![200, 100, 50, 25, 12]);
        let plaintext = [250, 251, 252, 253, 254];
        let mut ciphertext = [0u8; 5];
        let mut recovered = [0u8; 5];

        let mut cipher = OtpCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        cipher.process(&plaintext, 0, &mut ciphertext, 0).unwrap();

        cipher.init(Direction::Decrypt, &param).unwrap();
        cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn test_short_keystream_rejected_before_output_write() {
        let param = keystream_param(vec![1, 2, 3]);
        let mut cipher = VernamCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();

        let mut output = [0xEE; 8];
        let err = cipher.process(&[0u8; 8], 0, &mut output, 0).unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidArgument {
                reason: "key length must be >= plaintext/ciphertext length",
            }
        );
        // No output byte was mutated.
        assert_eq!(output, [0xEE; 8]);
    }

    #[test]
    fn test_short_keystream_checked_every_call() {
        let param = keystream_param(vec![1, 2, 3]);
        let mut cipher = OtpCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();

        let mut output = [0u8; 3];
        // A fitting call succeeds...
        cipher.process(&[5u8; 3], 0, &mut output, 0).unwrap();
        // ...and an oversized one on the same instance still fails.
        let mut big_out = [0u8; 4];
        assert!(cipher.process(&[5u8; 4], 0, &mut big_out, 0).is_err());
    }

    #[test]
    fn test_process_byte_uses_first_element() {
        let param = keystream_param(vec![10, 99, 99]);
        let mut cipher = VigenereCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        assert_eq!(cipher.process_byte(5).unwrap(), 15);
        assert_eq!(cipher.process_byte(250).unwrap(), 4);
    }

    #[test]
    fn test_empty_keystream_process_byte_fails() {
        let param = keystream_param(vec![]);
        let mut cipher = VigenereCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        assert!(matches!(
            cipher.process_byte(1),
            Err(CipherError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_custom_modulus_addition() {
        let key = KeystreamKey::with_modulus(vec![20], 26).unwrap();
        let param = CipherParameter::Key(CipherKey::Keystream(key));
        let mut cipher = VigenereCipher::new();
        cipher.init(Direction::Encrypt, &param).unwrap();
        // (10 + 20) mod 26 = 4
        assert_eq!(cipher.process_byte(10).unwrap(), 4);
        cipher.init(Direction::Decrypt, &param).unwrap();
        assert_eq!(cipher.process_byte(4).unwrap(), 10);
    }

    #[test]
    fn test_process_before_init_fails() {
        let mut cipher = VernamCipher::new();
        assert_eq!(cipher.process_byte(0), Err(CipherError::NotInitialized));
    }
}

//! Affine cipher: `c = (p*a + b) mod m`, `p = (c - b) * a⁻¹ mod m`.
//!
//! The multiplier `a` must be coprime to the modulus `m` so that the modular
//! inverse exists. The key constructor enforces this, and every bulk call
//! re-validates it before touching the buffers.
//!
//! The transform maps the ring `0..m`; input symbols at or above `m` are
//! folded into the ring by the modulo and do not round-trip unless `m` is
//! the full byte ring (256).

use crate::cipher::{check_stream_bounds, Direction, StreamCipher};
use crate::error::CipherError;
use crate::params::{gcd, resolve_key, AffineKey, CipherKey, CipherParameter, KeyKind};

/// Affine stream cipher.
#[derive(Debug, Default)]
pub struct AffineCipher {
    state: Option<(Direction, AffineKey)>,
}

impl AffineCipher {
    /// Creates a new, uninitialized Affine cipher.
    pub fn new() -> Self {
        AffineCipher { state: None }
    }

    /// Re-validates the coprimality invariant on every call.
    fn check_key(key: &AffineKey) -> Result<(), CipherError> {
        if gcd(key.a(), key.m()) != 1 {
            return Err(CipherError::InvalidKey {
                reason: "a must be coprime to m",
            });
        }
        Ok(())
    }

    /// Applies the affine map (or its inverse) to a single byte.
    fn transform(direction: Direction, key: &AffineKey, byte: u8) -> u8 {
        let (a, b, m) = (key.a(), key.b(), key.m());
        let value = i64::from(byte);
        match direction {
            Direction::Encrypt => (value * a + b).rem_euclid(m) as u8,
            Direction::Decrypt => {
                // The inverse exists: check_key ran before any transform.
                let a_inv = mod_inverse(a, m).unwrap_or(0);
                ((value - b) * a_inv).rem_euclid(m) as u8
            }
        }
    }
}

impl StreamCipher for AffineCipher {
    fn init(
        &mut self,
        direction: Direction,
        parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        match resolve_key(parameter, KeyKind::Affine)? {
            CipherKey::Affine(key) => {
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
        let (direction, key) = self.state.ok_or(CipherError::NotInitialized)?;
        Self::check_key(&key)?;
        let len = check_stream_bounds(input, in_off, output, out_off)?;
        for i in 0..len {
            output[out_off + i] = Self::transform(direction, &key, input[in_off + i]);
        }
        Ok(len)
    }

    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        let (direction, key) = self.state.ok_or(CipherError::NotInitialized)?;
        Self::check_key(&key)?;
        Ok(Self::transform(direction, &key, input))
    }

    fn reset(&mut self) {}
}

/// Modular inverse of `a` mod `m` via the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, m) != 1`.
pub(crate) fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m))
}

//! Null cipher: identity copy. `init` and `reset` are no-ops and the cipher
//! never fails on key material, making it a drop-in stand-in wherever the
//! stream contract is required but no transformation is wanted.

use crate::cipher::{check_stream_bounds, Direction, StreamCipher};
use crate::error::CipherError;
use crate::params::CipherParameter;

/// Identity stream cipher.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCipher;

impl NullCipher {
    /// Creates a new Null cipher. No initialization is required.
    pub fn new() -> Self {
        NullCipher
    }
}

impl StreamCipher for NullCipher {
    fn init(
        &mut self,
        _direction: Direction,
        _parameter: &CipherParameter,
    ) -> Result<(), CipherError> {
        Ok(())
    }

    fn process(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, CipherError> {
        let len = check_stream_bounds(input, in_off, output, out_off)?;
        output[out_off..out_off + len].copy_from_slice(&input[in_off..]);
        Ok(len)
    }

    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError> {
        Ok(input)
    }

    fn reset(&mut self) {}
}

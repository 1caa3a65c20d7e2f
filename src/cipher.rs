//! The uniform cipher contract: direction, stream and block traits, and the
//! shared bounds checks every bulk call performs before touching a buffer.
//!
//! A cipher instance is constructed without a key; `init` binds key material
//! and a direction (re-callable to rebind), after which any number of
//! `process` calls run against caller-owned buffers. Instances are not
//! thread-safe: use one instance per concurrent caller or external locking
//! around `init` + `process` sequences.

use crate::error::CipherError;
use crate::params::CipherParameter;

/// Transform direction, bound at `init` and fixed until the next `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

impl Direction {
    /// Returns the inverse direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Encrypt => Direction::Decrypt,
            Direction::Decrypt => Direction::Encrypt,
        }
    }
}

/// Pointwise byte-stream transform.
///
/// `process` transforms `input.len() - in_off` bytes from `input[in_off..]`
/// into `output[out_off..]` and returns the number of bytes processed.
pub trait StreamCipher {
    /// Binds key material and a direction. Re-callable to rebind.
    ///
    /// # Errors
    /// Returns a parameter-resolution error if `parameter` carries no
    /// compatible key material for this cipher.
    fn init(&mut self, direction: Direction, parameter: &CipherParameter)
        -> Result<(), CipherError>;

    /// Transforms the input tail into the output buffer.
    ///
    /// # Errors
    /// Returns [`CipherError::NotInitialized`] before `init`, and
    /// [`CipherError::InvalidArgument`] for empty input, an offset past the
    /// end of the input, or an undersized output buffer. Failures are raised
    /// before any output byte is written.
    fn process(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize, CipherError>;

    /// Transforms a single byte using only the first keystream/parameter
    /// element.
    ///
    /// # Errors
    /// Same as [`process`](Self::process), plus algorithm-specific
    /// single-byte failures such as [`CipherError::KeyNotFound`].
    fn process_byte(&mut self, input: u8) -> Result<u8, CipherError>;

    /// Clears any per-call accumulation. All ciphers in this engine are
    /// stateless per call, so this is a no-op; the bound key and direction
    /// are retained.
    fn reset(&mut self);
}

/// Block transform over whole buffers (transposition cipher).
pub trait BlockCipher {
    /// Binds key material and a direction. Re-callable to rebind.
    ///
    /// # Errors
    /// Returns a parameter-resolution error if `parameter` carries no
    /// compatible key material for this cipher.
    fn init(&mut self, direction: Direction, parameter: &CipherParameter)
        -> Result<(), CipherError>;

    /// Processes one input buffer as a block.
    ///
    /// On encrypt the output length is the padded matrix size, which may
    /// exceed the input length; on decrypt the caller sizes `output` to the
    /// expected unpadded plaintext length. Returns the number of bytes
    /// written.
    ///
    /// # Errors
    /// Returns [`CipherError::NotInitialized`] before `init`, and
    /// [`CipherError::InvalidArgument`] for empty input or a mis-sized
    /// output buffer, before any output byte is written.
    fn process_block(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, CipherError>;

    /// Clears any per-call accumulation (no-op; the bound key and direction
    /// are retained).
    fn reset(&mut self);
}

/// Validates stream-call preconditions and returns the transform length.
///
/// The source relied on array-store exceptions for out-of-range writes;
/// here every bound is checked explicitly before any output mutation.
pub(crate) fn check_stream_bounds(
    input: &[u8],
    in_off: usize,
    output: &[u8],
    out_off: usize,
) -> Result<usize, CipherError> {
    if input.is_empty() {
        return Err(CipherError::InvalidArgument {
            reason: "input must not be empty",
        });
    }
    if in_off >= input.len() {
        return Err(CipherError::InvalidArgument {
            reason: "input offset is past the end of the input",
        });
    }
    let len = input.len() - in_off;
    if out_off > output.len() || output.len() - out_off < len {
        return Err(CipherError::InvalidArgument {
            reason: "output buffer too small for processed bytes",
        });
    }
    Ok(len)
}

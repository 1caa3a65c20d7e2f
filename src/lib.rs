//! classicrypt: a classical-cipher engine.
//!
//! A uniform contract for keyed byte-stream/byte-block transformations, a
//! parameter-resolution protocol that maps opaque caller-supplied key
//! material onto the concrete key type each cipher expects, and a family of
//! concrete algorithms: Caesar, Affine, Monoalphabet substitution, Vigenère,
//! Vernam, one-time pad, Null, and a columnar-transposition block cipher
//! with pluggable padding.
//!
//! These are toy/historical ciphers for demonstration, not secure
//! primitives: no claims are made about cryptographic strength, constant
//! time, or side channels.
//!
//! # Architecture
//!
//! ```text
//! CipherParameter  (RawKey | Key | KeyWithIv | List, resolved per cipher)
//!     ↓ resolve_key
//! StreamCipher     (Caesar, Affine, Monoalphabet, Vigenère, Vernam, OTP, Null)
//! BlockCipher      (TranspositionCipher + Padding strategy)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with the Caesar cipher:
//!
//! ```
//! use classicrypt::{
//!     CaesarCipher, CaesarKey, CipherKey, CipherParameter, Direction, StreamCipher,
//! };
//!
//! let key = CipherParameter::Key(CipherKey::Caesar(CaesarKey::new(5)));
//!
//! let mut cipher = CaesarCipher::new();
//! cipher.init(Direction::Encrypt, &key).unwrap();
//!
//! let plaintext = b"Hello World";
//! let mut ciphertext = vec![0u8; plaintext.len()];
//! cipher.process(plaintext, 0, &mut ciphertext, 0).unwrap();
//! assert_ne!(&ciphertext[..], &plaintext[..]);
//!
//! cipher.init(Direction::Decrypt, &key).unwrap();
//! let mut recovered = vec![0u8; ciphertext.len()];
//! cipher.process(&ciphertext, 0, &mut recovered, 0).unwrap();
//! assert_eq!(&recovered[..], &plaintext[..]);
//! ```
//!
//! Transpose a block with a column-order key:
//!
//! ```
//! use classicrypt::{
//!     BlockCipher, CipherKey, CipherParameter, Direction, Padding, PermutationKey,
//!     TranspositionCipher,
//! };
//!
//! let key = CipherParameter::Key(CipherKey::Permutation(
//!     PermutationKey::new(vec![2, 0, 1]).unwrap(),
//! ));
//!
//! let mut cipher = TranspositionCipher::new(Padding::Zero);
//! cipher.init(Direction::Encrypt, &key).unwrap();
//!
//! let plaintext = b"columnar";
//! let mut ciphertext = vec![0u8; 9]; // 3 columns x 3 rows, 1 pad byte
//! cipher.process_block(plaintext, &mut ciphertext).unwrap();
//! ```

#![deny(clippy::all)]

pub mod error;

mod affine;
mod caesar;
mod cipher;
mod keystream;
mod monoalphabet;
mod null;
mod padding;
mod params;
mod transposition;

pub use affine::AffineCipher;
pub use caesar::CaesarCipher;
pub use cipher::{BlockCipher, Direction, StreamCipher};
pub use error::CipherError;
pub use keystream::{OtpCipher, VernamCipher, VigenereCipher};
pub use monoalphabet::MonoalphabetCipher;
pub use null::NullCipher;
pub use padding::Padding;
pub use params::{
    resolve_key, AffineKey, CaesarKey, CipherKey, CipherParameter, KeyKind, KeystreamKey,
    MonoalphabetKey, PermutationKey,
};
pub use transposition::{can_pad, pad, pad_num, TranspositionCipher};

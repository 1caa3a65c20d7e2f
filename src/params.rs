//! Cipher parameters, concrete key types, and the resolution protocol.
//!
//! Callers hand a cipher an opaque [`CipherParameter`]; `init` resolves it
//! against the [`KeyKind`] the cipher expects via [`resolve_key`]. The Java
//! `instanceof` chain (`ParameterList` → `KeyParameter` → `KeyWithIVParameter`
//! → `RawKeyParameter`) becomes an exhaustive match over a closed sum type,
//! so every variant is handled at compile time.

use std::collections::BTreeMap;

use zeroize::Zeroize;

use crate::error::CipherError;

/// Fixed shift key for the Caesar cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarKey {
    shift: i32,
}

impl CaesarKey {
    /// Creates a new Caesar key. Negative and over-range shifts are
    /// normalized modulo the alphabet size at use time.
    pub fn new(shift: i32) -> Self {
        CaesarKey { shift }
    }

    /// Returns the shift value.
    pub fn shift(&self) -> i32 {
        self.shift
    }
}

/// Key for the Affine cipher: `c = (p*a + b) mod m`.
///
/// Invariant: `gcd(a, m) == 1`, checked at construction time so that the
/// modular inverse of `a` exists and decryption is well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: i64,
    b: i64,
    m: i64,
}

impl AffineKey {
    /// Creates a new Affine key.
    ///
    /// # Parameters
    /// - `a`: Multiplier; must be coprime to `m`.
    /// - `b`: Additive constant.
    /// - `m`: Modulus; must be in `2..=256` so outputs fit in a byte.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `m` is out of range or
    /// `gcd(a, m) != 1`.
    pub fn new(a: i64, b: i64, m: i64) -> Result<Self, CipherError> {
        if !(2..=256).contains(&m) {
            return Err(CipherError::InvalidKey {
                reason: "m must be in 2..=256",
            });
        }
        if gcd(a, m) != 1 {
            return Err(CipherError::InvalidKey {
                reason: "a must be coprime to m",
            });
        }
        Ok(AffineKey { a, b, m })
    }

    /// Returns the multiplier.
    pub fn a(&self) -> i64 {
        self.a
    }

    /// Returns the additive constant.
    pub fn b(&self) -> i64 {
        self.b
    }

    /// Returns the modulus.
    pub fn m(&self) -> i64 {
        self.m
    }
}

/// Keystream key shared by the Vigenère, Vernam, and one-time-pad ciphers.
///
/// The keystream is combined positionally with the input, so every bulk call
/// requires `keystream.len() >= input.len()`. The backing bytes are wiped
/// on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystreamKey {
    keystream: Vec<u8>,
    modulus: u16,
}

impl KeystreamKey {
    /// Creates a keystream key with the byte-ring modulus 256.
    pub fn new(keystream: Vec<u8>) -> Self {
        KeystreamKey {
            keystream,
            modulus: 256,
        }
    }

    /// Creates a keystream key with an explicit modulus.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `modulus` is not in `2..=256`.
    pub fn with_modulus(keystream: Vec<u8>, modulus: u16) -> Result<Self, CipherError> {
        if !(2..=256).contains(&modulus) {
            return Err(CipherError::InvalidKey {
                reason: "modulus must be in 2..=256",
            });
        }
        Ok(KeystreamKey { keystream, modulus })
    }

    /// Returns the keystream bytes.
    pub fn keystream(&self) -> &[u8] {
        &self.keystream
    }

    /// Returns the combining modulus.
    pub fn modulus(&self) -> u16 {
        self.modulus
    }
}

impl Drop for KeystreamKey {
    fn drop(&mut self) {
        self.keystream.zeroize();
    }
}

/// Byte-to-byte substitution table for the Monoalphabet cipher.
///
/// The mapping is intended to be injective so decryption is well-defined,
/// but injectivity is not enforced; with duplicate values the reverse scan
/// resolves to the smallest matching key byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonoalphabetKey {
    mapping: BTreeMap<u8, u8>,
}

impl MonoalphabetKey {
    /// Creates a new substitution key from a byte-to-byte mapping.
    pub fn new(mapping: BTreeMap<u8, u8>) -> Self {
        MonoalphabetKey { mapping }
    }

    /// Returns the substitution table.
    pub fn mapping(&self) -> &BTreeMap<u8, u8> {
        &self.mapping
    }

    /// Forward lookup: plaintext byte to ciphertext byte.
    pub fn lookup(&self, plain: u8) -> Option<u8> {
        self.mapping.get(&plain).copied()
    }

    /// Reverse lookup: first mapping entry (in ascending key order) whose
    /// value equals `cipher`.
    pub fn reverse_lookup(&self, cipher: u8) -> Option<u8> {
        self.mapping
            .iter()
            .find(|&(_, &v)| v == cipher)
            .map(|(&k, _)| k)
    }
}

/// Column-order key for the transposition cipher.
///
/// Values are taken modulo the key length ("ring" indexing), so entries
/// larger than the column count still address a valid column. The residues
/// are not required to form a true permutation; duplicates or gaps are
/// accepted but make the column mapping non-bijective, which corrupts
/// round-trip fidelity. A diagnostic warning is emitted in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationKey {
    column_order: Vec<usize>,
}

impl PermutationKey {
    /// Creates a new column-order key.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `column_order` is empty.
    pub fn new(column_order: Vec<usize>) -> Result<Self, CipherError> {
        if column_order.is_empty() {
            return Err(CipherError::InvalidKey {
                reason: "column order must not be empty",
            });
        }
        let n = column_order.len();
        let mut seen = vec![false; n];
        for &value in &column_order {
            seen[value % n] = true;
        }
        if seen.iter().any(|&hit| !hit) {
            tracing::warn!(
                key_len = n,
                "column order residues are not a permutation of 0..{}; decode may be lossy",
                n
            );
        }
        Ok(PermutationKey { column_order })
    }

    /// Returns the column order sequence.
    pub fn column_order(&self) -> &[usize] {
        &self.column_order
    }
}

/// The kind of key a concrete cipher expects from parameter resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// [`CaesarKey`]
    Caesar,
    /// [`AffineKey`]
    Affine,
    /// [`KeystreamKey`]
    Keystream,
    /// [`MonoalphabetKey`]
    Monoalphabet,
    /// [`PermutationKey`]
    Permutation,
}

impl KeyKind {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            KeyKind::Caesar => "Caesar",
            KeyKind::Affine => "Affine",
            KeyKind::Keystream => "Keystream",
            KeyKind::Monoalphabet => "Monoalphabet",
            KeyKind::Permutation => "Permutation",
        }
    }
}

/// Closed sum of all concrete key variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherKey {
    /// Fixed-shift Caesar key.
    Caesar(CaesarKey),
    /// Affine map key.
    Affine(AffineKey),
    /// Keystream key (Vigenère / Vernam / one-time pad).
    Keystream(KeystreamKey),
    /// Byte substitution table.
    Monoalphabet(MonoalphabetKey),
    /// Transposition column order.
    Permutation(PermutationKey),
}

impl CipherKey {
    /// Returns the kind of this key.
    pub fn kind(&self) -> KeyKind {
        match self {
            CipherKey::Caesar(_) => KeyKind::Caesar,
            CipherKey::Affine(_) => KeyKind::Affine,
            CipherKey::Keystream(_) => KeyKind::Keystream,
            CipherKey::Monoalphabet(_) => KeyKind::Monoalphabet,
            CipherKey::Permutation(_) => KeyKind::Permutation,
        }
    }
}

/// Opaque key material supplied by callers to `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherParameter {
    /// Raw bytes, parsed according to the target cipher's raw-format
    /// convention.
    RawKey(Vec<u8>),
    /// A structured key.
    Key(CipherKey),
    /// A structured key plus an initialization vector. None of the ciphers
    /// in this engine consume IVs; the IV is disregarded with a warning.
    KeyWithIv {
        /// The structured key.
        key: CipherKey,
        /// The initialization vector (disregarded).
        iv: Vec<u8>,
    },
    /// An ordered sequence of parameters, searched front to back.
    List(Vec<CipherParameter>),
}

/// Resolves a caller-supplied parameter to the concrete key a cipher expects.
///
/// Searches [`CipherParameter::List`] in order and binds the first compatible
/// component. Raw bytes are parsed per the cipher's raw-format convention:
/// Caesar reads ASCII decimal digits, keystream ciphers take the bytes as the
/// keystream (modulus 256), and the transposition cipher takes each byte as
/// one column index. Affine and Monoalphabet keys have no raw form.
///
/// # Errors
/// - [`CipherError::InvalidKeyType`] if a key container carries the wrong
///   key variant.
/// - [`CipherError::InvalidParameter`] if no compatible component exists.
/// - [`CipherError::InvalidKey`] if raw bytes fail the cipher's raw-format
///   convention.
pub fn resolve_key(
    parameter: &CipherParameter,
    expected: KeyKind,
) -> Result<CipherKey, CipherError> {
    match parameter {
        CipherParameter::Key(key) => check_kind(key, expected),
        CipherParameter::KeyWithIv { key, iv } => {
            let key = check_kind(key, expected)?;
            tracing::warn!(
                iv_len = iv.len(),
                cipher = expected.name(),
                "IV supplied but disregarded; this cipher does not use an IV"
            );
            Ok(key)
        }
        CipherParameter::RawKey(raw) => parse_raw_key(raw, expected),
        CipherParameter::List(items) => {
            // First successful binding wins; a wrong-variant key container is
            // only reported when nothing in the list binds.
            let mut wrong_variant: Option<CipherError> = None;
            for item in items {
                match resolve_key(item, expected) {
                    Ok(key) => return Ok(key),
                    Err(err @ CipherError::InvalidKeyType { .. }) => {
                        wrong_variant.get_or_insert(err);
                    }
                    Err(_) => {}
                }
            }
            Err(wrong_variant.unwrap_or(CipherError::InvalidParameter))
        }
    }
}

/// Verifies that a structured key matches the expected kind.
fn check_kind(key: &CipherKey, expected: KeyKind) -> Result<CipherKey, CipherError> {
    if key.kind() == expected {
        Ok(key.clone())
    } else {
        Err(CipherError::InvalidKeyType {
            expected: expected.name(),
            found: key.kind().name(),
        })
    }
}

/// Parses raw key bytes according to the expected cipher's convention.
fn parse_raw_key(raw: &[u8], expected: KeyKind) -> Result<CipherKey, CipherError> {
    match expected {
        KeyKind::Caesar => {
            let text = std::str::from_utf8(raw).map_err(|_| CipherError::InvalidKey {
                reason: "raw Caesar key must be ASCII decimal digits",
            })?;
            let shift = text
                .trim()
                .parse::<i32>()
                .map_err(|_| CipherError::InvalidKey {
                    reason: "raw Caesar key must be ASCII decimal digits",
                })?;
            Ok(CipherKey::Caesar(CaesarKey::new(shift)))
        }
        KeyKind::Keystream => Ok(CipherKey::Keystream(KeystreamKey::new(raw.to_vec()))),
        KeyKind::Permutation => {
            let column_order = raw.iter().map(|&b| b as usize).collect();
            Ok(CipherKey::Permutation(PermutationKey::new(column_order)?))
        }
        // No raw-byte convention exists for these key shapes.
        KeyKind::Affine | KeyKind::Monoalphabet => Err(CipherError::InvalidParameter),
    }
}

/// Greatest common divisor (Euclid), on absolute values.
pub(crate) fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

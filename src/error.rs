//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
///
/// Every failure is raised synchronously at the point of detection, before
/// any output buffer is mutated. Nothing is retried internally; callers must
/// correct parameters or keys and re-invoke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// No compatible key material was found in the supplied parameter.
    #[error("no compatible key material found in parameter")]
    InvalidParameter,

    /// A key container of the right shape carried the wrong key variant.
    #[error("expected {expected} key, found {found} key")]
    InvalidKeyType {
        /// Key kind the cipher expects.
        expected: &'static str,
        /// Key kind that was actually supplied.
        found: &'static str,
    },

    /// Key material is structurally present but invalid for the algorithm.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// Human-readable reason for the rejection.
        reason: &'static str,
    },

    /// An argument violates a call precondition (empty input, bad offset,
    /// undersized buffer, short keystream).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable reason for the rejection.
        reason: &'static str,
    },

    /// Single-byte Monoalphabet lookup found no mapping entry for the byte.
    #[error("no mapping entry for byte 0x{byte:02X}")]
    KeyNotFound {
        /// The byte that had no mapping entry.
        byte: u8,
    },

    /// `process` was called before `init` bound a key and direction.
    #[error("cipher not initialized; call init() first")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_parameter() {
        let err = CipherError::InvalidParameter;
        assert_eq!(
            format!("{}", err),
            "no compatible key material found in parameter"
        );
    }

    #[test]
    fn test_display_invalid_key_type() {
        let err = CipherError::InvalidKeyType {
            expected: "Monoalphabet",
            found: "Keystream",
        };
        assert_eq!(
            format!("{}", err),
            "expected Monoalphabet key, found Keystream key"
        );
    }

    #[test]
    fn test_display_invalid_key() {
        let err = CipherError::InvalidKey {
            reason: "a must be coprime to m",
        };
        assert_eq!(format!("{}", err), "invalid key: a must be coprime to m");
    }

    #[test]
    fn test_display_key_not_found() {
        let err = CipherError::KeyNotFound { byte: 0x7F };
        assert_eq!(format!("{}", err), "no mapping entry for byte 0x7F");
    }

    #[test]
    fn test_display_not_initialized() {
        let err = CipherError::NotInitialized;
        assert_eq!(
            format!("{}", err),
            "cipher not initialized; call init() first"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::InvalidParameter, CipherError::InvalidParameter);
        assert_ne!(CipherError::InvalidParameter, CipherError::NotInitialized);
    }

    #[test]
    fn test_error_clone() {
        let err = CipherError::KeyNotFound { byte: 3 };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}

//! Error types for the ElsieFour library.

use std::fmt;

/// Errors produced by the ElsieFour library.
///
/// Validation errors (`InvalidKey`, `InvalidKeyword`, `InvalidNonce`,
/// `InvalidPlaintext`, `InvalidCiphertext`, `CiphertextTooShort`) signal
/// caller misuse and are raised before any cipher state mutates, so a
/// failed call never emits partial output. `SymbolNotFound` is an internal
/// invariant violation: it is unreachable once validation has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElsieFourError {
    /// Key is not a permutation of the alphabet. Each field is a sorted
    /// string of offending symbols; all three findings are reported in one
    /// pass, so a key can be illegal, incomplete, and duplicated at once.
    InvalidKey {
        /// Symbols in the key that are not part of the alphabet.
        illegal: String,
        /// Alphabet symbols absent from the key.
        missing: String,
        /// Symbols occurring more than once in the key.
        duplicated: String,
    },
    /// Keyword for key derivation contains symbols outside the alphabet.
    InvalidKeyword(String),
    /// Nonce contains symbols outside the alphabet.
    InvalidNonce(String),
    /// Plaintext contains symbols outside the alphabet.
    InvalidPlaintext(String),
    /// Ciphertext contains symbols outside the alphabet.
    InvalidCiphertext(String),
    /// Ciphertext is shorter than the prefix that must be stripped from it.
    CiphertextTooShort {
        /// Length of the received ciphertext, in symbols.
        len: usize,
        /// Minimum length required (nonce or padding prefix).
        required: usize,
    },
    /// A symbol was not found in the grid. Indicates a broken permutation
    /// invariant; never returned when inputs passed validation.
    SymbolNotFound(char),
}

impl fmt::Display for ElsieFourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElsieFourError::InvalidKey {
                illegal,
                missing,
                duplicated,
            } => {
                write!(f, "Key is not a permutation of the alphabet:")?;
                let mut sep = "";
                if !illegal.is_empty() {
                    write!(f, "{} illegal letters '{}'", sep, illegal)?;
                    sep = ";";
                }
                if !missing.is_empty() {
                    write!(f, "{} missing letters '{}'", sep, missing)?;
                    sep = ";";
                }
                if !duplicated.is_empty() {
                    write!(f, "{} duplicate letters '{}'", sep, duplicated)?;
                }
                Ok(())
            }
            ElsieFourError::InvalidKeyword(s) => {
                write!(f, "Keyword contains illegal letters: '{}'", s)
            }
            ElsieFourError::InvalidNonce(s) => {
                write!(f, "Nonce contains illegal letters: '{}'", s)
            }
            ElsieFourError::InvalidPlaintext(s) => {
                write!(f, "Plaintext contains illegal letters: '{}'", s)
            }
            ElsieFourError::InvalidCiphertext(s) => {
                write!(f, "Ciphertext contains illegal letters: '{}'", s)
            }
            ElsieFourError::CiphertextTooShort { len, required } => {
                write!(
                    f,
                    "Ciphertext has {} letters but at least {} are required",
                    len, required
                )
            }
            ElsieFourError::SymbolNotFound(c) => {
                write!(f, "Letter '{}' not in key?!", c)
            }
        }
    }
}

impl std::error::Error for ElsieFourError {}

//! Fixed symbol alphabets and membership/permutation validation.
//!
//! Two alphabets are supported: the 36-symbol ElsieFour (LC4) alphabet laid
//! out as a 6×6 table, and the 49-symbol LS47 alphabet laid out as 7×7.
//! Both are pure ASCII, so symbols are handled as bytes internally; the
//! validation entry points work on `char`s so that arbitrary caller input
//! (including non-ASCII) is reported as illegal symbols rather than
//! mis-sliced.
//!
//! A symbol's position in the canonical, unrotated alphabet ordering (its
//! "fixed index") drives both key derivation and the per-step keystream
//! offset, so lookups here are O(1) via a precomputed table.

use crate::error::ElsieFourError;
use crate::position::Position;

/// Cipher variant selecting the alphabet and the historical defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// ElsieFour: 36 symbols on a 6×6 grid.
    Lc4,
    /// LS47: 49 symbols on a 7×7 grid.
    Ls47,
}

impl Variant {
    /// Returns the alphabet for this variant.
    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Lc4 => &Alphabet::LC4,
            Variant::Ls47 => &Alphabet::LS47,
        }
    }

    /// Returns the grid side length (6 or 7).
    pub fn size(self) -> usize {
        self.alphabet().size()
    }
}

/// An ordered symbol set of `size * size` unique ASCII symbols.
///
/// The canonical ordering is fixed for a session and defines each symbol's
/// fixed index, the rotation amounts in key derivation, and the keystream
/// offsets mixed into every cipher step.
pub struct Alphabet {
    letters: &'static [u8],
    size: usize,
    index: [i8; 128],
}

impl Alphabet {
    /// The ElsieFour alphabet: `#`, `_`, digits 2-9, and `a`-`z`.
    pub const LC4: Alphabet = Alphabet::new(b"#_23456789abcdefghijklmnopqrstuvwxyz", 6);

    /// The LS47 alphabet: `_`, `a`-`z`, `.`, digits, and common punctuation.
    pub const LS47: Alphabet =
        Alphabet::new(b"_abcdefghijklmnopqrstuvwxyz.0123456789,-+*/:?!'()", 7);

    const fn new(letters: &'static [u8], size: usize) -> Alphabet {
        let mut index = [-1i8; 128];
        let mut i = 0;
        while i < letters.len() {
            index[letters[i] as usize] = i as i8;
            i += 1;
        }
        Alphabet {
            letters,
            size,
            index,
        }
    }

    /// Returns the grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of symbols (`size * size`).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; an alphabet has at least 36 symbols.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the symbols in canonical order.
    pub fn letters(&self) -> &'static [u8] {
        self.letters
    }

    /// Returns the canonical ordering as a string.
    pub fn as_str(&self) -> &'static str {
        // Alphabets are ASCII by construction.
        std::str::from_utf8(self.letters).expect("alphabet is ASCII")
    }

    /// Returns the flat canonical offset of `symbol`, if it is in the
    /// alphabet.
    pub fn offset_of(&self, symbol: u8) -> Option<usize> {
        if symbol < 128 {
            match self.index[symbol as usize] {
                -1 => None,
                i => Some(i as usize),
            }
        } else {
            None
        }
    }

    /// Returns the fixed index of `symbol` in the canonical, unrotated
    /// alphabet ordering.
    pub fn index_of(&self, symbol: u8) -> Option<Position> {
        self.offset_of(symbol)
            .map(|i| Position::from_index(i, self.size))
    }

    /// Returns true if `c` is an alphabet symbol.
    pub fn contains(&self, c: char) -> bool {
        self.offset_of_char(c).is_some()
    }

    /// Char-level variant of [`offset_of`](Self::offset_of); non-ASCII
    /// input is never a member.
    fn offset_of_char(&self, c: char) -> Option<usize> {
        if c.is_ascii() {
            self.offset_of(c as u8)
        } else {
            None
        }
    }

    /// Collects the sorted, deduplicated set of symbols in `s` that are
    /// outside the alphabet. Empty string means all symbols are legal.
    fn illegal_symbols(&self, s: &str) -> String {
        sorted_unique(s.chars().filter(|&c| !self.contains(c)).collect())
    }

    /// Checks that `key` is exactly a permutation of the alphabet.
    ///
    /// Detects and reports illegal, missing, and duplicated symbols
    /// together in a single pass, so one error describes every way the key
    /// deviates from a permutation.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKey`] with all three findings
    /// (each a sorted string of offenders, possibly empty).
    pub fn check_key(&self, key: &str) -> Result<(), ElsieFourError> {
        let mut counts = vec![0u32; self.letters.len()];
        let mut illegal: Vec<char> = Vec::new();
        for c in key.chars() {
            match self.offset_of_char(c) {
                Some(i) => counts[i] += 1,
                None => illegal.push(c),
            }
        }

        let missing: Vec<char> = self
            .letters
            .iter()
            .enumerate()
            .filter(|&(i, _)| counts[i] == 0)
            .map(|(_, &b)| b as char)
            .collect();
        let duplicated: Vec<char> = self
            .letters
            .iter()
            .enumerate()
            .filter(|&(i, _)| counts[i] > 1)
            .map(|(_, &b)| b as char)
            .collect();

        if illegal.is_empty() && missing.is_empty() && duplicated.is_empty() {
            Ok(())
        } else {
            Err(ElsieFourError::InvalidKey {
                illegal: sorted_unique(illegal),
                missing: sorted_unique(missing),
                duplicated: sorted_unique(duplicated),
            })
        }
    }

    /// Checks that every keyword symbol is in the alphabet.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKeyword`] listing the offenders.
    pub fn check_keyword(&self, keyword: &str) -> Result<(), ElsieFourError> {
        let illegal = self.illegal_symbols(keyword);
        if illegal.is_empty() {
            Ok(())
        } else {
            Err(ElsieFourError::InvalidKeyword(illegal))
        }
    }

    /// Checks that every nonce symbol is in the alphabet.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidNonce`] listing the offenders.
    pub fn check_nonce(&self, nonce: &str) -> Result<(), ElsieFourError> {
        let illegal = self.illegal_symbols(nonce);
        if illegal.is_empty() {
            Ok(())
        } else {
            Err(ElsieFourError::InvalidNonce(illegal))
        }
    }

    /// Checks that every plaintext symbol is in the alphabet.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidPlaintext`] listing the offenders.
    pub fn check_plaintext(&self, plaintext: &str) -> Result<(), ElsieFourError> {
        let illegal = self.illegal_symbols(plaintext);
        if illegal.is_empty() {
            Ok(())
        } else {
            Err(ElsieFourError::InvalidPlaintext(illegal))
        }
    }

    /// Checks that every ciphertext symbol is in the alphabet.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidCiphertext`] listing the offenders.
    pub fn check_ciphertext(&self, ciphertext: &str) -> Result<(), ElsieFourError> {
        let illegal = self.illegal_symbols(ciphertext);
        if illegal.is_empty() {
            Ok(())
        } else {
            Err(ElsieFourError::InvalidCiphertext(illegal))
        }
    }
}

/// Sorts and deduplicates a set of offending symbols for error reporting.
fn sorted_unique(mut chars: Vec<char>) -> String {
    chars.sort_unstable();
    chars.dedup();
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::LC4.size(), 6);
        assert_eq!(Alphabet::LC4.len(), 36);
        assert_eq!(Alphabet::LS47.size(), 7);
        assert_eq!(Alphabet::LS47.len(), 49);
    }

    #[test]
    fn test_alphabets_have_no_repeats() {
        for alphabet in [&Alphabet::LC4, &Alphabet::LS47] {
            let mut seen = [false; 128];
            for &b in alphabet.letters() {
                assert!(!seen[b as usize], "repeated symbol '{}'", b as char);
                seen[b as usize] = true;
            }
        }
    }

    #[test]
    fn test_index_of_canonical_positions() {
        // '#' is the first LC4 symbol, 'a' the eleventh (row 1, col 4).
        assert_eq!(Alphabet::LC4.index_of(b'#'), Some(Position::new(0, 0)));
        assert_eq!(Alphabet::LC4.index_of(b'a'), Some(Position::new(1, 4)));
        assert_eq!(Alphabet::LC4.index_of(b'z'), Some(Position::new(5, 5)));
        assert_eq!(Alphabet::LS47.index_of(b'_'), Some(Position::new(0, 0)));
        assert_eq!(Alphabet::LS47.index_of(b')'), Some(Position::new(6, 6)));
    }

    #[test]
    fn test_index_of_rejects_foreign_symbols() {
        assert_eq!(Alphabet::LC4.index_of(b'0'), None);
        assert_eq!(Alphabet::LC4.index_of(b'-'), None);
        assert_eq!(Alphabet::LS47.index_of(b'#'), None);
    }

    #[test]
    fn test_contains_non_ascii() {
        assert!(!Alphabet::LC4.contains('é'));
        assert!(!Alphabet::LS47.contains('é'));
        assert!(Alphabet::LC4.contains('#'));
    }

    #[test]
    fn test_check_key_accepts_identity() {
        assert!(Alphabet::LC4.check_key(Alphabet::LC4.as_str()).is_ok());
        assert!(Alphabet::LS47.check_key(Alphabet::LS47.as_str()).is_ok());
    }

    #[test]
    fn test_check_key_accepts_permutation() {
        assert!(Alphabet::LC4
            .check_key("s2ferw_nx346ty5odiupq#lmz8ajhgcvk79b")
            .is_ok());
    }

    #[test]
    fn test_check_key_reports_all_findings_at_once() {
        // Replace '#' with a second 'a' and 'z' with '!': the key now
        // misses '#' and 'z', contains illegal '!', and duplicates 'a'.
        let key = "a_23456789abcdefghijklmnopqrstuvwxy!";
        match Alphabet::LC4.check_key(key) {
            Err(ElsieFourError::InvalidKey {
                illegal,
                missing,
                duplicated,
            }) => {
                assert_eq!(illegal, "!");
                assert_eq!(missing, "#z");
                assert_eq!(duplicated, "a");
            }
            other => panic!("expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_check_key_short_key_reports_missing() {
        match Alphabet::LC4.check_key("#_23") {
            Err(ElsieFourError::InvalidKey {
                illegal,
                missing,
                duplicated,
            }) => {
                assert!(illegal.is_empty());
                assert_eq!(missing.len(), 32);
                assert!(duplicated.is_empty());
            }
            other => panic!("expected InvalidKey, got {:?}", other),
        }
    }

    #[test]
    fn test_check_plaintext_offenders_sorted_and_deduplicated() {
        let err = Alphabet::LC4.check_plaintext("zzz!!AA!").unwrap_err();
        assert_eq!(err, ElsieFourError::InvalidPlaintext("!A".to_string()));
    }

    #[test]
    fn test_check_nonce_and_ciphertext_kinds() {
        assert_eq!(
            Alphabet::LC4.check_nonce("0"),
            Err(ElsieFourError::InvalidNonce("0".to_string()))
        );
        assert_eq!(
            Alphabet::LC4.check_ciphertext("0"),
            Err(ElsieFourError::InvalidCiphertext("0".to_string()))
        );
        assert_eq!(
            Alphabet::LC4.check_keyword("0"),
            Err(ElsieFourError::InvalidKeyword("0".to_string()))
        );
    }

    #[test]
    fn test_check_empty_inputs() {
        assert!(Alphabet::LC4.check_plaintext("").is_ok());
        assert!(Alphabet::LC4.check_nonce("").is_ok());
        assert!(Alphabet::LC4.check_key("").is_err());
    }
}

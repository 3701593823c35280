//! ElsieFour (LC4) and LS47 manual stream ciphers.
//!
//! Both ciphers encrypt one symbol at a time with a permutation grid that
//! rotates after every symbol, plus a marker position seeding each step's
//! keystream offset. LC4 works on a 6×6 grid of 36 symbols, LS47 on a 7×7
//! grid of 49. This crate is compatible symbol-for-symbol with the
//! reference implementation, including both historical marker behaviors
//! and both nonce chaining modes.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (fixed symbol ordering — fixed indices, validation)
//!     ↓
//! Grid       (mutable permutation — rotations, keyword derivation)
//!     ↓
//! Cipher     (session — per-symbol engine, marker + nonce modes)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a keyword-derived key:
//!
//! ```
//! use elsiefour::{Cipher, Variant};
//!
//! let mut alice = Cipher::new(Variant::Ls47);
//! alice.keyword("s3cret_p4ssw0rd/31337").unwrap();
//!
//! let mut bob = Cipher::new(Variant::Ls47);
//! bob.keyword("s3cret_p4ssw0rd/31337").unwrap();
//!
//! let wire = alice.encrypt("attack_at_dawn").unwrap();
//! assert_eq!(bob.decrypt(&wire).unwrap(), "attack_at_dawn");
//! ```
//!
//! Chain a nonce so repeated plaintexts produce distinct wires:
//!
//! ```
//! use elsiefour::{Cipher, Variant};
//!
//! let mut cipher = Cipher::new(Variant::Lc4);
//! cipher.keyword("thisismysecretkey").unwrap();
//!
//! let nonce = cipher.generate_nonce(6);
//! let wire = cipher.encrypt_with_nonce(&nonce, "meet_me_at_nine").unwrap();
//! assert_eq!(
//!     cipher.decrypt_with_nonce(&wire, 6).unwrap(),
//!     "meet_me_at_nine"
//! );
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod cipher;
mod grid;
mod position;

pub use alphabet::{Alphabet, Variant};
pub use cipher::{Cipher, MarkerMode, NonceMode};
pub use error::ElsieFourError;
pub use grid::Grid;
pub use position::Position;

//! The cipher session: per-symbol engine, marker modes, and nonce chaining.
//!
//! A [`Cipher`] owns an immutable configuration (variant, marker mode,
//! nonce mode) and an initial key grid. Every `encrypt`/`decrypt` call
//! works on a fresh copy of that grid with the marker reset to the
//! top-left tile, so a session can process any number of independent
//! messages and two sessions never share mutable state.
//!
//! Within one message the engine is an inherently serial fold: each step
//! consumes the grid and marker produced by the previous one. Encryption
//! and decryption drive the identical rotation and marker updates as a
//! function of the (plaintext position, ciphertext symbol) pair, which is
//! what keeps the two directions' states synchronized step for step.

use rand::Rng;

use crate::alphabet::{Alphabet, Variant};
use crate::error::ElsieFourError;
use crate::grid::Grid;
use crate::position::Position;

/// Length of the random prefix used by the padded-message helpers.
const PAD_LEN: usize = 10;

/// How the marker reacts to grid rotations.
///
/// Selected once per session and never changed mid-message. Both modes are
/// kept selectable: historical ciphertext exists under each, and the two
/// are not interoperable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerMode {
    /// The marker follows its tile: a rotation crossing the marker's row
    /// or column shifts the marker with it. This is Kaminsky's original
    /// ElsieFour behavior. A run of the alphabet's first symbol can pin
    /// the marker to that symbol's tile and degenerate into a repeated
    /// ciphertext symbol.
    Tracking,
    /// The marker's coordinates are never adjusted by rotations, as in
    /// Kratochvil's LS47.
    Stationary,
}

impl MarkerMode {
    /// The historical default for each cipher variant.
    pub fn default_for(variant: Variant) -> Self {
        match variant {
            Variant::Lc4 => MarkerMode::Tracking,
            Variant::Ls47 => MarkerMode::Stationary,
        }
    }
}

/// How a nonce is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceMode {
    /// The clear nonce is transmitted as the prefix; its ciphertext is
    /// discarded. The receiver re-encrypts the received nonce to
    /// resynchronize before decrypting the body (Kaminsky).
    ClearPrefix,
    /// The encrypted nonce is transmitted as the prefix. The receiver
    /// decrypts the whole buffer and discards the leading nonce symbols
    /// (Kratochvil).
    EncryptedPrefix,
}

impl NonceMode {
    /// The historical default for each cipher variant.
    pub fn default_for(variant: Variant) -> Self {
        match variant {
            Variant::Lc4 => NonceMode::ClearPrefix,
            Variant::Ls47 => NonceMode::EncryptedPrefix,
        }
    }
}

/// An ElsieFour / LS47 cipher session.
///
/// # Examples
///
/// Encrypt and decrypt with a keyword-derived key:
///
/// ```
/// use elsiefour::{Cipher, Variant};
///
/// let mut cipher = Cipher::new(Variant::Lc4);
/// cipher.keyword("thisismysecretkey").unwrap();
///
/// let ciphertext = cipher.encrypt("its_my_fathers_son_but_not_my_brother").unwrap();
/// assert_eq!(ciphertext, "6dudfy3u7omoxy4jbscgn37c2se_d8gx6ogk9");
/// assert_eq!(
///     cipher.decrypt(&ciphertext).unwrap(),
///     "its_my_fathers_son_but_not_my_brother"
/// );
/// ```
pub struct Cipher {
    alphabet: &'static Alphabet,
    variant: Variant,
    grid: Grid,
    marker_mode: MarkerMode,
    nonce_mode: NonceMode,
}

impl Cipher {
    /// Creates a session with the canonical grid as key and the variant's
    /// historical marker and nonce modes.
    ///
    /// Call [`key`](Self::key) or [`keyword`](Self::keyword) to install a
    /// secret key.
    pub fn new(variant: Variant) -> Self {
        Self::with_modes(
            variant,
            MarkerMode::default_for(variant),
            NonceMode::default_for(variant),
        )
    }

    /// Creates a session with explicit marker and nonce modes.
    pub fn with_modes(variant: Variant, marker_mode: MarkerMode, nonce_mode: NonceMode) -> Self {
        let alphabet = variant.alphabet();
        Cipher {
            alphabet,
            variant,
            grid: Grid::canonical(alphabet),
            marker_mode,
            nonce_mode,
        }
    }

    /// Installs a literal key: a permutation of the alphabet.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKey`] unless `key` is exactly a
    /// permutation of the alphabet.
    pub fn key(&mut self, key: &str) -> Result<(), ElsieFourError> {
        self.grid = Grid::from_key(self.alphabet, key)?;
        Ok(())
    }

    /// Derives and installs a key from a keyword.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKeyword`] if the keyword contains
    /// symbols outside the alphabet.
    pub fn keyword(&mut self, keyword: &str) -> Result<(), ElsieFourError> {
        self.grid = Grid::derive(self.alphabet, keyword)?;
        Ok(())
    }

    /// Returns the cipher variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the marker mode.
    pub fn marker_mode(&self) -> MarkerMode {
        self.marker_mode
    }

    /// Returns the nonce mode.
    pub fn nonce_mode(&self) -> NonceMode {
        self.nonce_mode
    }

    /// Returns the installed key as a flat permutation string.
    pub fn key_string(&self) -> String {
        self.grid.to_string()
    }

    /// Encrypts a plaintext, one output symbol per input symbol.
    ///
    /// The whole plaintext is validated before any processing, so a
    /// failure never leaves partial output or a consumed key state.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidPlaintext`] listing any symbols
    /// outside the alphabet.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, ElsieFourError> {
        self.alphabet.check_plaintext(plaintext)?;
        self.engine().encrypt_str(plaintext)
    }

    /// Decrypts a ciphertext produced by [`encrypt`](Self::encrypt) under
    /// the same key and marker mode.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidCiphertext`] listing any symbols
    /// outside the alphabet.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, ElsieFourError> {
        self.alphabet.check_ciphertext(ciphertext)?;
        self.engine().decrypt_str(ciphertext)
    }

    /// Encrypts a plaintext chained behind a nonce.
    ///
    /// The nonce is prefixed to the plaintext and the whole sequence is
    /// run through the engine; the session's [`NonceMode`] decides whether
    /// the wire prefix is the clear nonce or its ciphertext.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidNonce`] or
    /// [`ElsieFourError::InvalidPlaintext`] on symbols outside the
    /// alphabet.
    pub fn encrypt_with_nonce(
        &self,
        nonce: &str,
        plaintext: &str,
    ) -> Result<String, ElsieFourError> {
        self.alphabet.check_nonce(nonce)?;
        self.alphabet.check_plaintext(plaintext)?;

        let mut engine = self.engine();
        let nonce_ct = engine.encrypt_str(nonce)?;
        let body_ct = engine.encrypt_str(plaintext)?;

        let mut wire = match self.nonce_mode {
            NonceMode::ClearPrefix => nonce.to_string(),
            NonceMode::EncryptedPrefix => nonce_ct,
        };
        wire.push_str(&body_ct);
        Ok(wire)
    }

    /// Decrypts a wire message carrying a `nonce_len`-symbol nonce prefix.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidCiphertext`] on symbols outside
    /// the alphabet, or [`ElsieFourError::CiphertextTooShort`] if the
    /// buffer cannot contain the nonce prefix.
    pub fn decrypt_with_nonce(
        &self,
        ciphertext: &str,
        nonce_len: usize,
    ) -> Result<String, ElsieFourError> {
        self.alphabet.check_ciphertext(ciphertext)?;
        // Post-validation the text is ASCII, so byte length == symbol count.
        if ciphertext.len() < nonce_len {
            return Err(ElsieFourError::CiphertextTooShort {
                len: ciphertext.len(),
                required: nonce_len,
            });
        }

        let mut engine = self.engine();
        match self.nonce_mode {
            NonceMode::ClearPrefix => {
                let (nonce, body) = ciphertext.split_at(nonce_len);
                // Re-encrypting the clear nonce replays the sender's state
                // transitions up to the start of the body.
                engine.encrypt_str(nonce)?;
                engine.decrypt_str(body)
            }
            NonceMode::EncryptedPrefix => {
                let plaintext = engine.decrypt_str(ciphertext)?;
                Ok(plaintext[nonce_len..].to_string())
            }
        }
    }

    /// Encrypts a plaintext behind a random pad and with a trailing
    /// signature, LS47 style: `pad(10) + plaintext + "---" + signature`.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidPlaintext`] if the plaintext,
    /// signature, or separator contains symbols outside the alphabet (the
    /// `-` separator is only part of the LS47 alphabet).
    pub fn encrypt_pad(&self, plaintext: &str, signature: &str) -> Result<String, ElsieFourError> {
        self.encrypt_pad_with(&mut rand::thread_rng(), plaintext, signature)
    }

    /// [`encrypt_pad`](Self::encrypt_pad) with a caller-supplied
    /// randomness source.
    pub fn encrypt_pad_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        plaintext: &str,
        signature: &str,
    ) -> Result<String, ElsieFourError> {
        let mut message = self.random_nonce(rng, PAD_LEN);
        message.push_str(plaintext);
        message.push_str("---");
        message.push_str(signature);
        self.encrypt(&message)
    }

    /// Decrypts a padded message, stripping the random pad.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::CiphertextTooShort`] if the message is
    /// shorter than the pad, or [`ElsieFourError::InvalidCiphertext`] on
    /// symbols outside the alphabet.
    pub fn decrypt_pad(&self, ciphertext: &str) -> Result<String, ElsieFourError> {
        self.alphabet.check_ciphertext(ciphertext)?;
        if ciphertext.len() < PAD_LEN {
            return Err(ElsieFourError::CiphertextTooShort {
                len: ciphertext.len(),
                required: PAD_LEN,
            });
        }
        let plaintext = self.engine().decrypt_str(ciphertext)?;
        Ok(plaintext[PAD_LEN..].to_string())
    }

    /// Draws `len` symbols uniformly from the alphabet.
    ///
    /// The source is pluggable and, as in the reference implementation,
    /// not required to be cryptographically secure; callers needing
    /// security guarantees must supply a suitable `rng`.
    pub fn random_nonce<R: Rng + ?Sized>(&self, rng: &mut R, len: usize) -> String {
        let letters = self.alphabet.letters();
        (0..len)
            .map(|_| letters[rng.gen_range(0..letters.len())] as char)
            .collect()
    }

    /// [`random_nonce`](Self::random_nonce) using the thread-local RNG.
    pub fn generate_nonce(&self, len: usize) -> String {
        self.random_nonce(&mut rand::thread_rng(), len)
    }

    /// Builds a fresh engine over a copy of the initial grid.
    fn engine(&self) -> Engine {
        Engine {
            alphabet: self.alphabet,
            grid: self.grid.clone(),
            marker: Position::ZERO,
            marker_mode: self.marker_mode,
        }
    }
}

/// The per-message state machine: one grid, one marker, consumed serially.
struct Engine {
    alphabet: &'static Alphabet,
    grid: Grid,
    marker: Position,
    marker_mode: MarkerMode,
}

impl Engine {
    /// Encrypts one symbol and advances the state.
    fn encrypt_symbol(&mut self, p: u8) -> Result<u8, ElsieFourError> {
        let size = self.grid.size();
        let pp = self.grid.position_of(p)?;
        let c = self.grid.symbol_at(pp.add(self.keystream_offset()?, size));
        self.advance(pp, c)?;
        Ok(c)
    }

    /// Decrypts one symbol and advances the state.
    fn decrypt_symbol(&mut self, c: u8) -> Result<u8, ElsieFourError> {
        let size = self.grid.size();
        let cp = self.grid.position_of(c)?;
        let pp = cp.sub(self.keystream_offset()?, size);
        let p = self.grid.symbol_at(pp);
        self.advance(pp, c)?;
        Ok(p)
    }

    /// Fixed index of the symbol currently under the marker. Coupling the
    /// grid content into the offset is what makes the keystream depend on
    /// the whole message history.
    fn keystream_offset(&self) -> Result<Position, ElsieFourError> {
        let symbol = self.grid.symbol_at(self.marker);
        self.alphabet
            .index_of(symbol)
            .ok_or(ElsieFourError::SymbolNotFound(symbol as char))
    }

    /// The rotation and marker tail shared by both directions.
    ///
    /// Driven only by the plaintext position `pp` and the ciphertext
    /// symbol `c`, never by the direction, so encrypting and decrypting a
    /// matching symbol pair visit identical (grid, marker) states.
    fn advance(&mut self, pp: Position, c: u8) -> Result<(), ElsieFourError> {
        let size = self.grid.size();

        self.grid.rotate_row(pp.row, 1);
        if self.marker_mode == MarkerMode::Tracking && self.marker.row == pp.row {
            self.marker.col = (self.marker.col + 1) % size;
        }

        // The ciphertext symbol's column in the just-rotated grid drives
        // the second rotation.
        let cp = self.grid.position_of(c)?;
        self.grid.rotate_col(cp.col, 1);
        if self.marker_mode == MarkerMode::Tracking && self.marker.col == cp.col {
            self.marker.row = (self.marker.row + 1) % size;
        }

        let offset = self
            .alphabet
            .index_of(c)
            .ok_or(ElsieFourError::SymbolNotFound(c as char))?;
        self.marker = self.marker.add(offset, size);
        Ok(())
    }

    /// Encrypts a validated string symbol by symbol.
    fn encrypt_str(&mut self, plaintext: &str) -> Result<String, ElsieFourError> {
        let mut out = String::with_capacity(plaintext.len());
        for p in plaintext.bytes() {
            out.push(self.encrypt_symbol(p)? as char);
        }
        Ok(out)
    }

    /// Decrypts a validated string symbol by symbol.
    fn decrypt_str(&mut self, ciphertext: &str) -> Result<String, ElsieFourError> {
        let mut out = String::with_capacity(ciphertext.len());
        for c in ciphertext.bytes() {
            out.push(self.decrypt_symbol(c)? as char);
        }
        Ok(out)
    }
}

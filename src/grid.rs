//! The mutable permutation grid holding the cipher's key state.
//!
//! A [`Grid`] is a permutation of its alphabet, logically a size×size
//! table stored flat in row-major order. Every cipher step mutates it with
//! exactly one row rotation and one column rotation; both preserve the
//! permutation invariant, and rotating by `n` is undone by rotating by
//! `size - n`.

use std::fmt;

use crate::alphabet::Alphabet;
use crate::error::ElsieFourError;
use crate::position::Position;

/// Largest supported grid side (the LS47 table).
const MAX_SIZE: usize = 7;

/// A mutable permutation of an alphabet, addressed as a square table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    size: usize,
}

impl Grid {
    /// Builds the canonical grid: the alphabet in its fixed ordering.
    pub fn canonical(alphabet: &Alphabet) -> Grid {
        Grid {
            cells: alphabet.letters().to_vec(),
            size: alphabet.size(),
        }
    }

    /// Builds a grid from a literal key string.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKey`] unless `key` is exactly a
    /// permutation of the alphabet.
    pub fn from_key(alphabet: &Alphabet, key: &str) -> Result<Grid, ElsieFourError> {
        alphabet.check_key(key)?;
        Ok(Grid {
            cells: key.as_bytes().to_vec(),
            size: alphabet.size(),
        })
    }

    /// Derives a grid from a keyword.
    ///
    /// Starting from the canonical grid, each keyword symbol is looked up
    /// in the canonical (unrotated) alphabet ordering, and its (row, col)
    /// drive a row rotation by `col` and a column rotation by `row`, both
    /// on a cycling index that advances once per keyword symbol. The
    /// derivation is a pure function: the same keyword always yields the
    /// same grid, which is what lets two parties agree on a secret grid by
    /// sharing only the keyword.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::InvalidKeyword`] if the keyword contains
    /// symbols outside the alphabet.
    pub fn derive(alphabet: &Alphabet, keyword: &str) -> Result<Grid, ElsieFourError> {
        alphabet.check_keyword(keyword)?;
        let mut grid = Grid::canonical(alphabet);
        let mut i = 0;
        for symbol in keyword.bytes() {
            let pos = alphabet
                .index_of(symbol)
                .ok_or(ElsieFourError::SymbolNotFound(symbol as char))?;
            grid.rotate_row(i, pos.col);
            grid.rotate_col(i, pos.row);
            i = (i + 1) % grid.size;
        }
        Ok(grid)
    }

    /// Returns the grid side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the current permutation, flat in row-major order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Finds the position of `symbol` in the grid.
    ///
    /// # Errors
    /// Returns [`ElsieFourError::SymbolNotFound`] if the symbol is absent,
    /// which can only happen if the permutation invariant was broken.
    pub fn position_of(&self, symbol: u8) -> Result<Position, ElsieFourError> {
        self.cells
            .iter()
            .position(|&b| b == symbol)
            .map(|i| Position::from_index(i, self.size))
            .ok_or(ElsieFourError::SymbolNotFound(symbol as char))
    }

    /// Returns the symbol at `pos`.
    pub fn symbol_at(&self, pos: Position) -> u8 {
        self.cells[pos.index(self.size)]
    }

    /// Cyclically shifts one row right by `n` positions, in place.
    pub fn rotate_row(&mut self, row: usize, n: usize) {
        let s = self.size;
        self.cells[row * s..(row + 1) * s].rotate_right(n % s);
    }

    /// Cyclically shifts one column down by `n` positions, in place.
    pub fn rotate_col(&mut self, col: usize, n: usize) {
        let s = self.size;
        let n = n % s;
        if n == 0 {
            return;
        }
        let mut column = [0u8; MAX_SIZE];
        for (row, slot) in column[..s].iter_mut().enumerate() {
            *slot = self.cells[row * s + col];
        }
        column[..s].rotate_right(n);
        for (row, &symbol) in column[..s].iter().enumerate() {
            self.cells[row * s + col] = symbol;
        }
    }
}

impl fmt::Display for Grid {
    /// Renders the permutation as a flat key string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells are a permutation of an ASCII alphabet.
        for &b in &self.cells {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

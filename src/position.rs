//! 2D grid positions with componentwise modular arithmetic.
//!
//! A [`Position`] addresses one tile of a size×size grid. All arithmetic
//! wraps modulo the grid size, so positions never leave the grid.

/// A (row, col) coordinate inside a square grid.
///
/// Both components are always in `[0, size)`; the `add`/`sub` operations
/// take the grid size explicitly and wrap componentwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Row index, in `[0, size)`.
    pub row: usize,
    /// Column index, in `[0, size)`.
    pub col: usize,
}

impl Position {
    /// The top-left tile, where the marker starts.
    pub const ZERO: Position = Position { row: 0, col: 0 };

    /// Creates a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Componentwise addition modulo `size`.
    pub fn add(self, rhs: Position, size: usize) -> Position {
        Position {
            row: (self.row + rhs.row) % size,
            col: (self.col + rhs.col) % size,
        }
    }

    /// Componentwise subtraction modulo `size`.
    pub fn sub(self, rhs: Position, size: usize) -> Position {
        Position {
            row: (self.row + size - rhs.row) % size,
            col: (self.col + size - rhs.col) % size,
        }
    }

    /// Converts this position to a flat offset in row-major order.
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Builds a position from a flat row-major offset.
    pub fn from_index(index: usize, size: usize) -> Position {
        Position {
            row: index / size,
            col: index % size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps_componentwise() {
        let a = Position::new(5, 3);
        let b = Position::new(2, 4);
        assert_eq!(a.add(b, 6), Position::new(1, 1));
    }

    #[test]
    fn test_add_without_wrap() {
        let a = Position::new(1, 2);
        let b = Position::new(3, 4);
        assert_eq!(a.add(b, 7), Position::new(4, 6));
    }

    #[test]
    fn test_sub_wraps_componentwise() {
        let a = Position::new(0, 1);
        let b = Position::new(2, 5);
        assert_eq!(a.sub(b, 6), Position::new(4, 2));
    }

    #[test]
    fn test_sub_is_inverse_of_add() {
        for size in [6usize, 7] {
            for r in 0..size {
                for c in 0..size {
                    let a = Position::new(r, c);
                    let b = Position::new(size - 1, 3 % size);
                    assert_eq!(a.add(b, size).sub(b, size), a);
                }
            }
        }
    }

    #[test]
    fn test_index_roundtrip() {
        for size in [6usize, 7] {
            for i in 0..size * size {
                assert_eq!(Position::from_index(i, size).index(size), i);
            }
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(Position::ZERO, Position::new(0, 0));
        assert_eq!(Position::ZERO.index(6), 0);
    }
}

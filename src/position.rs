use core::fmt;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Row and column offsets of the 4-neighbourhood in expansion order: up, down, left, right.
/// The order decides which of several equally short paths is reported.
pub const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell coordinate. Compared and hashed structurally, so it can be used as a map key directly.
/// The derived ordering (row, then column) is the final tie-break of the A* frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// The four orthogonal neighbours in [DIRECTIONS] order. Bounds are not checked.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        DIRECTIONS
            .iter()
            .map(|&(d_row, d_col)| Position::new(self.row + d_row, self.col + d_col))
            .collect()
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    pub fn euclidean_distance(&self, other: &Position) -> f64 {
        let d_row = f64::from(self.row - other.row);
        let d_col = f64::from(self.col - other.col);
        d_row.hypot(d_col)
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_is_up_down_left_right() {
        let p = Position::new(3, 5);
        let n = p.neumann_neighborhood();
        assert_eq!(
            n.as_slice(),
            &[
                Position::new(2, 5),
                Position::new(4, 5),
                Position::new(3, 4),
                Position::new(3, 6)
            ]
        );
        assert!(n.iter().all(|q| q.is_adjacent(&p)));
    }

    #[test]
    fn distances() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }
}

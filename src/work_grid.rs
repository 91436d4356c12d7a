use crate::Position;

/// Marker of a cell the running search has not assigned a distance to yet.
pub const UNVISITED: i32 = -1;

/// Per-run scratch grid parallel to a [Grid](crate::Grid). Each cell holds [UNVISITED] or the
/// non-negative distance/cost the running search assigned. A work grid is owned by exactly one
/// run and handed over to the [SearchResult](crate::SearchResult) when the run ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkGrid {
    width: usize,
    height: usize,
    values: Vec<i32>,
}

impl WorkGrid {
    pub fn new(width: usize, height: usize) -> WorkGrid {
        WorkGrid {
            width,
            height,
            values: vec![UNVISITED; width * height],
        }
    }

    /// The 0x0 grid reported alongside upstream failures.
    pub fn empty() -> WorkGrid {
        WorkGrid::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn get_ix(&self, pos: Position) -> Option<usize> {
        (pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width)
            .then(|| pos.row as usize * self.width + pos.col as usize)
    }

    pub fn get(&self, pos: Position) -> Option<i32> {
        self.get_ix(pos).map(|ix| self.values[ix])
    }

    /// Writes `value` at `pos`; positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, value: i32) {
        debug_assert!(self.get_ix(pos).is_some(), "{} outside work grid", pos);
        if let Some(ix) = self.get_ix(pos) {
            self.values[ix] = value;
        }
    }

    pub fn is_unvisited(&self, pos: Position) -> bool {
        self.get(pos) == Some(UNVISITED)
    }

    /// Number of cells holding a distance.
    pub fn visited_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != UNVISITED).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.values.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }
}

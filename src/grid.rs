use core::fmt;
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;

use crate::{GridError, Position, WorkGrid};

/// Semantic value of a grid cell, read from the integer codes 0 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Free,
    Obstacle,
    Start,
    Goal,
}

impl Cell {
    pub fn from_code(code: i32) -> Option<Cell> {
        match code {
            0 => Some(Cell::Free),
            1 => Some(Cell::Obstacle),
            2 => Some(Cell::Start),
            3 => Some(Cell::Goal),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Cell::Free => 0,
            Cell::Obstacle => 1,
            Cell::Start => 2,
            Cell::Goal => 3,
        }
    }

    pub fn is_obstacle(self) -> bool {
        self == Cell::Obstacle
    }
}

/// Immutable rectangular occupancy grid with exactly one start and one goal cell, stored row-major.
/// Searches only ever borrow it; their mutable state lives in a [WorkGrid].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Builds a grid from rows of cell codes. Rows must have equal length, every code must be one
    /// of 0 (free), 1 (obstacle), 2 (start) or 3 (goal), and start and goal must each occur exactly
    /// once. All row lengths are checked before any code is decoded. Cells are scanned row by row
    /// and the first duplicate found is the one reported.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some((row_ix, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.as_ref().len() != width)
        {
            return Err(GridError::RaggedRow {
                row: row_ix,
                expected: width,
                found: row.as_ref().len(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row_ix, row) in rows.iter().enumerate() {
            for (col_ix, &code) in row.as_ref().iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(GridError::UnknownCell {
                    position: Position::new(row_ix as i32, col_ix as i32),
                    code,
                })?;
                cells.push(cell);
            }
        }

        let mut start: Option<Position> = None;
        let mut goal: Option<Position> = None;
        for (ix, cell) in cells.iter().enumerate() {
            let position = Position::new((ix / width) as i32, (ix % width) as i32);
            match cell {
                Cell::Start => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first,
                            second: position,
                        });
                    }
                    start = Some(position);
                }
                Cell::Goal => {
                    if let Some(first) = goal {
                        return Err(GridError::DuplicateGoal {
                            first,
                            second: position,
                        });
                    }
                    goal = Some(position);
                }
                Cell::Free | Cell::Obstacle => {}
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;
        debug!("Built {}x{} grid, start {} goal {}", height, width, start, goal);
        Ok(Grid {
            width,
            height,
            cells,
            start,
            goal,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    fn get_ix(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.width + pos.col as usize)
    }

    /// The cell at `pos`, or [None] outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.get_ix(pos).map(|ix| self.cells[ix])
    }

    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_obstacle)
    }

    /// Every coordinate of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(|(row, col)| Position::new(row, col))
    }

    /// A fresh work grid of matching dimensions with every cell unvisited.
    pub fn work_grid(&self) -> WorkGrid {
        WorkGrid::new(self.width, self.height)
    }

    /// Links every non-obstacle cell to its non-obstacle neighbours below and to the right, which
    /// yields the 4-connected components of the free space.
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cells.len());
        for pos in self.positions().filter(|p| !self.is_obstacle(*p)) {
            let parent_ix = pos.row as usize * self.width + pos.col as usize;
            [Position::new(pos.row + 1, pos.col), Position::new(pos.row, pos.col + 1)]
                .into_iter()
                .filter(|p| self.in_bounds(*p) && !self.is_obstacle(*p))
                .for_each(|p| {
                    components.union(parent_ix, p.row as usize * self.width + p.col as usize);
                });
        }
        components
    }

    /// Checks whether `a` and `b` are non-obstacle cells on the same 4-connected component.
    pub fn reachable(&self, a: &Position, b: &Position) -> bool {
        if self.is_obstacle(*a) || self.is_obstacle(*b) {
            return false;
        }
        match (self.get_ix(*a), self.get_ix(*b)) {
            (Some(a_ix), Some(b_ix)) => self.components().equiv(a_ix, b_ix),
            _ => false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let values = row.iter().map(|c| c.code()).collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

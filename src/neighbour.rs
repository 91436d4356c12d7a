use smallvec::SmallVec;

use crate::{Grid, Position, WorkGrid, N_SMALLVEC_SIZE};

/// Which in-bounds neighbours a search may step to. Every variant rejects cells outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighbourPolicy {
    /// Any non-obstacle cell, visited or not. Used by A*, which revisits cells under relaxation.
    Passable,
    /// Any cell the work grid still marks unvisited. Used by brushfire, whose seeds are the
    /// obstacles themselves.
    Unvisited,
    /// Non-obstacle cells the work grid still marks unvisited. Used by wavefront.
    PassableUnvisited,
}

impl NeighbourPolicy {
    pub fn is_valid(self, grid: &Grid, work: &WorkGrid, pos: Position) -> bool {
        grid.in_bounds(pos)
            && match self {
                NeighbourPolicy::Passable => !grid.is_obstacle(pos),
                NeighbourPolicy::Unvisited => work.is_unvisited(pos),
                NeighbourPolicy::PassableUnvisited => {
                    !grid.is_obstacle(pos) && work.is_unvisited(pos)
                }
            }
    }

    /// The valid neighbours of `pos`, in up, down, left, right order.
    pub fn neighbours(
        self,
        grid: &Grid,
        work: &WorkGrid,
        pos: Position,
    ) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        pos.neumann_neighborhood()
            .into_iter()
            .filter(|&p| self.is_valid(grid, work, p))
            .collect()
    }
}

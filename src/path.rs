use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;

use crate::{Grid, Position};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Maps each visited position to the position it was first (wavefront) or best (A*) reached from.
/// Insertion order is kept so iteration follows discovery order.
pub type PredecessorMap = FxIndexMap<Position, Position>;

/// Walks the predecessor chain back from `goal` until it arrives at `start` (both coordinates
/// equal) and returns the positions from start to goal inclusive.
///
/// Returns [None] if the chain is broken or revisits a position, which cannot happen for maps
/// produced by a search that reached the goal.
pub fn reconstruct_path(
    start: Position,
    goal: Position,
    predecessors: &PredecessorMap,
) -> Option<Vec<Position>> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        if path.len() > predecessors.len() {
            warn!("Predecessor chain from {} loops without reaching {}", goal, start);
            return None;
        }
        current = *predecessors.get(&current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}

/// Checks that every position of `path` is an in-bounds non-obstacle cell and that consecutive
/// positions are 4-adjacent.
pub fn is_contiguous(path: &[Position], grid: &Grid) -> bool {
    path.iter()
        .all(|p| grid.cell(*p).is_some_and(|cell| !cell.is_obstacle()))
        && path.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
}

use fxhash::FxHashMap;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::str::FromStr;

use crate::{
    solver::GridSolver, Grid, NeighbourPolicy, Outcome, Position, PredecessorMap, UnknownHeuristic,
    WorkGrid,
};

/// Estimate of the remaining distance to the goal. Both variants are admissible and consistent on
/// a 4-connected uniform-cost grid, so neither changes the length of the path found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// `|d_row| + |d_col|`
    Manhattan,
    /// Straight-line distance `sqrt(d_row^2 + d_col^2)`.
    Airplane,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Airplane];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Airplane => "airplane",
        }
    }

    pub fn estimate(self, from: &Position, to: &Position) -> f64 {
        match self {
            Heuristic::Manhattan => f64::from(from.manhattan_distance(to)),
            Heuristic::Airplane => from.euclidean_distance(to),
        }
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    /// Accepts the names returned by [Heuristic::name], ignoring ASCII case.
    fn from_str(s: &str) -> Result<Heuristic, UnknownHeuristic> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHeuristic(s.to_owned()))
    }
}

/// Frontier entry ordered so that [BinaryHeap] pops the smallest (f-score, g-score, row, column)
/// first. The trailing fields make expansion order deterministic among equal f-scores.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    f_score: f64,
    g_score: i32,
    position: Position,
}

impl FrontierEntry {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then(self.g_score.cmp(&other.g_score))
            .then(self.position.cmp(&other.position))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.key_cmp(self)
    }
}

#[derive(Clone, Debug)]
pub struct AStarSolver {
    pub heuristic: Heuristic,
}

impl AStarSolver {
    pub fn new(heuristic: Heuristic) -> AStarSolver {
        AStarSolver { heuristic }
    }
}

impl GridSolver for AStarSolver {
    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::Manhattan => "astar-manhattan",
            Heuristic::Airplane => "astar-airplane",
        }
    }

    /// Best-first search from the start. A neighbour is queued only when its new g-score beats
    /// the best one recorded for it, and the search stops when the goal is dequeued; the g-score
    /// it was dequeued with is the path length. The work grid receives the best g-score of every
    /// cell that was ever queued.
    fn search(&self, grid: &Grid, work: &mut WorkGrid) -> Outcome {
        let start = grid.start();
        let goal = grid.goal();
        let mut frontier = BinaryHeap::new();
        let mut best_g: FxHashMap<Position, i32> = FxHashMap::default();
        let mut predecessors = PredecessorMap::default();
        let mut reached = None;
        let mut expanded = 0usize;

        work.set(start, 0);
        best_g.insert(start, 0);
        frontier.push(FrontierEntry {
            f_score: self.heuristic.estimate(&start, &goal),
            g_score: 0,
            position: start,
        });

        while let Some(FrontierEntry {
            f_score,
            g_score,
            position,
        }) = frontier.pop()
        {
            trace!("Dequeued {} with f {:.3}, g {}", position, f_score, g_score);
            if position == goal {
                reached = Some(g_score);
                break;
            }
            // A position may sit in the frontier several times if a shorter way to it was found
            // after it was first queued; only the entry carrying its best g-score is expanded.
            if best_g.get(&position).is_some_and(|&best| g_score > best) {
                continue;
            }
            expanded += 1;
            for neighbour in NeighbourPolicy::Passable.neighbours(grid, work, position) {
                let tentative_g = g_score + 1;
                if tentative_g < best_g.get(&neighbour).copied().unwrap_or(i32::MAX) {
                    best_g.insert(neighbour, tentative_g);
                    work.set(neighbour, tentative_g);
                    predecessors.insert(neighbour, position);
                    let h_score = self.heuristic.estimate(&neighbour, &goal);
                    frontier.push(FrontierEntry {
                        f_score: f64::from(tentative_g) + h_score,
                        g_score: tentative_g,
                        position: neighbour,
                    });
                }
            }
        }
        debug!(
            "{}: expanded {} cells, {} entries left in frontier",
            self.name(),
            expanded,
            frontier.len()
        );
        Outcome::from_search(reached, start, goal, &predecessors)
    }
}

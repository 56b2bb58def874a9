//! Optimal solving via A* search with the Manhattan-distance heuristic.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap},
};

use crate::{
    SolveError,
    core::{Board, Move},
};

use super::{heuristic::manhattan_distance, solvability::is_solvable};

/// Optimal solver producing the shortest move sequence to [`Board::SOLVED`].
///
/// The search explores the graph whose vertices are boards and whose edges
/// are single legal moves, expanding boards in order of moves-taken plus the
/// Manhattan estimate of moves remaining. The estimate never overshoots, so
/// the first solved board popped ends the search with a minimum-length
/// sequence.
///
/// Unsolvable input is rejected up front with [`SolveError::Unsolvable`]
/// rather than searched. A node budget can be set as a safety valve for
/// callers that need a bound on one call; without one the search always
/// terminates on solvable input.
///
/// # Example
///
/// ```
/// use taquin_engine::{Board, Move, Solver};
///
/// let start = Board::SOLVED.apply(Move::Up)?;
/// let solution = Solver::new().solve(&start)?;
/// assert_eq!(solution, vec![Move::Down]);
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    node_limit: Option<usize>,
}

impl Solver {
    #[must_use]
    pub const fn new() -> Self {
        Self { node_limit: None }
    }

    /// Caps how many boards one [`solve`](Self::solve) call may expand;
    /// exceeding the cap returns [`SolveError::SearchExhausted`] instead of
    /// running on.
    #[must_use]
    pub const fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }

    /// Computes a minimum-length move sequence from `start` to the solved
    /// board. Already-solved input yields an empty sequence.
    pub fn solve(&self, start: &Board) -> Result<Vec<Move>, SolveError> {
        if !is_solvable(start) {
            return Err(SolveError::Unsolvable);
        }
        Search::new(start.clone()).run(self.node_limit)
    }
}

/// One discovered board with its path bookkeeping.
///
/// Nodes are only ever appended; a cheaper route to a known board gets a
/// fresh node, so the parent chain behind anything already queued stays
/// intact for path reconstruction.
#[derive(Debug, Clone)]
struct SearchNode {
    board: Board,
    cost: u32,
    parent: Option<(usize, Move)>,
}

/// Heap entry ordering the frontier by ascending estimate, then ascending
/// heuristic, then insertion order, so equal-cost searches pop in a
/// reproducible order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    estimate: u32,
    heuristic: u32,
    sequence: u64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// State for a single solve call. Everything here, nodes included, is
/// dropped when the call returns.
struct Search {
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    best_cost: HashMap<Board, u32>,
    sequence: u64,
}

impl Search {
    fn new(start: Board) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            best_cost: HashMap::new(),
            sequence: 0,
        };
        let heuristic = manhattan_distance(&start);
        search.best_cost.insert(start.clone(), 0);
        search.push(
            SearchNode {
                board: start,
                cost: 0,
                parent: None,
            },
            heuristic,
        );
        search
    }

    fn run(&mut self, node_limit: Option<usize>) -> Result<Vec<Move>, SolveError> {
        let mut expanded = 0;
        while let Some(entry) = self.frontier.pop() {
            let (board, cost) = {
                let node = &self.nodes[entry.node];
                (node.board.clone(), node.cost)
            };
            // A cheaper route to this board was queued after this entry.
            if self.best_cost.get(&board).is_some_and(|&best| best < cost) {
                continue;
            }
            if board.is_solved() {
                return Ok(self.reconstruct(entry.node));
            }
            if node_limit.is_some_and(|limit| expanded >= limit) {
                return Err(SolveError::SearchExhausted { expanded });
            }
            expanded += 1;
            for direction in board.legal_moves() {
                let child = board
                    .apply(direction)
                    .expect("moves reported legal always apply");
                let child_cost = cost + 1;
                if self
                    .best_cost
                    .get(&child)
                    .is_some_and(|&best| best <= child_cost)
                {
                    continue;
                }
                self.best_cost.insert(child.clone(), child_cost);
                let heuristic = manhattan_distance(&child);
                self.push(
                    SearchNode {
                        board: child,
                        cost: child_cost,
                        parent: Some((entry.node, direction)),
                    },
                    heuristic,
                );
            }
        }
        // The frontier only empties on input outside the solvable class,
        // which the caller already filtered.
        Err(SolveError::Unsolvable)
    }

    fn push(&mut self, node: SearchNode, heuristic: u32) {
        let entry = FrontierEntry {
            estimate: node.cost + heuristic,
            heuristic,
            sequence: self.sequence,
            node: self.nodes.len(),
        };
        self.sequence += 1;
        self.nodes.push(node);
        self.frontier.push(entry);
    }

    fn reconstruct(&self, goal: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut node = &self.nodes[goal];
        while let Some((parent, direction)) = node.parent {
            moves.push(direction);
            node = &self.nodes[parent];
        }
        moves.reverse();
        moves
    }
}

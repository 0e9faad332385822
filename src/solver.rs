use crate::engine::{Board, Move};
use crate::enumerator::{find_first_legal, find_next_legal, legal_moves};
use crate::error::MoveError;
use tracing::{info, trace};

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards examined, including the starting board.
    pub nodes_visited: u64,
    /// Moves whose subtree failed and were replaced by the next legal move.
    pub backtracks: u64,
    /// Boards with more than one peg where every legal move failed.
    pub dead_ends: u64,
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Winning moves in the order they were recorded: the search appends a
    /// move as it returns from a successful subtree, so the last move played
    /// comes first and the opening move comes last.
    pub record: Vec<Move>,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.record.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }

    /// Moves in the order they were appended to the record (last played
    /// first).
    pub fn discovered(&self) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.record.iter().copied()
    }

    /// Moves in play order, i.e. the record drained last-in-first-out.
    pub fn played(&self) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.record.iter().rev().copied()
    }

    /// Plays the solution from `start` and returns the final board.
    ///
    /// # Errors
    /// Returns `MoveError::Illegal` for the first move that cannot be
    /// played, which means the record does not belong to `start`.
    pub fn replay(&self, start: &Board) -> Result<Board, MoveError> {
        self.played().try_fold(*start, |board, mv| board.try_apply(mv))
    }
}

/// Solves the board with a backtracking depth-first search.
///
/// Moves are tried in the enumerator's fixed order, so for a given board the
/// same solution is always returned. Returns `None` if no sequence of jumps
/// leaves exactly one peg; that is an ordinary outcome, not an error.
///
/// # Examples
/// ```
/// use peg_solitaire::engine::Board;
/// use peg_solitaire::solver::solve_dfs;
///
/// let solution = solve_dfs(&Board::standard()).unwrap();
/// assert_eq!(solution.len(), 31);
/// assert!(solution.replay(&Board::standard()).unwrap().has_single_peg());
/// ```
pub fn solve_dfs(board: &Board) -> Option<Solution> {
    solve_with_stats(board).0
}

/// Like [`solve_dfs`], but also returns the search counters, whether or not
/// a solution was found.
pub fn solve_with_stats(board: &Board) -> (Option<Solution>, SearchStats) {
    info!(
        pegs = board.peg_count(),
        opening_moves = legal_moves(board).count(),
        "starting search"
    );

    let mut stats = SearchStats::default();
    let record = search(board, &mut stats);

    info!(
        solved = record.is_some(),
        nodes = stats.nodes_visited,
        backtracks = stats.backtracks,
        dead_ends = stats.dead_ends,
        "search finished"
    );

    (record.map(|record| Solution { record }), stats)
}

// Each call owns its board; a failed branch is abandoned by moving on to the
// next legal move, so nothing has to be undone.
fn search(board: &Board, stats: &mut SearchStats) -> Option<Vec<Move>> {
    stats.nodes_visited += 1;

    if board.has_single_peg() {
        return Some(Vec::new());
    }

    let mut next = find_first_legal(board);
    while let Some(mv) = next {
        if let Some(mut record) = search(&board.apply(mv), stats) {
            record.push(mv);
            return Some(record);
        }
        stats.backtracks += 1;
        next = find_next_legal(board, mv);
    }

    stats.dead_ends += 1;
    trace!(pegs = board.peg_count(), "dead end");
    None
}

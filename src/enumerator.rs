//! Move legality and the fixed candidate order.
//!
//! Candidates are `(position, direction)` pairs visited in one total order:
//! directions cycle East, South, West, North for a position, then the row
//! advances, and once the row reaches the last index the column advances and
//! the row resets to 0. The order runs from `((0, 0), East)` to
//! `((6, 6), North)`, 196 candidates in all.
//!
//! The search walks this order with `find_first_legal`/`find_next_legal`,
//! so it never needs to build a list of moves and always tries them in the
//! same sequence. That makes the solution it finds deterministic.
use crate::engine::{Board, Direction, Move, Position, BOARD_SIZE};

const LAST_INDEX: i32 = BOARD_SIZE as i32 - 1;

/// Number of `(position, direction)` candidates in one full pass.
pub const CANDIDATE_COUNT: usize = BOARD_SIZE * BOARD_SIZE * Direction::ALL.len();

/// The first candidate in enumeration order.
pub const fn first_candidate() -> Move {
    Move::new(Position::new(0, 0), Direction::East)
}

/// Returns `true` iff `mv` is a legal jump on `board`.
///
/// All of these must hold: the origin and the landing cell are inside the
/// cross, the origin and the jumped-over cell hold pegs, and the landing
/// cell is empty.
///
/// # Examples
/// ```
/// use peg_solitaire::engine::{Board, Direction, Move, Position};
/// use peg_solitaire::enumerator::is_movable;
///
/// let board = Board::standard();
/// assert!(is_movable(&board, Move::new(Position::new(3, 1), Direction::South)));
/// assert!(!is_movable(&board, Move::new(Position::new(3, 2), Direction::South)));
/// ```
pub fn is_movable(board: &Board, mv: Move) -> bool {
    Board::is_valid(mv.pos)
        && Board::is_valid(mv.landing())
        && board.is_occupied(mv.pos)
        && board.is_occupied(mv.over())
        && !board.is_occupied(mv.landing())
}

/// The candidate that follows `mv` in enumeration order, or `None` once the
/// order is exhausted.
///
/// Does not look at any board and accepts any move, legal or not.
pub fn successor(mv: Move) -> Option<Move> {
    if let Some(dir) = mv.dir.next() {
        return Some(Move::new(mv.pos, dir));
    }
    let Position { row, col } = mv.pos;
    if row < LAST_INDEX {
        Some(Move::new(Position::new(row + 1, col), Direction::East))
    } else if col < LAST_INDEX {
        Some(Move::new(Position::new(0, col + 1), Direction::East))
    } else {
        None
    }
}

/// The first legal move on `board`, or `None` if the position is stuck.
pub fn find_first_legal(board: &Board) -> Option<Move> {
    let first = first_candidate();
    if is_movable(board, first) {
        Some(first)
    } else {
        find_next_legal(board, first)
    }
}

/// The first legal move strictly after `from` in enumeration order.
///
/// `from` does not need to be legal itself; this is what lets the solver
/// resume enumeration after a failed branch.
pub fn find_next_legal(board: &Board, from: Move) -> Option<Move> {
    let mut next = successor(from);
    while let Some(mv) = next {
        if is_movable(board, mv) {
            return Some(mv);
        }
        next = successor(mv);
    }
    None
}

/// Iterator over the legal moves of a board, in enumeration order.
///
/// Built on `find_first_legal`/`find_next_legal`; it holds only a cursor.
pub struct LegalMoves<'a> {
    board: &'a Board,
    cursor: Cursor,
}

enum Cursor {
    Start,
    After(Move),
    Done,
}

/// Returns an iterator over the legal moves of `board`.
pub fn legal_moves(board: &Board) -> LegalMoves<'_> {
    LegalMoves {
        board,
        cursor: Cursor::Start,
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        let found = match self.cursor {
            Cursor::Start => find_first_legal(self.board),
            Cursor::After(mv) => find_next_legal(self.board, mv),
            Cursor::Done => return None,
        };
        self.cursor = match found {
            Some(mv) => Cursor::After(mv),
            None => Cursor::Done,
        };
        found
    }
}

//! Core board model for English peg solitaire.
//!
//! This module defines the game's fundamental components:
//! - `Position`: A (row, column) coordinate, possibly off the board.
//! - `Direction`: The four jump directions, in enumeration order.
//! - `Move`: A jump of one peg over a neighbour into an empty hole.
//! - `Board`: The 7x7 grid of pegs restricted to the cross-shaped region,
//!   with the jump primitive used by the solver.
use crate::enumerator::is_movable;
use crate::error::{BoardError, MoveError};
use std::fmt;

/// Width and height of the square grid that contains the cross.
pub const BOARD_SIZE: usize = 7;

/// The hole that is empty at the start of the standard game.
pub const CENTER: Position = Position { row: 3, col: 3 };

/// A cell coordinate. Signed so that stepping off the edge of the grid
/// yields a position that simply fails `Board::is_valid`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Returns the position `steps` unit steps away in direction `dir`.
    pub fn offset(self, dir: Direction, steps: i32) -> Position {
        let (dr, dc) = dir.step();
        Position::new(self.row + dr * steps, self.col + dc * steps)
    }

    // Only called after `Board::is_valid` has accepted the position.
    fn index(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The direction a peg jumps in.
///
/// Variants are declared in enumeration order (East < South < West < North),
/// which the solver relies on for its deterministic candidate order.
///
/// East and West step along the row index, South and North along the column
/// index. These labels are the solver's established output vocabulary and
/// are kept so printed solutions stay comparable between runs and tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Unit step as a `(row delta, column delta)` pair.
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    /// The direction that follows this one in enumeration order, or `None`
    /// after `North`.
    pub fn next(self) -> Option<Direction> {
        match self {
            Direction::East => Some(Direction::South),
            Direction::South => Some(Direction::West),
            Direction::West => Some(Direction::North),
            Direction::North => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::North => "North",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A jump: the peg at `pos` hops over its neighbour in `dir` and lands two
/// cells away.
///
/// A `Move` is just a candidate; legality against a particular board is
/// decided by [`crate::enumerator::is_movable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Position,
    pub dir: Direction,
}

impl Move {
    pub const fn new(pos: Position, dir: Direction) -> Self {
        Move { pos, dir }
    }

    /// The cell being jumped over.
    pub fn over(self) -> Position {
        self.pos.offset(self.dir, 1)
    }

    /// The cell the peg lands in.
    pub fn landing(self) -> Position {
        self.pos.offset(self.dir, 2)
    }
}

impl fmt::Display for Move {
    /// Formats as `row, col, Direction`, the line format of the reporter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.pos.row, self.pos.col, self.dir)
    }
}

/// The peg-solitaire board: a 7x7 grid where `true` means a peg is present.
///
/// Only cells inside the cross (see [`Board::is_valid`]) can ever hold a peg;
/// every constructor and mutator preserves that. The type is `Copy`, so the
/// search branches by value and never needs an undo log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns `true` iff `pos` lies inside the cross-shaped region.
    ///
    /// This is a property of the board shape only and does not look at pegs.
    ///
    /// # Examples
    /// ```
    /// use peg_solitaire::engine::{Board, Position};
    /// assert!(Board::is_valid(Position::new(3, 0)));
    /// assert!(Board::is_valid(Position::new(0, 2)));
    /// assert!(!Board::is_valid(Position::new(0, 0)));
    /// assert!(!Board::is_valid(Position::new(-1, 3)));
    /// ```
    pub fn is_valid(pos: Position) -> bool {
        let Position { row, col } = pos;
        ((2..=4).contains(&row) && (0..7).contains(&col))
            || ((2..=4).contains(&col) && (0..7).contains(&row))
    }

    /// Iterates over every cell of the cross in row-major order.
    pub fn valid_positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as i32)
            .flat_map(|row| (0..BOARD_SIZE as i32).map(move |col| Position::new(row, col)))
            .filter(|&pos| Board::is_valid(pos))
    }

    /// Creates a board with no pegs at all.
    pub fn new_empty() -> Self {
        Board {
            grid: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the standard starting position: every hole of the cross holds
    /// a peg except the center.
    ///
    /// # Examples
    /// ```
    /// use peg_solitaire::engine::{Board, CENTER};
    /// let board = Board::standard();
    /// assert_eq!(board.peg_count(), 32);
    /// assert!(!board.is_occupied(CENTER));
    /// ```
    pub fn standard() -> Self {
        let mut board = Board::new_empty();
        for pos in Board::valid_positions().filter(|&pos| pos != CENTER) {
            let (r, c) = pos.index();
            board.grid[r][c] = true;
        }
        board
    }

    /// Returns `true` if a peg sits at `pos`. Positions outside the cross
    /// (including ones off the grid entirely) are never occupied.
    pub fn is_occupied(&self, pos: Position) -> bool {
        if !Board::is_valid(pos) {
            return false;
        }
        let (r, c) = pos.index();
        self.grid[r][c]
    }

    /// Puts a peg at `pos`.
    ///
    /// # Errors
    /// Returns `BoardError::OutsideCross` if `pos` is not a cell of the cross.
    pub fn place_peg(&mut self, pos: Position) -> Result<(), BoardError> {
        if !Board::is_valid(pos) {
            return Err(BoardError::OutsideCross(pos));
        }
        let (r, c) = pos.index();
        self.grid[r][c] = true;
        Ok(())
    }

    /// Number of pegs on the board.
    pub fn peg_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&peg| peg).count()
    }

    /// The search's success test: exactly one peg left.
    ///
    /// Stops scanning as soon as a second peg is seen.
    pub fn has_single_peg(&self) -> bool {
        let mut seen = 0;
        for &peg in self.grid.iter().flatten() {
            if peg {
                seen += 1;
                if seen > 1 {
                    return false;
                }
            }
        }
        seen == 1
    }

    /// Performs a jump and returns the resulting board, leaving `self`
    /// untouched.
    ///
    /// # Panics
    /// Panics if `mv` is not legal on this board. Callers are expected to
    /// have checked it with `is_movable` (the enumerator only hands out legal
    /// moves); use [`Board::try_apply`] for moves from untrusted input.
    pub fn apply(&self, mv: Move) -> Board {
        assert!(is_movable(self, mv), "illegal jump {mv} on board:\n{self}");
        self.jump_unchecked(mv)
    }

    /// Checked variant of [`Board::apply`].
    ///
    /// # Errors
    /// Returns `MoveError::Illegal` if the jump is not possible on this board.
    pub fn try_apply(&self, mv: Move) -> Result<Board, MoveError> {
        if !is_movable(self, mv) {
            return Err(MoveError::Illegal(mv));
        }
        Ok(self.jump_unchecked(mv))
    }

    fn jump_unchecked(&self, mv: Move) -> Board {
        let mut next = *self;
        let (r, c) = mv.pos.index();
        next.grid[r][c] = false;
        let (r, c) = mv.over().index();
        next.grid[r][c] = false;
        let (r, c) = mv.landing().index();
        next.grid[r][c] = true;
        next
    }
}

impl fmt::Display for Board {
    /// Renders one line per row: `o` for a peg, `.` for an empty hole and a
    /// space for cells outside the cross. Trailing spaces are dropped, so the
    /// output parses back with `utils::board_from_str_array`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as i32 {
            let line: String = (0..BOARD_SIZE as i32)
                .map(|col| {
                    let pos = Position::new(row, col);
                    if !Board::is_valid(pos) {
                        ' '
                    } else if self.is_occupied(pos) {
                        'o'
                    } else {
                        '.'
                    }
                })
                .collect();
            f.write_str(line.trim_end())?;
            if row < BOARD_SIZE as i32 - 1 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

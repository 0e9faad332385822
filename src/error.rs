use crate::engine::{Move, Position, BOARD_SIZE};

/// Errors that can occur while building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid number of rows: expected at most {max}, found {0}", max = BOARD_SIZE)]
    TooManyRows(usize),

    #[error("row {row} is too long: expected at most {max} characters, found {len}", max = BOARD_SIZE)]
    RowTooLong { row: usize, len: usize },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },

    #[error("cell {0} is outside the cross and cannot hold a peg")]
    OutsideCross(Position),
}

/// Errors that can occur when applying moves from outside the solver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal jump {0}")]
    Illegal(Move),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::UnrecognizedChar {
            ch: 'x',
            row: 2,
            col: 4,
        };
        assert_eq!(err.to_string(), "unrecognized character 'x' in row 2 col 4");

        let err = BoardError::OutsideCross(Position::new(0, 6));
        assert_eq!(
            err.to_string(),
            "cell (0, 6) is outside the cross and cannot hold a peg"
        );
    }

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Illegal(Move::new(Position::new(3, 1), Direction::South));
        assert_eq!(err.to_string(), "illegal jump 3, 1, South");
    }
}

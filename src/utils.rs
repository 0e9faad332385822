use crate::engine::{Board, Position, BOARD_SIZE};
use crate::error::BoardError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents a row, starting from row 0. Fewer than
/// `BOARD_SIZE` rows may be given, and rows may be shorter than
/// `BOARD_SIZE` characters; anything not written out holds no peg.
///
/// Valid characters are:
/// - `'o'`: a peg
/// - `'.'` or `' '`: no peg (an empty hole, or a cell outside the cross)
///
/// This is the same format `Board`'s `Display` implementation produces.
///
/// # Errors
/// * `BoardError::TooManyRows` if `s` has more than `BOARD_SIZE` rows.
/// * `BoardError::RowTooLong` if a row has more than `BOARD_SIZE` characters.
/// * `BoardError::UnrecognizedChar` for any other character.
/// * `BoardError::OutsideCross` if a peg is placed outside the cross.
///
/// # Examples
/// ```
/// use peg_solitaire::engine::{Board, Position};
/// use peg_solitaire::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["", "", "", " oo."]).unwrap();
/// assert_eq!(board.peg_count(), 2);
/// assert!(board.is_occupied(Position::new(3, 1)));
///
/// // Corners are not part of the board.
/// assert!(board_from_str_array(&["o"]).is_err());
/// ```
pub fn board_from_str_array<S: AsRef<str>>(s: &[S]) -> Result<Board, BoardError> {
    if s.len() > BOARD_SIZE {
        return Err(BoardError::TooManyRows(s.len()));
    }

    let mut board = Board::new_empty();

    for (r, row_str) in s.iter().enumerate() {
        let row_str = row_str.as_ref();
        let len = row_str.chars().count();
        if len > BOARD_SIZE {
            return Err(BoardError::RowTooLong { row: r, len });
        }

        for (c, ch) in row_str.chars().enumerate() {
            match ch {
                'o' => board.place_peg(Position::new(r as i32, c as i32))?,
                '.' | ' ' => {}
                _ => return Err(BoardError::UnrecognizedChar { ch, row: r, col: c }),
            }
        }
    }

    Ok(board)
}

/// Parses a whole board description, one row per line.
///
/// Trailing whitespace (including `\r`) is ignored on each line. Leading
/// spaces are kept since they position the arms of the cross. Trailing
/// blank lines are dropped.
pub fn board_from_text(text: &str) -> Result<Board, BoardError> {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    board_from_str_array(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CENTER;

    #[test]
    fn test_board_from_str_array_standard() {
        let board = board_from_str_array(&[
            "  ooo",
            "  ooo",
            "ooooooo",
            "ooo.ooo",
            "ooooooo",
            "  ooo",
            "  ooo",
        ])
        .unwrap();
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["  oXo"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::UnrecognizedChar {
                ch: 'X',
                row: 0,
                col: 3
            }
        );
    }

    #[test]
    fn test_board_from_str_array_peg_outside_cross() {
        let result = board_from_str_array(&["", "o"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::OutsideCross(Position::new(1, 0))
        );
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let too_long_row = ".".repeat(BOARD_SIZE + 1);
        let result = board_from_str_array(&[too_long_row]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::RowTooLong {
                row: 0,
                len: BOARD_SIZE + 1
            }
        );
    }

    #[test]
    fn test_board_from_str_array_too_many_rows() {
        let rows = vec![""; BOARD_SIZE + 1];
        let result = board_from_str_array(&rows);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid number of rows"));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let rows: [&str; 0] = [];
        let board = board_from_str_array(&rows).unwrap();
        assert_eq!(board, Board::new_empty());
    }

    #[test]
    fn test_board_from_text_ignores_trailing_whitespace() {
        let text = "\n\n\n   o   \r\n\n\n";
        let board = board_from_text(text).unwrap();
        assert!(board.has_single_peg());
        assert!(board.is_occupied(CENTER));
    }

    #[test]
    fn test_board_from_text_round_trips_display() {
        let board = Board::standard();
        assert_eq!(board_from_text(&board.to_string()).unwrap(), board);
    }
}

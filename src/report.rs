//! Output of a solution record.
//!
//! The search appends each winning move while unwinding, so the record
//! holds the last jump first. The reporter drains it last-in-first-out by
//! default, which prints the jumps in the order they are played from the
//! starting board. `ReportOrder::Discovery` prints the record as stored.
use crate::engine::Move;
use crate::solver::Solution;
use std::io::{self, Write};

/// Order in which the reporter emits a solution record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportOrder {
    /// Most recently appended move first (the opening move comes out first).
    #[default]
    Lifo,
    /// Append order: the move found deepest in the search comes out first.
    Discovery,
}

/// Returns the record's moves in the requested order.
pub fn ordered_moves(solution: &Solution, order: ReportOrder) -> Vec<Move> {
    match order {
        ReportOrder::Lifo => solution.played().collect(),
        ReportOrder::Discovery => solution.discovered().collect(),
    }
}

/// Writes one `row, col, Direction` line per move. An empty record writes
/// nothing.
pub fn write_solution<W: Write>(
    out: &mut W,
    solution: &Solution,
    order: ReportOrder,
) -> io::Result<()> {
    for mv in ordered_moves(solution, order) {
        writeln!(out, "{mv}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Direction, Position};
    use crate::solver::solve_dfs;

    fn two_move_solution() -> Solution {
        // Recorded deepest first.
        Solution {
            record: vec![
                Move::new(Position::new(1, 2), Direction::East),
                Move::new(Position::new(2, 4), Direction::North),
            ],
        }
    }

    fn render(solution: &Solution, order: ReportOrder) -> String {
        let mut out = Vec::new();
        write_solution(&mut out, solution, order).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lifo_drains_most_recent_first() {
        assert_eq!(
            render(&two_move_solution(), ReportOrder::Lifo),
            "2, 4, North\n1, 2, East\n"
        );
    }

    #[test]
    fn test_discovery_keeps_append_order() {
        assert_eq!(
            render(&two_move_solution(), ReportOrder::Discovery),
            "1, 2, East\n2, 4, North\n"
        );
    }

    #[test]
    fn test_empty_record_prints_nothing() {
        let solution = Solution { record: Vec::new() };
        assert_eq!(render(&solution, ReportOrder::Lifo), "");
        assert_eq!(render(&solution, ReportOrder::Discovery), "");
    }

    #[test]
    fn test_standard_report() {
        let solution = solve_dfs(&Board::standard()).unwrap();
        let text = render(&solution, ReportOrder::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 31);
        assert_eq!(lines[0], "3, 1, South");
        assert_eq!(lines[30], "3, 4, South");
        for line in &lines {
            let name = line.rsplit(", ").next().unwrap();
            assert!(["East", "South", "West", "North"].contains(&name), "{line}");
        }

        let reversed: Vec<Move> = ordered_moves(&solution, ReportOrder::Discovery)
            .into_iter()
            .rev()
            .collect();
        assert_eq!(reversed, ordered_moves(&solution, ReportOrder::Lifo));
    }
}

// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod fs;
pub mod parser;
pub mod puzzles;
pub mod solver;
pub mod state;

mod vec2d;

use std::error::Error;
use std::str::FromStr;

use crate::parser::ParserErr;
use crate::solver::SolverOk;

pub trait LoadBoard {
    fn load_board<B: FromStr<Err = ParserErr>>(&self) -> Result<B, Box<dyn Error>>;
}

impl LoadBoard for str {
    fn load_board<B: FromStr<Err = ParserErr>>(&self) -> Result<B, Box<dyn Error>> {
        let board = fs::read_file(self)?;
        Ok(board.parse()?)
    }
}

pub trait Solve {
    fn solve(&self, print_status: bool) -> SolverOk<Self>
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use difference::Changeset;

    use crate::config::Puzzle::{self, Jam, Tilt};
    use crate::puzzles::jam::JamState;
    use crate::puzzles::tilt::TiltState;
    use crate::state::State;

    use super::*;

    #[test]
    fn test_boards() {
        // path length includes the start
        let boards = [
            (Jam, "one-car.txt", Some(2), 2, 2),
            (Jam, "blocked-exit.txt", Some(3), 11, 5),
            (Jam, "solved.txt", Some(1), 1, 1),
            (Jam, "stuck.txt", None, 1, 1),
            (Tilt, "green-hole.txt", Some(2), 9, 4),
            (Tilt, "blue-hole.txt", None, 14, 4),
            (Tilt, "no-hole.txt", None, 21, 5),
        ];

        let succeeded = boards
            .iter()
            .filter(|&&(puzzle, name, path_len, created, unique)| {
                test_board(puzzle, name, path_len, created, unique)
            })
            .count();
        assert_eq!(succeeded, boards.len());
    }

    fn test_board(
        puzzle: Puzzle,
        board_name: &str,
        path_len: Option<usize>,
        created: usize,
        unique: usize,
    ) -> bool {
        let board_path = format!("boards/{}/{}", puzzle, board_name);
        println!("Solving {}", board_path);

        let out = match puzzle {
            Jam => summary(board_path.load_board::<JamState>().unwrap()),
            Tilt => summary(board_path.load_board::<TiltState>().unwrap()),
            _ => unreachable!(),
        };

        let mut expected = String::new();
        match path_len {
            None => writeln!(expected, "No solution").unwrap(),
            Some(len) => writeln!(expected, "Path len: {}", len).unwrap(),
        }
        writeln!(expected, "Created: {}", created).unwrap();
        writeln!(expected, "Unique: {}", unique).unwrap();

        if out != expected {
            println!("{}:\n{}", board_path, Changeset::new(&expected, &out, "\n"));
            false
        } else {
            true
        }
    }

    fn summary<S: State>(start: S) -> String {
        let solution = start.solve(false);
        let mut out = String::new();
        match solution.path_states {
            None => writeln!(out, "No solution").unwrap(),
            Some(ref states) => {
                writeln!(out, "Path len: {}", states.len()).unwrap();
                assert_eq!(&states[0], &start);
                assert!(states.last().unwrap().is_goal());
            }
        }
        writeln!(out, "Created: {}", solution.stats.total_created()).unwrap();
        writeln!(out, "Unique: {}", solution.stats.total_unique()).unwrap();
        out
    }

    #[test]
    fn load_errors() {
        let missing = "boards/jam/missing.txt".load_board::<JamState>();
        assert!(missing.is_err());

        let overlap = "boards/jam/overlap.txt".load_board::<JamState>();
        assert_eq!(
            overlap.unwrap_err().to_string(),
            ParserErr::Overlap('B').to_string()
        );
    }
}

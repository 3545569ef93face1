use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which puzzle the driver should load and solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Puzzle {
    Strings,
    Water,
    Jam,
    Tilt,
}

pub const PUZZLES: [Puzzle; 4] = [Puzzle::Strings, Puzzle::Water, Puzzle::Jam, Puzzle::Tilt];

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Puzzle::Strings => write!(f, "strings"),
            Puzzle::Water => write!(f, "water"),
            Puzzle::Jam => write!(f, "jam"),
            Puzzle::Tilt => write!(f, "tilt"),
        }
    }
}

impl FromStr for Puzzle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PUZZLES
            .iter()
            .cloned()
            .find(|puzzle| puzzle.to_string() == s)
            .ok_or_else(|| format!("Unknown puzzle: {}", s))
    }
}

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::data::{Pos, MAX_SIZE};
use crate::puzzles::jam::{Car, JamState, Orientation};
use crate::puzzles::tilt::{TiltCell, TiltState};
use crate::puzzles::water::WaterState;
use crate::vec2d::Vec2d;

/// Line numbers start at 1 and count empty lines too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErr {
    MissingLine(usize),
    TokenCount(usize),
    Number(String),
    Pos(usize, usize),
    TooLarge,
    EmptyBoard,
    NotSquare,
    Diagonal(char),
    OutOfBounds(char),
    Overlap(char),
    DuplicateCar(char),
    Letter(char),
    LengthMismatch,
    NoBuckets,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParserErr::MissingLine(line) => write!(f, "Missing line {}", line),
            ParserErr::TokenCount(line) => write!(f, "Wrong number of values on line {}", line),
            ParserErr::Number(token) => write!(f, "Not a valid number: {}", token),
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Board larger than 255 rows/columns"),
            ParserErr::EmptyBoard => write!(f, "Board has no cells"),
            ParserErr::NotSquare => write!(f, "Board is not square"),
            ParserErr::Diagonal(letter) => {
                write!(f, "Car {} is neither horizontal nor vertical", letter)
            }
            ParserErr::OutOfBounds(letter) => write!(f, "Car {} doesn't fit on the board", letter),
            ParserErr::Overlap(letter) => write!(f, "Car {} overlaps another car", letter),
            ParserErr::DuplicateCar(letter) => write!(f, "More than one car {}", letter),
            ParserErr::Letter(c) => write!(f, "Not an uppercase letter: {}", c),
            ParserErr::LengthMismatch => write!(f, "Start and final string differ in length"),
            ParserErr::NoBuckets => write!(f, "No buckets"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for JamState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_jam(s)
    }
}

impl FromStr for TiltState {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tilt(s)
    }
}

/// Non-empty lines split into whitespace separated tokens.
struct Lines<'a> {
    lines: Vec<(usize, Vec<&'a str>)>,
    next: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        let lines = input
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
            .filter(|(_, tokens)| !tokens.is_empty())
            .collect();
        Lines { lines, next: 0 }
    }

    /// Returns the line number and its tokens.
    fn next_any(&mut self) -> Result<(usize, &[&'a str]), ParserErr> {
        let missing = match self.next.checked_sub(1) {
            Some(prev) => self.lines[prev].0 + 1,
            None => 1,
        };
        let (line, tokens) = self.lines.get(self.next).ok_or(ParserErr::MissingLine(missing))?;
        self.next += 1;
        Ok((*line, tokens.as_slice()))
    }

    fn next_exact(&mut self, count: usize) -> Result<&[&'a str], ParserErr> {
        let (line, tokens) = self.next_any()?;
        if tokens.len() != count {
            return Err(ParserErr::TokenCount(line));
        }
        Ok(tokens)
    }
}

fn parse_number<T: FromStr>(token: &str) -> Result<T, ParserErr> {
    token
        .parse()
        .map_err(|_| ParserErr::Number(token.to_string()))
}

/// Board dimension, 1 to `MAX_SIZE`.
fn parse_size(token: &str) -> Result<u8, ParserErr> {
    let size: usize = parse_number(token)?;
    if size == 0 {
        Err(ParserErr::EmptyBoard)
    } else if size > MAX_SIZE {
        Err(ParserErr::TooLarge)
    } else {
        Ok(size as u8)
    }
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// First char that keeps `token` from being a single uppercase letter.
fn bad_letter(token: &str) -> char {
    token
        .chars()
        .find(|c| !c.is_ascii_uppercase())
        .or_else(|| token.chars().nth(1))
        .unwrap_or(' ')
}

/// Parses a jam board:
///
/// ```text
/// rows cols
/// number of cars
/// letter start_row start_col end_row end_col
/// ...
/// ```
pub fn parse_jam(board: &str) -> Result<JamState, ParserErr> {
    debug!("Parsing jam board");

    let mut lines = Lines::new(board);

    let dims = lines.next_exact(2)?;
    let rows = parse_size(dims[0])?;
    let cols = parse_size(dims[1])?;

    let count: usize = parse_number(lines.next_exact(1)?[0])?;

    let mut occupied = Vec2d::new(rows, cols, false);
    let mut cars: Vec<Car> = Vec::new();
    for _ in 0..count {
        let tokens = lines.next_exact(5)?;

        let letter = single_char(tokens[0])
            .filter(char::is_ascii_uppercase)
            .ok_or_else(|| ParserErr::Letter(bad_letter(tokens[0])))?;
        if cars.iter().any(|car| car.letter() == letter) {
            return Err(ParserErr::DuplicateCar(letter));
        }

        let mut coords = [0usize; 4];
        for (coord, token) in coords.iter_mut().zip(&tokens[1..]) {
            *coord = parse_number(token)?;
        }
        let [r1, c1, r2, c2] = coords;

        // endpoints can be given in either order
        let (r_lo, r_hi) = (r1.min(r2), r1.max(r2));
        let (c_lo, c_hi) = (c1.min(c2), c1.max(c2));
        let (orientation, length) = if r1 == r2 {
            (Orientation::Horizontal, c_hi - c_lo + 1)
        } else if c1 == c2 {
            (Orientation::Vertical, r_hi - r_lo + 1)
        } else {
            return Err(ParserErr::Diagonal(letter));
        };
        if r_hi >= usize::from(rows) || c_hi >= usize::from(cols) {
            return Err(ParserErr::OutOfBounds(letter));
        }

        let car = Car::new(
            letter,
            orientation,
            length as u8,
            Pos::new(r_lo as u8, c_lo as u8),
        );
        for pos in car.cells() {
            if occupied[pos] {
                return Err(ParserErr::Overlap(letter));
            }
            occupied[pos] = true;
        }
        cars.push(car);
    }

    debug!("Parsed {} cars on a {}x{} board", cars.len(), rows, cols);
    Ok(JamState::new(rows, cols, cars))
}

/// Parses a tilt board: the size on the first line, then `size` rows of `size`
/// cells, each one of `. * O G B`.
pub fn parse_tilt(board: &str) -> Result<TiltState, ParserErr> {
    debug!("Parsing tilt board");

    let mut lines = Lines::new(board);
    let size = parse_size(lines.next_exact(1)?[0])?;

    let mut grid = Vec2d::new(size, size, TiltCell::Empty);
    for r in 0..size {
        let (_, tokens) = lines.next_any()?;
        if tokens.len() != usize::from(size) {
            return Err(ParserErr::NotSquare);
        }
        for (c, token) in tokens.iter().enumerate() {
            let cell = single_char(token)
                .and_then(TiltCell::from_char)
                .ok_or_else(|| ParserErr::Pos(usize::from(r), c))?;
            grid[Pos::new(r, c as u8)] = cell;
        }
    }

    debug!("Parsed {}x{} tilt board", size, size);
    Ok(TiltState::new(grid))
}

/// Parses the target amount and bucket capacities given as separate arguments.
pub fn parse_water(amount: &str, capacities: &[&str]) -> Result<WaterState, ParserErr> {
    let amount = parse_number(amount)?;
    let capacities = capacities
        .iter()
        .map(|token| parse_number(token))
        .collect::<Result<Vec<u32>, _>>()?;
    WaterState::new(amount, capacities)
}

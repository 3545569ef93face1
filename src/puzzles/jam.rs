use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// The car that has to escape.
pub const EXIT_CAR: char = 'X';

/// Order in which each car's moves are generated.
const JAM_DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn allows(self, dir: Dir) -> bool {
        match self {
            Orientation::Horizontal => !dir.is_vertical(),
            Orientation::Vertical => dir.is_vertical(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car {
    letter: char,
    orientation: Orientation,
    length: u8,
    /// top left cell
    head: Pos,
}

impl Car {
    pub(crate) fn new(letter: char, orientation: Orientation, length: u8, head: Pos) -> Self {
        Car {
            letter,
            orientation,
            length,
            head,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn row(&self) -> u8 {
        self.head.r
    }

    pub fn col(&self) -> u8 {
        self.head.c
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = Pos> {
        let (head, orientation) = (self.head, self.orientation);
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Pos::new(head.r, head.c + i),
            Orientation::Vertical => Pos::new(head.r + i, head.c),
        })
    }

    /// The cell the car moves into when it moves one step in `dir`.
    fn lead(&self, dir: Dir) -> Option<Pos> {
        let len = i32::from(self.length);
        match dir {
            Dir::Up => self.head.offset(-1, 0),
            Dir::Down => self.head.offset(len, 0),
            Dir::Left => self.head.offset(0, -1),
            Dir::Right => self.head.offset(0, len),
        }
    }

    /// The cell the car leaves when it moves one step in `dir`.
    fn trail(&self, dir: Dir) -> Pos {
        let last = self.length - 1;
        match dir {
            Dir::Up => Pos::new(self.head.r + last, self.head.c),
            Dir::Left => Pos::new(self.head.r, self.head.c + last),
            Dir::Down | Dir::Right => self.head,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveErr {
    NoSuchCar(char),
    WrongAxis(char, Dir),
    Blocked(char, Dir),
    NoMovement,
}

impl Display for MoveErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MoveErr::NoSuchCar(letter) => write!(f, "No car {}", letter),
            MoveErr::WrongAxis(letter, dir) => write!(f, "Car {} can't move {}", letter, dir),
            MoveErr::Blocked(letter, dir) => write!(f, "Car {} is blocked {}", letter, dir),
            MoveErr::NoMovement => write!(f, "Cannot move car onto itself"),
        }
    }
}

impl Error for MoveErr {}

/// Letter of the car covering a cell, shown as `.` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Slot(Option<char>);

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.unwrap_or('.'))
    }
}

/// Sliding block puzzle - get car `X` to the exit by sliding cars along their axis.
///
/// The mask is the source of truth for which cells are free, the cars know their
/// shapes. Both only ever change together in `step`.
#[derive(Clone)]
pub struct JamState {
    mask: Vec2d<Slot>,
    cars: Vec<Car>,
}

impl JamState {
    /// The caller makes sure the cars fit on the board and don't overlap.
    pub(crate) fn new(rows: u8, cols: u8, cars: Vec<Car>) -> Self {
        let mut mask = Vec2d::new(rows, cols, Slot(None));
        for car in &cars {
            for pos in car.cells() {
                mask[pos] = Slot(Some(car.letter));
            }
        }
        JamState { mask, cars }
    }

    pub fn rows(&self) -> u8 {
        self.mask.rows()
    }

    pub fn cols(&self) -> u8 {
        self.mask.cols()
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Letter of the car covering `pos`.
    pub fn cell(&self, pos: Pos) -> Option<char> {
        if self.mask.contains(pos) {
            self.mask[pos].0
        } else {
            None
        }
    }

    /// Moves a car by up to `amount` cells, stopping early if it hits something.
    pub fn slide(&self, letter: char, dir: Dir, amount: usize) -> Result<JamState, MoveErr> {
        let index = self
            .cars
            .iter()
            .position(|car| car.letter == letter)
            .ok_or(MoveErr::NoSuchCar(letter))?;
        if !self.cars[index].orientation.allows(dir) {
            return Err(MoveErr::WrongAxis(letter, dir));
        }
        if amount == 0 {
            return Err(MoveErr::NoMovement);
        }

        let mut new_state = self.clone();
        let mut moved = 0;
        while moved < amount {
            match new_state.free_lead(index, dir) {
                Some(lead) => new_state.step(index, dir, lead),
                None => break,
            }
            moved += 1;
        }

        if moved == 0 {
            Err(MoveErr::Blocked(letter, dir))
        } else {
            Ok(new_state)
        }
    }

    /// The cell car `index` would move into, if it exists and is empty.
    fn free_lead(&self, index: usize, dir: Dir) -> Option<Pos> {
        let car = &self.cars[index];
        if !car.orientation.allows(dir) {
            return None;
        }
        car.lead(dir)
            .filter(|&pos| self.mask.contains(pos) && self.mask[pos].0.is_none())
    }

    fn step(&mut self, index: usize, dir: Dir, lead: Pos) {
        let car = &mut self.cars[index];
        let trail = car.trail(dir);
        self.mask[lead] = Slot(Some(car.letter));
        self.mask[trail] = Slot(None);
        car.head = match dir {
            Dir::Up | Dir::Left => lead,
            Dir::Down => Pos::new(car.head.r + 1, car.head.c),
            Dir::Right => Pos::new(car.head.r, car.head.c + 1),
        };
    }
}

impl State for JamState {
    fn is_goal(&self) -> bool {
        match self.cars.iter().find(|car| car.letter == EXIT_CAR) {
            Some(car) => usize::from(car.head.c) + 2 == usize::from(self.mask.cols()),
            None => false,
        }
    }

    fn expand(&self) -> Vec<Self> {
        let mut new_states = Vec::new();
        for index in 0..self.cars.len() {
            for &dir in &JAM_DIRECTIONS {
                // every cell of a longer slide is a separate move
                let mut cur = self.clone();
                while let Some(lead) = cur.free_lead(index, dir) {
                    cur.step(index, dir, lead);
                    new_states.push(cur.clone());
                }
            }
        }
        new_states
    }
}

impl PartialEq for JamState {
    fn eq(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl Eq for JamState {}

impl Hash for JamState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask.hash(state);
    }
}

impl Display for JamState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mask)
    }
}

impl Debug for JamState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

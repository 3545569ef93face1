use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::parser::ParserErr;
use crate::state::State;

#[derive(Debug, PartialEq, Eq)]
struct StringPuzzle {
    start: Vec<u8>,
    target: Vec<u8>,
}

/// Turn one string into another by changing a single letter by one step (wrapping around
/// the alphabet) per move. Letters that already match the target are never touched.
#[derive(Clone)]
pub struct StringState {
    current: Vec<u8>,
    puzzle: Arc<StringPuzzle>,
}

impl StringState {
    pub fn new(start: &str, target: &str) -> Result<Self, ParserErr> {
        let start = letters(start)?;
        let target = letters(target)?;
        if start.len() != target.len() {
            return Err(ParserErr::LengthMismatch);
        }

        Ok(StringState {
            current: start.clone(),
            puzzle: Arc::new(StringPuzzle { start, target }),
        })
    }

    pub fn start(&self) -> String {
        to_string(&self.puzzle.start)
    }

    pub fn target(&self) -> String {
        to_string(&self.puzzle.target)
    }

    pub fn current(&self) -> String {
        to_string(&self.current)
    }

    fn with_letter(&self, i: usize, letter: u8) -> Self {
        let mut new_state = self.clone();
        new_state.current[i] = letter;
        new_state
    }
}

fn letters(s: &str) -> Result<Vec<u8>, ParserErr> {
    match s.chars().find(|c| !c.is_ascii_uppercase()) {
        Some(c) => Err(ParserErr::Letter(c)),
        None => Ok(s.bytes().collect()),
    }
}

fn to_string(letters: &[u8]) -> String {
    letters.iter().map(|&b| char::from(b)).collect()
}

fn prev_letter(letter: u8) -> u8 {
    b'A' + (letter - b'A' + 25) % 26
}

fn next_letter(letter: u8) -> u8 {
    b'A' + (letter - b'A' + 1) % 26
}

impl State for StringState {
    fn is_goal(&self) -> bool {
        self.current == self.puzzle.target
    }

    fn expand(&self) -> Vec<Self> {
        let mut new_states = Vec::new();
        for (i, (&cur, &target)) in self.current.iter().zip(&self.puzzle.target).enumerate() {
            if cur == target {
                continue;
            }
            new_states.push(self.with_letter(i, prev_letter(cur)));
            new_states.push(self.with_letter(i, next_letter(cur)));
        }
        new_states
    }
}

impl PartialEq for StringState {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Eq for StringState {}

impl Hash for StringState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.current.hash(state);
    }
}

impl Display for StringState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current())
    }
}

impl Debug for StringState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

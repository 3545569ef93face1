use std::fmt::{self, Display, Formatter};

/// Boards are indexed by `u8` so they can't have more rows or columns than this.
pub const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// `None` if the result doesn't fit - callers still need to check the grid bounds.
    pub(crate) fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = i32::from(self.r) + dr;
        let c = i32::from(self.c) + dc;
        if r < 0 || c < 0 || r > i32::from(u8::max_value()) || c > i32::from(u8::max_value()) {
            None
        } else {
            Some(Pos::new(r as u8, c as u8))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub fn is_vertical(self) -> bool {
        self == Dir::Up || self == Dir::Down
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "up"),
            Dir::Right => write!(f, "right"),
            Dir::Down => write!(f, "down"),
            Dir::Left => write!(f, "left"),
        }
    }
}

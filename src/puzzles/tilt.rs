use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Order in which tilts are tried.
const TILT_DIRECTIONS: [Dir; 4] = [Dir::Down, Dir::Up, Dir::Right, Dir::Left];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltCell {
    Empty,
    Blocker,
    Hole,
    Green,
    Blue,
}

impl TiltCell {
    pub(crate) fn from_char(c: char) -> Option<TiltCell> {
        match c {
            '.' => Some(TiltCell::Empty),
            '*' => Some(TiltCell::Blocker),
            'O' => Some(TiltCell::Hole),
            'G' => Some(TiltCell::Green),
            'B' => Some(TiltCell::Blue),
            _ => None,
        }
    }
}

impl Display for TiltCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            TiltCell::Empty => '.',
            TiltCell::Blocker => '*',
            TiltCell::Hole => 'O',
            TiltCell::Green => 'G',
            TiltCell::Blue => 'B',
        };
        write!(f, "{}", c)
    }
}

/// Tilting the board slides every slider as far as it goes in one direction.
/// Green sliders have to fall into holes, blue ones must never do so.
#[derive(Clone)]
pub struct TiltState {
    grid: Vec2d<TiltCell>,
    num_green: usize,
    num_blue: usize,
    /// blue sliders on the starting board - none of them may be lost
    num_blue_initial: usize,
}

impl TiltState {
    /// The caller makes sure the grid is square.
    pub(crate) fn new(grid: Vec2d<TiltCell>) -> Self {
        let num_green = grid.iter().filter(|&&cell| cell == TiltCell::Green).count();
        let num_blue = grid.iter().filter(|&&cell| cell == TiltCell::Blue).count();
        TiltState {
            grid,
            num_green,
            num_blue,
            num_blue_initial: num_blue,
        }
    }

    pub fn size(&self) -> u8 {
        self.grid.rows()
    }

    pub fn cell(&self, pos: Pos) -> TiltCell {
        self.grid[pos]
    }

    pub fn num_green(&self) -> usize {
        self.num_green
    }

    pub fn num_blue(&self) -> usize {
        self.num_blue
    }

    /// `k`-th cell of line `line`, counting from the edge the sliders move towards.
    fn line_pos(&self, dir: Dir, line: u8, k: u8) -> Pos {
        let last = self.size() - 1;
        match dir {
            Dir::Up => Pos::new(k, line),
            Dir::Down => Pos::new(last - k, line),
            Dir::Left => Pos::new(line, k),
            Dir::Right => Pos::new(line, last - k),
        }
    }

    /// Returns `None` if a blue slider would fall into a hole.
    pub fn tilt(&self, dir: Dir) -> Option<TiltState> {
        let mut new_state = self.clone();
        let size = self.size();

        for line in 0..size {
            // where the next slider in this line ends up
            let mut open = 0;
            for k in 0..size {
                let pos = new_state.line_pos(dir, line, k);
                match new_state.grid[pos] {
                    TiltCell::Empty => {}
                    TiltCell::Blocker => open = k + 1,
                    TiltCell::Hole => open = k,
                    TiltCell::Blue => {
                        let dest = new_state.line_pos(dir, line, open);
                        if new_state.grid[dest] == TiltCell::Hole {
                            return None;
                        }
                        new_state.grid[pos] = TiltCell::Empty;
                        new_state.grid[dest] = TiltCell::Blue;
                        open += 1;
                    }
                    TiltCell::Green => {
                        let dest = new_state.line_pos(dir, line, open);
                        new_state.grid[pos] = TiltCell::Empty;
                        if new_state.grid[dest] == TiltCell::Hole {
                            new_state.num_green -= 1;
                        } else {
                            new_state.grid[dest] = TiltCell::Green;
                            open += 1;
                        }
                    }
                }
            }
        }

        Some(new_state)
    }
}

impl State for TiltState {
    fn is_goal(&self) -> bool {
        self.num_green == 0 && self.num_blue == self.num_blue_initial
    }

    fn expand(&self) -> Vec<Self> {
        TILT_DIRECTIONS
            .iter()
            .filter_map(|&dir| self.tilt(dir))
            .collect()
    }
}

impl PartialEq for TiltState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for TiltState {}

impl Hash for TiltState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Display for TiltState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for TiltState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

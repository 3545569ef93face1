mod stats;

use std::collections::{HashMap, VecDeque};
use std::fmt::{self, Debug, Formatter};
use std::hash::BuildHasher;

use fnv::FnvHashMap;
use log::{debug, info};
use typed_arena::Arena;

use crate::state::State;
use crate::Solve;

pub use self::stats::Stats;

pub struct SolverOk<S> {
    pub path_states: Option<Vec<S>>,
    pub stats: Stats,
}

impl<S> SolverOk<S> {
    fn new(path_states: Option<Vec<S>>, stats: Stats) -> Self {
        Self { path_states, stats }
    }

    /// Number of moves in the solution.
    pub fn moves(&self) -> Option<usize> {
        self.path_states.as_ref().map(|states| states.len() - 1)
    }
}

impl<S> Debug for SolverOk<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "Moves: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl<S: State> Solve for S {
    fn solve(&self, print_status: bool) -> SolverOk<S> {
        let mut solver = Solver::new().print_status(print_status);
        let path_states = solver.solve(self.clone());
        SolverOk::new(path_states, solver.stats)
    }
}

/// Breadth-first search over the states reachable from a start state.
///
/// All moves cost the same so the first goal to reach the front of the queue
/// is one of the closest ones.
#[derive(Debug, Default)]
pub struct Solver {
    stats: Stats,
    print_status: bool,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    /// Print progress to stdout every time the search reaches a new depth.
    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }

    /// States produced by the last search, the start and duplicates included.
    pub fn total_generated(&self) -> usize {
        self.stats.total_created()
    }

    /// Distinct states seen by the last search.
    pub fn unique_seen(&self) -> usize {
        self.stats.total_unique()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns the shortest path from `start` to a goal (both included)
    /// or `None` if no goal is reachable.
    pub fn solve<S: State>(&mut self, start: S) -> Option<Vec<S>> {
        debug!("Search called");

        self.stats = Stats::new();

        // states are stored once, everything else just points into the arena
        let arena = Arena::new();
        let mut prevs: FnvHashMap<&S, Option<&S>> = FnvHashMap::default();
        let mut to_visit: VecDeque<(&S, usize)> = VecDeque::new();

        let start: &S = arena.alloc(start);
        prevs.insert(start, None);
        to_visit.push_back((start, 0));
        self.stats.add_created(0);
        self.stats.add_unique(0);

        while let Some(&(cur, depth)) = to_visit.front() {
            if cur.is_goal() {
                debug!("Solved, backtracking path");
                let path = backtrack_path(&prevs, cur);
                info!(
                    "Found solution with {} moves, {} states created, {} unique",
                    path.len() - 1,
                    self.stats.total_created(),
                    self.stats.total_unique()
                );
                return Some(path);
            }
            to_visit.pop_front();

            if self.stats.add_expanded(depth) && self.print_status {
                println!("Visited new depth: {}", depth);
                println!("{:?}", self.stats);
            }

            for next in cur.expand() {
                self.stats.add_created(depth + 1);
                if prevs.contains_key(&next) {
                    self.stats.add_duplicate(depth + 1);
                    continue;
                }
                let next: &S = arena.alloc(next);
                prevs.insert(next, Some(cur));
                self.stats.add_unique(depth + 1);
                to_visit.push_back((next, depth + 1));
            }
        }

        info!(
            "No solution, {} states created, {} unique",
            self.stats.total_created(),
            self.stats.total_unique()
        );
        None
    }
}

fn backtrack_path<S: State, H: BuildHasher>(
    prevs: &HashMap<&S, Option<&S>, H>,
    final_state: &S,
) -> Vec<S> {
    let mut path = vec![final_state.clone()];
    let mut state = final_state;
    while let Some(prev) = prevs[state] {
        path.push(prev.clone());
        state = prev;
    }
    path.reverse();
    path
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint<S> {
    Solved,
    Next(S),
    NoSolution,
}

/// The next state on a shortest path to a goal.
pub fn hint<S: State>(state: &S) -> Hint<S> {
    if state.is_goal() {
        return Hint::Solved;
    }
    match Solver::new().solve(state.clone()) {
        None => Hint::NoSolution,
        Some(mut path) => Hint::Next(path.swap_remove(1)),
    }
}

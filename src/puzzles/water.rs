use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::parser::ParserErr;
use crate::state::State;

#[derive(Debug, PartialEq, Eq)]
struct WaterPuzzle {
    amount: u32,
    capacities: Vec<u32>,
}

/// Get exactly `amount` units into any one bucket by filling, dumping and pouring.
#[derive(Clone)]
pub struct WaterState {
    levels: Vec<u32>,
    puzzle: Arc<WaterPuzzle>,
}

impl WaterState {
    /// All buckets start empty.
    pub fn new(amount: u32, capacities: Vec<u32>) -> Result<Self, ParserErr> {
        if capacities.is_empty() {
            return Err(ParserErr::NoBuckets);
        }

        Ok(WaterState {
            levels: vec![0; capacities.len()],
            puzzle: Arc::new(WaterPuzzle { amount, capacities }),
        })
    }

    pub fn amount(&self) -> u32 {
        self.puzzle.amount
    }

    pub fn capacities(&self) -> &[u32] {
        &self.puzzle.capacities
    }

    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    fn with_levels(&self, levels: Vec<u32>) -> Self {
        WaterState {
            levels,
            puzzle: self.puzzle.clone(),
        }
    }
}

impl State for WaterState {
    fn is_goal(&self) -> bool {
        self.levels.contains(&self.puzzle.amount)
    }

    fn expand(&self) -> Vec<Self> {
        let capacities = &self.puzzle.capacities;
        let mut new_states = Vec::new();

        for i in 0..self.levels.len() {
            // fill
            if self.levels[i] != capacities[i] {
                let mut levels = self.levels.clone();
                levels[i] = capacities[i];
                new_states.push(self.with_levels(levels));
            }

            // dump
            if self.levels[i] != 0 {
                let mut levels = self.levels.clone();
                levels[i] = 0;
                new_states.push(self.with_levels(levels));
            }

            // pour i into every other bucket
            for j in 0..self.levels.len() {
                if i == j {
                    continue;
                }
                let amount = cmp::min(self.levels[i], capacities[j] - self.levels[j]);
                if amount > 0 {
                    let mut levels = self.levels.clone();
                    levels[i] -= amount;
                    levels[j] += amount;
                    new_states.push(self.with_levels(levels));
                }
            }
        }

        new_states
    }
}

impl PartialEq for WaterState {
    fn eq(&self, other: &Self) -> bool {
        self.levels == other.levels
    }
}

impl Eq for WaterState {}

impl Hash for WaterState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.levels.hash(state);
    }
}

impl Display for WaterState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.levels)
    }
}

impl Debug for WaterState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::Solve;

    fn hash(state: &WaterState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    fn state(amount: u32, capacities: Vec<u32>, levels: Vec<u32>) -> WaterState {
        let start = WaterState::new(amount, capacities).unwrap();
        start.with_levels(levels)
    }

    fn levels(states: &[WaterState]) -> Vec<Vec<u32>> {
        states.iter().map(|s| s.levels.clone()).collect()
    }

    #[test]
    fn expand_from_empty() {
        let start = WaterState::new(4, vec![3, 5]).unwrap();
        assert_eq!(levels(&start.expand()), vec![vec![3, 0], vec![0, 5]]);
    }

    #[test]
    fn expand_order() {
        let s = state(4, vec![3, 5], vec![2, 4]);
        assert_eq!(
            levels(&s.expand()),
            vec![
                vec![3, 4], // fill 0
                vec![0, 4], // dump 0
                vec![1, 5], // pour 0 -> 1 (only 1 fits)
                vec![2, 5], // fill 1
                vec![2, 0], // dump 1
                vec![3, 3], // pour 1 -> 0
            ]
        );
    }

    #[test]
    fn expand_full_and_empty() {
        let s = state(1, vec![3, 5], vec![3, 5]);
        // nothing to fill and nowhere to pour
        assert_eq!(levels(&s.expand()), vec![vec![0, 5], vec![3, 0]]);

        let s = state(1, vec![3, 5], vec![0, 0]);
        assert_eq!(levels(&s.expand()), vec![vec![3, 0], vec![0, 5]]);
    }

    #[test]
    fn expand_conserves_volume() {
        let s = state(4, vec![3, 5, 8], vec![1, 4, 6]);
        let total: u32 = s.levels.iter().sum();
        for new_state in s.expand() {
            let new_total: u32 = new_state.levels.iter().sum();
            let changed = (0..3).filter(|&i| new_state.levels[i] != s.levels[i]).count();
            // pours change two buckets and keep the volume, fill/dump change one
            if changed == 2 {
                assert_eq!(new_total, total);
            } else {
                assert_eq!(changed, 1);
            }
            for i in 0..3 {
                assert!(new_state.levels[i] <= s.puzzle.capacities[i]);
            }
        }
    }

    #[test]
    fn solve_classic() {
        let start = WaterState::new(4, vec![3, 5]).unwrap();
        let solution = start.solve(false);
        assert_eq!(solution.moves(), Some(6));

        let path = solution.path_states.unwrap();
        assert_eq!(path[0].levels, vec![0, 0]);
        assert!(path.last().unwrap().levels.contains(&4));
        for pair in path.windows(2) {
            assert!(pair[0].expand().contains(&pair[1]));
        }
        for s in &path {
            assert!(s.levels[0] <= 3 && s.levels[1] <= 5);
        }
        assert!(solution.stats.total_unique() <= solution.stats.total_created());
    }

    #[test]
    fn solve_single_bucket() {
        let solution = WaterState::new(3, vec![3]).unwrap().solve(false);
        assert_eq!(levels(&solution.path_states.unwrap()), vec![vec![0], vec![3]]);
        assert_eq!(solution.stats.total_created(), 2);
        assert_eq!(solution.stats.total_unique(), 2);
    }

    #[test]
    fn solve_impossible() {
        let solution = WaterState::new(4, vec![2]).unwrap().solve(false);
        assert!(solution.path_states.is_none());
        assert_eq!(solution.stats.total_created(), 3);
        assert_eq!(solution.stats.total_unique(), 2);

        // only even amounts can be measured with even buckets
        let solution = WaterState::new(3, vec![4, 6]).unwrap().solve(false);
        assert!(solution.path_states.is_none());
    }

    #[test]
    fn solve_zero_amount() {
        let solution = WaterState::new(0, vec![3, 5]).unwrap().solve(false);
        assert_eq!(solution.moves(), Some(0));
    }

    #[test]
    fn equality() {
        let a = state(4, vec![3, 5], vec![1, 2]);
        let b = state(2, vec![3, 5], vec![1, 2]);
        let c = state(4, vec![3, 5], vec![2, 1]);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn no_buckets() {
        assert_eq!(WaterState::new(4, vec![]).unwrap_err(), ParserErr::NoBuckets);
    }

    #[test]
    fn formatting() {
        let s = state(4, vec![3, 5], vec![1, 2]);
        assert_eq!(s.to_string(), "[1, 2]");
        assert_eq!(format!("{:?}", s), "[1, 2]");
    }
}

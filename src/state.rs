use std::fmt::Debug;
use std::hash::Hash;

/// One puzzle position.
///
/// The solver never mutates a state once it has it, it only asks whether it's a goal
/// and which states are one move away. `Eq` and `Hash` must only look at what
/// distinguishes positions - puzzle constants shared by all states of a run don't count.
pub trait State: Clone + Eq + Hash + Debug {
    fn is_goal(&self) -> bool;

    /// All states reachable by exactly one legal move.
    ///
    /// The order is part of the contract - when several goals are equally far away
    /// the solver returns the one it discovered first.
    fn expand(&self) -> Vec<Self>;
}

//! Bounded recency list of forbidden moves.

use std::collections::VecDeque;

use super::Move;

/// The most recently applied moves, newest first, at most `tenure` of them.
///
/// # Examples
///
/// ```
/// use u_tabu_routing::tabu::{Move, TabuList};
///
/// let mut list = TabuList::new(1);
/// let a = Move::Swap { route_a: 0, index_a: 0, route_b: 1, index_b: 0 };
/// let b = Move::Swap { route_a: 0, index_a: 1, route_b: 1, index_b: 0 };
/// list.push(a);
/// list.push(b);
/// assert!(list.contains(&b));
/// assert!(!list.contains(&a));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    moves: VecDeque<Move>,
    tenure: usize,
}

impl TabuList {
    /// Creates an empty list holding at most `tenure` moves.
    pub fn new(tenure: usize) -> Self {
        Self {
            moves: VecDeque::with_capacity(tenure),
            tenure,
        }
    }

    /// Records `mv` as the most recent move, evicting the oldest beyond the tenure.
    pub fn push(&mut self, mv: Move) {
        self.moves.push_front(mv);
        self.moves.truncate(self.tenure);
    }

    /// Returns `true` if `mv` is currently forbidden.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Number of moves held.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if no move is forbidden.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Maximum number of moves held.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Moves from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}

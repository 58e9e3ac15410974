/// The drum of numbers driving a session.
mod test;

use rand::Rng;
use std::collections::HashSet;

/// Remaining numbers plus the ordered history of what already came out.
///
/// Once loaded via [`DrawPool::new`], `remaining` and `drawn` partition
/// the full range after every draw: no number sits in both, none is drawn
/// twice.
#[derive(Debug, Clone, Default)]
pub struct DrawPool {
    remaining: Vec<u32>,
    drawn: Vec<u32>,
}

impl DrawPool {
    /// Pool with nothing to draw: the state before the first game starts.
    pub fn empty() -> DrawPool {
        DrawPool::default()
    }

    /// Freshly loaded pool holding every number in `0..range_size`.
    ///
    /// Sessions replace their pool with one of these on each start rather
    /// than refilling in place.
    pub fn new(range_size: u32) -> DrawPool {
        DrawPool {
            remaining: (0..range_size).collect(),
            drawn: Vec::new(),
        }
    }

    /// Draws one number uniformly at random from the remaining set and
    /// appends it to the history.
    ///
    /// Returns `None` once the pool is exhausted; an exhausted draw leaves
    /// the history untouched.
    pub fn draw(&mut self) -> Option<u32> {
        if self.remaining.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..self.remaining.len());
        let number = self.remaining.swap_remove(idx);
        self.drawn.push(number);
        Some(number)
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Numbers drawn so far, oldest first.
    pub fn drawn(&self) -> &[u32] {
        &self.drawn
    }

    /// Membership view of the history, for win scans.
    pub fn drawn_set(&self) -> HashSet<u32> {
        self.drawn.iter().copied().collect()
    }
}

//! The capability set every puzzle in this crate implements.
//!
//! An environment is a value: stepping it never mutates the receiver, it builds a new instance
//! instead. This makes it safe to expand distinct instances from several threads at once.

use crate::error::EnvError;
use crate::moves::{Move, MoveSequence};

pub(crate) mod sealed {
    /// The raw transition, only ever called with an action below `num_actions`.
    pub trait Transition: Sized {
        fn apply(&self, action: usize) -> Self;
    }
}

/// A discrete puzzle with a fixed set of actions.
///
/// Out of range actions are rejected with [`EnvError::InvalidAction`] by every puzzle. No puzzle
/// treats an action as illegal from a particular state, so [`next_states`](Self::next_states)
/// always has exactly [`num_actions`](Self::num_actions) entries.
pub trait Environment: sealed::Transition + Clone {
    /// The fixed size of the action space.
    fn num_actions(&self) -> usize;

    /// A copy of the current encoding.
    fn state(&self) -> Vec<u8>;

    /// Whether this is a goal state of the puzzle.
    fn is_solved(&self) -> bool;

    /// The environment reached by taking `action` from this one.
    fn next_state(&self, action: usize) -> Result<Self, EnvError> {
        check_action(action, self.num_actions())?;
        Ok(self.apply(action))
    }

    /// One successor per action, in ascending action order.
    fn next_states(&self) -> Vec<Self> {
        (0..self.num_actions()).map(|a| self.apply(a)).collect()
    }

    /// Apply a sequence of moves in order, stopping at the first invalid one.
    fn apply_moves<M: Move>(&self, moves: &MoveSequence<M>) -> Result<Self, EnvError> {
        moves
            .actions()
            .try_fold(self.clone(), |env, action| env.next_state(action))
    }
}

pub(crate) fn check_action(action: usize, num_actions: usize) -> Result<(), EnvError> {
    if action < num_actions {
        Ok(())
    } else {
        Err(EnvError::InvalidAction {
            action,
            num_actions,
        })
    }
}

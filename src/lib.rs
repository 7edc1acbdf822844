//! State transition engines for discrete combinatorial puzzles: the sliding tile puzzle, Lights
//! Out, the 2x2x2, the 3x3x3 (with a full or corners only goal) and the 4x4x4.
//!
//! Every puzzle implements [`Environment`](env::Environment), which applies an action to a state
//! or expands all of a state's successors. Search strategies, heuristics and scrambling are left
//! to the caller.
//!
//! ```rust
//! use puzzle_env::env::Environment;
//! use puzzle_env::puzzle::{Puzzle, PuzzleKind};
//!
//! let kind: PuzzleKind = "puzzle8".parse().unwrap();
//! let puzzle = Puzzle::new(kind, vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
//! let solved = puzzle.next_state(0).unwrap().next_state(2).unwrap();
//! assert!(solved.is_solved());
//! assert_eq!(puzzle.next_states().len(), 4);
//! ```

#![deny(missing_docs)]

pub mod cube;
pub mod env;
pub mod error;
pub mod lights_out;
pub mod moves;
pub mod puzzle;
pub mod puzzle_n;

//! A single type covering every puzzle, for callers that pick the puzzle at runtime.

use std::fmt;
use std::str::FromStr;

use crate::cube::{Cube2, Cube3, Cube3Corners, Cube4};
use crate::env::{sealed::Transition, Environment};
use crate::error::EnvError;
use crate::lights_out::{self, LightsOut};
use crate::puzzle_n::{PuzzleN, MAX_DIM};

/// Which puzzle to build, and its size where the puzzle has one.
///
/// Kinds parse from and print as `puzzleN` (with `N = dim * dim - 1`, e.g. `puzzle15`),
/// `lightsoutD` (e.g. `lightsout7`), `cube2`, `cube3`, `cube3_corners` and `cube4`. Sizes outside
/// what the puzzles support are rejected when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzleKind {
    /// A sliding tile puzzle on a `dim` x `dim` grid.
    SlidingPuzzle {
        /// Side length of the grid.
        dim: usize,
    },
    /// Lights Out on a `dim` x `dim` grid.
    LightsOut {
        /// Side length of the grid.
        dim: usize,
    },
    /// The 2x2x2.
    Cube2,
    /// The 3x3x3.
    Cube3,
    /// The 3x3x3 with a corners only goal.
    Cube3Corners,
    /// The 4x4x4.
    Cube4,
}

impl FromStr for PuzzleKind {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<PuzzleKind, EnvError> {
        let unknown = || EnvError::UnknownPuzzle(s.to_owned());
        match s {
            "cube2" => Ok(PuzzleKind::Cube2),
            "cube3" => Ok(PuzzleKind::Cube3),
            "cube3_corners" => Ok(PuzzleKind::Cube3Corners),
            "cube4" => Ok(PuzzleKind::Cube4),
            _ => {
                if let Some(tiles) = s.strip_prefix("puzzle") {
                    let tiles: usize = tiles.parse().map_err(|_| unknown())?;
                    // the grid has one more cell than tiles
                    let dim = (2..=MAX_DIM)
                        .find(|d| d * d - 1 == tiles)
                        .ok_or_else(unknown)?;
                    Ok(PuzzleKind::SlidingPuzzle { dim })
                } else if let Some(dim) = s.strip_prefix("lightsout") {
                    let dim = dim.parse().map_err(|_| unknown())?;
                    lights_out::check_dim(dim)?;
                    Ok(PuzzleKind::LightsOut { dim })
                } else {
                    Err(unknown())
                }
            }
        }
    }
}

impl fmt::Display for PuzzleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleKind::SlidingPuzzle { dim } => {
                write!(f, "puzzle{}", dim.saturating_mul(*dim).saturating_sub(1))
            }
            PuzzleKind::LightsOut { dim } => write!(f, "lightsout{dim}"),
            PuzzleKind::Cube2 => f.write_str("cube2"),
            PuzzleKind::Cube3 => f.write_str("cube3"),
            PuzzleKind::Cube3Corners => f.write_str("cube3_corners"),
            PuzzleKind::Cube4 => f.write_str("cube4"),
        }
    }
}

/// Any of the puzzles in this crate. Successors of a `Puzzle` are always the same variant as
/// their parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Puzzle {
    SlidingPuzzle(PuzzleN),
    LightsOut(LightsOut),
    Cube2(Cube2),
    Cube3(Cube3),
    Cube3Corners(Cube3Corners),
    Cube4(Cube4),
}

impl Puzzle {
    /// Build a puzzle of the given kind from an initial state.
    pub fn new(kind: PuzzleKind, state: Vec<u8>) -> Result<Puzzle, EnvError> {
        Ok(match kind {
            PuzzleKind::SlidingPuzzle { dim } => Puzzle::SlidingPuzzle(PuzzleN::new(state, dim)?),
            PuzzleKind::LightsOut { dim } => Puzzle::LightsOut(LightsOut::new(state, dim)?),
            PuzzleKind::Cube2 => Puzzle::Cube2(Cube2::new(state)?),
            PuzzleKind::Cube3 => Puzzle::Cube3(Cube3::new(state)?),
            PuzzleKind::Cube3Corners => Puzzle::Cube3Corners(Cube3Corners::new(state)?),
            PuzzleKind::Cube4 => Puzzle::Cube4(Cube4::new(state)?),
        })
    }

    /// The canonical goal state of the given kind.
    pub fn solved(kind: PuzzleKind) -> Result<Puzzle, EnvError> {
        Ok(match kind {
            PuzzleKind::SlidingPuzzle { dim } => Puzzle::SlidingPuzzle(PuzzleN::solved(dim)?),
            PuzzleKind::LightsOut { dim } => Puzzle::LightsOut(LightsOut::solved(dim)?),
            PuzzleKind::Cube2 => Puzzle::Cube2(Cube2::solved()),
            PuzzleKind::Cube3 => Puzzle::Cube3(Cube3::solved()),
            PuzzleKind::Cube3Corners => Puzzle::Cube3Corners(Cube3Corners::solved()),
            PuzzleKind::Cube4 => Puzzle::Cube4(Cube4::solved()),
        })
    }

    /// The kind of this puzzle.
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Puzzle::SlidingPuzzle(p) => PuzzleKind::SlidingPuzzle { dim: p.dim() },
            Puzzle::LightsOut(p) => PuzzleKind::LightsOut { dim: p.dim() },
            Puzzle::Cube2(_) => PuzzleKind::Cube2,
            Puzzle::Cube3(_) => PuzzleKind::Cube3,
            Puzzle::Cube3Corners(_) => PuzzleKind::Cube3Corners,
            Puzzle::Cube4(_) => PuzzleKind::Cube4,
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            Puzzle::SlidingPuzzle($p) => $body,
            Puzzle::LightsOut($p) => $body,
            Puzzle::Cube2($p) => $body,
            Puzzle::Cube3($p) => $body,
            Puzzle::Cube3Corners($p) => $body,
            Puzzle::Cube4($p) => $body,
        }
    };
}

impl Transition for Puzzle {
    fn apply(&self, action: usize) -> Puzzle {
        match self {
            Puzzle::SlidingPuzzle(p) => Puzzle::SlidingPuzzle(p.apply(action)),
            Puzzle::LightsOut(p) => Puzzle::LightsOut(p.apply(action)),
            Puzzle::Cube2(p) => Puzzle::Cube2(p.apply(action)),
            Puzzle::Cube3(p) => Puzzle::Cube3(p.apply(action)),
            Puzzle::Cube3Corners(p) => Puzzle::Cube3Corners(p.apply(action)),
            Puzzle::Cube4(p) => Puzzle::Cube4(p.apply(action)),
        }
    }
}

impl Environment for Puzzle {
    fn num_actions(&self) -> usize {
        dispatch!(self, p => p.num_actions())
    }

    fn state(&self) -> Vec<u8> {
        dispatch!(self, p => p.state())
    }

    fn is_solved(&self) -> bool {
        dispatch!(self, p => p.is_solved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [PuzzleKind; 8] = [
        PuzzleKind::SlidingPuzzle { dim: 3 },
        PuzzleKind::SlidingPuzzle { dim: 4 },
        PuzzleKind::LightsOut { dim: 2 },
        PuzzleKind::LightsOut { dim: 7 },
        PuzzleKind::Cube2,
        PuzzleKind::Cube3,
        PuzzleKind::Cube3Corners,
        PuzzleKind::Cube4,
    ];

    #[test]
    fn kind_names() {
        for kind in KINDS {
            assert_eq!(kind.to_string().parse::<PuzzleKind>(), Ok(kind));
        }
        assert_eq!(
            "puzzle15".parse::<PuzzleKind>(),
            Ok(PuzzleKind::SlidingPuzzle { dim: 4 })
        );
        assert_eq!(
            "lightsout7".parse::<PuzzleKind>(),
            Ok(PuzzleKind::LightsOut { dim: 7 })
        );
        assert_eq!("cube2".parse::<PuzzleKind>(), Ok(PuzzleKind::Cube2));
        for bad in [
            "puzzle14", "puzzle", "puzzle0", "puzzle1023", "lightsoutx", "cube5", "",
        ] {
            assert_eq!(
                bad.parse::<PuzzleKind>(),
                Err(EnvError::UnknownPuzzle(bad.to_owned()))
            );
        }
    }

    #[test]
    fn oversized_kinds() {
        for (name, dim) in [
            ("lightsout0", 0),
            ("lightsout16", 16),
            ("lightsout4294967296", 1 << 32),
        ] {
            assert_eq!(
                name.parse::<PuzzleKind>(),
                Err(EnvError::UnsupportedDimension { dim })
            );
        }

        let huge = PuzzleKind::SlidingPuzzle { dim: usize::MAX };
        assert_eq!(huge.to_string(), format!("puzzle{}", usize::MAX - 1));
        assert_eq!(
            Puzzle::solved(huge),
            Err(EnvError::UnsupportedDimension { dim: usize::MAX })
        );
        assert_eq!(
            Puzzle::solved(PuzzleKind::LightsOut { dim: 1 << 33 }),
            Err(EnvError::UnsupportedDimension { dim: 1 << 33 })
        );
    }

    #[test]
    fn action_counts() {
        let counts: Vec<usize> = KINDS
            .iter()
            .map(|&k| Puzzle::solved(k).unwrap().num_actions())
            .collect();
        assert_eq!(counts, vec![4, 4, 4, 49, 12, 12, 12, 24]);
    }

    #[test]
    fn solved_round_trips() {
        for kind in KINDS {
            let solved = Puzzle::solved(kind).unwrap();
            assert!(solved.is_solved());
            assert_eq!(solved.kind(), kind);

            let rebuilt = Puzzle::new(kind, solved.state()).unwrap();
            assert_eq!(rebuilt, solved);
            assert_eq!(rebuilt.state(), solved.state());
        }
    }

    #[test]
    fn successors_keep_their_variant() {
        for kind in KINDS {
            let puzzle = Puzzle::solved(kind).unwrap();
            let next = puzzle.next_states();
            assert_eq!(next.len(), puzzle.num_actions());
            for (a, n) in next.iter().enumerate() {
                assert_eq!(n.kind(), kind);
                assert_eq!(n, &puzzle.next_state(a).unwrap());
            }
            assert_eq!(
                puzzle.next_state(puzzle.num_actions()),
                Err(EnvError::InvalidAction {
                    action: puzzle.num_actions(),
                    num_actions: puzzle.num_actions()
                })
            );
        }
    }

    #[test]
    fn state_is_a_copy() {
        let puzzle = Puzzle::new(
            PuzzleKind::SlidingPuzzle { dim: 3 },
            vec![1, 2, 3, 4, 0, 6, 7, 5, 8],
        )
        .unwrap();
        let mut state = puzzle.state();
        state[0] = 8;
        assert_eq!(puzzle.state(), vec![1, 2, 3, 4, 0, 6, 7, 5, 8]);
    }

    #[test]
    fn expand_from_several_threads() {
        let roots: Vec<Puzzle> = KINDS.iter().map(|&k| Puzzle::solved(k).unwrap()).collect();
        std::thread::scope(|s| {
            for root in &roots {
                s.spawn(move || {
                    let grandchildren: usize = root
                        .next_states()
                        .iter()
                        .map(|c| c.next_states().len())
                        .sum();
                    assert_eq!(grandchildren, root.num_actions() * root.num_actions());
                });
            }
        });
    }
}

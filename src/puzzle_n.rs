//! The N-puzzle: tiles on a `dim` x `dim` grid with one blank cell.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::trace;

use crate::env::{sealed::Transition, Environment};
use crate::error::{EnvError, TryFromIntToEnumError};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The label of the blank cell.
pub const BLANK: u8 = 0;

/// Largest supported side length, chosen so every position fits in a `u8`.
pub const MAX_DIM: usize = 15;

/// The direction a tile slides into the blank. The blank itself moves the opposite way, so
/// `Left` swaps the blank with its right neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Slide {
    /// The tile below the blank moves up.
    Up,
    /// The tile above the blank moves down.
    Down,
    /// The tile right of the blank moves left.
    Left,
    /// The tile left of the blank moves right.
    Right,
}

impl Slide {
    /// Every slide in action order.
    pub const ARRAY: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

    /// The slide that undoes this one, as long as this one was not blocked by an edge.
    pub fn opposite(self) -> Slide {
        match self {
            Slide::Up => Slide::Down,
            Slide::Down => Slide::Up,
            Slide::Left => Slide::Right,
            Slide::Right => Slide::Left,
        }
    }
}

impl From<Slide> for usize {
    fn from(s: Slide) -> usize {
        s as usize
    }
}

impl TryFrom<usize> for Slide {
    type Error = TryFromIntToEnumError;

    fn try_from(n: usize) -> Result<Slide, TryFromIntToEnumError> {
        Slide::ARRAY
            .get(n)
            .copied()
            .ok_or(TryFromIntToEnumError::OutOfBounds)
    }
}

/// For every blank position, the position it swaps with for each [`Slide`]. A blocked slide maps
/// the blank onto itself.
#[derive(Debug)]
struct SwapTable {
    swaps: Box<[[u8; 4]]>,
}

impl SwapTable {
    fn new(dim: usize) -> SwapTable {
        let swaps = (0..dim * dim)
            .map(|z| {
                let (row, col) = (z / dim, z % dim);
                Slide::ARRAY.map(|s| {
                    let target = match s {
                        Slide::Up if row + 1 < dim => z + dim,
                        Slide::Down if row > 0 => z - dim,
                        Slide::Left if col + 1 < dim => z + 1,
                        Slide::Right if col > 0 => z - 1,
                        _ => z,
                    };
                    target as u8
                })
            })
            .collect();
        SwapTable { swaps }
    }
}

/// A sliding tile puzzle. The grid is stored row major, and the blank is tracked so a transition
/// never has to search for it.
#[derive(Debug, Clone)]
pub struct PuzzleN {
    tiles: Box<[u8]>,
    dim: u8,
    blank: u8,
    swaps: Arc<SwapTable>,
}

// The swap table is a function of the grid size, so only the tiles take part in comparisons.
impl PartialEq for PuzzleN {
    fn eq(&self, other: &PuzzleN) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for PuzzleN {}

impl Hash for PuzzleN {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl PuzzleN {
    /// Build a puzzle from a row major grid. The grid must hold each of `0..dim * dim` once.
    pub fn new(tiles: Vec<u8>, dim: usize) -> Result<PuzzleN, EnvError> {
        validate(&tiles, dim).inspect_err(|e| trace!(%e, dim, "rejected n-puzzle"))?;
        // a permutation of 0..n always holds the blank
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(PuzzleN::from_parts(tiles, dim, blank))
    }

    /// Build a puzzle whose blank position is already known, skipping the scan for it. The grid is
    /// still checked, and `tiles[blank]` must be the blank.
    pub fn with_blank(tiles: Vec<u8>, dim: usize, blank: usize) -> Result<PuzzleN, EnvError> {
        validate(&tiles, dim)
            .and_then(|()| match tiles.get(blank) {
                Some(&BLANK) => Ok(()),
                _ => Err(EnvError::BlankMismatch { index: blank }),
            })
            .inspect_err(|e| trace!(%e, dim, blank, "rejected n-puzzle"))?;
        Ok(PuzzleN::from_parts(tiles, dim, blank))
    }

    /// The goal state, `1, 2, ..., dim * dim - 1` followed by the blank.
    pub fn solved(dim: usize) -> Result<PuzzleN, EnvError> {
        check_dim(dim).inspect_err(|e| trace!(%e, "rejected n-puzzle"))?;
        Ok(PuzzleN::from_parts(goal(dim), dim, dim * dim - 1))
    }

    fn from_parts(tiles: Vec<u8>, dim: usize, blank: usize) -> PuzzleN {
        PuzzleN {
            tiles: tiles.into_boxed_slice(),
            dim: dim as u8,
            blank: blank as u8,
            swaps: Arc::new(SwapTable::new(dim)),
        }
    }

    /// The side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    /// The position of the blank.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Slide a tile into the blank. Blocked slides leave the puzzle unchanged.
    pub fn slide(&self, s: Slide) -> PuzzleN {
        self.apply(s.into())
    }
}

impl Transition for PuzzleN {
    fn apply(&self, action: usize) -> PuzzleN {
        let target = self.swaps.swaps[self.blank as usize][action];
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank as usize, target as usize);
        PuzzleN {
            tiles,
            dim: self.dim,
            blank: target,
            swaps: Arc::clone(&self.swaps),
        }
    }
}

impl Environment for PuzzleN {
    fn num_actions(&self) -> usize {
        Slide::ARRAY.len()
    }

    fn state(&self) -> Vec<u8> {
        self.tiles.to_vec()
    }

    fn is_solved(&self) -> bool {
        let last = self.tiles.len() - 1;
        self.tiles[last] == BLANK
            && self.tiles[..last]
                .iter()
                .enumerate()
                .all(|(i, &t)| t as usize == i + 1)
    }
}

fn goal(dim: usize) -> Vec<u8> {
    let n = dim * dim;
    (1..n).chain(std::iter::once(0)).map(|t| t as u8).collect()
}

fn check_dim(dim: usize) -> Result<(), EnvError> {
    if (2..=MAX_DIM).contains(&dim) {
        Ok(())
    } else {
        Err(EnvError::UnsupportedDimension { dim })
    }
}

/// Check a grid is a permutation of its labels.
fn validate(tiles: &[u8], dim: usize) -> Result<(), EnvError> {
    check_dim(dim)?;
    let n = dim * dim;
    if tiles.len() != n {
        return Err(EnvError::StateLength {
            expected: n,
            found: tiles.len(),
        });
    }

    let mut seen = vec![false; n];
    for (index, &value) in tiles.iter().enumerate() {
        let slot = seen
            .get_mut(value as usize)
            .ok_or(EnvError::InvalidValue { index, value })?;
        if *slot {
            return Err(EnvError::NotAPermutation { value });
        }
        *slot = true;
    }
    Ok(())
}

//! Lights Out on a `dim` x `dim` grid.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::trace;

use crate::env::{sealed::Transition, Environment};
use crate::error::EnvError;
use crate::moves::Move;

/// Largest supported side length.
pub const MAX_DIM: usize = 15;

/// Pressing the light at a cell, which flips it and its orthogonal neighbours. Pressing twice is
/// the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Toggle(pub usize);

impl From<Toggle> for usize {
    fn from(t: Toggle) -> usize {
        t.0
    }
}

impl Move for Toggle {
    fn inverse(self) -> Self {
        self
    }
}

/// The cells flipped by each action.
#[derive(Debug)]
struct ToggleTable {
    cells: Box<[Box<[u8]>]>,
}

impl ToggleTable {
    fn new(dim: usize) -> ToggleTable {
        let cells = (0..dim * dim)
            .map(|i| {
                let (row, col) = (i / dim, i % dim);
                let mut cells = vec![i];
                if row > 0 {
                    cells.push(i - dim);
                }
                if row + 1 < dim {
                    cells.push(i + dim);
                }
                if col > 0 {
                    cells.push(i - 1);
                }
                if col + 1 < dim {
                    cells.push(i + 1);
                }
                cells.into_iter().map(|c| c as u8).collect()
            })
            .collect();
        ToggleTable { cells }
    }
}

/// A Lights Out grid, stored row major with `1` for a lit cell.
#[derive(Debug, Clone)]
pub struct LightsOut {
    lights: Box<[u8]>,
    dim: u8,
    toggles: Arc<ToggleTable>,
}

impl PartialEq for LightsOut {
    fn eq(&self, other: &LightsOut) -> bool {
        self.lights == other.lights
    }
}

impl Eq for LightsOut {}

impl Hash for LightsOut {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lights.hash(state);
    }
}

impl LightsOut {
    /// Build a grid from row major lights, each `0` or `1`.
    pub fn new(lights: Vec<u8>, dim: usize) -> Result<LightsOut, EnvError> {
        validate(&lights, dim).inspect_err(|e| trace!(%e, dim, "rejected lights out grid"))?;
        Ok(LightsOut {
            lights: lights.into_boxed_slice(),
            dim: dim as u8,
            toggles: Arc::new(ToggleTable::new(dim)),
        })
    }

    /// The grid with every light off.
    pub fn solved(dim: usize) -> Result<LightsOut, EnvError> {
        check_dim(dim).inspect_err(|e| trace!(%e, "rejected lights out grid"))?;
        LightsOut::new(vec![0; dim * dim], dim)
    }

    /// The side length of the grid.
    pub fn dim(&self) -> usize {
        self.dim as usize
    }

    /// The cells flipped by pressing `cell`, starting with `cell` itself.
    pub fn toggled_by(&self, cell: usize) -> Option<&[u8]> {
        self.toggles.cells.get(cell).map(|c| &c[..])
    }
}

impl Transition for LightsOut {
    fn apply(&self, action: usize) -> LightsOut {
        let mut lights = self.lights.clone();
        for &c in self.toggles.cells[action].iter() {
            lights[c as usize] ^= 1;
        }
        LightsOut {
            lights,
            dim: self.dim,
            toggles: Arc::clone(&self.toggles),
        }
    }
}

impl Environment for LightsOut {
    fn num_actions(&self) -> usize {
        self.lights.len()
    }

    fn state(&self) -> Vec<u8> {
        self.lights.to_vec()
    }

    fn is_solved(&self) -> bool {
        self.lights.iter().all(|&l| l == 0)
    }
}

pub(crate) fn check_dim(dim: usize) -> Result<(), EnvError> {
    if (1..=MAX_DIM).contains(&dim) {
        Ok(())
    } else {
        Err(EnvError::UnsupportedDimension { dim })
    }
}

fn validate(lights: &[u8], dim: usize) -> Result<(), EnvError> {
    check_dim(dim)?;
    if lights.len() != dim * dim {
        return Err(EnvError::StateLength {
            expected: dim * dim,
            found: lights.len(),
        });
    }
    match lights.iter().position(|&l| l > 1) {
        Some(index) => Err(EnvError::InvalidValue {
            index,
            value: lights[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveSequence;

    #[test]
    fn corner_press_on_2x2() {
        let grid = LightsOut::solved(2).unwrap();
        assert!(grid.is_solved());

        let pressed = grid.next_state(0).unwrap();
        assert_eq!(pressed.state(), vec![1, 1, 1, 0]);
        assert!(!pressed.is_solved());

        let again = pressed.next_state(0).unwrap();
        assert_eq!(again, grid);
        assert!(again.is_solved());
    }

    #[test]
    fn centre_press_on_3x3() {
        let grid = LightsOut::solved(3).unwrap();
        assert_eq!(grid.num_actions(), 9);
        assert_eq!(
            grid.next_state(4).unwrap().state(),
            vec![0, 1, 0, 1, 1, 1, 0, 1, 0]
        );
        assert_eq!(grid.toggled_by(4), Some(&[4, 1, 7, 3, 5][..]));
        assert_eq!(grid.toggled_by(9), None);
    }

    #[test]
    fn single_cell_grid() {
        let grid = LightsOut::new(vec![1], 1).unwrap();
        assert_eq!(grid.num_actions(), 1);
        assert!(grid.next_state(0).unwrap().is_solved());
    }

    #[test]
    fn rejects_bad_states() {
        assert_eq!(
            LightsOut::new(vec![0, 1, 2, 0], 2),
            Err(EnvError::InvalidValue { index: 2, value: 2 })
        );
        assert_eq!(
            LightsOut::new(vec![0; 5], 2),
            Err(EnvError::StateLength {
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            LightsOut::new(vec![], 0),
            Err(EnvError::UnsupportedDimension { dim: 0 })
        );
        for dim in [0, MAX_DIM + 1, 1 << 33, usize::MAX] {
            assert_eq!(
                LightsOut::solved(dim),
                Err(EnvError::UnsupportedDimension { dim })
            );
        }
        assert_eq!(LightsOut::solved(MAX_DIM).unwrap().num_actions(), MAX_DIM * MAX_DIM);
        assert_eq!(
            LightsOut::solved(2).unwrap().next_state(4),
            Err(EnvError::InvalidAction {
                action: 4,
                num_actions: 4
            })
        );
    }

    use proptest::collection::vec;
    use proptest::prelude::*;

    fn grid() -> impl Strategy<Value = LightsOut> {
        (1..8usize).prop_flat_map(|dim| {
            vec(0..=1u8, dim * dim).prop_map(move |l| LightsOut::new(l, dim).unwrap())
        })
    }

    proptest! {
        #[test]
        fn press_is_self_inverse(g in grid(), a in any::<prop::sample::Index>()) {
            let a = a.index(g.num_actions());
            prop_assert_eq!(g.next_state(a).unwrap().next_state(a).unwrap(), g);
        }

        #[test]
        fn presses_commute(g in grid(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
            let (a, b) = (a.index(g.num_actions()), b.index(g.num_actions()));
            let ab = g.next_state(a).unwrap().next_state(b).unwrap();
            let ba = g.next_state(b).unwrap().next_state(a).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn sequence_then_inverse(g in grid(), presses in vec(any::<prop::sample::Index>(), 0..20)) {
            let seq = MoveSequence(presses.iter().map(|p| Toggle(p.index(g.num_actions()))).collect());
            let there = g.apply_moves(&seq).unwrap();
            prop_assert_eq!(there.apply_moves(&seq.inverse()).unwrap(), g.clone());
        }

        #[test]
        fn successors_match_next_state(g in grid()) {
            let next = g.next_states();
            prop_assert_eq!(next.len(), g.num_actions());
            for (a, n) in next.iter().enumerate() {
                prop_assert_eq!(n, &g.next_state(a).unwrap());
            }
        }
    }
}

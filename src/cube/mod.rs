//! Sticker level cubes: the 2x2x2, the 3x3x3, a 3x3x3 that only asks for its corners to be
//! solved, and the 4x4x4.
//!
//! A cube is an array of facelet colours, laid out face-major in the order U, D, L, R, B, F. A turn
//! permutes the array according to a precomputed [`RotationTable`].

mod tables;

use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::env::{sealed::Transition, Environment};
use crate::error::{EnvError, TableError, TryFromIntToEnumError};
use crate::moves::Move;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The number of distinct facelet colours.
pub const COLORS: u8 = 6;

/// A face of the cube, in the order faces are laid out in the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Face {
    /// Up
    U,
    /// Down
    D,
    /// Left
    L,
    /// Right
    R,
    /// Back
    B,
    /// Front
    F,
}

impl Face {
    /// Every face in layout order.
    pub const ARRAY: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::B, Face::F];

    /// The face on the opposite side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::L => Face::R,
            Face::R => Face::L,
            Face::B => Face::F,
            Face::F => Face::B,
        }
    }
}

/// The direction of a quarter turn, as seen looking at the turned face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Turn {
    /// Anti-clockwise, written with a prime (`U'`).
    CounterClockwise,
    /// Clockwise (`U`).
    Clockwise,
}

/// Which layer next to a face is turned. Only the 4x4x4 has inner layer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Layer {
    /// The face itself.
    Outer,
    /// The slice directly behind the face.
    Inner,
}

/// A quarter turn of one layer of a cube.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub struct CubeMove {
    pub face: Face,
    pub turn: Turn,
    pub layer: Layer,
}

/// Create an outer layer [`CubeMove`] from a face and a turn, e.g. `cube_mv!(R, Clockwise)`.
#[macro_export]
macro_rules! cube_mv {
    ($face:ident, $turn:ident) => {
        $crate::cube::CubeMove {
            face: $crate::cube::Face::$face,
            turn: $crate::cube::Turn::$turn,
            layer: $crate::cube::Layer::Outer,
        }
    };
    ($face:ident, $turn:ident, $layer:ident) => {
        $crate::cube::CubeMove {
            face: $crate::cube::Face::$face,
            turn: $crate::cube::Turn::$turn,
            layer: $crate::cube::Layer::$layer,
        }
    };
}

impl Move for CubeMove {
    fn inverse(self) -> Self {
        let turn = match self.turn {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        };
        CubeMove { turn, ..self }
    }
}

// Outer turns come first so the 3x3x3 action space is a prefix of the 4x4x4 one, and the two
// directions of a face are adjacent so an action's inverse is `action ^ 1`.
impl From<CubeMove> for usize {
    fn from(mv: CubeMove) -> usize {
        mv.layer as usize * 12 + mv.face as usize * 2 + mv.turn as usize
    }
}

impl TryFrom<usize> for CubeMove {
    type Error = TryFromIntToEnumError;

    fn try_from(n: usize) -> Result<CubeMove, TryFromIntToEnumError> {
        let layer = match n / 12 {
            0 => Layer::Outer,
            1 => Layer::Inner,
            _ => return Err(TryFromIntToEnumError::OutOfBounds),
        };
        let face = Face::ARRAY[n % 12 / 2];
        let turn = if n % 2 == 0 {
            Turn::CounterClockwise
        } else {
            Turn::Clockwise
        };
        Ok(CubeMove { face, turn, layer })
    }
}

impl std::fmt::Debug for CubeMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = format!("{:?}", self.face);
        let face = match self.layer {
            Layer::Outer => face,
            Layer::Inner => face.to_lowercase(),
        };
        match self.turn {
            Turn::Clockwise => write!(f, "{face}"),
            Turn::CounterClockwise => write!(f, "{face}'"),
        }
    }
}

/// The facelets each action moves, as two parallel rows per action: the facelet at
/// `source[a][k]` ends up at `dest[a][k]`. Facelets not listed keep their colour.
#[derive(Debug, Clone, Copy)]
pub struct RotationTable {
    facelets: usize,
    source: &'static [&'static [u8]],
    dest: &'static [&'static [u8]],
}

impl RotationTable {
    /// The number of actions in the table.
    pub fn num_actions(&self) -> usize {
        self.dest.len()
    }

    /// The facelets read by an action.
    pub fn source(&self, action: usize) -> Option<&'static [u8]> {
        self.source.get(action).copied()
    }

    /// The facelets written by an action.
    pub fn dest(&self, action: usize) -> Option<&'static [u8]> {
        self.dest.get(action).copied()
    }

    /// Check that every action permutes the facelets it touches: each one is written once and
    /// read once.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.source.len() != self.dest.len() {
            return Err(TableError::LengthMismatch {
                action: self.source.len().min(self.dest.len()),
                sources: self.source.len(),
                dests: self.dest.len(),
            });
        }

        for (action, (&source, &dest)) in self.source.iter().zip(self.dest).enumerate() {
            if source.len() != dest.len() {
                return Err(TableError::LengthMismatch {
                    action,
                    sources: source.len(),
                    dests: dest.len(),
                });
            }

            // +1 for each write, -1 for each read
            let mut balance = vec![0i32; self.facelets];
            let mut written = vec![false; self.facelets];
            for (&s, &d) in source.iter().zip(dest) {
                for facelet in [s, d] {
                    if facelet as usize >= self.facelets {
                        return Err(TableError::OutOfRange { action, facelet });
                    }
                }
                if std::mem::replace(&mut written[d as usize], true) {
                    return Err(TableError::DuplicateDest { action, facelet: d });
                }
                balance[d as usize] += 1;
                balance[s as usize] -= 1;
            }
            if let Some(facelet) = balance.iter().position(|&b| b != 0) {
                return Err(TableError::NotABijection {
                    action,
                    facelet: facelet as u8,
                });
            }
        }

        Ok(())
    }

    fn permute<const LEN: usize>(&self, stickers: &[u8; LEN], action: usize) -> [u8; LEN] {
        let mut next = *stickers;
        for (&s, &d) in self.source[action].iter().zip(self.dest[action]) {
            next[d as usize] = stickers[s as usize];
        }
        next
    }
}

/// The geometry and goal of one kind of cube.
pub trait CubeKind: Copy + Eq + Hash + std::fmt::Debug {
    /// The turns this cube supports.
    const TABLE: RotationTable;

    /// For each face, the facelets that must share a colour for the cube to count as solved.
    const GOAL_FACES: [&'static [u8]; 6];
}

/// The 2x2x2 Rubik's cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Standard2;

/// The 3x3x3 Rubik's cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Standard3;

/// A 3x3x3 which is solved as soon as its corners are, whatever the edges and centres do. It turns
/// the same 12 outer faces as [`Standard3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corners3;

/// The 4x4x4 Rubik's cube, with outer and inner layer turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Standard4;

const CUBE3_TABLE: RotationTable = RotationTable {
    facelets: 54,
    source: &tables::CUBE3_SOURCE,
    dest: &tables::CUBE3_DEST,
};

impl CubeKind for Standard2 {
    const TABLE: RotationTable = RotationTable {
        facelets: 24,
        source: &tables::CUBE2_SOURCE,
        dest: &tables::CUBE2_DEST,
    };
    const GOAL_FACES: [&'static [u8]; 6] = tables::CUBE2_FACES;
}

impl CubeKind for Standard3 {
    const TABLE: RotationTable = CUBE3_TABLE;
    const GOAL_FACES: [&'static [u8]; 6] = tables::CUBE3_FACES;
}

impl CubeKind for Corners3 {
    const TABLE: RotationTable = CUBE3_TABLE;
    const GOAL_FACES: [&'static [u8]; 6] = tables::CUBE3_CORNER_FACES;
}

impl CubeKind for Standard4 {
    const TABLE: RotationTable = RotationTable {
        facelets: 96,
        source: &tables::CUBE4_SOURCE,
        dest: &tables::CUBE4_DEST,
    };
    const GOAL_FACES: [&'static [u8]; 6] = tables::CUBE4_FACES;
}

/// A cube of kind `K` with `LEN` facelets. Use the [`Cube2`], [`Cube3`], [`Cube3Corners`] and
/// [`Cube4`] aliases rather than naming this directly.
///
/// `LEN` has to match the kind's rotation table, anything else fails to build:
///
/// ```rust,compile_fail
/// use puzzle_env::cube::{Cube, Standard4};
///
/// let cube = Cube::<Standard4, 54>::solved();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube<K: CubeKind, const LEN: usize> {
    stickers: [u8; LEN],
    kind: PhantomData<K>,
}

/// The 2x2x2, 12 actions.
pub type Cube2 = Cube<Standard2, 24>;
/// The 3x3x3, 12 actions.
pub type Cube3 = Cube<Standard3, 54>;
/// The 3x3x3 with a corners only goal, 12 actions.
pub type Cube3Corners = Cube<Corners3, 54>;
/// The 4x4x4, 24 actions.
pub type Cube4 = Cube<Standard4, 96>;

impl<K: CubeKind, const LEN: usize> Cube<K, LEN> {
    const PER_FACE: usize = LEN / 6;

    const FITS_TABLE: () = assert!(
        LEN == K::TABLE.facelets,
        "cube length does not match its rotation table"
    );

    /// Build a cube from facelet colours `0..6`, each of which must cover exactly one face's
    /// worth of facelets.
    pub fn new(stickers: Vec<u8>) -> Result<Self, EnvError> {
        let () = Self::FITS_TABLE;
        let stickers = Self::check_colors(stickers)
            .inspect_err(|e| trace!(%e, facelets = LEN, "rejected cube"))?;
        Ok(Cube {
            stickers,
            kind: PhantomData,
        })
    }

    fn check_colors(stickers: Vec<u8>) -> Result<[u8; LEN], EnvError> {
        let found = stickers.len();
        let stickers: [u8; LEN] = stickers.try_into().map_err(|_| EnvError::StateLength {
            expected: LEN,
            found,
        })?;

        let mut counts = [0usize; COLORS as usize];
        for (index, &value) in stickers.iter().enumerate() {
            let count = counts
                .get_mut(value as usize)
                .ok_or(EnvError::InvalidValue { index, value })?;
            *count += 1;
        }
        match counts
            .iter()
            .enumerate()
            .find(|&(_, &c)| c != Self::PER_FACE)
        {
            Some((color, &found)) => Err(EnvError::ColorCount {
                color: color as u8,
                expected: Self::PER_FACE,
                found,
            }),
            None => Ok(stickers),
        }
    }

    /// Build a cube from sticker identities `0..LEN`, where sticker `i` starts on face
    /// `i / (LEN / 6)`.
    pub fn from_sticker_ids(ids: Vec<u8>) -> Result<Self, EnvError> {
        if let Some(index) = ids.iter().position(|&i| i as usize >= LEN) {
            return Err(EnvError::InvalidValue {
                index,
                value: ids[index],
            });
        }
        Self::new(
            ids.into_iter()
                .map(|i| (i as usize / Self::PER_FACE) as u8)
                .collect(),
        )
    }

    /// The solved cube, with face `f` coloured `f`.
    pub fn solved() -> Self {
        let () = Self::FITS_TABLE;
        Cube {
            stickers: std::array::from_fn(|i| (i / Self::PER_FACE) as u8),
            kind: PhantomData,
        }
    }

    /// The facelet colours.
    pub fn stickers(&self) -> &[u8; LEN] {
        &self.stickers
    }

    /// Apply a single move.
    pub fn make_move(&self, mv: CubeMove) -> Result<Self, EnvError> {
        self.next_state(mv.into())
    }

    /// The action that undoes `action`.
    pub fn inverse_action(action: usize) -> usize {
        action ^ 1
    }
}

impl<K: CubeKind, const LEN: usize> Transition for Cube<K, LEN> {
    fn apply(&self, action: usize) -> Self {
        Cube {
            stickers: K::TABLE.permute(&self.stickers, action),
            kind: PhantomData,
        }
    }
}

impl<K: CubeKind, const LEN: usize> Environment for Cube<K, LEN> {
    fn num_actions(&self) -> usize {
        K::TABLE.num_actions()
    }

    fn state(&self) -> Vec<u8> {
        self.stickers.to_vec()
    }

    fn is_solved(&self) -> bool {
        K::GOAL_FACES.iter().all(|face| {
            let first = self.stickers[face[0] as usize];
            face.iter().all(|&i| self.stickers[i as usize] == first)
        })
    }
}

/// Check the rotation tables of every cube kind.
pub fn validate_tables() -> Result<(), TableError> {
    for (name, table) in [
        ("2x2x2", Standard2::TABLE),
        ("3x3x3", CUBE3_TABLE),
        ("4x4x4", Standard4::TABLE),
    ] {
        table.validate()?;
        debug!(
            cube = name,
            actions = table.num_actions(),
            "rotation table is a permutation"
        );
    }
    Ok(())
}

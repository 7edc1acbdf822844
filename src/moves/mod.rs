//! Module for puzzle move generics and related functionality

/// A move that can be turned back into the action index an environment understands. It is
/// intended that a term of this trait is an element of the group generated by a puzzle's actions,
/// so every move has an inverse.
pub trait Move: Copy + Eq + Into<usize> {
    /// Take the inverse of a move. These inverses must satisfy the invertibility conditions of
    /// a group, i.e. that `X X^{-1} = X^{-1} X = e` where `e` is the empty sequence.
    ///
    /// ```rust
    /// # fn main() {
    /// use puzzle_env::cube::{CubeMove, Face, Layer, Turn};
    /// use puzzle_env::moves::Move;
    ///
    /// let r = CubeMove { face: Face::R, turn: Turn::Clockwise, layer: Layer::Outer };
    /// assert_eq!(r.inverse().turn, Turn::CounterClockwise);
    /// assert_eq!(r.inverse().inverse(), r);
    /// # }
    /// ```
    fn inverse(self) -> Self;
}

/// A sequence of moves (also known as an algorithm) for some specific type of move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is composition, then
    /// `X o X^{-1} = X^{-1} o X = e` where `e` is the empty sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// Append another sequence onto the end of this one.
    pub fn append(mut self, mut other: Self) -> Self {
        self.0.append(&mut other.0);
        self
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The action indices of the moves, in order.
    pub fn actions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&m| m.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube3;
    use crate::cube_mv;
    use crate::env::Environment;
    use crate::lights_out::Toggle;

    #[test]
    fn sequence_and_its_inverse_cancel() {
        let commutator = MoveSequence(vec![
            cube_mv!(R, Clockwise),
            cube_mv!(U, Clockwise),
            cube_mv!(R, CounterClockwise),
            cube_mv!(U, CounterClockwise),
        ]);
        let both = commutator.clone().append(commutator.clone().inverse());
        assert_eq!(both.len(), 8);
        assert_eq!(both.0[4], cube_mv!(U, Clockwise));

        let cube = Cube3::solved();
        assert!(!cube.apply_moves(&commutator).unwrap().is_solved());
        assert_eq!(cube.apply_moves(&both).unwrap(), cube);
    }

    #[test]
    fn empty_sequences() {
        let empty: MoveSequence<Toggle> = MoveSequence(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);
        assert!(empty.clone().inverse().is_empty());

        let one = empty.append(MoveSequence(vec![Toggle(3)]));
        assert!(!one.is_empty());
        assert_eq!(one.actions().collect::<Vec<_>>(), vec![3]);
    }
}

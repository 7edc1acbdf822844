//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Errors produced when building an environment or stepping it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    /// An action index was outside `0..num_actions`.
    #[error("action {action} is out of range, this puzzle has {num_actions} actions")]
    InvalidAction {
        /// The rejected action.
        action: usize,
        /// The number of actions the puzzle accepts.
        num_actions: usize,
    },
    /// The state did not have the length implied by the puzzle and its dimension.
    #[error("expected a state of length {expected}, found {found}")]
    StateLength {
        /// Length the puzzle requires.
        expected: usize,
        /// Length that was given.
        found: usize,
    },
    /// A state entry was outside the alphabet of the puzzle.
    #[error("value {value} at index {index} is not valid for this puzzle")]
    InvalidValue {
        /// Position of the offending entry.
        index: usize,
        /// The offending entry.
        value: u8,
    },
    /// The dimension is not supported by this puzzle.
    #[error("dimension {dim} is not supported")]
    UnsupportedDimension {
        /// The rejected dimension.
        dim: usize,
    },
    /// A sliding puzzle state was not a permutation of its tile labels.
    #[error("tile {value} appears more than once")]
    NotAPermutation {
        /// The repeated tile label.
        value: u8,
    },
    /// The blank position given alongside a sliding puzzle state does not hold the blank.
    #[error("position {index} does not hold the blank")]
    BlankMismatch {
        /// The claimed blank position.
        index: usize,
    },
    /// A cube state did not contain every color the right number of times.
    #[error("color {color} appears {found} times, expected {expected}")]
    ColorCount {
        /// The color with the wrong count.
        color: u8,
        /// How many facelets each color covers.
        expected: usize,
        /// How many facelets had this color.
        found: usize,
    },
    /// A puzzle name could not be parsed.
    #[error("unknown puzzle `{0}`")]
    UnknownPuzzle(String),
}

/// A rotation table that does not describe a permutation of the facelets it touches.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The source and destination rows of an action have different lengths.
    #[error("action {action} has {sources} sources but {dests} destinations")]
    LengthMismatch {
        /// The offending action.
        action: usize,
        /// Length of the source row.
        sources: usize,
        /// Length of the destination row.
        dests: usize,
    },
    /// A facelet index does not exist on the cube.
    #[error("action {action} refers to facelet {facelet}, which is out of range")]
    OutOfRange {
        /// The offending action.
        action: usize,
        /// The offending facelet.
        facelet: u8,
    },
    /// A facelet is written twice by the same action.
    #[error("action {action} writes facelet {facelet} more than once")]
    DuplicateDest {
        /// The offending action.
        action: usize,
        /// The facelet written twice.
        facelet: u8,
    },
    /// A facelet is read by an action without being written, or the other way around.
    #[error("action {action} moves facelet {facelet} without replacing it")]
    NotABijection {
        /// The offending action.
        action: usize,
        /// A facelet present in only one of the rows.
        facelet: u8,
    },
}

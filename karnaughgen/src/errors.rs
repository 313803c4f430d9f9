// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::Cube;
use std::{error, fmt};

/// The error type for Karnaugh map generation.
///
/// Every variant describes invalid input rather than an internal fault, and
/// operations fail fast on the first violated precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KarnaughError {
    /// A cube string was not 2-4 characters over {0, 1, B}.
    InvalidCube { input: String },

    /// Cubes of differing variable counts were submitted together, or no
    /// cubes were submitted at all.
    ShapeMismatch,

    /// The function value table does not have 2^n entries for n-variable
    /// cubes.
    ValueLengthMismatch { expected: usize, actual: usize },

    /// A cell selection does not form a valid implicant.
    InvalidSelection(SelectionError),
}

/// Why a cell selection cannot be converted into a cube.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// The number of selected cells is not a power of two.
    CountNotPowerOfTwo(usize),

    /// The selection is not an axis-aligned rectangle: the smallest cube
    /// enclosing it covers more cells than were selected.
    NotRectangular(Cube),
}

impl fmt::Display for KarnaughError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCube { input } => {
                write!(f, "{} is not a valid cube", input)
            }
            Self::ShapeMismatch => {
                write!(f, "all cubes must contain the same variable count")
            }
            Self::ValueLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "function values length must match cube's variable count \
                     (expected {}, got {})",
                    expected, actual
                )
            }
            Self::InvalidSelection(error) => write!(f, "{}", error),
        }
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CountNotPowerOfTwo(count) => {
                write!(f, "total count not power of 2, was {}", count)
            }
            Self::NotRectangular(cube) => {
                write!(f, "invalid implicant selection for cube {}", cube)
            }
        }
    }
}

impl error::Error for KarnaughError {}

impl error::Error for SelectionError {}

impl From<SelectionError> for KarnaughError {
    fn from(error: SelectionError) -> Self {
        Self::InvalidSelection(error)
    }
}

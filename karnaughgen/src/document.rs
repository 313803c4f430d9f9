// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{cube::Cube, errors::KarnaughError};
use std::fmt;

/// Variable names shown on the diagram axes, split between the left-hand
/// side and the top at ⌊n/2⌋.
const VARIABLE_NAMES: [&str; 4] = ["x_1", "x_2", "x_3", "x_4"];

/// The function symbol shown in the diagram corner.
const FUNCTION_NAME: &str = "f";

/// Checks that `cubes` is non-empty and uniform in variable count, returning
/// that count.
pub fn uniform_variable_count(cubes: &[Cube]) -> Result<usize, KarnaughError> {
    let mut counts = cubes.iter().map(|cube| cube.variable_count());
    let first = counts.next().ok_or(KarnaughError::ShapeMismatch)?;
    if counts.all(|count| count == first) {
        Ok(first)
    } else {
        Err(KarnaughError::ShapeMismatch)
    }
}

/// A complete Karnaugh diagram: a validated set of implicant cubes plus the
/// function's value table in natural order.
///
/// Immutable once constructed; rendering via [`fmt::Display`] produces the
/// full LaTeX picture environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagram {
    cubes: Vec<Cube>,
    values: String,
    variables: usize,
}

impl Diagram {
    /// Validates the cube set and value table and assembles a diagram.
    ///
    /// Fails with [`KarnaughError::ShapeMismatch`] unless every cube has the
    /// same variable count, and with [`KarnaughError::ValueLengthMismatch`]
    /// unless the value table has exactly 2^n entries.
    pub fn new(cubes: Vec<Cube>, values: impl Into<String>) -> Result<Self, KarnaughError> {
        let values = values.into();
        let variables = uniform_variable_count(&cubes)?;
        let expected = 1usize << variables;
        let actual = values.chars().count();
        if expected != actual {
            return Err(KarnaughError::ValueLengthMismatch { expected, actual });
        }
        Ok(Self {
            cubes,
            values,
            variables,
        })
    }

    #[inline]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    #[inline]
    pub fn values(&self) -> &str {
        &self.values
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.variables
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let left_names = VARIABLE_NAMES[..self.variables / 2].join(" ");
        let top_names = VARIABLE_NAMES[self.variables / 2..self.variables].join(" ");
        writeln!(f, "\\begin{{picture}}(60,60)(0,0)")?;
        writeln!(f, "\\put(0,10){{")?;
        writeln!(
            f,
            "\\Karnaughdiagram{{{}}}{{{}}}(${}$, ${}$)[${}$]",
            self.variables, self.values, left_names, top_names, FUNCTION_NAME
        )?;
        for cube in &self.cubes {
            writeln!(f, "{}", cube.layout_display())?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "\\end{{picture}}")
    }
}

/// Generates the LaTeX code for the given cubes and function values.
pub fn generate(cubes: &[Cube], values: &str) -> Result<String, KarnaughError> {
    Ok(Diagram::new(cubes.to_vec(), values)?.to_string())
}

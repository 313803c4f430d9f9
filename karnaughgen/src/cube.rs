// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::KarnaughError;
use arrayvec::ArrayVec;
use std::{fmt, str::FromStr};

/// The largest supported variable count (a 4x4 map).
pub const MAX_VARIABLES: usize = 4;

/// The smallest supported variable count (a 2x2 map).
pub const MIN_VARIABLES: usize = 2;

/// A prime implicant over 2 to 4 Boolean variables.
///
/// Each position is `Some(false)` (`0`), `Some(true)` (`1`), or `None` (`B`,
/// "both"): the implicant spans both values of that variable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cube {
    vars: ArrayVec<Option<bool>, MAX_VARIABLES>,
}

impl Cube {
    pub fn new(vars: impl IntoIterator<Item = Option<bool>>) -> Result<Self, KarnaughError> {
        let mut collected: ArrayVec<Option<bool>, MAX_VARIABLES> = ArrayVec::new();
        for var in vars {
            if collected.try_push(var).is_err() {
                return Err(KarnaughError::InvalidCube {
                    input: "cube longer than 4 variables".to_owned(),
                });
            }
        }
        if collected.len() < MIN_VARIABLES {
            return Err(KarnaughError::InvalidCube {
                input: format!("cube of {} variables", collected.len()),
            });
        }
        Ok(Self { vars: collected })
    }

    #[inline]
    pub fn variable_count(&self) -> usize {
        self.vars.len()
    }

    #[inline]
    pub fn vars(&self) -> &[Option<bool>] {
        &self.vars
    }

    /// The variables shown on the map's left-hand side: the first ⌊n/2⌋.
    #[inline]
    pub fn left_group(&self) -> &[Option<bool>] {
        &self.vars[..self.vars.len() / 2]
    }

    /// The variables shown on top of the map: the remaining ⌈n/2⌉.
    #[inline]
    pub fn top_group(&self) -> &[Option<bool>] {
        &self.vars[self.vars.len() / 2..]
    }

    /// True if every variable is fixed, i.e. the cube covers a single cell.
    #[inline]
    pub fn is_minterm(&self) -> bool {
        self.vars.iter().all(|var| var.is_some())
    }

    /// The number of cells this cube covers.
    #[inline]
    pub fn cell_count(&self) -> usize {
        1 << wildcard_count(&self.vars)
    }
}

/// Counts the `B` positions within a variable group.
#[inline]
pub(crate) fn wildcard_count(group: &[Option<bool>]) -> usize {
    group.iter().filter(|var| var.is_none()).count()
}

impl FromStr for Cube {
    type Err = KarnaughError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || KarnaughError::InvalidCube {
            input: s.to_owned(),
        };
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&s.chars().count()) {
            return Err(invalid());
        }
        let vars = s
            .chars()
            .map(|c| match c {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                'B' => Ok(None),
                _ => Err(invalid()),
            })
            .collect::<Result<ArrayVec<_, MAX_VARIABLES>, _>>()?;
        Ok(Self { vars })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for var in &self.vars {
            let c = match var {
                Some(false) => '0',
                Some(true) => '1',
                None => 'B',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Test helper: parse a known-good cube string.
    pub(crate) fn cube(s: &str) -> Cube {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        for s in ["00", "B1", "1B0", "B01B", "BBBB"] {
            assert_eq!(cube(s).to_string(), s, "round-trip for {}", s);
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for s in ["", "1", "10110", "1X0", "b0", "0 1"] {
            let err = s.parse::<Cube>().unwrap_err();
            assert_eq!(
                err,
                KarnaughError::InvalidCube {
                    input: s.to_owned()
                },
                "input {:?}",
                s
            );
        }
    }

    #[test]
    fn test_groups() {
        let c = cube("B01");
        assert_eq!(c.left_group(), &[None]);
        assert_eq!(c.top_group(), &[Some(false), Some(true)]);

        let c = cube("10B1");
        assert_eq!(c.left_group(), &[Some(true), Some(false)]);
        assert_eq!(c.top_group(), &[None, Some(true)]);

        let c = cube("0B");
        assert_eq!(c.left_group(), &[Some(false)]);
        assert_eq!(c.top_group(), &[None]);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cube("1111").cell_count(), 1);
        assert_eq!(cube("B01B").cell_count(), 4);
        assert_eq!(cube("BBBB").cell_count(), 16);
        assert!(cube("10").is_minterm());
        assert!(!cube("1B").is_minterm());
    }

    #[test]
    fn test_new_length_bounds() {
        assert!(Cube::new([Some(true), None]).is_ok());
        assert!(Cube::new([Some(true)]).is_err());
        assert!(Cube::new([None; 5]).is_err());
    }
}

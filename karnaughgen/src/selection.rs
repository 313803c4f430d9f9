// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converts editor cell selections into cubes, and grid contents into the
//! value table's natural order.
//!
//! The map's rows and columns are labelled in the Gray order `0, 1` (two
//! cells) or `00, 01, 11, 10` (four cells); a cell's variable assignment is
//! its row label followed by its column label.

use crate::{
    cube::{Cube, MAX_VARIABLES, MIN_VARIABLES},
    errors::{KarnaughError, SelectionError},
};
use arrayvec::ArrayVec;

const GRAY_2: [[Option<bool>; 1]; 2] = [[Some(false)], [Some(true)]];

const GRAY_4: [[Option<bool>; 2]; 4] = [
    [Some(false), Some(false)],
    [Some(false), Some(true)],
    [Some(true), Some(true)],
    [Some(true), Some(false)],
];

/// Row count of an n-variable map.
#[inline]
pub fn row_count(variables: usize) -> usize {
    1 << (variables / 2)
}

/// Column count of an n-variable map.
#[inline]
pub fn column_count(variables: usize) -> usize {
    1 << (variables - variables / 2)
}

fn row_label(variables: usize, row: usize) -> &'static [Option<bool>] {
    if row_count(variables) == 2 {
        &GRAY_2[row]
    } else {
        &GRAY_4[row]
    }
}

fn column_label(variables: usize, column: usize) -> &'static [Option<bool>] {
    if column_count(variables) == 2 {
        &GRAY_2[column]
    } else {
        &GRAY_4[column]
    }
}

/// Converts a set of selected `(row, column)` cells into the cube covering
/// them.
///
/// Fails with [`KarnaughError::InvalidSelection`] when the cell count is not
/// a power of two, or when the cells do not form an axis-aligned rectangle
/// on the (toroidal) map: the smallest enclosing cube then covers more cells
/// than were selected.
///
/// `variables` must be in range 2..=4 and every cell within the map's
/// bounds; the editor enforces both before a selection reaches this point.
pub fn selection_to_cube(
    variables: usize,
    cells: &[(usize, usize)],
) -> Result<Cube, KarnaughError> {
    assert!(
        (MIN_VARIABLES..=MAX_VARIABLES).contains(&variables),
        "illegal variable count {}, must be between 2 and 4",
        variables
    );
    let count = cells.len();
    if count == 0 || count & (count - 1) != 0 {
        return Err(SelectionError::CountNotPowerOfTwo(count).into());
    }

    // Collapse the cells' assignments one variable at a time: a position
    // where all cells agree stays fixed, a mixed position becomes B.
    let mut vars: ArrayVec<Option<bool>, MAX_VARIABLES> = ArrayVec::new();
    for position in 0..variables {
        let mut values = cells.iter().map(|&(row, column)| {
            let left = row_label(variables, row);
            if position < left.len() {
                left[position]
            } else {
                column_label(variables, column)[position - left.len()]
            }
        });
        let first = values.next().expect("selection is non-empty");
        let collapsed = if values.all(|value| value == first) {
            first
        } else {
            None
        };
        vars.push(collapsed);
    }
    let cube = Cube::new(vars).expect("variable count is in range");

    if cube.cell_count() != count {
        return Err(SelectionError::NotRectangular(cube).into());
    }
    Ok(cube)
}

/// Flattens the map's cell contents into the value-table string, ordered by
/// the cells' variable assignments in ascending binary order.
///
/// `rows` holds one string per map row, in display order, with one character
/// per column.
pub fn values_in_natural_order(variables: usize, rows: &[&str]) -> String {
    assert_eq!(
        rows.len(),
        row_count(variables),
        "expected {} rows for {} variables",
        row_count(variables),
        variables
    );

    let mut keyed: Vec<(usize, char)> = Vec::with_capacity(1 << variables);
    for (row, contents) in rows.iter().enumerate() {
        let values: Vec<char> = contents.chars().collect();
        assert_eq!(
            values.len(),
            column_count(variables),
            "expected {} columns for {} variables",
            column_count(variables),
            variables
        );
        for (column, value) in values.into_iter().enumerate() {
            keyed.push((assignment_index(variables, row, column), value));
        }
    }
    keyed.sort_unstable_by_key(|&(key, _)| key);
    keyed.into_iter().map(|(_, value)| value).collect()
}

/// The cell's position in the natural enumeration: its row and column labels
/// read as one binary number.
fn assignment_index(variables: usize, row: usize, column: usize) -> usize {
    row_label(variables, row)
        .iter()
        .chain(column_label(variables, column))
        .fold(0, |index, var| {
            (index << 1) | matches!(var, Some(true)) as usize
        })
}

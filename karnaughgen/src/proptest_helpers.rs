// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::cube::{Cube, MAX_VARIABLES, MIN_VARIABLES};
use proptest::prelude::*;

/// Strategy for cubes with a fixed variable count.
pub fn cube_strategy(variables: usize) -> BoxedStrategy<Cube> {
    assert!(
        (MIN_VARIABLES..=MAX_VARIABLES).contains(&variables),
        "variable count {} must be in range {}..={}",
        variables,
        MIN_VARIABLES,
        MAX_VARIABLES
    );
    prop::collection::vec(any::<Option<bool>>(), variables)
        .prop_map(|vars| Cube::new(vars).expect("variable count is in range"))
        .boxed()
}

impl Arbitrary for Cube {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (MIN_VARIABLES..=MAX_VARIABLES)
            .prop_flat_map(cube_strategy)
            .boxed()
    }
}

// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use karnaughgen::{cube::Cube, document};

#[derive(Debug, Parser)]
#[clap(name = "karnaughgen", about = "Generates LaTeX code for Karnaugh maps.")]
pub struct KarnaughgenApp {
    /// The values of the function f, as a string of length 4, 8 or 16 in
    /// natural order. Defaults to all zero. For leading don't-care terms,
    /// use the syntax --values=-1-1 (note the equal sign) to keep the
    /// parser from reading the value as an option.
    #[clap(long, short)]
    values: Option<String>,

    /// One cube per implicant to draw: 2-4 characters from the set
    /// {0, 1, B}. Examples: 0B01, BB10, B10, 0B.
    #[clap(value_name = "CUBE", required = true)]
    cubes: Vec<String>,
}

impl KarnaughgenApp {
    pub fn exec(self) -> Result<()> {
        let cubes = self
            .cubes
            .iter()
            .map(|s| s.parse::<Cube>())
            .collect::<Result<Vec<_>, _>>()?;
        let variables = document::uniform_variable_count(&cubes)?;
        let values = self
            .values
            .unwrap_or_else(|| "0".repeat(1 << variables));
        print!("{}", document::generate(&cubes, &values)?);
        Ok(())
    }
}

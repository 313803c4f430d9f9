// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::Parser;
use color_eyre::Result;
use karnaughgen_cli::KarnaughgenApp;

fn main() -> Result<()> {
    let app = KarnaughgenApp::parse();
    app.exec()
}

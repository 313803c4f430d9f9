// Copyright (c) The karnaughgen Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod cube;
pub mod document;
pub mod errors;
pub mod layout;
#[cfg(any(test, feature = "proptest1"))]
pub mod proptest_helpers;
pub mod selection;

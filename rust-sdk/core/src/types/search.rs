//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

/// Restricts a tick walk to one side of the starting tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub enum SearchDirection {
    Up,
    Down,
}

//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

pub type CoreError = &'static str;

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_TICK_INDEX: CoreError = "Invalid tick index";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICK_INDEX_OUT_OF_BOUNDS: CoreError = "Tick index out of bounds";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_TICK_SPACING: CoreError = "Invalid tick spacing";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICKMAP_LENGTH_MISMATCH: CoreError = "Tickmap length mismatch";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICKMAP_CHANGE_CONFLICT: CoreError = "Tickmap change does not match snapshot";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const ARITHMETIC_OVERFLOW: CoreError = "Arithmetic over- or underflow";

#[cfg_attr(feature = "wasm", wasm_expose)]
pub const INVALID_PRICE: CoreError = "Invalid price";

//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

/// The unsigned word type a tickmap is stored in.
pub type TickmapWord = u8;

/// The number of tick flags held by a single tickmap word.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICKMAP_WORD_BITS: u32 = TickmapWord::BITS;

/// Offset that re-centers scaled tick indexes so that tick 0 lands in the middle of the tickmap.
/// Scaled indexes in `[-TICK_LIMIT, TICK_LIMIT)` are addressable.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICK_LIMIT: i32 = 100_000;

/// The maximum absolute tick index.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const MAX_TICK: i32 = 221_818;

/// The maximum number of tick positions a single nearest-tick search may scan.
#[cfg_attr(feature = "wasm", wasm_expose)]
pub const TICK_SEARCH_RANGE: i32 = 256;

/// The number of words in a tickmap.
pub const TICKMAP_SIZE: usize = (2 * TICK_LIMIT as usize).div_ceil(TICKMAP_WORD_BITS as usize);

/// The number of addressable tick positions in a tickmap.
pub const TICKMAP_CAPACITY: u32 = 2 * TICK_LIMIT as u32;

const _: () = assert!(TICK_LIMIT > 0 && MAX_TICK > 0 && TICK_SEARCH_RANGE > 0);
const _: () = assert!(TICKMAP_SIZE * TICKMAP_WORD_BITS as usize >= TICKMAP_CAPACITY as usize);
const _: () = assert!(TICK_LIMIT <= i32::MAX / 2);

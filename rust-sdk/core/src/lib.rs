//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

//! Tickmap core: which ticks of a concentrated-liquidity market hold liquidity.
//!
//! - tick addressing: tick index + tick spacing -> position in a fixed-size bitmap
//! - nearest-tick search bounded by `TICK_SEARCH_RANGE`
//! - snapshot diffs between two fetched tickmaps

#![allow(clippy::useless_conversion)]

mod constants;
mod math;
mod tracker;
mod types;

pub use constants::*;
pub use math::*;
pub use tracker::*;
pub use types::*;

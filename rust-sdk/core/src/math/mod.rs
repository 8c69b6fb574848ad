//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod diff;
mod position;
mod search;

#[cfg(feature = "floats")]
mod price;

pub use diff::*;
pub use position::*;
pub use search::*;

#[cfg(feature = "floats")]
pub use price::*;

//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

mod changes;
mod search;
mod tickmap;

pub use changes::*;
pub use search::*;
pub use tickmap::*;

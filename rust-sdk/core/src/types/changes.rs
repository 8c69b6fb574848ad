//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

use std::collections::BTreeMap;

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

use crate::{max_scaled_index, min_scaled_index, CoreError, ARITHMETIC_OVERFLOW, INVALID_TICK_SPACING};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub enum TickmapChange {
    Added,
    Removed,
}

/// The set of flags that differ between two tickmap snapshots, keyed by index.
/// Callers should not rely on the iteration order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct TickmapChanges {
    pub entries: BTreeMap<i32, TickmapChange>,
}

impl TickmapChanges {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: i32) -> Option<TickmapChange> {
        self.entries.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, TickmapChange)> + '_ {
        self.entries.iter().map(|(index, change)| (*index, *change))
    }

    pub fn added(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter().filter(|(_, change)| *change == TickmapChange::Added).map(|(index, _)| index)
    }

    pub fn removed(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter().filter(|(_, change)| *change == TickmapChange::Removed).map(|(index, _)| index)
    }

    /// Convert scaled indexes (`tick / tick_spacing`) into tick indexes.
    ///
    /// Indexes outside the range addressable for `tick_spacing` (see `get_min_tick` and
    /// `get_max_tick`) are dropped, so every returned tick is within `MAX_TICK`.
    pub fn scale(&self, tick_spacing: u16) -> Result<Self, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_SPACING);
        }
        let addressable = min_scaled_index(tick_spacing)..=max_scaled_index(tick_spacing);
        self.iter()
            .filter(|(index, _)| addressable.contains(index))
            .map(|(index, change)| {
                let tick = index.checked_mul(tick_spacing.into()).ok_or(ARITHMETIC_OVERFLOW)?;
                Ok((tick, change))
            })
            .collect()
    }

    pub(crate) fn record(&mut self, index: i32, change: TickmapChange) {
        self.entries.insert(index, change);
    }
}

impl FromIterator<(i32, TickmapChange)> for TickmapChanges {
    fn from_iter<I: IntoIterator<Item = (i32, TickmapChange)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use log::{debug, trace};

use crate::{
    find_tickmap_changes, get_next_tick, get_previous_tick, is_tick_initialized, CoreError, TickmapChanges, TickmapFacade, INVALID_TICK_SPACING,
};

/// Cached tickmap of a single market.
///
/// Holds the last fetched snapshot and turns every refresh into an incremental change set.
/// `update` takes `&mut self` and an owned snapshot, so a diff always runs against one consistent pair.
#[derive(Clone, Debug)]
pub struct TickmapTracker {
    tick_spacing: u16,
    snapshot: Box<TickmapFacade>,
}

impl TickmapTracker {
    pub fn new(tick_spacing: u16, snapshot: TickmapFacade) -> Result<Self, CoreError> {
        if tick_spacing == 0 {
            return Err(INVALID_TICK_SPACING);
        }
        Ok(Self {
            tick_spacing,
            snapshot: Box::new(snapshot),
        })
    }

    pub fn tick_spacing(&self) -> u16 {
        self.tick_spacing
    }

    pub fn snapshot(&self) -> &TickmapFacade {
        &self.snapshot
    }

    /// Replace the cached snapshot with `next`.
    ///
    /// # Returns
    /// - The changes between the two snapshots keyed by tick index (not scaled by the spacing)
    pub fn update(&mut self, next: TickmapFacade) -> Result<TickmapChanges, CoreError> {
        let changes = find_tickmap_changes(self.snapshot.words(), next.words())?.scale(self.tick_spacing)?;
        if changes.is_empty() {
            trace!("tickmap refresh without changes (tick spacing {})", self.tick_spacing);
        } else {
            debug!(
                "tickmap refresh: {} added, {} removed (tick spacing {})",
                changes.added().count(),
                changes.removed().count(),
                self.tick_spacing
            );
        }
        *self.snapshot = next;
        Ok(changes)
    }

    /// See `get_next_tick`.
    pub fn next_tick(&self, tick: i32) -> Result<Option<i32>, CoreError> {
        get_next_tick(&self.snapshot, tick, self.tick_spacing)
    }

    /// See `get_previous_tick`.
    pub fn previous_tick(&self, tick: i32) -> Result<Option<i32>, CoreError> {
        get_previous_tick(&self.snapshot, tick, self.tick_spacing)
    }

    pub fn is_tick_initialized(&self, tick: i32) -> Result<bool, CoreError> {
        is_tick_initialized(&self.snapshot, tick, self.tick_spacing)
    }
}

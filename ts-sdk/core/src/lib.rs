//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

// Constants, facades and primitive-only functions are exported by tickmap-core itself through
// `wasm_expose`. The functions below take their snapshots by value because wasm-bindgen can not
// borrow a deserialized facade.

pub use tickmap_core::*;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(js_name = tickToPosition, skip_jsdoc)]
pub fn tick_to_position_js(tick: i32, tick_spacing: u16) -> Result<u32, CoreError> {
    tick_to_position(tick, tick_spacing).map(|position| position.index())
}

#[wasm_bindgen(js_name = isTickInitialized, skip_jsdoc)]
pub fn is_tick_initialized_js(tickmap: TickmapFacade, tick: i32, tick_spacing: u16) -> Result<bool, CoreError> {
    is_tick_initialized(&tickmap, tick, tick_spacing)
}

#[wasm_bindgen(js_name = getNextTick, skip_jsdoc)]
pub fn get_next_tick_js(tickmap: TickmapFacade, tick: i32, tick_spacing: u16) -> Result<Option<i32>, CoreError> {
    get_next_tick(&tickmap, tick, tick_spacing)
}

#[wasm_bindgen(js_name = getPreviousTick, skip_jsdoc)]
pub fn get_previous_tick_js(tickmap: TickmapFacade, tick: i32, tick_spacing: u16) -> Result<Option<i32>, CoreError> {
    get_previous_tick(&tickmap, tick, tick_spacing)
}

#[wasm_bindgen(js_name = findClosestTicks, skip_jsdoc)]
pub fn find_closest_ticks_js(
    tickmap: TickmapFacade,
    tick: i32,
    tick_spacing: u16,
    limit: u32,
    max_range: u32,
    direction: Option<SearchDirection>,
) -> Result<Vec<i32>, CoreError> {
    find_closest_ticks(&tickmap, tick, tick_spacing, limit as usize, max_range, direction)
}

#[wasm_bindgen(js_name = getInitializedTicks, skip_jsdoc)]
pub fn get_initialized_ticks_js(tickmap: TickmapFacade, tick_spacing: u16) -> Result<Vec<i32>, CoreError> {
    get_initialized_ticks(&tickmap, tick_spacing)
}

#[wasm_bindgen(js_name = findTickmapChanges, skip_jsdoc)]
pub fn find_tickmap_changes_js(current: Vec<u8>, next: Vec<u8>, offset: Option<i32>) -> Result<TickmapChanges, CoreError> {
    find_tickmap_changes_with_offset(&current, &next, offset.unwrap_or(TICK_LIMIT))
}

#[wasm_bindgen(js_name = applyTickmapChanges, skip_jsdoc)]
pub fn apply_tickmap_changes_js(current: Vec<u8>, changes: TickmapChanges, offset: Option<i32>) -> Result<Vec<u8>, CoreError> {
    apply_tickmap_changes(&current, &changes, offset.unwrap_or(TICK_LIMIT))
}

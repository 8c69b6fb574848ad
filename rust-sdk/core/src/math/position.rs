//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

use crate::{
    CoreError, TickPosition, TickmapFacade, INVALID_TICK_INDEX, INVALID_TICK_SPACING, MAX_TICK, TICKMAP_CAPACITY, TICK_INDEX_OUT_OF_BOUNDS,
    TICK_LIMIT,
};

/// Convert a tick index into its position in the tickmap.
///
/// The tick must be a multiple of the tick spacing. Ticks that are not are rejected, never rounded.
///
/// # Parameters
/// - `tick` - A i32 integer representing the tick index
/// - `tick_spacing` - A u16 integer representing the tick spacing of the market
///
/// # Returns
/// - `Ok`: The position of the tick flag
/// - `INVALID_TICK_SPACING` if the tick spacing is zero
/// - `INVALID_TICK_INDEX` if the tick is not a multiple of the tick spacing
/// - `TICK_INDEX_OUT_OF_BOUNDS` if `|tick| > MAX_TICK` or the tick does not fit in the tickmap
pub fn tick_to_position(tick: i32, tick_spacing: u16) -> Result<TickPosition, CoreError> {
    let scaled = scale_tick(tick, tick_spacing)?;
    scaled_to_position(scaled).ok_or(TICK_INDEX_OUT_OF_BOUNDS)
}

/// Convert a tickmap position back into a tick index.
///
/// # Returns
/// - `Ok`: The tick index, `(position - TICK_LIMIT) * tick_spacing`
/// - `TICK_INDEX_OUT_OF_BOUNDS` if the position is outside the tickmap or the tick exceeds `MAX_TICK`
pub fn position_to_tick(position: TickPosition, tick_spacing: u16) -> Result<i32, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    if position.index() >= TICKMAP_CAPACITY {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    let tick = (position.index() as i32 - TICK_LIMIT)
        .checked_mul(tick_spacing.into())
        .ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
    if tick.unsigned_abs() > MAX_TICK as u32 {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(tick)
}

/// Get the greatest tick index addressable in a tickmap for the given tick spacing.
/// It is bounded both by `MAX_TICK` and by the capacity of the tickmap.
///
/// # Parameters
/// - `tick_spacing` - A u16 integer representing the tick spacing, must be positive
///
/// # Returns
/// - A i32 integer representing the max tick index
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn get_max_tick(tick_spacing: u16) -> i32 {
    max_scaled_index(tick_spacing) * i32::from(tick_spacing)
}

/// Get the least tick index addressable in a tickmap for the given tick spacing.
///
/// # Parameters
/// - `tick_spacing` - A u16 integer representing the tick spacing, must be positive
///
/// # Returns
/// - A i32 integer representing the min tick index
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn get_min_tick(tick_spacing: u16) -> i32 {
    min_scaled_index(tick_spacing) * i32::from(tick_spacing)
}

/// Check if a tick is initialized in the tickmap.
pub fn is_tick_initialized(tickmap: &TickmapFacade, tick: i32, tick_spacing: u16) -> Result<bool, CoreError> {
    let position = tick_to_position(tick, tick_spacing)?;
    Ok(tickmap.is_set(position))
}

/// Validate a tick against the spacing and `MAX_TICK` and divide it by the spacing.
pub(crate) fn scale_tick(tick: i32, tick_spacing: u16) -> Result<i32, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let tick_spacing = i32::from(tick_spacing);
    if tick % tick_spacing != 0 {
        return Err(INVALID_TICK_INDEX);
    }
    if tick.unsigned_abs() > MAX_TICK as u32 {
        return Err(TICK_INDEX_OUT_OF_BOUNDS);
    }
    Ok(tick / tick_spacing)
}

pub(crate) fn scaled_to_position(scaled: i32) -> Option<TickPosition> {
    let index = u32::try_from(scaled.checked_add(TICK_LIMIT)?).ok()?;
    (index < TICKMAP_CAPACITY).then_some(TickPosition::new(index))
}

pub(crate) fn position_to_scaled(position: TickPosition) -> i32 {
    position.index() as i32 - TICK_LIMIT
}

pub(crate) fn max_scaled_index(tick_spacing: u16) -> i32 {
    (MAX_TICK / i32::from(tick_spacing.max(1))).min(TICK_LIMIT - 1)
}

pub(crate) fn min_scaled_index(tick_spacing: u16) -> i32 {
    -(MAX_TICK / i32::from(tick_spacing.max(1))).min(TICK_LIMIT)
}

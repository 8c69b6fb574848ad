//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

use crate::{
    max_scaled_index, min_scaled_index, position_to_scaled, scale_tick, scaled_to_position, CoreError, SearchDirection, TickPosition,
    TickmapFacade, TickmapWord, INVALID_TICK_SPACING, TICKMAP_WORD_BITS, TICK_INDEX_OUT_OF_BOUNDS, TICK_SEARCH_RANGE,
};

/// Get the furthest tick a single search starting at `tick` may reach.
///
/// The search window is `TICK_SEARCH_RANGE` positions wide and never leaves the range
/// addressable for the tick spacing (see `get_max_tick` and `get_min_tick`).
///
/// # Parameters
/// - `tick` - A i32 integer representing the tick the search starts from
/// - `tick_spacing` - A u16 integer representing the tick spacing, must be positive
/// - `up` - Search towards higher ticks if true
///
/// # Returns
/// - A i32 integer representing the last tick index the search may probe
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn get_search_limit(tick: i32, tick_spacing: u16, up: bool) -> i32 {
    let tick_spacing = tick_spacing.max(1);
    let index = tick / i32::from(tick_spacing);
    let limit = if up {
        index.saturating_add(TICK_SEARCH_RANGE).min(max_scaled_index(tick_spacing))
    } else {
        index.saturating_sub(TICK_SEARCH_RANGE).max(min_scaled_index(tick_spacing))
    };
    limit * i32::from(tick_spacing)
}

/// Find the smallest initialized tick strictly greater than `tick`.
///
/// At most `TICK_SEARCH_RANGE` positions above `tick` are scanned. The current tick itself is never
/// returned, see `get_previous_tick` for the inclusive counterpart.
///
/// # Parameters
/// - `tickmap` - The tickmap snapshot
/// - `tick` - A i32 integer representing the current tick, a multiple of the tick spacing
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - `Ok(Some)`: The next initialized tick
/// - `Ok(None)`: No initialized tick within the search window
/// - `TICK_INDEX_OUT_OF_BOUNDS` if `|tick| > MAX_TICK`
/// - `INVALID_TICK_INDEX` if `tick` is not a multiple of the tick spacing
/// - `INVALID_TICK_SPACING` if the tick spacing is zero
pub fn get_next_tick(tickmap: &TickmapFacade, tick: i32, tick_spacing: u16) -> Result<Option<i32>, CoreError> {
    let index = scale_tick(tick, tick_spacing)?;
    let start = (index + 1).max(min_scaled_index(tick_spacing));
    let limit = (index + TICK_SEARCH_RANGE).min(max_scaled_index(tick_spacing));
    if start > limit {
        return Ok(None);
    }

    let first = scaled_to_position(start).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
    let last = scaled_to_position(limit).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
    let next = next_set_position(tickmap, first, last);
    Ok(next.map(|position| position_to_scaled(position) * i32::from(tick_spacing)))
}

/// Find the greatest initialized tick less than or equal to `tick`.
///
/// The current tick is included: a caller standing on an initialized tick gets that tick back.
/// At most `TICK_SEARCH_RANGE` positions below `tick` are scanned.
///
/// # Parameters
/// - `tickmap` - The tickmap snapshot
/// - `tick` - A i32 integer representing the current tick, a multiple of the tick spacing
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - `Ok(Some)`: The previous initialized tick
/// - `Ok(None)`: No initialized tick within the search window
/// - `TICK_INDEX_OUT_OF_BOUNDS` if `|tick| > MAX_TICK`
/// - `INVALID_TICK_INDEX` if `tick` is not a multiple of the tick spacing
/// - `INVALID_TICK_SPACING` if the tick spacing is zero
pub fn get_previous_tick(tickmap: &TickmapFacade, tick: i32, tick_spacing: u16) -> Result<Option<i32>, CoreError> {
    let index = scale_tick(tick, tick_spacing)?;
    let start = index.min(max_scaled_index(tick_spacing));
    let limit = (index - TICK_SEARCH_RANGE).max(min_scaled_index(tick_spacing));
    if start < limit {
        return Ok(None);
    }

    let first = scaled_to_position(start).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
    let last = scaled_to_position(limit).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
    let previous = previous_set_position(tickmap, first, last);
    Ok(previous.map(|position| position_to_scaled(position) * i32::from(tick_spacing)))
}

/// Collect up to `limit` initialized ticks closest to `tick`.
///
/// The walk alternates between the two sides one position at a time, below first (inclusive of the
/// current tick) and then above, so the result is ordered by distance with the upper tick first on ties.
/// It never moves more than `max_range` positions away from `tick`.
///
/// # Parameters
/// - `tickmap` - The tickmap snapshot
/// - `tick` - A i32 integer representing the current tick, a multiple of the tick spacing
/// - `tick_spacing` - A u16 integer representing the tick spacing
/// - `limit` - The maximum number of ticks to return
/// - `max_range` - The maximum distance in positions from `tick`
/// - `direction` - Only walk to one side of `tick` if set
pub fn find_closest_ticks(
    tickmap: &TickmapFacade,
    tick: i32,
    tick_spacing: u16,
    limit: usize,
    max_range: u32,
    direction: Option<SearchDirection>,
) -> Result<Vec<i32>, CoreError> {
    let index = scale_tick(tick, tick_spacing)?;
    let max_range = i32::try_from(max_range).unwrap_or(i32::MAX);
    let top = index.saturating_add(max_range).min(max_scaled_index(tick_spacing));
    let bottom = index.saturating_sub(max_range).max(min_scaled_index(tick_spacing));

    let mut above = index + 1;
    let mut below = index.min(max_scaled_index(tick_spacing));
    let mut walk_up = direction != Some(SearchDirection::Down);
    let mut walk_down = direction != Some(SearchDirection::Up);
    let mut found = Vec::new();

    while found.len() < limit && (walk_up || walk_down) {
        if walk_down {
            if below < bottom {
                walk_down = false;
            } else {
                if is_scaled_set(tickmap, below) {
                    found.push(below * i32::from(tick_spacing));
                }
                below -= 1;
            }
        }
        if walk_up && found.len() < limit {
            if above > top {
                walk_up = false;
            } else {
                if is_scaled_set(tickmap, above) {
                    found.push(above * i32::from(tick_spacing));
                }
                above += 1;
            }
        }
    }

    Ok(found)
}

/// List every initialized tick addressable for the tick spacing, in ascending order.
pub fn get_initialized_ticks(tickmap: &TickmapFacade, tick_spacing: u16) -> Result<Vec<i32>, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    let min = min_scaled_index(tick_spacing);
    let max = max_scaled_index(tick_spacing);

    let mut ticks = Vec::new();
    for (word_index, word) in tickmap.words().iter().enumerate() {
        let mut remaining: TickmapWord = *word;
        while remaining != 0 {
            let bit_offset = remaining.trailing_zeros() as u8;
            remaining &= remaining - 1;
            let scaled = position_to_scaled(TickPosition::from_parts(word_index, bit_offset));
            if (min..=max).contains(&scaled) {
                ticks.push(scaled * i32::from(tick_spacing));
            }
        }
    }
    Ok(ticks)
}

fn is_scaled_set(tickmap: &TickmapFacade, scaled: i32) -> bool {
    scaled_to_position(scaled).is_some_and(|position| tickmap.is_set(position))
}

/// Scan upwards from `first` to `last` (both inclusive) a word at a time.
fn next_set_position(tickmap: &TickmapFacade, first: TickPosition, last: TickPosition) -> Option<TickPosition> {
    let mut cursor = first.index();
    while cursor <= last.index() {
        let position = TickPosition::new(cursor);
        // drop the bits below the cursor
        let word = tickmap.word(position.word_index()) >> position.bit_offset();
        if word != 0 {
            let found = cursor + word.trailing_zeros();
            return (found <= last.index()).then_some(TickPosition::new(found));
        }
        cursor = (position.word_index() as u32 + 1) * TICKMAP_WORD_BITS;
    }
    None
}

/// Scan downwards from `first` to `last` (both inclusive) a word at a time.
fn previous_set_position(tickmap: &TickmapFacade, first: TickPosition, last: TickPosition) -> Option<TickPosition> {
    let mut cursor = first.index();
    loop {
        let position = TickPosition::new(cursor);
        // keep the bits at or below the cursor
        let mask = TickmapWord::MAX >> (TICKMAP_WORD_BITS - 1 - u32::from(position.bit_offset()));
        let word = tickmap.word(position.word_index()) & mask;
        let word_start = position.word_index() as u32 * TICKMAP_WORD_BITS;
        if word != 0 {
            let found = word_start + (TICKMAP_WORD_BITS - 1 - word.leading_zeros());
            return (found >= last.index()).then_some(TickPosition::new(found));
        }
        if word_start <= last.index() {
            return None;
        }
        cursor = word_start - 1;
    }
}

//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use libm::{floor, log, pow};

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

use crate::{max_scaled_index, min_scaled_index, CoreError, INVALID_PRICE, INVALID_TICK_SPACING};

const TICK_BASE: f64 = 1.0001;

// Absorbs the rounding error of log(price) / log(TICK_BASE) for prices that sit exactly on a tick.
const TICK_EPSILON: f64 = 1e-9;

/// Convert a tick index into a price.
///
/// # Parameters
/// - `tick_index` - A i32 integer representing the tick index
///
/// # Returns
/// - A f64 number representing the price, `1.0001^tick_index`
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn tick_index_to_price(tick_index: i32) -> f64 {
    pow(TICK_BASE, tick_index.into())
}

/// Convert a price into the greatest usable tick whose price does not exceed it.
/// The result is clamped to the range addressable in a tickmap for the tick spacing.
///
/// # Parameters
/// - `price` - A f64 number representing the price
/// - `tick_spacing` - A u16 integer representing the tick spacing
///
/// # Returns
/// - `Ok`: A i32 integer representing the tick index, a multiple of the tick spacing
/// - `INVALID_PRICE` if the price is not a positive finite number
#[cfg_attr(feature = "wasm", wasm_expose)]
pub fn price_to_tick_index(price: f64, tick_spacing: u16) -> Result<i32, CoreError> {
    if tick_spacing == 0 {
        return Err(INVALID_TICK_SPACING);
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(INVALID_PRICE);
    }

    let tick = floor(log(price) / log(TICK_BASE) + TICK_EPSILON);
    let scaled = floor(tick / f64::from(tick_spacing));
    let min = f64::from(min_scaled_index(tick_spacing));
    let max = f64::from(max_scaled_index(tick_spacing));
    Ok(scaled.clamp(min, max) as i32 * i32::from(tick_spacing))
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;
    use crate::{get_max_tick, get_min_tick};
    use approx::assert_relative_eq;

    #[test]
    fn test_tick_index_to_price() {
        assert_relative_eq!(tick_index_to_price(0), 1.0);
        assert_relative_eq!(tick_index_to_price(1), 1.0001);
        assert_relative_eq!(tick_index_to_price(-1), 1.0 / 1.0001, epsilon = 1e-12);
        assert_relative_eq!(tick_index_to_price(10_000), 2.7181459268249255, epsilon = 1e-9);
    }

    #[test]
    fn test_price_to_tick_index() {
        assert_eq!(price_to_tick_index(1.0, 1), Ok(0));
        assert_eq!(price_to_tick_index(tick_index_to_price(100), 1), Ok(100));
        assert_eq!(price_to_tick_index(tick_index_to_price(-100), 1), Ok(-100));
        assert_eq!(price_to_tick_index(tick_index_to_price(105), 10), Ok(100));
        assert_eq!(price_to_tick_index(tick_index_to_price(-105), 10), Ok(-110));
    }

    #[test]
    fn test_price_to_tick_index_clamped() {
        assert_eq!(price_to_tick_index(1e300, 1), Ok(get_max_tick(1)));
        assert_eq!(price_to_tick_index(1e-300, 1), Ok(get_min_tick(1)));
    }

    #[test]
    fn test_price_to_tick_index_errors() {
        assert_eq!(price_to_tick_index(0.0, 1), Err(INVALID_PRICE));
        assert_eq!(price_to_tick_index(-1.0, 1), Err(INVALID_PRICE));
        assert_eq!(price_to_tick_index(f64::NAN, 1), Err(INVALID_PRICE));
        assert_eq!(price_to_tick_index(1.0, 0), Err(INVALID_TICK_SPACING));
    }
}

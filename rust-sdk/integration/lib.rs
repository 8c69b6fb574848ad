//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

// Builds tickmap-core against the oldest supported version of each dependency.

#[cfg(test)]
mod tests {
    use tickmap_core::{
        find_tickmap_changes, get_next_tick, get_previous_tick, price_to_tick_index, tick_index_to_price, TickmapChange, TickmapFacade,
        TickmapTracker,
    };

    #[test]
    fn test_search() {
        let tickmap = TickmapFacade::with_ticks(&[-20, 40], 10).unwrap();
        assert_eq!(get_next_tick(&tickmap, 0, 10), Ok(Some(40)));
        assert_eq!(get_previous_tick(&tickmap, 0, 10), Ok(Some(-20)));
    }

    #[test]
    fn test_diff() {
        let changes = find_tickmap_changes(&[0b0000_0001], &[0b0000_0010]).unwrap();
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn test_tracker() {
        let mut tracker = TickmapTracker::new(1, TickmapFacade::default()).unwrap();
        let changes = tracker.update(TickmapFacade::with_ticks(&[7], 1).unwrap()).unwrap();
        assert_eq!(changes.get(7), Some(TickmapChange::Added));
    }

    #[test]
    fn test_price() {
        assert_eq!(price_to_tick_index(tick_index_to_price(250), 1), Ok(250));
    }
}

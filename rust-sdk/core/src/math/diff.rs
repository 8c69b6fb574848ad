//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    CoreError, TickPosition, TickmapChange, TickmapChanges, TickmapWord, ARITHMETIC_OVERFLOW, TICKMAP_CHANGE_CONFLICT,
    TICKMAP_LENGTH_MISMATCH, TICKMAP_WORD_BITS, TICK_INDEX_OUT_OF_BOUNDS, TICK_LIMIT,
};

/// Find the flags that differ between two tickmap snapshots.
/// Keys are scaled tick indexes (`position - TICK_LIMIT`).
///
/// # Parameters
/// - `current` - The words of the cached snapshot
/// - `next` - The words of the fresh snapshot
///
/// # Returns
/// - `Ok`: One entry per differing flag
/// - `TICKMAP_LENGTH_MISMATCH` if the snapshots differ in length
pub fn find_tickmap_changes(current: &[TickmapWord], next: &[TickmapWord]) -> Result<TickmapChanges, CoreError> {
    find_tickmap_changes_with_offset(current, next, TICK_LIMIT)
}

/// Find the flags that differ between two tickmap snapshots, keyed by `position - offset`.
///
/// Use `offset = 0` for raw tickmap positions and `offset = TICK_LIMIT` for scaled tick indexes.
/// Identical words are skipped without inspecting their bits.
///
/// # Parameters
/// - `current` - The words of the cached snapshot
/// - `next` - The words of the fresh snapshot
/// - `offset` - Subtracted from every position
///
/// # Returns
/// - `Ok`: `Added` for every 0 -> 1 flag and `Removed` for every 1 -> 0 flag
/// - `TICKMAP_LENGTH_MISMATCH` if the snapshots differ in length
pub fn find_tickmap_changes_with_offset(current: &[TickmapWord], next: &[TickmapWord], offset: i32) -> Result<TickmapChanges, CoreError> {
    if current.len() != next.len() {
        return Err(TICKMAP_LENGTH_MISMATCH);
    }

    let mut changes = TickmapChanges::default();
    for (word_index, (current_word, next_word)) in current.iter().zip(next).enumerate() {
        let mut diff = current_word ^ next_word;
        while diff != 0 {
            let bit_offset = diff.trailing_zeros() as u8;
            diff &= diff - 1;

            let index = offset_index(word_index, bit_offset, offset)?;
            let change = if next_word & (1 << bit_offset) != 0 {
                TickmapChange::Added
            } else {
                TickmapChange::Removed
            };
            changes.record(index, change);
        }
    }
    Ok(changes)
}

/// Apply a change set to a snapshot, producing the updated words.
/// The input snapshot is left untouched.
///
/// # Parameters
/// - `current` - The words of the snapshot the changes were computed against
/// - `changes` - Changes keyed by `position - offset`
/// - `offset` - The offset the changes were computed with
///
/// # Returns
/// - `Ok`: The updated words
/// - `TICK_INDEX_OUT_OF_BOUNDS` if a change points outside the snapshot
/// - `TICKMAP_CHANGE_CONFLICT` if a flag to add is already set or a flag to remove is not set
pub fn apply_tickmap_changes(current: &[TickmapWord], changes: &TickmapChanges, offset: i32) -> Result<Vec<TickmapWord>, CoreError> {
    let mut words = current.to_vec();
    for (index, change) in changes.iter() {
        let raw = index.checked_add(offset).ok_or(ARITHMETIC_OVERFLOW)?;
        let position = TickPosition::new(u32::try_from(raw).map_err(|_| TICK_INDEX_OUT_OF_BOUNDS)?);
        let word = words.get_mut(position.word_index()).ok_or(TICK_INDEX_OUT_OF_BOUNDS)?;
        let mask: TickmapWord = 1 << position.bit_offset();
        let is_set = *word & mask != 0;
        match (change, is_set) {
            (TickmapChange::Added, false) | (TickmapChange::Removed, true) => *word ^= mask,
            _ => return Err(TICKMAP_CHANGE_CONFLICT),
        }
    }
    Ok(words)
}

fn offset_index(word_index: usize, bit_offset: u8, offset: i32) -> Result<i32, CoreError> {
    let position = word_index
        .checked_mul(TICKMAP_WORD_BITS as usize)
        .and_then(|bits| bits.checked_add(bit_offset.into()))
        .ok_or(ARITHMETIC_OVERFLOW)?;
    let position = i32::try_from(position).map_err(|_| ARITHMETIC_OVERFLOW)?;
    position.checked_sub(offset).ok_or(ARITHMETIC_OVERFLOW)
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;
    use crate::{TickmapFacade, TICKMAP_SIZE};
    use proptest::prelude::*;

    fn changes_of(entries: &[(i32, TickmapChange)]) -> TickmapChanges {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_added_ticks_without_offset() {
        let current = [0b0000_0000, 0b0000_1101];
        let next = [0b0000_0011, 0b0110_1111];
        let changes = find_tickmap_changes_with_offset(&current, &next, 0).unwrap();
        let expected = changes_of(&[
            (0, TickmapChange::Added),
            (1, TickmapChange::Added),
            (9, TickmapChange::Added),
            (13, TickmapChange::Added),
            (14, TickmapChange::Added),
        ]);
        assert_eq!(changes, expected);
    }

    #[test]
    fn test_added_ticks_with_default_offset() {
        let current = [0b0000_0000, 0b0000_1101];
        let next = [0b0000_0011, 0b0110_1111];
        let changes = find_tickmap_changes(&current, &next).unwrap();
        let expected = changes_of(&[
            (-100_000, TickmapChange::Added),
            (-99_999, TickmapChange::Added),
            (-99_991, TickmapChange::Added),
            (-99_987, TickmapChange::Added),
            (-99_986, TickmapChange::Added),
        ]);
        assert_eq!(changes, expected);
    }

    #[test]
    fn test_removed_ticks_without_offset() {
        let current = [0b0111_1011, 0b1110_1111];
        let next = [0b0010_0010, 0b1000_1111];
        let changes = find_tickmap_changes_with_offset(&current, &next, 0).unwrap();
        let expected = changes_of(&[
            (0, TickmapChange::Removed),
            (3, TickmapChange::Removed),
            (4, TickmapChange::Removed),
            (6, TickmapChange::Removed),
            (13, TickmapChange::Removed),
            (14, TickmapChange::Removed),
        ]);
        assert_eq!(changes, expected);
    }

    #[test]
    fn test_removed_ticks_with_default_offset() {
        let current = [0b0111_1011, 0b1110_1111];
        let next = [0b0010_0010, 0b1000_1111];
        let changes = find_tickmap_changes(&current, &next).unwrap();
        assert_eq!(changes.removed().collect::<Vec<_>>(), vec![-100_000, -99_997, -99_996, -99_994, -99_987, -99_986]);
        assert_eq!(changes.added().count(), 0);
    }

    #[test]
    fn test_mixed_changes() {
        let current = [0b1000_0001];
        let next = [0b0000_0011];
        let changes = find_tickmap_changes_with_offset(&current, &next, 0).unwrap();
        assert_eq!(changes, changes_of(&[(1, TickmapChange::Added), (7, TickmapChange::Removed)]));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(find_tickmap_changes(&[0, 0], &[0]), Err(TICKMAP_LENGTH_MISMATCH));
        assert_eq!(find_tickmap_changes_with_offset(&[], &[1], 0), Err(TICKMAP_LENGTH_MISMATCH));
    }

    #[test]
    fn test_full_size_tickmaps() {
        let current = TickmapFacade::with_ticks(&[-500, 0, 700], 10).unwrap();
        let next = TickmapFacade::with_ticks(&[0, 700, 1_200], 10).unwrap();
        let changes = find_tickmap_changes(current.words(), next.words()).unwrap().scale(10).unwrap();
        assert_eq!(changes, changes_of(&[(-500, TickmapChange::Removed), (1_200, TickmapChange::Added)]));
        assert_eq!(next.words().len(), TICKMAP_SIZE);
    }

    #[test]
    fn test_apply_changes() {
        let current = [0b0000_0000, 0b0000_1101];
        let changes = changes_of(&[(0, TickmapChange::Added), (10, TickmapChange::Removed)]);
        assert_eq!(apply_tickmap_changes(&current, &changes, 0), Ok(vec![0b0000_0001, 0b0000_1001]));
        assert_eq!(current, [0b0000_0000, 0b0000_1101]);
    }

    #[test]
    fn test_apply_changes_errors() {
        let current = [0b0000_0001, 0b0000_0000];
        assert_eq!(
            apply_tickmap_changes(&current, &changes_of(&[(0, TickmapChange::Added)]), 0),
            Err(TICKMAP_CHANGE_CONFLICT)
        );
        assert_eq!(
            apply_tickmap_changes(&current, &changes_of(&[(9, TickmapChange::Removed)]), 0),
            Err(TICKMAP_CHANGE_CONFLICT)
        );
        assert_eq!(
            apply_tickmap_changes(&current, &changes_of(&[(16, TickmapChange::Added)]), 0),
            Err(TICK_INDEX_OUT_OF_BOUNDS)
        );
        assert_eq!(
            apply_tickmap_changes(&current, &changes_of(&[(-1, TickmapChange::Added)]), 0),
            Err(TICK_INDEX_OUT_OF_BOUNDS)
        );
    }

    proptest! {
        #[test]
        fn test_no_changes_against_itself(words in proptest::collection::vec(any::<u8>(), 0..64), offset in -TICK_LIMIT..=TICK_LIMIT) {
            prop_assert!(find_tickmap_changes_with_offset(&words, &words, offset).unwrap().is_empty());
        }

        #[test]
        fn test_changes_round_trip(
            pairs in proptest::collection::vec((any::<u8>(), any::<u8>()), 0..64),
            offset in -TICK_LIMIT..=TICK_LIMIT,
        ) {
            let (current, next): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
            let changes = find_tickmap_changes_with_offset(&current, &next, offset).unwrap();

            let differing_bits: u32 = current.iter().zip(&next).map(|(a, b)| (a ^ b).count_ones()).sum();
            prop_assert_eq!(changes.len(), differing_bits as usize);
            prop_assert_eq!(apply_tickmap_changes(&current, &changes, offset), Ok(next));
        }
    }
}

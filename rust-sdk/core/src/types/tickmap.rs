//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

#![allow(non_snake_case)]

use core::mem::size_of;

#[cfg(feature = "wasm")]
use serde_big_array::BigArray;

#[cfg(feature = "wasm")]
use tickmap_macros::wasm_expose;

use crate::{tick_to_position, CoreError, TickmapWord, TICKMAP_LENGTH_MISMATCH, TICKMAP_SIZE, TICKMAP_WORD_BITS};

/// Address of a single tick flag inside a tickmap.
///
/// A position is `tick / tick_spacing + TICK_LIMIT`. It is deliberately not an `i32` so that it
/// cannot be confused with a tick index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickPosition(u32);

impl TickPosition {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn from_parts(word_index: usize, bit_offset: u8) -> Self {
        Self(word_index as u32 * TICKMAP_WORD_BITS + bit_offset as u32)
    }

    /// The raw bit index inside the tickmap.
    pub const fn index(self) -> u32 {
        self.0
    }

    pub const fn word_index(self) -> usize {
        (self.0 / TICKMAP_WORD_BITS) as usize
    }

    pub const fn bit_offset(self) -> u8 {
        (self.0 % TICKMAP_WORD_BITS) as u8
    }
}

/// A snapshot of a market's tickmap.
///
/// Bit `b` of word `w` is set if and only if the tick at position `w * TICKMAP_WORD_BITS + b`
/// currently holds liquidity. The length is fixed by the type and a default tickmap is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", wasm_expose)]
pub struct TickmapFacade {
    #[cfg_attr(feature = "wasm", serde(with = "BigArray"))]
    pub bitmap: [TickmapWord; TICKMAP_SIZE],
}

impl Default for TickmapFacade {
    fn default() -> Self {
        Self {
            bitmap: [0; TICKMAP_SIZE],
        }
    }
}

impl From<[TickmapWord; TICKMAP_SIZE]> for TickmapFacade {
    fn from(bitmap: [TickmapWord; TICKMAP_SIZE]) -> Self {
        Self { bitmap }
    }
}

impl TickmapFacade {
    /// Decode a tickmap from the serialized account buffer (little-endian words).
    ///
    /// # Returns
    /// - `TICKMAP_LENGTH_MISMATCH` if the buffer does not hold exactly `TICKMAP_SIZE` words
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        const WORD_BYTES: usize = size_of::<TickmapWord>();
        if bytes.len() != TICKMAP_SIZE * WORD_BYTES {
            return Err(TICKMAP_LENGTH_MISMATCH);
        }
        let mut bitmap = [0; TICKMAP_SIZE];
        for (word, chunk) in bitmap.iter_mut().zip(bytes.chunks_exact(WORD_BYTES)) {
            *word = TickmapWord::from_le_bytes(chunk.try_into().map_err(|_| TICKMAP_LENGTH_MISMATCH)?);
        }
        Ok(Self { bitmap })
    }

    /// Build a tickmap with exactly the given ticks initialized.
    pub fn with_ticks(ticks: &[i32], tick_spacing: u16) -> Result<Self, CoreError> {
        let mut tickmap = Self::default();
        for &tick in ticks {
            let position = tick_to_position(tick, tick_spacing)?;
            tickmap.bitmap[position.word_index()] |= 1 << position.bit_offset();
        }
        Ok(tickmap)
    }

    pub fn words(&self) -> &[TickmapWord] {
        &self.bitmap
    }

    pub fn word(&self, word_index: usize) -> TickmapWord {
        self.bitmap.get(word_index).copied().unwrap_or(0)
    }

    /// Whether the flag at `position` is set. Positions past the end read as unset.
    pub fn is_set(&self, position: TickPosition) -> bool {
        self.word(position.word_index()) & (1 << position.bit_offset()) != 0
    }
}

#[cfg(all(test, not(feature = "wasm")))]
mod tests {
    use super::*;
    use crate::{INVALID_TICK_INDEX, TICK_LIMIT};

    #[test]
    fn test_tick_position_parts() {
        let position = TickPosition::new(100_013);
        assert_eq!(position.word_index(), 12_501);
        assert_eq!(position.bit_offset(), 5);
        assert_eq!(TickPosition::from_parts(12_501, 5), position);
    }

    #[test]
    fn test_default_tickmap_is_empty() {
        let tickmap = TickmapFacade::default();
        assert_eq!(tickmap.words().len(), TICKMAP_SIZE);
        assert!(tickmap.words().iter().all(|word| *word == 0));
    }

    #[test]
    fn test_from_bytes() {
        let mut bytes = vec![0u8; TICKMAP_SIZE];
        bytes[12_500] = 0b0000_0001;
        let tickmap = TickmapFacade::from_bytes(&bytes).unwrap();
        assert!(tickmap.is_set(TickPosition::new(TICK_LIMIT as u32)));
        assert!(!tickmap.is_set(TickPosition::new(TICK_LIMIT as u32 + 1)));
    }

    #[test]
    fn test_from_bytes_length_mismatch() {
        assert_eq!(TickmapFacade::from_bytes(&[0u8; 2]), Err(TICKMAP_LENGTH_MISMATCH));
        assert_eq!(TickmapFacade::from_bytes(&vec![0u8; TICKMAP_SIZE + 1]), Err(TICKMAP_LENGTH_MISMATCH));
    }

    #[test]
    fn test_with_ticks() {
        let tickmap = TickmapFacade::with_ticks(&[-10, 0, 30], 10).unwrap();
        assert!(tickmap.is_set(TickPosition::new(TICK_LIMIT as u32 - 1)));
        assert!(tickmap.is_set(TickPosition::new(TICK_LIMIT as u32)));
        assert!(tickmap.is_set(TickPosition::new(TICK_LIMIT as u32 + 3)));
        assert_eq!(tickmap.words().iter().map(|word| word.count_ones()).sum::<u32>(), 3);
        assert_eq!(TickmapFacade::with_ticks(&[5], 10), Err(INVALID_TICK_INDEX));
    }

    #[test]
    fn test_is_set_past_end() {
        let tickmap = TickmapFacade::default();
        assert!(!tickmap.is_set(TickPosition::from_parts(TICKMAP_SIZE + 10, 0)));
    }
}

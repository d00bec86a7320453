//! # Glyph Slot Pool
//!
//! A fixed set of printer glyph slots ordered by recency of use.
//!
//! ```text
//!  LRU                                         MRU
//!  [0x43: None] [0x40: '丂'] [0x42: '👍'] [0x41: 'য']
//!     ^ next slot to be (re)defined
//! ```
//!
//! Capacity is the size of the device's code space (94 or 95), so lookups
//! are a linear scan.

use crate::error::GaijiError;

/// One printer glyph slot and the character currently defined in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub code: u8,
    pub occupant: Option<char>,
}

/// Recency-ordered slots; index 0 is least recently used.
#[derive(Debug, Clone)]
pub struct SlotPool {
    slots: Vec<Slot>,
}

impl SlotPool {
    /// Build an empty pool over `codes`, first code first in line for use.
    ///
    /// An empty code space is a configuration error.
    pub fn new(codes: impl IntoIterator<Item = u8>) -> Result<Self, GaijiError> {
        let slots: Vec<Slot> = codes
            .into_iter()
            .map(|code| Slot {
                code,
                occupant: None,
            })
            .collect();

        if slots.is_empty() {
            return Err(GaijiError::Configuration(
                "Glyph slot pool has no codes".to_string(),
            ));
        }

        let pool = Self { slots };
        debug_assert!(pool.codes_unique(), "Duplicate slot code in pool");
        Ok(pool)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a character
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.occupant.is_some()).count()
    }

    /// Slots from least to most recently used
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// The slot that the next miss will take
    pub fn lru(&self) -> &Slot {
        &self.slots[0]
    }

    /// Code holding `ch`, without touching recency
    pub fn code_of(&self, ch: char) -> Option<u8> {
        self.slots
            .iter()
            .find(|s| s.occupant == Some(ch))
            .map(|s| s.code)
    }

    /// On a hit, mark the slot holding `ch` most recently used and return its code.
    pub fn touch(&mut self, ch: char) -> Option<u8> {
        let idx = self.slots.iter().position(|s| s.occupant == Some(ch))?;
        let slot = self.slots.remove(idx);
        self.slots.push(slot);
        Some(slot.code)
    }

    /// Give the least recently used slot to `ch` and mark it most recently used.
    ///
    /// Returns the slot code and the character it previously held.
    pub fn assign_lru(&mut self, ch: char) -> (u8, Option<char>) {
        debug_assert!(
            self.code_of(ch).is_none(),
            "{:?} is already resident; touch it instead",
            ch
        );

        let mut slot = self.slots.remove(0);
        let evicted = slot.occupant.replace(ch);
        self.slots.push(slot);

        debug_assert!(self.occupants_unique(), "Duplicate occupant in pool");
        (slot.code, evicted)
    }

    /// Forget what `code` holds and put it first in line for reuse.
    pub fn vacate(&mut self, code: u8) {
        if let Some(idx) = self.slots.iter().position(|s| s.code == code) {
            let mut slot = self.slots.remove(idx);
            slot.occupant = None;
            self.slots.insert(0, slot);
        }
    }

    fn codes_unique(&self) -> bool {
        let mut seen = [false; 256];
        self.slots
            .iter()
            .all(|s| !std::mem::replace(&mut seen[s.code as usize], true))
    }

    fn occupants_unique(&self) -> bool {
        let mut chars: Vec<char> = self.slots.iter().filter_map(|s| s.occupant).collect();
        let total = chars.len();
        chars.sort_unstable();
        chars.dedup();
        chars.len() == total
    }
}

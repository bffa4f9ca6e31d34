//! Single-letter difference lookup table
//!
//! Two equal-length encodings differ in exactly one letter iff their XOR is
//! nonzero in exactly one lane. Lanes never overlap, so that XOR is some
//! `d << (8 * i)` with `d` in `1..32` (two 5-bit letter codes XOR to < 32).
//! Precomputing every such pattern per length turns the pair test into one
//! hash lookup.
//!
//! Known issue in the historical table: it inserted `d = 0` as well, which
//! matches identical words. That entry is left out here, so equal words are
//! never a pair. Every other `d` below 32 is the XOR of some two letter codes.

use super::codec::{EncodedWord, LANE_BITS, MAX_LANES};
use rustc_hash::FxHashSet;

/// Largest lane XOR value plus one
const DELTA_LIMIT: u64 = 32;

/// Per-length sets of single-lane XOR patterns
#[derive(Debug, Clone)]
pub struct SingleLetterLut {
    min_len: usize,
    /// `tables[k]` holds patterns for words of length `min_len + k`
    tables: Vec<FxHashSet<u64>>,
}

impl SingleLetterLut {
    /// Build tables for every length in `min_len..=max_len`
    ///
    /// # Panics
    /// Panics if `max_len > MAX_LANES` or `min_len > max_len`. Both are
    /// configuration errors checked by `GraphConfig::validate` first.
    #[must_use]
    pub fn new(min_len: usize, max_len: usize) -> Self {
        assert!(max_len <= MAX_LANES, "max_len {max_len} exceeds {MAX_LANES} lanes");
        assert!(min_len <= max_len, "min_len {min_len} exceeds max_len {max_len}");

        let tables = (min_len..=max_len)
            .map(|length| {
                (0..length)
                    .flat_map(|lane| {
                        (1..DELTA_LIMIT).map(move |delta| delta << (lane as u32 * LANE_BITS))
                    })
                    .collect::<FxHashSet<u64>>()
            })
            .collect();

        Self { min_len, tables }
    }

    /// Whether two encodings of `length` letters differ in exactly one letter
    ///
    /// Lengths outside the table's range are never pairs.
    ///
    /// # Examples
    /// ```
    /// use word_graph::core::{encode, SingleLetterLut};
    ///
    /// let lut = SingleLetterLut::new(2, 6);
    /// assert!(lut.is_change_pair(encode("CAT"), encode("BAT"), 3));
    /// assert!(!lut.is_change_pair(encode("CAT"), encode("DOG"), 3));
    /// assert!(!lut.is_change_pair(encode("CAT"), encode("CAT"), 3));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_change_pair(&self, a: EncodedWord, b: EncodedWord, length: usize) -> bool {
        self.table(length)
            .is_some_and(|table| table.contains(&(a.bits() ^ b.bits())))
    }

    /// Smallest length covered
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Largest length covered
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.min_len + self.tables.len() - 1
    }

    /// Total number of patterns across all lengths
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.iter().map(FxHashSet::len).sum()
    }

    /// True only if every covered length is zero letters long
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, length: usize) -> Option<&FxHashSet<u64>> {
        length
            .checked_sub(self.min_len)
            .and_then(|k| self.tables.get(k))
    }
}

//! Word packing into fixed-width integers
//!
//! Each letter occupies one 8-bit lane of a `u64`, holding `letter - 'A'` (0-25).
//! Lane 0 (least significant byte) is the first letter. Lanes beyond the word's
//! length are zero, so the integer alone does not record how long the word is.

use std::fmt;
use thiserror::Error;

/// Bits per letter lane
pub const LANE_BITS: u32 = 8;

/// Mask selecting a single lane
pub const LANE_MASK: u64 = 0xFF;

/// Maximum number of letters a `u64` can hold (8 bits per lane)
pub const MAX_LANES: usize = (u64::BITS / LANE_BITS) as usize;

/// A validated uppercase word of 1 to `MAX_LANES` letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word has {0} letters, at most {MAX_LANES} fit in one encoding")]
    TooLong(usize),
    #[error("word contains non-letter character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a word from arbitrary text
    ///
    /// Surrounding whitespace is trimmed and letters are uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty, longer than
    /// `MAX_LANES`, or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use word_graph::core::Word;
    ///
    /// let word = Word::new("  cat ").unwrap();
    /// assert_eq!(word.text(), "CAT");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        // All ASCII from here, so byte length equals letter count
        if trimmed.len() > MAX_LANES {
            return Err(WordError::TooLong(trimmed.len()));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pack this word into lanes
    #[inline]
    #[must_use]
    pub fn encode(&self) -> EncodedWord {
        encode(&self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word packed one letter per 8-bit lane
///
/// Only comparable with encodings of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedWord(u64);

impl EncodedWord {
    /// Wrap a raw packed value
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Raw packed value
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Letter code (0-25) stored in lane `index`
    ///
    /// # Panics
    /// Panics in debug mode if `index >= MAX_LANES`
    #[inline]
    #[must_use]
    pub const fn lane(self, index: usize) -> u8 {
        debug_assert!(index < MAX_LANES, "lane index out of range");
        ((self.0 >> (index as u32 * LANE_BITS)) & LANE_MASK) as u8
    }

    /// Unpack back into text of `length` letters
    #[inline]
    #[must_use]
    pub fn decode(self, length: usize) -> String {
        decode(self, length)
    }
}

/// Pack uppercase ASCII letters into an `EncodedWord`
///
/// The caller guarantees the input is `A-Z` only and at most `MAX_LANES`
/// long; `Word::new` is the validating entry point.
///
/// # Examples
/// ```
/// use word_graph::core::{decode, encode};
///
/// let packed = encode("CAT");
/// assert_eq!(packed.bits(), 2 | (0 << 8) | (19 << 16));
/// assert_eq!(decode(packed, 3), "CAT");
/// ```
#[must_use]
pub fn encode(word: &str) -> EncodedWord {
    debug_assert!(word.len() <= MAX_LANES, "word too long to encode");

    let bits = word
        .bytes()
        .enumerate()
        .fold(0u64, |acc, (i, letter)| {
            acc | (u64::from(letter - b'A') << (i as u32 * LANE_BITS))
        });

    EncodedWord(bits)
}

/// Unpack `length` lanes back into uppercase text
///
/// Lane values are trusted to be letter codes; no range check is made.
#[must_use]
pub fn decode(value: EncodedWord, length: usize) -> String {
    (0..length)
        .map(|i| char::from(value.lane(i) + b'A'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_lanes_is_eight() {
        assert_eq!(MAX_LANES, 8);
    }

    #[test]
    fn word_creation_normalizes() {
        assert_eq!(Word::new("cat").unwrap().text(), "CAT");
        assert_eq!(Word::new("  CaTs\t").unwrap().text(), "CATS");
    }

    #[test]
    fn word_creation_rejects_invalid() {
        assert_eq!(Word::new("   "), Err(WordError::Empty));
        assert_eq!(Word::new("abcdefghi"), Err(WordError::TooLong(9)));
        assert_eq!(Word::new("it's"), Err(WordError::InvalidCharacter('\'')));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacter('é')));
        assert!(Word::new("two words").is_err());
    }

    #[test]
    fn word_of_max_length_is_accepted() {
        let word = Word::new("abcdefgh").unwrap();
        assert_eq!(word.len(), MAX_LANES);
        assert_eq!(word.encode().decode(MAX_LANES), "ABCDEFGH");
    }

    #[test]
    fn encode_places_first_letter_in_low_lane() {
        let packed = encode("BA");
        assert_eq!(packed.bits(), 1);
        assert_eq!(packed.lane(0), 1);
        assert_eq!(packed.lane(1), 0);
    }

    #[test]
    fn encode_known_values() {
        assert_eq!(encode("AA").bits(), 0);
        assert_eq!(encode("Z").bits(), 25);
        assert_eq!(encode("AZ").bits(), 25 << 8);
        assert_eq!(encode("ZZZZZZZZ").bits(), 0x1919_1919_1919_1919);
    }

    #[test]
    fn decode_needs_original_length() {
        // Trailing 'A's encode to zero lanes
        let packed = encode("CAA");
        assert_eq!(decode(packed, 1), "C");
        assert_eq!(decode(packed, 3), "CAA");
        assert_eq!(packed, encode("C"));
    }

    #[test]
    fn round_trip_sample_words() {
        for text in ["AT", "CAT", "CATS", "HELLO", "ZEBRAS", "QUIZZING"] {
            let packed = encode(text);
            assert_eq!(decode(packed, text.len()), text);
            assert_eq!(encode(&decode(packed, text.len())), packed);
        }
    }

    #[test]
    fn word_display() {
        let word = Word::new("dog").unwrap();
        assert_eq!(format!("{word}"), "DOG");
    }
}

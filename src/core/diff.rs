//! Single-edit classification between two words
//!
//! Equal lengths: a `Change` if exactly one position differs.
//! Lengths one apart: an `Add` or `Remove` if deleting one letter of the
//! longer word yields the shorter one.

use super::codec::{EncodedWord, MAX_LANES};
use super::lut::SingleLetterLut;
use std::fmt;

/// The kind of single edit connecting two words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EditKind {
    /// One letter substituted, lengths equal
    Change,
    /// Source is one letter shorter than target
    Add,
    /// Source is one letter longer than target
    Remove,
}

impl EditKind {
    /// Edge weight used in the exported edge table
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Change => 2,
            Self::Add | Self::Remove => 1,
        }
    }

    /// Lowercase name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the edit turning `a` into `b`
///
/// Returns `None` when the words are identical or more than one edit apart.
///
/// # Examples
/// ```
/// use word_graph::core::{classify, EditKind};
///
/// assert_eq!(classify("CAT", "BAT"), Some(EditKind::Change));
/// assert_eq!(classify("CAT", "CATS"), Some(EditKind::Add));
/// assert_eq!(classify("CATS", "CAT"), Some(EditKind::Remove));
/// assert_eq!(classify("CATS", "BAT"), None);
/// assert_eq!(classify("AT", "CATS"), None);
/// ```
#[must_use]
pub fn classify(a: &str, b: &str) -> Option<EditKind> {
    classify_bytes(a.as_bytes(), b.as_bytes())
}

fn classify_bytes(a: &[u8], b: &[u8]) -> Option<EditKind> {
    match a.len().abs_diff(b.len()) {
        0 => is_single_change(a, b).then_some(EditKind::Change),
        1 if a.len() > b.len() => is_single_deletion(a, b).then_some(EditKind::Remove),
        1 => is_single_deletion(b, a).then_some(EditKind::Add),
        _ => None,
    }
}

/// Exactly one position differs (slow path, O(length))
fn is_single_change(a: &[u8], b: &[u8]) -> bool {
    let mut diffs = 0;
    for (x, y) in a.iter().zip(b) {
        if x != y {
            diffs += 1;
            if diffs >= 2 {
                return false;
            }
        }
    }
    diffs == 1
}

/// Deleting one letter of `long` yields `short`; requires `long.len() == short.len() + 1`
fn is_single_deletion(long: &[u8], short: &[u8]) -> bool {
    debug_assert_eq!(long.len(), short.len() + 1);

    // Skip at the first mismatch; everything after must line up shifted by one
    let split = long
        .iter()
        .zip(short)
        .position(|(x, y)| x != y)
        .unwrap_or(short.len());

    long[split + 1..] == short[split..]
}

/// Edit classification over encoded words
///
/// Equal-length pairs go through the lookup table in O(1); adjacent lengths
/// compare lanes directly without decoding.
#[derive(Debug, Clone, Copy)]
pub struct DiffDetector<'a> {
    lut: &'a SingleLetterLut,
}

impl<'a> DiffDetector<'a> {
    #[must_use]
    pub const fn new(lut: &'a SingleLetterLut) -> Self {
        Self { lut }
    }

    /// The lookup table backing the equal-length path
    #[must_use]
    pub const fn lut(&self) -> &'a SingleLetterLut {
        self.lut
    }

    /// Classify the edit turning `a` (of `len_a` letters) into `b` (of `len_b`)
    ///
    /// # Examples
    /// ```
    /// use word_graph::core::{encode, DiffDetector, EditKind, SingleLetterLut};
    ///
    /// let lut = SingleLetterLut::new(2, 6);
    /// let detector = DiffDetector::new(&lut);
    ///
    /// assert_eq!(
    ///     detector.classify_encoded(encode("BAT"), 3, encode("AT"), 2),
    ///     Some(EditKind::Remove)
    /// );
    /// ```
    #[must_use]
    pub fn classify_encoded(
        &self,
        a: EncodedWord,
        len_a: usize,
        b: EncodedWord,
        len_b: usize,
    ) -> Option<EditKind> {
        match len_a.abs_diff(len_b) {
            0 => self
                .lut
                .is_change_pair(a, b, len_a)
                .then_some(EditKind::Change),
            1 => {
                let lanes_a = unpack(a, len_a);
                let lanes_b = unpack(b, len_b);
                classify_bytes(&lanes_a[..len_a], &lanes_b[..len_b])
            }
            _ => None,
        }
    }
}

/// Spread lanes into a byte array; only the first `len` entries are meaningful
#[inline]
fn unpack(word: EncodedWord, len: usize) -> [u8; MAX_LANES] {
    let mut lanes = [0u8; MAX_LANES];
    for (i, lane) in lanes.iter_mut().enumerate().take(len) {
        *lane = word.lane(i);
    }
    lanes
}

//! Core word encoding and edit detection
//!
//! Pure types with no I/O: the lane codec, the single-letter lookup table and
//! the edit classifier built on top of both.

mod codec;
mod diff;
mod lut;

pub use codec::{
    EncodedWord, LANE_BITS, LANE_MASK, MAX_LANES, Word, WordError, decode, encode,
};
pub use diff::{DiffDetector, EditKind, classify};
pub use lut::SingleLetterLut;

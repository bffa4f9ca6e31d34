//! Word lists and the length-bucketed dictionary
//!
//! Raw words come from the embedded sample or a file. `Dictionary` keeps the
//! valid ones, encoded and grouped by length.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

use crate::core::{EncodedWord, Word, decode};
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace};

/// Name selecting the embedded sample list
pub const SAMPLE_NAME: &str = "sample";

/// Where the raw word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The bundled sample list
    Embedded,
    /// A plain-text file, one word per line
    File(PathBuf),
}

impl WordSource {
    /// `sample` selects the embedded list; anything else is a file path
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == SAMPLE_NAME {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(name))
        }
    }

    /// Read the raw lines
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(SAMPLE)),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded {SAMPLE_NAME} ({SAMPLE_COUNT} words)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Failure to produce a usable dictionary, always fatal
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {source_name} has no words of length {min_len}..={max_len}")]
    Empty {
        source_name: String,
        min_len: usize,
        max_len: usize,
    },
}

/// Encoded words grouped by length
///
/// Each bucket keeps first-seen input order. Duplicates are dropped, so
/// every entry is a distinct node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    min_len: usize,
    /// `buckets[k]` holds words of length `min_len + k`
    buckets: Vec<Vec<EncodedWord>>,
}

impl Dictionary {
    /// Read and index a word source
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the source cannot be read and
    /// `DictionaryError::Empty` if no word survives filtering.
    pub fn load(source: &WordSource, min_len: usize, max_len: usize) -> Result<Self, DictionaryError> {
        let lines = source.read_lines().map_err(|e| DictionaryError::Io {
            path: match source {
                WordSource::File(path) => path.clone(),
                WordSource::Embedded => Path::new(SAMPLE_NAME).to_path_buf(),
            },
            source: e,
        })?;

        info!(source = %source, lines = lines.len(), "read word list");

        let dictionary = Self::from_words(&lines, min_len, max_len);
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty {
                source_name: source.to_string(),
                min_len,
                max_len,
            });
        }

        Ok(dictionary)
    }

    /// Index raw words, silently skipping invalid or out-of-range ones
    ///
    /// Words are trimmed and uppercased first.
    ///
    /// # Examples
    /// ```
    /// use word_graph::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "Bat", "x", "c-t", "cats", "CAT"], 2, 4);
    /// assert_eq!(dict.bucket(3).len(), 2);
    /// assert_eq!(dict.bucket(4).len(), 1);
    /// assert_eq!(dict.word_count(), 3);
    /// ```
    pub fn from_words<I, S>(words: I, min_len: usize, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets = vec![Vec::new(); (min_len..=max_len).count()];
        let mut seen: FxHashSet<(usize, EncodedWord)> = FxHashSet::default();
        let mut skipped = 0usize;

        for raw in words {
            let raw = raw.as_ref();
            let word = match Word::new(raw) {
                Ok(word) if (min_len..=max_len).contains(&word.len()) => word,
                Ok(_) => {
                    skipped += 1;
                    continue;
                }
                Err(e) => {
                    trace!(word = raw, error = %e, "skipping word");
                    skipped += 1;
                    continue;
                }
            };

            let encoded = word.encode();
            if seen.insert((word.len(), encoded)) {
                buckets[word.len() - min_len].push(encoded);
            }
        }

        let dictionary = Self { min_len, buckets };
        for (length, bucket) in dictionary.buckets() {
            debug!(length, words = bucket.len(), "loaded bucket");
        }
        debug!(skipped, "words outside alphabet or length range");

        dictionary
    }

    /// Words of `length` letters in input order; empty if none or out of range
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[EncodedWord] {
        length
            .checked_sub(self.min_len)
            .and_then(|k| self.buckets.get(k))
            .map_or(&[], Vec::as_slice)
    }

    /// Each length with its bucket, shortest first
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &[EncodedWord])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(k, bucket)| (self.min_len + k, bucket.as_slice()))
    }

    /// Smallest indexed length
    #[must_use]
    pub const fn min_len(&self) -> usize {
        self.min_len
    }

    /// Largest indexed length
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.min_len + self.buckets.len().saturating_sub(1)
    }

    /// Total number of distinct words
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when no bucket holds a word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Whether `word` is indexed
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.bucket(word.len()).contains(&word.encode())
    }

    /// All words decoded to text, by length then input order
    pub fn iter_words(&self) -> impl Iterator<Item = String> + '_ {
        self.buckets()
            .flat_map(|(length, bucket)| bucket.iter().map(move |&w| decode(w, length)))
    }
}

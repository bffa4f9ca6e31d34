//! Graph edges

use crate::core::EditKind;
use std::fmt;

/// A single edit from `source` to `target`
///
/// `Change` edges are stored once per unordered pair. `Add` and `Remove`
/// edges are directed; each insertion pair appears once in each direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub kind: EditKind,
}

impl Edge {
    #[must_use]
    pub const fn new(source: String, target: String, kind: EditKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// Exported weight: 2 for a change, 1 for an add or remove
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u8 {
        self.kind.weight()
    }

    /// Whether `word` is either endpoint
    #[must_use]
    pub fn touches(&self, word: &str) -> bool {
        self.source == word || self.target == word
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.kind {
            EditKind::Change => "<->",
            EditKind::Add | EditKind::Remove => "->",
        };
        write!(f, "{} {arrow} {} ({})", self.source, self.target, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_follows_kind() {
        let change = Edge::new("CAT".into(), "BAT".into(), EditKind::Change);
        let add = Edge::new("CAT".into(), "CATS".into(), EditKind::Add);
        assert_eq!(change.weight(), 2);
        assert_eq!(add.weight(), 1);
    }

    #[test]
    fn touches_either_endpoint() {
        let edge = Edge::new("CAT".into(), "BAT".into(), EditKind::Change);
        assert!(edge.touches("CAT"));
        assert!(edge.touches("BAT"));
        assert!(!edge.touches("AT"));
    }

    #[test]
    fn display() {
        let edge = Edge::new("CATS".into(), "CAT".into(), EditKind::Remove);
        assert_eq!(edge.to_string(), "CATS -> CAT (remove)");
        let edge = Edge::new("CAT".into(), "BAT".into(), EditKind::Change);
        assert_eq!(edge.to_string(), "CAT <-> BAT (change)");
    }
}

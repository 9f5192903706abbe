//! Character deduplication
//!
//! Collects characters from every scanned file into one set and renders them
//! as a single line sorted by code point.

use ahash::RandomState;
use hashbrown::HashSet;

/// In-memory set of unique characters
#[derive(Debug, Clone)]
pub struct CharSet {
    chars: HashSet<char, RandomState>,
}

impl CharSet {
    pub fn new() -> Self {
        Self {
            chars: HashSet::with_hasher(RandomState::new()),
        }
    }

    /// Add a character. Returns true if it was not seen before.
    #[inline]
    pub fn insert(&mut self, c: char) -> bool {
        self.chars.insert(c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// All characters, ascending by code point
    pub fn sorted(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.chars.iter().copied().collect();
        chars.sort_unstable();
        chars
    }

    /// Sorted characters concatenated into one string
    pub fn to_sorted_line(&self) -> String {
        self.sorted().into_iter().collect()
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

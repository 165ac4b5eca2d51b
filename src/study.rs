//! Study sequence: the ordered list of word indices used for previous / next /
//! random navigation.
//!
//! The sequence holds stable corpus indexes, not entries; it starts as the
//! full word list and is reset to the matched indexes whenever a search
//! returns word matches.

use rand::Rng;

use crate::corpus::Corpus;
use crate::search::SearchResult;

/// Navigable, wrapping sequence of word indices with a cursor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudySequence {
    indices: Vec<usize>,
    pos: usize,
}

impl StudySequence {
    /// Sequence over every word in the corpus, in corpus order.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self {
            indices: corpus.words.iter().map(|w| w.idx).collect(),
            pos: 0,
        }
    }

    /// Sequence over an explicit index list, positioned at the first.
    pub fn from_indices(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The word index under the cursor.
    pub fn current(&self) -> Option<usize> {
        self.indices.get(self.pos).copied()
    }

    /// Move the cursor by `delta` with wraparound, returning the new word
    /// index. A step on an empty sequence does nothing.
    pub fn step(&mut self, delta: i64) -> Option<usize> {
        if self.indices.is_empty() {
            return None;
        }
        let len = self.indices.len() as i64;
        self.pos = (self.pos as i64 + delta).rem_euclid(len) as usize;
        self.current()
    }

    /// Jump the cursor to a random position.
    pub fn jump_random<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.indices.is_empty() {
            return None;
        }
        self.pos = rng.gen_range(0..self.indices.len());
        self.current()
    }

    /// Position the cursor on the given word index, if it is in the sequence.
    /// Selecting an entry outside the sequence leaves the cursor untouched.
    pub fn select(&mut self, word_idx: usize) -> bool {
        match self.indices.iter().position(|&i| i == word_idx) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }

    /// Apply a search result's reset signal: when words matched, the sequence
    /// becomes exactly the matched indexes, positioned at the first result.
    pub fn apply_search(&mut self, result: &SearchResult) {
        if let Some(indices) = result.study_reset() {
            self.indices = indices.to_vec();
            self.pos = 0;
        }
    }
}

use std::sync::Arc;

use crate::application::ports::TextSizer;
use crate::domain::{Chunk, NormalizedText};

/// Splits normalized text into bounded-size chunks of whole words.
///
/// Words accumulate into a candidate chunk; once appending a word pushes
/// the measured size past the limit, the chunk closes before that word.
/// A single word that exceeds the limit on its own is emitted as an
/// oversized one-word chunk rather than subdivided.
pub struct WordChunker {
    chunk_size: usize,
    sizer: Arc<dyn TextSizer>,
}

impl WordChunker {
    pub fn new(chunk_size: usize, sizer: Arc<dyn TextSizer>) -> Self {
        Self { chunk_size, sizer }
    }

    /// Lazy chunk sequence over `text`. Calling this again restarts from
    /// the beginning; chunks joined by single spaces reproduce `text`.
    pub fn chunks<'a>(&'a self, text: &'a NormalizedText) -> ChunkIter<'a> {
        ChunkIter {
            words: text.as_str().split_whitespace(),
            carry: None,
            next_index: 0,
            chunk_size: self.chunk_size,
            sizer: self.sizer.as_ref(),
        }
    }
}

pub struct ChunkIter<'a> {
    words: std::str::SplitWhitespace<'a>,
    carry: Option<&'a str>,
    next_index: usize,
    chunk_size: usize,
    sizer: &'a dyn TextSizer,
}

impl Iterator for ChunkIter<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let mut candidate = match self.carry.take() {
            Some(word) => word.to_string(),
            None => self.words.next()?.to_string(),
        };

        for word in self.words.by_ref() {
            let extended = format!("{candidate} {word}");
            if self.sizer.size_of(&extended) > self.chunk_size {
                self.carry = Some(word);
                break;
            }
            candidate = extended;
        }

        let index = self.next_index;
        self.next_index += 1;
        Some(Chunk::new(candidate, index))
    }
}

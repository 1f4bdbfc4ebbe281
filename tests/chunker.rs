use std::sync::Arc;

use precis::application::ports::TextSizer;
use precis::application::services::WordChunker;
use precis::domain::NormalizedText;
use precis::infrastructure::text_processing::{TokenSizer, WordSizer};

const WORD_LIMIT: usize = 5;
const TOKEN_LIMIT: usize = 50;

struct CharSizer;

impl TextSizer for CharSizer {
    fn size_of(&self, text: &str) -> usize {
        text.chars().count()
    }
}

fn chunk_texts(chunker: &WordChunker, text: &NormalizedText) -> Vec<String> {
    chunker.chunks(text).map(|c| c.text).collect()
}

#[test]
fn given_long_text_when_chunked_then_joining_reproduces_input() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw(&"word ".repeat(37));

    let chunks = chunk_texts(&chunker, &text);

    assert_eq!(chunks.join(" "), text.as_str());
}

#[test]
fn given_word_limit_when_chunked_then_every_chunk_within_limit() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw(&"word ".repeat(37));

    let chunks = chunk_texts(&chunker, &text);

    assert_eq!(chunks.len(), 8);
    for chunk in &chunks {
        assert!(chunk.split_whitespace().count() <= WORD_LIMIT);
    }
}

#[test]
fn given_token_sizer_when_chunked_then_round_trip_and_bound_hold() {
    let sizer = Arc::new(TokenSizer);
    let chunker = WordChunker::new(TOKEN_LIMIT, Arc::clone(&sizer) as Arc<dyn TextSizer>);
    let text = NormalizedText::from_raw(
        &"the committee reviewed the quarterly projections and requested further detail ".repeat(20),
    );

    let chunks = chunk_texts(&chunker, &text);

    assert!(chunks.len() >= 2);
    assert_eq!(chunks.join(" "), text.as_str());
    for chunk in &chunks {
        assert!(TokenSizer.size_of(chunk) <= TOKEN_LIMIT);
    }
}

#[test]
fn given_single_word_when_chunked_then_one_chunk() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw("alone");

    let chunks = chunk_texts(&chunker, &text);

    assert_eq!(chunks, vec!["alone".to_string()]);
}

#[test]
fn given_oversized_single_word_when_chunked_then_emitted_alone() {
    let chunker = WordChunker::new(10, Arc::new(CharSizer));
    let text = NormalizedText::from_raw("tiny extraordinarily big");

    let chunks = chunk_texts(&chunker, &text);

    assert_eq!(
        chunks,
        vec![
            "tiny".to_string(),
            "extraordinarily".to_string(),
            "big".to_string()
        ]
    );
}

#[test]
fn given_empty_text_when_chunked_then_no_chunks() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw("");

    assert_eq!(chunker.chunks(&text).count(), 0);
}

#[test]
fn given_same_text_when_chunked_twice_then_sequences_match() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw(&"restartable iteration over words ".repeat(9));

    let first: Vec<_> = chunker.chunks(&text).collect();
    let second: Vec<_> = chunker.chunks(&text).collect();

    assert_eq!(first, second);
}

#[test]
fn given_chunks_when_produced_then_indices_are_sequential() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw(&"word ".repeat(23));

    for (expected, chunk) in chunker.chunks(&text).enumerate() {
        assert_eq!(chunk.index, expected);
    }
}

#[test]
fn given_no_chunk_when_iterating_then_none_is_sticky() {
    let chunker = WordChunker::new(WORD_LIMIT, Arc::new(WordSizer));
    let text = NormalizedText::from_raw("just a few words");

    let mut iter = chunker.chunks(&text);

    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

use std::sync::LazyLock;

use tiktoken_rs::CoreBPE;

use crate::application::ports::TextSizer;

static TOKENIZER: LazyLock<CoreBPE> = LazyLock::new(|| {
    tiktoken_rs::cl100k_base().expect("Failed to initialize cl100k_base tokenizer")
});

/// Measures text in encoded tokens (cl100k BPE).
pub struct TokenSizer;

impl TextSizer for TokenSizer {
    fn size_of(&self, text: &str) -> usize {
        TOKENIZER.encode_with_special_tokens(text).len()
    }
}

/// Measures text in whitespace-delimited words.
pub struct WordSizer;

impl TextSizer for WordSizer {
    fn size_of(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

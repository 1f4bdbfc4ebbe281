use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use precis::application::ports::{
    AbstractiveSummarizer, ExtractiveSummarizer, SummarizerError, TextSizer,
};
use precis::application::services::{
    SummarizationConfig, SummarizationError, SummarizationService, WordChunker,
};
use precis::domain::{GenerationParams, SummaryMode};
use precis::infrastructure::text_processing::WordSizer;

const CHUNK_WORDS: usize = 10;

fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

fn small_config() -> SummarizationConfig {
    SummarizationConfig {
        min_budget_words: 5,
        max_budget_words: 300,
        direct_word_limit: 20,
        min_chunk_chars: 5,
        extractive_max_length: 15,
        extractive_min_length: 5,
    }
}

fn small_chunker() -> WordChunker {
    WordChunker::new(CHUNK_WORDS, Arc::new(WordSizer))
}

fn wordy_text(words: usize) -> String {
    (0..words)
        .map(|i| format!("tremendous{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

struct CountingAbstractive {
    calls: AtomicUsize,
}

impl CountingAbstractive {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AbstractiveSummarizer for CountingAbstractive {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _params: &GenerationParams,
    ) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(truncate_words(text, max_length))
    }
}

struct FailingAbstractive {
    marker: &'static str,
}

#[async_trait]
impl AbstractiveSummarizer for FailingAbstractive {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _params: &GenerationParams,
    ) -> Result<String, SummarizerError> {
        if text.contains(self.marker) {
            return Err(SummarizerError::ApiRequestFailed("boom".to_string()));
        }
        Ok(truncate_words(text, max_length))
    }
}

struct AlwaysFailingAbstractive;

#[async_trait]
impl AbstractiveSummarizer for AlwaysFailingAbstractive {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: usize,
        _params: &GenerationParams,
    ) -> Result<String, SummarizerError> {
        Err(SummarizerError::Timeout)
    }
}

struct CountingExtractive {
    calls: AtomicUsize,
}

impl CountingExtractive {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ExtractiveSummarizer for CountingExtractive {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        _min_length: usize,
    ) -> Result<String, SummarizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(truncate_words(text, max_length))
    }
}

#[tokio::test]
async fn given_empty_input_when_summarizing_then_empty_input_error() {
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::new(CountingAbstractive::new())),
        Some(Arc::new(CountingExtractive::new())),
        small_chunker(),
        small_config(),
    );

    let result = service
        .summarize("@#$%  ", 150, SummaryMode::Abstractive)
        .await;

    assert!(matches!(result, Err(SummarizationError::EmptyInput)));
}

#[tokio::test]
async fn given_missing_extractive_capability_when_summarizing_then_unavailable_and_abstractive_unaffected()
{
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::new(CountingAbstractive::new())),
        None,
        small_chunker(),
        small_config(),
    );

    let extractive = service
        .summarize("some perfectly fine text", 150, SummaryMode::Extractive)
        .await;
    assert!(matches!(
        extractive,
        Err(SummarizationError::CapabilityUnavailable(
            SummaryMode::Extractive
        ))
    ));

    let abstractive = service
        .summarize("some perfectly fine text", 150, SummaryMode::Abstractive)
        .await;
    assert!(abstractive.is_ok());
}

#[tokio::test]
async fn given_short_input_when_summarizing_then_single_direct_call() {
    let summarizer = Arc::new(CountingAbstractive::new());
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::clone(&summarizer)),
        None,
        small_chunker(),
        small_config(),
    );

    let result = service
        .summarize(&wordy_text(15), 150, SummaryMode::Abstractive)
        .await;

    assert!(result.is_ok());
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_combined_summary_over_budget_when_recombining_then_exactly_one_extra_pass() {
    let summarizer = Arc::new(CountingAbstractive::new());
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::clone(&summarizer)),
        None,
        small_chunker(),
        small_config(),
    );

    // 100 words in 10-word chunks, budget 8: each partial is 8 words, the
    // 80-word concatenation exceeds the budget and is reduced once.
    let result = service
        .summarize(&wordy_text(100), 8, SummaryMode::Abstractive)
        .await
        .unwrap();

    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 11);
    assert!(result.starts_with("**Abstractive Summary:**"));
}

#[tokio::test]
async fn given_combined_summary_within_budget_when_recombining_then_no_extra_pass() {
    let summarizer = Arc::new(CountingAbstractive::new());
    let mut config = small_config();
    config.min_budget_words = 100;
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::clone(&summarizer)),
        None,
        small_chunker(),
        config,
    );

    // Budget 100; ten 10-word partials join to exactly 100 words, which
    // is within budget.
    let result = service
        .summarize(&wordy_text(100), 8, SummaryMode::Abstractive)
        .await;

    assert!(result.is_ok());
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn given_one_failing_chunk_of_three_when_summarizing_then_summary_from_the_others() {
    let mut words: Vec<String> = (0..30).map(|i| format!("tremendous{i}")).collect();
    words[15] = "poison".to_string();
    let text = words.join(" ");

    let service = SummarizationService::<FailingAbstractive, CountingExtractive>::new(
        Some(Arc::new(FailingAbstractive { marker: "poison" })),
        None,
        small_chunker(),
        small_config(),
    );

    let result = service.summarize(&text, 150, SummaryMode::Abstractive).await;

    let summary = result.unwrap();
    assert!(summary.contains("tremendous0"));
    assert!(!summary.contains("poison"));
}

#[tokio::test]
async fn given_every_chunk_failing_when_summarizing_then_terminal_error() {
    let service = SummarizationService::<AlwaysFailingAbstractive, CountingExtractive>::new(
        Some(Arc::new(AlwaysFailingAbstractive)),
        None,
        small_chunker(),
        small_config(),
    );

    let result = service
        .summarize(&wordy_text(100), 150, SummaryMode::Abstractive)
        .await;

    assert!(matches!(
        result,
        Err(SummarizationError::SummarizationFailed)
    ));
}

#[tokio::test]
async fn given_extractive_mode_when_summarizing_then_no_convergence_pass_and_newline_joins() {
    let summarizer = Arc::new(CountingExtractive::new());
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        None,
        Some(Arc::clone(&summarizer)),
        small_chunker(),
        small_config(),
    );

    let result = service
        .summarize(&wordy_text(30), 150, SummaryMode::Extractive)
        .await
        .unwrap();

    // Three chunks, three calls, no reduction pass.
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 3);
    assert!(result.starts_with("**Extractive Summary:**"));
    assert_eq!(result.lines().count(), 4);
    assert!(!result.contains("**Section"));
}

#[tokio::test]
async fn given_twelve_hundred_words_when_summarizing_abstractively_then_chunked_reduced_and_structured()
{
    let summarizer = Arc::new(CountingAbstractive::new());
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::clone(&summarizer)),
        None,
        WordChunker::new(1000, Arc::new(WordSizer)),
        SummarizationConfig::default(),
    );

    let result = service
        .summarize(&wordy_text(1200), 150, SummaryMode::Abstractive)
        .await
        .unwrap();

    // Two chunks plus one reduction pass: partials are 120 words each and
    // their 240-word concatenation exceeds the 120-word budget.
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 3);
    assert!(result.starts_with("**Abstractive Summary:**"));
    assert!(result.contains("**Section 1:**"));
}

struct WordCountSizer;

impl TextSizer for WordCountSizer {
    fn size_of(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[tokio::test]
async fn given_injected_sizer_when_summarizing_then_chunker_uses_it() {
    let summarizer = Arc::new(CountingAbstractive::new());
    let service = SummarizationService::<CountingAbstractive, CountingExtractive>::new(
        Some(Arc::clone(&summarizer)),
        None,
        WordChunker::new(25, Arc::new(WordCountSizer)),
        small_config(),
    );

    let result = service
        .summarize(&wordy_text(100), 300, SummaryMode::Abstractive)
        .await;

    assert!(result.is_ok());
    // Four 25-word chunks, budget 10 words, 40-word concatenation over
    // budget: one reduction pass on top.
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 5);
}

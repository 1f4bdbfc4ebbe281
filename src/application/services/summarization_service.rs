use std::sync::Arc;

use crate::application::ports::{AbstractiveSummarizer, ExtractiveSummarizer, SummarizerError};
use crate::application::services::WordChunker;
use crate::domain::{GenerationParams, LengthBudget, NormalizedText, SummaryMode, render_summary};

#[derive(Debug, Clone)]
pub struct SummarizationConfig {
    /// Lower bound for the dynamic length budget, in words.
    pub min_budget_words: usize,
    /// Ceiling on the caller-requested maximum length, in words.
    pub max_budget_words: usize,
    /// Inputs at or below this word count bypass chunking entirely.
    pub direct_word_limit: usize,
    /// Abstractive mode skips chunks at or below this many characters.
    pub min_chunk_chars: usize,
    pub extractive_max_length: usize,
    pub extractive_min_length: usize,
}

impl Default for SummarizationConfig {
    fn default() -> Self {
        Self {
            min_budget_words: 50,
            max_budget_words: 300,
            direct_word_limit: 1000,
            min_chunk_chars: 50,
            extractive_max_length: 150,
            extractive_min_length: 50,
        }
    }
}

/// The large-text summarization pipeline: normalize, chunk, summarize each
/// chunk, recombine in chunk order, converge on the length budget, and
/// structure the output.
///
/// Both capability handles are optional; an absent handle fails only the
/// requests that need it.
pub struct SummarizationService<A, E>
where
    A: AbstractiveSummarizer,
    E: ExtractiveSummarizer,
{
    abstractive: Option<Arc<A>>,
    extractive: Option<Arc<E>>,
    chunker: WordChunker,
    config: SummarizationConfig,
}

impl<A, E> SummarizationService<A, E>
where
    A: AbstractiveSummarizer,
    E: ExtractiveSummarizer,
{
    pub fn new(
        abstractive: Option<Arc<A>>,
        extractive: Option<Arc<E>>,
        chunker: WordChunker,
        config: SummarizationConfig,
    ) -> Self {
        Self {
            abstractive,
            extractive,
            chunker,
            config,
        }
    }

    pub fn abstractive_available(&self) -> bool {
        self.abstractive.is_some()
    }

    pub fn extractive_available(&self) -> bool {
        self.extractive.is_some()
    }

    pub async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        mode: SummaryMode,
    ) -> Result<String, SummarizationError> {
        let normalized = NormalizedText::from_raw(text);
        if normalized.is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let word_count = normalized.word_count();
        tracing::debug!(word_count, %mode, "Starting summarization");

        let flat = match mode {
            SummaryMode::Abstractive => {
                let summarizer = self
                    .abstractive
                    .as_deref()
                    .ok_or(SummarizationError::CapabilityUnavailable(mode))?;
                let budget = LengthBudget::dynamic(
                    word_count,
                    self.config.min_budget_words,
                    max_length.min(self.config.max_budget_words),
                );
                let params = GenerationParams::default();

                if word_count > self.config.direct_word_limit {
                    self.summarize_chunked(summarizer, &normalized, budget, &params)
                        .await?
                } else {
                    summarizer
                        .summarize(normalized.as_str(), budget.words(), &params)
                        .await
                        .map_err(|e| {
                            tracing::error!(error = %e, "Abstractive summarization failed");
                            SummarizationError::SummarizationFailed
                        })?
                }
            }
            SummaryMode::Extractive => {
                let summarizer = self
                    .extractive
                    .as_deref()
                    .ok_or(SummarizationError::CapabilityUnavailable(mode))?;
                self.summarize_extractive(summarizer, &normalized).await?
            }
        };

        Ok(render_summary(mode, &flat))
    }

    /// Chunked abstractive path. Per-chunk results are collected as tagged
    /// values: a failed chunk is logged and excluded, and only the
    /// zero-success case is terminal. The recombined text gets at most one
    /// further reduction pass when it exceeds the budget.
    async fn summarize_chunked(
        &self,
        summarizer: &A,
        text: &NormalizedText,
        budget: LengthBudget,
        params: &GenerationParams,
    ) -> Result<String, SummarizationError> {
        let mut partials: Vec<Result<String, SummarizerError>> = Vec::new();
        let mut skipped = 0usize;

        for chunk in self.chunker.chunks(text) {
            if chunk.text.chars().count() <= self.config.min_chunk_chars {
                skipped += 1;
                continue;
            }

            let result = summarizer
                .summarize(&chunk.text, budget.words(), params)
                .await;
            if let Err(e) = &result {
                tracing::warn!(chunk_index = chunk.index, error = %e, "Chunk summarization failed");
            }
            partials.push(result);
        }

        let failures = partials.iter().filter(|r| r.is_err()).count();
        let summaries: Vec<String> = partials.into_iter().filter_map(Result::ok).collect();

        tracing::debug!(
            succeeded = summaries.len(),
            failures,
            skipped,
            "Chunk summarization pass complete"
        );

        if summaries.is_empty() && failures > 0 {
            return Err(SummarizationError::SummarizationFailed);
        }

        let joined = summaries.join(" ");

        if joined.split_whitespace().count() > budget.words() {
            tracing::debug!(budget = budget.words(), "Combined summary over budget, reducing once");
            return summarizer
                .summarize(&joined, budget.words(), params)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Reduction pass failed");
                    SummarizationError::SummarizationFailed
                });
        }

        Ok(joined)
    }

    /// Extractive path: every chunk is summarized with the configured
    /// length bounds and partials are joined on newlines, in chunk order.
    /// No reduction pass.
    async fn summarize_extractive(
        &self,
        summarizer: &E,
        text: &NormalizedText,
    ) -> Result<String, SummarizationError> {
        let mut partials: Vec<Result<String, SummarizerError>> = Vec::new();

        for chunk in self.chunker.chunks(text) {
            let result = summarizer
                .summarize(
                    &chunk.text,
                    self.config.extractive_max_length,
                    self.config.extractive_min_length,
                )
                .await;
            if let Err(e) = &result {
                tracing::warn!(chunk_index = chunk.index, error = %e, "Chunk summarization failed");
            }
            partials.push(result);
        }

        let failures = partials.iter().filter(|r| r.is_err()).count();
        let summaries: Vec<String> = partials.into_iter().filter_map(Result::ok).collect();

        if summaries.is_empty() && failures > 0 {
            return Err(SummarizationError::SummarizationFailed);
        }

        Ok(summaries.join("\n"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("no text remains after normalization")]
    EmptyInput,
    #[error("{0} summarization model is not available")]
    CapabilityUnavailable(SummaryMode),
    #[error("unable to generate a summary from the input text")]
    SummarizationFailed,
}

impl SummarizationError {
    /// Stable machine-readable kind for error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            SummarizationError::EmptyInput => "empty_input",
            SummarizationError::CapabilityUnavailable(_) => "capability_unavailable",
            SummarizationError::SummarizationFailed => "summarization_failed",
        }
    }
}

mod chunker;
mod summarization_service;

pub use chunker::{ChunkIter, WordChunker};
pub use summarization_service::{SummarizationConfig, SummarizationError, SummarizationService};

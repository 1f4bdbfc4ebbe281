mod chunk;
mod length_budget;
mod normalized_text;
mod summary;

pub use chunk::Chunk;
pub use length_budget::LengthBudget;
pub use normalized_text::NormalizedText;
pub use summary::{GenerationParams, SummaryMode, render_summary, section_blocks};

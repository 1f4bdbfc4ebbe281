mod grammar_corrector;
mod ocr_engine;
mod pdf_extractor;
mod summarizer;
mod text_sizer;
mod transcription_engine;

pub use grammar_corrector::{GrammarCorrector, GrammarError};
pub use ocr_engine::{OcrEngine, OcrError};
pub use pdf_extractor::{PdfExtractError, PdfTextExtractor};
pub use summarizer::{AbstractiveSummarizer, ExtractiveSummarizer, SummarizerError};
pub use text_sizer::TextSizer;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

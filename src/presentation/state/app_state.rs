use std::sync::Arc;

use crate::application::ports::{
    AbstractiveSummarizer, ExtractiveSummarizer, GrammarCorrector, OcrEngine, PdfTextExtractor,
    TranscriptionEngine,
};
use crate::application::services::SummarizationService;

pub struct AppState<A, E>
where
    A: AbstractiveSummarizer,
    E: ExtractiveSummarizer,
{
    pub summarization_service: Arc<SummarizationService<A, E>>,
    pub pdf_extractor: Arc<dyn PdfTextExtractor>,
    pub ocr_engine: Option<Arc<dyn OcrEngine>>,
    pub transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    pub grammar_corrector: Option<Arc<dyn GrammarCorrector>>,
}

impl<A, E> Clone for AppState<A, E>
where
    A: AbstractiveSummarizer,
    E: ExtractiveSummarizer,
{
    fn clone(&self) -> Self {
        Self {
            summarization_service: Arc::clone(&self.summarization_service),
            pdf_extractor: Arc::clone(&self.pdf_extractor),
            ocr_engine: self.ocr_engine.clone(),
            transcription_engine: self.transcription_engine.clone(),
            grammar_corrector: self.grammar_corrector.clone(),
        }
    }
}

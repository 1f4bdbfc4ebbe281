mod correct;
mod extract_text;
mod health;
mod ocr;
mod summarize;
mod transcribe;

pub use correct::correct_handler;
pub use extract_text::extract_text_handler;
pub use health::health_handler;
pub use ocr::ocr_handler;
pub use summarize::summarize_handler;
pub use transcribe::transcribe_handler;

use serde::Serialize;

/// Structured error body: a human-readable message plus a stable kind.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, kind: &str) -> Self {
        Self {
            error: error.into(),
            kind: kind.to_string(),
        }
    }
}

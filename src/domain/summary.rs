use serde::Deserialize;

/// Which summarization capability a request targets.
///
/// Dispatched once at the top of the pipeline; the abstractive variant
/// runs with [`GenerationParams`], the extractive variant with a
/// `(max_length, min_length)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    Abstractive,
    Extractive,
}

impl SummaryMode {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryMode::Abstractive => "Abstractive",
            SummaryMode::Extractive => "Extractive",
        }
    }
}

impl std::fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryMode::Abstractive => f.write_str("abstractive"),
            SummaryMode::Extractive => f.write_str("extractive"),
        }
    }
}

/// Fixed generation parameters for abstractive summarization calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub num_beams: u32,
    pub early_stopping: bool,
    pub temperature: f32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            num_beams: 4,
            early_stopping: true,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

const MIN_SECTION_WORDS: usize = 5;

/// Reformat a flat summary into numbered section blocks.
///
/// Sentences are delimited by `.`; a sentence with five or fewer words is
/// dropped. If nothing qualifies, the whole trimmed summary becomes a
/// single unlabeled bullet (an empty summary yields an empty bullet).
pub fn section_blocks(summary: &str) -> String {
    let mut structured = String::new();
    let mut section = 1;

    for sentence in summary.split('.') {
        if sentence.split_whitespace().count() > MIN_SECTION_WORDS {
            structured.push_str(&format!(
                "\n\n**Section {}:**\n- {}.",
                section,
                sentence.trim()
            ));
            section += 1;
        }
    }

    if structured.is_empty() {
        structured = format!("\n- {}", summary.trim());
    }

    structured
}

/// Wrap a recombined summary with its mode banner, structuring the body
/// into sections for abstractive output.
pub fn render_summary(mode: SummaryMode, flat: &str) -> String {
    let body = match mode {
        SummaryMode::Abstractive => section_blocks(flat),
        SummaryMode::Extractive => flat.to_string(),
    };
    format!("**{} Summary:**\n{}", mode.label(), body)
}

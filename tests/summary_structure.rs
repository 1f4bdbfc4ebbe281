use precis::domain::{SummaryMode, render_summary, section_blocks};

#[test]
fn given_mixed_sentences_when_structured_then_short_ones_dropped_and_sections_numbered() {
    let flat = "The quick brown fox jumps over the lazy dog. Short one. \
                Another reasonably long sentence with many words here.";

    let structured = section_blocks(flat);

    assert_eq!(
        structured,
        "\n\n**Section 1:**\n- The quick brown fox jumps over the lazy dog.\
         \n\n**Section 2:**\n- Another reasonably long sentence with many words here."
    );
}

#[test]
fn given_only_short_sentences_when_structured_then_single_unlabeled_bullet() {
    let flat = "Too short. Also short.";

    let structured = section_blocks(flat);

    assert_eq!(structured, "\n- Too short. Also short.");
}

#[test]
fn given_empty_summary_when_structured_then_empty_bullet() {
    assert_eq!(section_blocks(""), "\n- ");
}

#[test]
fn given_abstractive_mode_when_rendered_then_banner_and_sections() {
    let rendered = render_summary(
        SummaryMode::Abstractive,
        "A sentence that is comfortably longer than five words.",
    );

    assert!(rendered.starts_with("**Abstractive Summary:**\n"));
    assert!(rendered.contains("**Section 1:**"));
}

#[test]
fn given_extractive_mode_when_rendered_then_banner_and_body_unchanged() {
    let rendered = render_summary(SummaryMode::Extractive, "first quote\nsecond quote");

    assert_eq!(
        rendered,
        "**Extractive Summary:**\nfirst quote\nsecond quote"
    );
}

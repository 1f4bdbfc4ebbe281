/// Text that has passed the input normalization pass.
///
/// Invariants held by construction: no run of two or more whitespace
/// characters, no characters outside `[alphanumeric, _, space, . , ? !]`,
/// no leading or trailing whitespace. May be empty; callers decide whether
/// empty input is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn from_raw(raw: &str) -> Self {
        let mut out = String::with_capacity(raw.len());
        let mut pending_space = false;

        for ch in raw.chars() {
            if ch.is_whitespace() {
                pending_space = !out.is_empty();
            } else if ch.is_alphanumeric() || matches!(ch, '_' | '.' | ',' | '?' | '!') {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(ch);
            }
            // Dropped characters do not end the current whitespace run.
        }

        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

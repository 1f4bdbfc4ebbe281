/// Target summary length in words, negotiated from the input size.
///
/// The budget is a tenth of the input word count, clamped to the
/// configured bounds. `min <= value <= max` holds always: a requested
/// maximum below the minimum saturates to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBudget(usize);

impl LengthBudget {
    pub fn dynamic(input_word_count: usize, min: usize, max: usize) -> Self {
        let max = max.max(min);
        Self((input_word_count / 10).clamp(min, max))
    }

    pub fn words(&self) -> usize {
        self.0
    }
}

//! Byte-budget truncation for raw markup and stylesheet text
//!
//! Oversized text keeps its prefix only. The cut lands on the last UTF-8
//! character boundary at or below the budget, so the result is never longer
//! than `max_bytes`.

use tracing::debug;

/// Outcome of applying a byte budget to one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated<'a> {
    pub text: &'a str,
    pub original_bytes: usize,
    pub truncated: bool,
}

impl Truncated<'_> {
    /// Bytes dropped from the end of the input
    pub fn dropped_bytes(&self) -> usize {
        self.original_bytes - self.text.len()
    }
}

/// Keep at most `max_bytes` bytes of `text`
pub fn truncate_to_budget(text: &str, max_bytes: usize) -> Truncated<'_> {
    if text.len() <= max_bytes {
        return Truncated {
            text,
            original_bytes: text.len(),
            truncated: false,
        };
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    debug!(
        "Truncated input from {} to {} bytes (budget {})",
        text.len(),
        end,
        max_bytes
    );

    Truncated {
        text: &text[..end],
        original_bytes: text.len(),
        truncated: true,
    }
}

//! Line-number lookup with incremental caching.

/// Computes the 1-based line number of a byte offset within a text, caching
/// the last scan so repeated forward queries over the same text only count
/// the newlines between the previous offset and the new one.
///
/// An explicit state object rather than a process global. The cache resets
/// when the text changes or when a query moves backwards.
#[derive(Debug, Default)]
pub struct LineCounter {
    last_text: String,
    last_pos: usize,
    last_line: usize,
}

impl LineCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line number (1-based) of byte offset `pos` in `text`.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn line_at(&mut self, text: &str, pos: usize) -> usize {
        if text != self.last_text {
            self.last_text = text.to_string();
            self.last_pos = 0;
            self.last_line = 1;
        } else if pos < self.last_pos {
            self.last_pos = 0;
            self.last_line = 1;
        }

        let pos = pos.min(text.len());
        let scanned = &text.as_bytes()[self.last_pos..pos];
        self.last_line += scanned.iter().filter(|&&b| b == b'\n').count();
        self.last_pos = pos;
        self.last_line
    }
}

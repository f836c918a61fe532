use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
#[derive(Default)]
pub struct MockClipboard {
    written: Vec<String>,
    should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self { written: Vec::new(), should_fail: true }
    }

    /// Most recent text written, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.written.last().map(String::as_str)
    }

    pub fn write_count(&self) -> usize {
        self.written.len()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.written.push(text.to_string());
        Ok(())
    }
}

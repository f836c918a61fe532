use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
pub struct ArboardClipboard {
    clipboard: Clipboard,
}

impl ArboardClipboard {
    /// Open the system clipboard.
    pub fn new() -> Result<Self, AppError> {
        let clipboard = Clipboard::new().map_err(clipboard_error)?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.clipboard.set_text(text).map_err(clipboard_error)?;
        tracing::debug!(bytes = text.len(), "copied script to clipboard");
        Ok(())
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardError(err.to_string())
}

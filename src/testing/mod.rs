mod mock_clipboard;

pub use mock_clipboard::MockClipboard;

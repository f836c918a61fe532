mod clipboard_arboard;
mod config_file;
mod selection_file;

pub use clipboard_arboard::ArboardClipboard;
pub use config_file::load_config;
pub use selection_file::load_selection;

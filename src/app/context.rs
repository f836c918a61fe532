use std::path::{Path, PathBuf};

use crate::ports::ClipboardWriter;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ClipboardWriter> {
    work_dir: PathBuf,
    clipboard: C,
}

impl<C: ClipboardWriter> AppContext<C> {
    /// Create a new application context.
    pub fn new(work_dir: impl Into<PathBuf>, clipboard: C) -> Self {
        Self { work_dir: work_dir.into(), clipboard }
    }

    /// Directory that relative paths and the default config are resolved against.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve a user-supplied path against the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.work_dir.join(path) }
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    #[cfg(test)]
    pub(crate) fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

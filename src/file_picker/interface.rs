use std::path::PathBuf;

pub trait FilePicker {
    /// Blocks until the user closes the dialog. Cancelling yields an empty list.
    fn pick_files(&self) -> Vec<PathBuf>;
}

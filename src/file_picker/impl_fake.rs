use crate::file_picker::interface::FilePicker;
use std::path::PathBuf;

pub struct FilePickerFake {
    paths: Vec<PathBuf>,
}

impl FilePickerFake {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl FilePicker for FilePickerFake {
    fn pick_files(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }
}

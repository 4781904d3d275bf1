use crate::file_picker::interface::FilePicker;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;

pub struct FilePickerNative {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FilePickerNative {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_picker").with_namespace("native"),
        }
    }
}

impl FilePicker for FilePickerNative {
    fn pick_files(&self) -> Vec<PathBuf> {
        let picked = rfd::FileDialog::new()
            .set_title("เลือกไฟล์ภาพ")
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("All files", &["*"])
            .pick_files()
            .unwrap_or_default();

        let _ = self
            .logger
            .info(&format!("Picked {} file(s)", picked.len()));

        picked
    }
}

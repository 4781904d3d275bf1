use std::path::{Path, PathBuf};

pub const JPEG_MIME: &str = "image/jpeg";

/// A file picked by the user, with the MIME type a browser would declare for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: Option<&'static str>,
}

impl ImageFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let mime = declared_mime(&path);

        Self { path, name, mime }
    }

    pub fn is_jpeg(&self) -> bool {
        self.mime == Some(JPEG_MIME)
    }
}

/// Declared type is decided by extension only, never by content.
fn declared_mime(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" | "jpe" | "jfif" | "pjpeg" | "pjp" => Some(JPEG_MIME),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const THAI_FONT: &str = "thai-fallback";

/// Appends the first readable candidate as a fallback font so Thai labels render.
pub fn install_thai_font(
    ctx: &egui::Context,
    candidates: &[PathBuf],
    logger: Arc<dyn Logger + Send + Sync>,
) -> Option<PathBuf> {
    let logger = logger.with_namespace("fonts");

    let Some((path, bytes)) = read_first(candidates) else {
        let _ = logger.error("No Thai font found, Thai text will not render");
        return None;
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(THAI_FONT.to_owned(), egui::FontData::from_owned(bytes));

    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(THAI_FONT.to_owned());
    }

    ctx.set_fonts(fonts);

    let _ = logger.info(&format!("Thai font loaded from {}", path.display()));

    Some(path)
}

fn read_first(candidates: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    candidates
        .iter()
        .find_map(|path| read_font(path).map(|bytes| (path.clone(), bytes)))
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    std::fs::read(path).ok().filter(|bytes| !bytes.is_empty())
}

use egui::ColorImage;
use std::path::Path;

/// Decodes `path` and shrinks it to fit a `max_side` square, keeping aspect ratio.
pub fn load_thumbnail(path: &Path, max_side: u32) -> Result<ColorImage, image::ImageError> {
    let decoded = image::open(path)?;

    let resized = if decoded.width() > max_side || decoded.height() > max_side {
        decoded.thumbnail(max_side, max_side)
    } else {
        decoded
    };

    let rgba = resized.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];

    Ok(ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}

/// In-memory preview generation
///
/// When an image item finishes its simulated transfer, a downscaled copy
/// is decoded for display next to the list entry. Previews live only in
/// memory for the session; nothing is cached to disk.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tokio::task;

/// Longest edge of generated previews, in pixels.
const PREVIEW_SIZE: u32 = 96;

/// Decoded RGBA preview pixels, ready for the widget layer to wrap.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode and downscale an image off the interaction thread.
/// Returns None if the file cannot be decoded; the list entry simply
/// shows no thumbnail in that case.
pub async fn generate_preview(path: PathBuf) -> Option<PreviewImage> {
    // Decoding is CPU-intensive, so it runs on the blocking pool
    task::spawn_blocking(move || decode_preview(&path))
        .await
        .ok()
        .flatten()
}

fn decode_preview(path: &Path) -> Option<PreviewImage> {
    let img = image::open(path).ok()?;
    let thumb = img.resize(PREVIEW_SIZE, PREVIEW_SIZE, FilterType::Lanczos3);
    let rgba = thumb.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(PreviewImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_preview_on_missing_file_is_none() {
        let result = generate_preview(PathBuf::from("/nonexistent/photo.png")).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_generate_preview_on_non_image_is_none() {
        // A file that exists but is not an image
        let result = generate_preview(PathBuf::from("Cargo.toml")).await;
        assert!(result.is_none());
    }
}

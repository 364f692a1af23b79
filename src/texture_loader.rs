use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::ShowcaseError;

const SLIDE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Enumerate the slide images in `dir`, sorted by file name so the deck
/// order is stable across runs. An empty deck is a structural failure.
pub fn load_slide_paths(dir: &Path) -> Result<Vec<PathBuf>, ShowcaseError> {
    let entries = fs::read_dir(dir).map_err(|e| ShowcaseError::SlideLoad {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| SLIDE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        })
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(ShowcaseError::MissingElement("carousel slides"));
    }
    Ok(paths)
}

/// Load one slide image as a texture, baking any JPEG EXIF orientation
/// into the pixels first so the draw layer never rotates.
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, ShowcaseError> {
    let fail = |reason: String| ShowcaseError::SlideLoad {
        path: path.display().to_string(),
        reason,
    };

    let bytes = fs::read(path).map_err(|e| fail(e.to_string()))?;
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| fail(e.to_string()))?;

    // EXIF orientation: 1 normal, 3 upside down, 6 quarter turn CW,
    // 8 quarter turn CCW. Flip variants are ignored.
    match exif_orientation(path, &extension, &bytes) {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| fail(e.to_string()))?;
    debug!(path = %path.display(), "loaded slide");
    Ok(texture)
}

fn exif_orientation(path: &Path, extension: &str, bytes: &[u8]) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal, the slide just renders unrotated.
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

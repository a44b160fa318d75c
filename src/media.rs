//! Best-effort image embedding

use crate::error::MediaError;
use crate::parse::parse_cell_ref;
use crate::types::ImageSize;
use rust_xlsxwriter::{Image, Worksheet};
use std::path::Path;
use tracing::{debug, warn};

/// Insert the image at `path` with its top-left corner on `anchor` ("B23"),
/// scaled to `size` pixels.
///
/// The worksheet is only touched once the image has been loaded, so a missing
/// or unreadable file leaves it exactly as it was.
pub fn embed_image(
    worksheet: &mut Worksheet,
    path: &Path,
    anchor: &str,
    size: ImageSize,
) -> Result<(), MediaError> {
    if !path.is_file() {
        return Err(MediaError::Missing(path.to_path_buf()));
    }

    let (row, col) = parse_cell_ref(anchor)?;

    let image = Image::new(path)
        .map_err(|source| MediaError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .set_scale_to_size(size.width, size.height, false)
        .set_alt_text(&alt_text(path));

    worksheet
        .insert_image(row, col, &image)
        .map_err(|source| MediaError::Insert {
            anchor: anchor.to_string(),
            source,
        })?;

    Ok(())
}

/// Embed and log the outcome. Returns whether the image was placed.
pub fn try_embed(worksheet: &mut Worksheet, path: &Path, anchor: &str, size: ImageSize) -> bool {
    match embed_image(worksheet, path, anchor, size) {
        Ok(()) => {
            debug!(path = %path.display(), anchor, "embedded image");
            true
        }
        Err(MediaError::Missing(_)) => {
            debug!(path = %path.display(), "image not present, skipping");
            false
        }
        Err(e) => {
            warn!(anchor, "skipping image: {}", e);
            false
        }
    }
}

/// File stem with separators spaced out, e.g. "superbowl trophy"
fn alt_text(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
    use std::fs;

    /// 1x1 RGBA PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        let mut worksheet = Worksheet::new();

        let result = embed_image(&mut worksheet, &path, "B23", ImageSize::new(300, 225));
        assert!(matches!(result, Err(MediaError::Missing(p)) if p == path));
        assert!(!try_embed(&mut worksheet, &path, "B23", ImageSize::new(300, 225)));
    }

    /// Saved bytes of a one-sheet workbook, optionally after a failed embed
    fn saved_bytes(failed_embed: Option<&Path>) -> Vec<u8> {
        let created = ExcelDateTime::from_ymd(2025, 2, 9).unwrap();
        let mut workbook = Workbook::new();
        workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "SUPER BOWL").unwrap();
        if let Some(path) = failed_embed {
            assert!(embed_image(worksheet, path, "B23", ImageSize::new(300, 225)).is_err());
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_failed_embed_leaves_sheet_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let junk = dir.path().join("junk.png");
        fs::write(&junk, b"definitely not an image").unwrap();

        let untouched = saved_bytes(None);
        assert_eq!(saved_bytes(Some(&dir.path().join("nope.png"))), untouched);
        assert_eq!(saved_bytes(Some(&junk)), untouched);
    }

    #[test]
    fn test_unreadable_image_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not an image").unwrap();
        let mut worksheet = Worksheet::new();

        let result = embed_image(&mut worksheet, &path, "A1", ImageSize::new(10, 10));
        assert!(matches!(result, Err(MediaError::Load { .. })));
    }

    #[test]
    fn test_bad_anchor_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        fs::write(&path, TINY_PNG).unwrap();
        let mut worksheet = Worksheet::new();

        let result = embed_image(&mut worksheet, &path, "23B", ImageSize::new(10, 10));
        assert!(matches!(result, Err(MediaError::Anchor(_))));
    }

    #[test]
    fn test_valid_image_is_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("superbowl_trophy.png");
        fs::write(&path, TINY_PNG).unwrap();
        let mut worksheet = Worksheet::new();

        assert!(try_embed(&mut worksheet, &path, "B23", ImageSize::new(300, 225)));
    }

    #[test]
    fn test_alt_text() {
        assert_eq!(
            alt_text(Path::new("/tmp/superbowl_trophy.png")),
            "superbowl trophy"
        );
    }
}

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// File extensions (lowercase, without the dot) treated as renameable images.
pub static SUPPORTED_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["jpg", "jpeg", "png", "gif", "bmp", "tiff", "webp"]
        .into_iter()
        .collect()
});

/// Extension of `path` in its original case, if the file classifies as an
/// image. Comparison against the supported set is case-insensitive.
pub fn image_extension(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if SUPPORTED_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str()) {
        Some(ext)
    } else {
        None
    }
}

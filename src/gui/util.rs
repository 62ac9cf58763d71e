//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use std::path::Path;

/// Gets filename without extension, used as a display label.
/// Ex: 'sounds/rain.mp3' -> 'rain'
pub(crate) fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sound")
        .to_string()
}

/// True for icons the svg widget should draw.
pub(crate) fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

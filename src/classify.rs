//! File type labels from file names.

use std::path::Path;

use crate::utils::config::Labels;

/// Label for the file at `path`: its lowercased extension with the leading dot (`.txt`), or one
/// of `[dotfile]`, `[no extension]`, `[invalid]`.
///
/// Dotfiles only get an extension label when they have a second dot: `.gitignore` is
/// `[dotfile]`, `.config.json` is `.json`. Lowercasing is ASCII-only.
pub fn classify(path: &Path) -> String {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Labels::INVALID.to_string();
    };
    if name.is_empty() {
        return Labels::INVALID.to_string();
    }

    // Extension = from the last dot, unless that dot is the first character.
    let ext = match name.rfind('.') {
        Some(0) | None => None,
        Some(i) => Some(&name[i..]),
    };

    match ext {
        Some(ext) => ext.to_ascii_lowercase(),
        None if is_hidden_name(name) => Labels::DOTFILE.to_string(),
        None => Labels::NO_EXTENSION.to_string(),
    }
}

/// Leading-dot convention for hidden entries.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// True when the last component of `path` starts with a dot.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

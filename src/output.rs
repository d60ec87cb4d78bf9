//! File naming and saving for rendered placeholders.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::placeholder::Placeholder;

/// Generate an output filename for a placeholder.
///
/// `placeholder-<width>x<height>-<label>.svg`, each part sanitized to kebab-case.
#[must_use]
pub fn auto_filename(placeholder: &Placeholder) -> String {
    let width = sanitize_for_filename(&placeholder.width, 10);
    let height = sanitize_for_filename(&placeholder.height, 10);
    let label = sanitize_for_filename(&placeholder.label, 40);
    format!("placeholder-{width}x{height}-{label}.svg")
}

/// Sanitize a string for use in a filename.
///
/// Converts to lowercase, replaces non-alphanumeric chars with hyphens,
/// collapses consecutive hyphens, and trims to max length.
#[must_use]
pub fn sanitize_for_filename(input: &str, max_len: usize) -> String {
    let mut result = String::with_capacity(max_len);
    let mut last_was_hyphen = true; // Prevents leading hyphen

    for ch in input.chars().take(max_len * 2) {
        if result.len() >= max_len {
            break;
        }
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            result.push('-');
            last_was_hyphen = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        "img".to_string()
    } else {
        result
    }
}

/// Write a rendered document, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_document(document: &str, output_path: &Path) -> Result<(), AppError> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, document).map_err(AppError::Io)
}

/// Resolve the output path: use explicit path, auto-generate, or `None` for stdout.
#[must_use]
pub fn resolve_output_path(
    explicit: Option<&str>,
    auto_name: bool,
    placeholder: &Placeholder,
) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(PathBuf::from(p)),
        None if auto_name => Some(PathBuf::from(auto_filename(placeholder))),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_basic() {
        assert_eq!(sanitize_for_filename("Hello World", 50), "hello-world");
    }

    #[test]
    fn sanitize_special_chars() {
        assert_eq!(sanitize_for_filename("Team photo!! (2024)...", 50), "team-photo-2024");
    }

    #[test]
    fn sanitize_truncates() {
        let long = "a".repeat(100);
        assert!(sanitize_for_filename(&long, 10).len() <= 10);
    }

    #[test]
    fn sanitize_empty() {
        assert_eq!(sanitize_for_filename("", 50), "img");
        assert_eq!(sanitize_for_filename("!!!", 50), "img");
    }

    #[test]
    fn auto_filename_defaults() {
        assert_eq!(auto_filename(&Placeholder::default()), "placeholder-150x150-img.svg");
    }

    #[test]
    fn auto_filename_from_segments() {
        let p = Placeholder::from_path("300/200/ff0000/000000/Hello World");
        assert_eq!(auto_filename(&p), "placeholder-300x200-hello-world.svg");
    }

    #[test]
    fn resolve_explicit_wins() {
        let path = resolve_output_path(Some("hero.svg"), true, &Placeholder::default());
        assert_eq!(path, Some(PathBuf::from("hero.svg")));
    }

    #[test]
    fn resolve_auto_and_stdout() {
        let p = Placeholder::default();
        assert_eq!(
            resolve_output_path(None, true, &p),
            Some(PathBuf::from("placeholder-150x150-img.svg"))
        );
        assert_eq!(resolve_output_path(None, false, &p), None);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = std::env::temp_dir().join("career_platform_output_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("a/b/p.svg");

        save_document("<svg/>", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");

        let _ = std::fs::remove_dir_all(&dir);
    }
}

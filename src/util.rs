//! Utility functions for path normalization and secure path handling

use std::io;
use std::path::{Path, PathBuf};

use crate::constants as C;

/// Normalize a user-supplied vault path.
///
/// Backslashes become forward slashes, repeated separators collapse, and
/// leading/trailing separators and whitespace are stripped. An empty result
/// normalizes to the root sentinel `"/"`.
pub fn normalize_path(path: &str) -> String {
    let cleaned = path.trim().replace('\\', "/");
    let parts: Vec<&str> = cleaned
        .split('/')
        .filter(|part| !part.trim().is_empty())
        .collect();

    if parts.is_empty() {
        C::ROOT_PATH.to_string()
    } else {
        parts.join("/")
    }
}

/// Resolve a vault-relative path against the vault root, rejecting any
/// component sequence that would escape the root.
pub fn secure_path(root: &Path, relative: &str) -> io::Result<PathBuf> {
    let mut result = root.to_path_buf();

    for component in relative.split(['/', '\\']) {
        match component {
            "" | "." => continue,
            ".." => {
                if !result.starts_with(root) || result == root {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "path traversal detected: cannot escape the vault",
                    ));
                }
                result.pop();
            }
            _ => {
                // Reject Windows drive components like "C:"
                if component.len() >= 2 && component.as_bytes()[1] == b':' {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "absolute paths are not allowed",
                    ));
                }
                result.push(component);
            }
        }
    }

    // Re-check against the canonical root when it exists; dunce avoids
    // UNC-prefixed paths on Windows.
    if root.exists() && result.exists() {
        let canonical_root = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let canonical_result = dunce::canonicalize(&result).unwrap_or_else(|_| result.clone());
        if !canonical_result.starts_with(&canonical_root) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "path traversal detected: resolved path escapes the vault",
            ));
        }
    } else if !result.starts_with(root) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path traversal detected: resolved path escapes the vault",
        ));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_path() {
        assert_eq!(normalize_path("Templates/Planner.md"), "Templates/Planner.md");
    }

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize_path("/Templates//Planner/"), "Templates/Planner");
        assert_eq!(normalize_path("\\Templates\\Planner"), "Templates/Planner");
    }

    #[test]
    fn test_normalize_root_sentinel() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("  //  "), "/");
    }

    #[test]
    fn test_secure_path_joins_inside_root() {
        let root = Path::new("/vault");
        let resolved = secure_path(root, "Day Planners/2024-03-05.md").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/Day Planners/2024-03-05.md"));
    }

    #[test]
    fn test_secure_path_rejects_escape() {
        let root = Path::new("/vault");
        assert!(secure_path(root, "../outside.md").is_err());
        assert!(secure_path(root, "notes/../../outside.md").is_err());
    }

    #[test]
    fn test_secure_path_ignores_dot_components() {
        let root = Path::new("/vault");
        let resolved = secure_path(root, "./notes/./a.md").unwrap();
        assert_eq!(resolved, PathBuf::from("/vault/notes/a.md"));
    }

    #[test]
    fn test_secure_path_rejects_drive_component() {
        let root = Path::new("/vault");
        assert!(secure_path(root, "C:/evil.md").is_err());
    }
}

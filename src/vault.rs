//! Vault - the note storage backend
//!
//! A vault is a directory tree of Markdown notes. All paths handed to these
//! operations are vault-relative strings; joining against the root goes
//! through [`util::secure_path`] so a crafted settings value cannot reach
//! outside the vault.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::util;

pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, relative: &str) -> io::Result<PathBuf> {
        util::secure_path(&self.root, relative)
    }

    /// Check whether a file or folder exists.
    ///
    /// `Ok(false)` only for a definite not-found; other storage errors
    /// (permissions, unreachable backend) propagate.
    pub fn exists(&self, relative: &str) -> io::Result<bool> {
        let path = self.full_path(relative)?;
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Create a folder, including missing parents. Idempotent.
    pub fn create_folder(&self, relative: &str) -> io::Result<()> {
        let path = self.full_path(relative)?;
        fs::create_dir_all(&path)
    }

    /// Create a file with the given contents, atomically with respect to a
    /// concurrent creator of the same path.
    ///
    /// Returns `Ok(true)` when this call created the file, `Ok(false)` when
    /// the file already existed (including losing a creation race).
    pub fn create(&self, relative: &str, contents: &str) -> io::Result<bool> {
        let path = self.full_path(relative)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents.as_bytes())?;
                Ok(true)
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn read(&self, relative: &str) -> io::Result<String> {
        let path = self.full_path(relative)?;
        fs::read_to_string(&path)
    }

    pub fn write(&self, relative: &str, contents: &str) -> io::Result<()> {
        let path = self.full_path(relative)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
    }

    /// Resolve a link-style reference to an existing note.
    ///
    /// Tries the reference as a vault-relative path, then with the `.md`
    /// extension appended, then falls back to a basename search over the
    /// whole vault (first match in lexicographic directory order). Returns
    /// the vault-relative path of the note, or `None` when nothing matches.
    pub fn resolve_link_path(&self, link: &str) -> Option<String> {
        let normalized = util::normalize_path(link);
        if normalized == C::ROOT_PATH {
            return None;
        }

        for candidate in [normalized.clone(), format!("{}{}", normalized, C::MARKDOWN_EXTENSION)] {
            if let Ok(path) = self.full_path(&candidate) {
                if path.is_file() {
                    return Some(candidate);
                }
            }
        }

        // Basename lookup: "Planner" finds Templates/Planner.md anywhere
        let name = normalized.rsplit('/').next()?;
        let target_names = [name.to_string(), format!("{}{}", name, C::MARKDOWN_EXTENSION)];
        let found = self.find_by_name(&self.root, &target_names)?;
        let relative = found.strip_prefix(&self.root).ok()?;
        Some(relative.to_string_lossy().replace('\\', "/"))
    }

    fn find_by_name(&self, dir: &Path, target_names: &[String]) -> Option<PathBuf> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .ok()?
            .filter_map(|entry| entry.ok())
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        for entry in &entries {
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with('.') {
                continue;
            }
            if path.is_file() && target_names.iter().any(|t| t.as_str() == name) {
                return Some(path);
            }
        }
        for entry in &entries {
            let path = entry.path();
            if path.is_dir() && !entry.file_name().to_string_lossy().starts_with('.') {
                if let Some(found) = self.find_by_name(&path, target_names) {
                    return Some(found);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vault() -> (TempDir, Vault) {
        let temp = TempDir::new().unwrap();
        let vault = Vault::new(temp.path());
        (temp, vault)
    }

    #[test]
    fn test_exists_and_create_folder() {
        let (_temp, vault) = vault();
        assert!(!vault.exists("Day Planners").unwrap());
        vault.create_folder("Day Planners").unwrap();
        assert!(vault.exists("Day Planners").unwrap());
        // idempotent
        vault.create_folder("Day Planners").unwrap();
    }

    #[test]
    fn test_create_is_create_if_absent() {
        let (_temp, vault) = vault();
        assert!(vault.create("notes/a.md", "first").unwrap());
        assert!(!vault.create("notes/a.md", "second").unwrap());
        assert_eq!(vault.read("notes/a.md").unwrap(), "first");
    }

    #[test]
    fn test_read_write_round_trip() {
        let (_temp, vault) = vault();
        vault.write("plan.md", "- [ ] review\n").unwrap();
        assert_eq!(vault.read("plan.md").unwrap(), "- [ ] review\n");
        vault.write("plan.md", "- [x] review\n").unwrap();
        assert_eq!(vault.read("plan.md").unwrap(), "- [x] review\n");
    }

    #[test]
    fn test_read_missing_file_errors() {
        let (_temp, vault) = vault();
        let err = vault.read("nope.md").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_resolve_link_path_exact_and_extension() {
        let (_temp, vault) = vault();
        vault.write("Templates/Planner.md", "## Template\n").unwrap();
        assert_eq!(
            vault.resolve_link_path("Templates/Planner.md").as_deref(),
            Some("Templates/Planner.md")
        );
        assert_eq!(
            vault.resolve_link_path("Templates/Planner").as_deref(),
            Some("Templates/Planner.md")
        );
    }

    #[test]
    fn test_resolve_link_path_by_basename() {
        let (_temp, vault) = vault();
        vault.write("deep/nested/Planner.md", "## Template\n").unwrap();
        assert_eq!(
            vault.resolve_link_path("Planner").as_deref(),
            Some("deep/nested/Planner.md")
        );
    }

    #[test]
    fn test_resolve_link_path_misses() {
        let (_temp, vault) = vault();
        assert!(vault.resolve_link_path("Ghost").is_none());
        assert!(vault.resolve_link_path("/").is_none());
    }

    #[test]
    fn test_paths_cannot_escape_vault() {
        let (_temp, vault) = vault();
        assert!(vault.read("../outside.md").is_err());
        assert!(vault.write("../outside.md", "x").is_err());
    }
}

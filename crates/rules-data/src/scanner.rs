//! Directory enumeration under the rules root.
//!
//! Layout: `<root>/<category>/<slug>.md`. Results keep the order the
//! filesystem returns entries in.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, RulesError};

pub const MARKDOWN_EXTENSION: &str = ".md";

/// `read_dir` that treats a missing directory as empty.
fn read_dir_or_empty(dir: &Path) -> Result<Option<fs::ReadDir>> {
    match fs::read_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %dir.display(), "directory not found, treating as empty");
            Ok(None)
        }
        Err(e) => Err(RulesError::io(dir, e)),
    }
}

/// Names of every subdirectory of `root` that does not start with `.`.
pub fn list_category_slugs(root: &Path) -> Result<Vec<String>> {
    let Some(entries) = read_dir_or_empty(root)? else {
        return Ok(Vec::new());
    };

    let mut slugs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RulesError::io(root, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            warn!(path = %entry.path().display(), "skipping non-utf8 directory name");
            continue;
        };
        if name.starts_with('.') || !entry.path().is_dir() {
            continue;
        }
        slugs.push(name);
    }
    Ok(slugs)
}

/// Every `*.md` file directly inside `<root>/<category>`.
pub fn list_markdown_files(root: &Path, category: &str) -> Result<Vec<PathBuf>> {
    let dir = root.join(category);
    let Some(entries) = read_dir_or_empty(&dir)? else {
        return Ok(Vec::new());
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RulesError::io(&dir, e))?;
        let path = entry.path();
        let is_markdown = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(MARKDOWN_EXTENSION));
        if is_markdown && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        fs::write(path, "").unwrap();
    }

    #[test]
    fn lists_visible_directories_only() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("backend")).unwrap();
        fs::create_dir(root.path().join("frontend")).unwrap();
        fs::create_dir(root.path().join(".git")).unwrap();
        touch(&root.path().join("index.ts"));

        let mut slugs = list_category_slugs(root.path()).unwrap();
        slugs.sort();
        assert_eq!(slugs, vec!["backend", "frontend"]);
    }

    #[test]
    fn lists_markdown_files_only() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("backend");
        fs::create_dir(&dir).unwrap();
        touch(&dir.join("a.md"));
        touch(&dir.join("b.md"));
        touch(&dir.join("notes.txt"));
        touch(&dir.join("README.markdown"));
        fs::create_dir(dir.join("nested.md")).unwrap();

        let mut files = list_markdown_files(root.path(), "backend").unwrap();
        files.sort();
        assert_eq!(files, vec![dir.join("a.md"), dir.join("b.md")]);
    }

    #[test]
    fn missing_directories_are_empty() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("nope");
        assert!(list_category_slugs(&missing).unwrap().is_empty());
        assert!(list_markdown_files(root.path(), "nope").unwrap().is_empty());
    }

    #[test]
    fn root_that_is_a_file_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("rules");
        touch(&file);
        let err = list_category_slugs(&file).unwrap_err();
        assert!(matches!(err, RulesError::Io { .. }));
    }
}

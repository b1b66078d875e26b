use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const SKIPPED_DIRS: [&str; 3] = ["target", ".git", "node_modules"];

pub struct ProjectLoader;

impl ProjectLoader {
    /// Collect every `*.json` syntax tree under `root`, sorted by path.
    /// A file path is returned as-is.
    pub fn collect_trees(root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::collect_recursive(root, &mut files)?;
        files.sort();
        files.dedup();
        Ok(files)
    }

    fn collect_recursive(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        if SKIPPED_DIRS.iter().any(|skipped| dir.ends_with(skipped)) {
            return Ok(());
        }
        if !dir.exists() {
            return Ok(());
        }

        if dir.is_file() {
            if Self::is_tree_file(dir) {
                out.push(dir.to_path_buf());
            }
            return Ok(());
        }

        let entries = fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                Self::collect_recursive(&path, out)?;
            } else if Self::is_tree_file(&path) {
                out.push(path);
            }
        }
        Ok(())
    }

    fn is_tree_file(path: &Path) -> bool {
        path.extension().map_or(false, |ext| ext == "json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collect_trees_recurses_and_skips() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("nested/deeper")).unwrap();
        fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        fs::write(root.join("b.json"), "[]").unwrap();
        fs::write(root.join("nested/deeper/a.json"), "[]").unwrap();
        fs::write(root.join("nested/notes.txt"), "skip").unwrap();
        fs::write(root.join("node_modules/pkg/c.json"), "[]").unwrap();

        let files = ProjectLoader::collect_trees(root).unwrap();
        assert_eq!(files, vec![root.join("b.json"), root.join("nested/deeper/a.json")]);
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempdir().unwrap();
        assert!(ProjectLoader::collect_trees(&dir.path().join("absent")).unwrap().is_empty());
    }
}

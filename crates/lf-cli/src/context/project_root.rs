use std::path::{Path, PathBuf};

use lf_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.lostfound` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Resolve the project an explicit `--project` path names.
///
/// Accepts either the project root or its `.lostfound` directory.
pub fn resolve_explicit(path: &Path) -> anyhow::Result<PathBuf> {
    if path.file_name().is_some_and(|name| name == PROJECT_DIR) {
        return path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| anyhow::anyhow!("invalid --project path: '{PROJECT_DIR}' has no parent"));
    }
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        path.display()
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::TempDir;

    use super::{find_project_root, resolve_explicit};

    #[test]
    fn finds_project_root_in_current_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".lostfound")).expect(".lostfound should create");

        let found = find_project_root(temp.path());
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn finds_project_root_in_parent_directory() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join(".lostfound")).expect(".lostfound should create");
        std::fs::create_dir_all(temp.path().join("a/b/c")).expect("nested dirs should create");

        let found = find_project_root(&temp.path().join("a/b/c"));
        assert_eq!(found.as_deref(), Some(temp.path()));
    }

    #[test]
    fn returns_none_when_not_found() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir_all(temp.path().join("a/b/c")).expect("nested dirs should create");

        assert!(find_project_root(&temp.path().join("a/b/c")).is_none());
    }

    #[test]
    fn explicit_project_dir_resolves_to_parent() {
        let temp = TempDir::new().expect("tempdir should create");
        let resolved =
            resolve_explicit(&temp.path().join(".lostfound")).expect("path should resolve");
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn explicit_missing_directory_is_rejected() {
        let err = resolve_explicit(Path::new("/definitely/not/here")).expect_err("should fail");
        assert!(err.to_string().contains("does not exist"));
    }
}

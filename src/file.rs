// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::error::Error;

/// Resolve where an export goes:
/// - no path → `out/<default_filename>`
/// - directory (existing, or hinted by a trailing separator) → `<dir>/<default_filename>`
/// - anything else → the path itself
///
/// Parent directories are created.
pub fn resolve_out_path(user_o: Option<&Path>, default_filename: &str) -> Result<PathBuf, Error> {
    let path = match user_o {
        None => PathBuf::from(DEFAULT_OUT_DIR).join(default_filename),
        Some(p) => {
            let p = PathBuf::from(normalize_separators(&p.to_string_lossy()));
            if looks_like_dir_hint(&p) || p.is_dir() {
                ensure_directory(&p)?;
                p.join(default_filename)
            } else {
                p
            }
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Output(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_hints() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(!looks_like_dir_hint(Path::new("out/trends.json")));
    }

    #[test]
    fn resolves_into_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let p = resolve_out_path(Some(dir.path()), "trends.json").unwrap();
        assert_eq!(p, dir.path().join("trends.json"));
    }

    #[test]
    fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("chart.png");
        let p = resolve_out_path(Some(&target), "ignored.png").unwrap();
        assert_eq!(p, target);
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn file_in_the_way_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        assert!(matches!(ensure_directory(&blocker), Err(Error::Output(_))));
    }
}

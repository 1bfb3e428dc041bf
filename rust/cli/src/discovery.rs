//! Locating hand-history files on disk.
//!
//! Files are recognised by name: `*.phh`, or `*.phh.zst` for compressed
//! records. Results are sorted by path so runs are reproducible.

use std::path::{Path, PathBuf};

/// Files found across the target folders, and the folders that were absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovered {
    pub files: Vec<PathBuf>,
    pub missing_folders: Vec<PathBuf>,
}

pub fn is_phh_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".phh") || name.ends_with(".phh.zst")
}

/// Sorted hand-history files directly inside `base/<folder>` for each folder,
/// at most `max_per_folder` from each.
pub fn discover_in_folders(
    base: &Path,
    folders: &[String],
    max_per_folder: Option<usize>,
) -> Discovered {
    let mut out = Discovered::default();
    for folder in folders {
        let dir = base.join(folder);
        let Ok(entries) = std::fs::read_dir(&dir) else {
            tracing::warn!(folder = %dir.display(), "target folder not found");
            out.missing_folders.push(dir);
            continue;
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file() && is_phh_file(p))
            .collect();
        files.sort();
        if let Some(max) = max_per_folder {
            files.truncate(max);
        }
        tracing::info!(folder = %dir.display(), files = files.len(), "discovered hand histories");
        out.files.extend(files);
    }
    out
}

/// Every hand-history file below `root`, recursively, sorted, capped at `max`.
pub fn walk_phh_files(root: &Path, max: Option<usize>) -> std::io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", root.display()),
        ));
    }
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(d) = stack.pop() {
        let rd = match std::fs::read_dir(&d) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(dir = %d.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };
        for entry in rd.filter_map(Result::ok) {
            let p = entry.path();
            if p.is_dir() {
                stack.push(p);
            } else if is_phh_file(&p) {
                files.push(p);
            }
        }
    }
    files.sort();
    if let Some(max) = max {
        files.truncate(max);
    }
    Ok(files)
}

//! Locates the .MOI files named by a user-supplied path

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::PathError;

const MOI_EXTENSION: &str = "MOI";

/// Expand `path` into the ordered list of MOI files to parse.
///
/// A directory yields its immediate children with an `.MOI` extension
/// (case-insensitive), sorted by path so batch output does not depend on
/// filesystem enumeration order. The listing never recurses. A plain file
/// must itself carry the extension and yields a single-element list.
pub async fn resolve_moi_paths(path: &Path) -> Result<Vec<PathBuf>, PathError> {
    if path.is_dir() {
        let mut entries = fs::read_dir(path).await.map_err(|source| PathError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut moi_paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|source| PathError::ReadDir {
            path: path.to_path_buf(),
            source,
        })? {
            let entry_path = entry.path();
            if entry_path.is_file() && has_moi_extension(&entry_path) {
                moi_paths.push(entry_path);
            }
        }

        moi_paths.sort();
        Ok(moi_paths)
    } else if path.is_file() {
        if !has_moi_extension(path) {
            return Err(PathError::InvalidExtension(path.to_path_buf()));
        }
        Ok(vec![path.to_path_buf()])
    } else {
        Err(PathError::NotFound(path.to_path_buf()))
    }
}

fn has_moi_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(MOI_EXTENSION))
        .unwrap_or(false)
}

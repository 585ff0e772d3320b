//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

/// Copy a directory recursively, creating `dst` and any intermediate directories
///
/// Existing files in `dst` with the same relative path are overwritten;
/// other files already in `dst` are left alone.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> std::io::Result<u64>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();
    let mut copied = 0;

    fs::create_dir_all(dst_ref)?;

    for entry in WalkDir::new(src_ref).min_depth(1) {
        let entry = entry.map_err(std::io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(src_ref)
            .map_err(std::io::Error::other)?;
        let dst_path = dst_ref.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst_path)?;
        } else {
            if let Some(parent) = dst_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dst_path)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Relative paths of all files under `root`, sorted
pub fn list_files(root: &Path) -> std::io::Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(std::io::Error::other)?;
        if entry.file_type().is_file() {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(std::io::Error::other)?;
            files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
    files.sort();
    Ok(files)
}

// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::report::Artifact;

/// Write an artifact to disk, resolving the output hint against its
/// suggested filename. Returns the final path written to.
pub fn write_artifact(
    artifact: &Artifact,
    out_hint: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = resolve_out_path(out_hint, &artifact.filename)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, &artifact.payload)?;
    Ok(path)
}

/// No hint → default out dir + suggested name. Directory (or dir-looking)
/// hint → join the suggested name. Anything else is taken as the file path.
pub fn resolve_out_path(
    hint: Option<&Path>,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match hint {
        None => Ok(PathBuf::from(DEFAULT_OUT_DIR).join(default_filename)),
        Some(p) if looks_like_dir_hint(p) || p.is_dir() => {
            ensure_directory(p)?;
            Ok(p.join(default_filename))
        }
        Some(p) => Ok(p.to_path_buf()),
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

//! UMLS file discovery utilities.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{UmlsError, UmlsFiles, UmlsResult};

/// File name of the concept names and sources file.
pub const CONCEPT_FILE_NAME: &str = "MRCONSO.RRF";

/// File name of the related concepts file.
pub const RELATIONSHIP_FILE_NAME: &str = "MRREL.RRF";

/// Discovers RRF files in a UMLS release directory.
///
/// Looks in the directory itself, in its `META` subdirectory, and in
/// `<release>/META` one level down. `MRREL.RRF` is only required when
/// `need_relationships` is set.
pub fn discover_umls_files<P: AsRef<Path>>(
    path: P,
    need_relationships: bool,
) -> UmlsResult<UmlsFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(UmlsError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let meta_dir = find_meta_dir(path)?;

    let mut files = UmlsFiles::new();
    files.release = meta_dir.ancestors().find_map(extract_release);

    let concept_file = meta_dir.join(CONCEPT_FILE_NAME);
    if concept_file.is_file() {
        debug!("Found {} ({})", concept_file.display(), file_size(&concept_file));
        files.concept_file = Some(concept_file);
    }

    let relationship_file = meta_dir.join(RELATIONSHIP_FILE_NAME);
    if relationship_file.is_file() {
        debug!("Found {} ({})", relationship_file.display(), file_size(&relationship_file));
        files.relationship_file = Some(relationship_file);
    }

    let missing = files.missing_files(need_relationships);
    if !missing.is_empty() {
        return Err(UmlsError::RequiredFileMissing {
            file_name: missing.join(", "),
            directory: meta_dir.display().to_string(),
        });
    }

    Ok(files)
}

/// Finds the directory holding the RRF files.
fn find_meta_dir(base: &Path) -> UmlsResult<PathBuf> {
    if base.join(CONCEPT_FILE_NAME).is_file() {
        return Ok(base.to_path_buf());
    }

    let meta = base.join("META");
    if meta.is_dir() {
        return Ok(meta);
    }

    // Search one level deep, e.g. 2024AA/META
    let mut subdirs = Vec::new();
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            subdirs.push(entry.path());
        }
    }
    subdirs.sort();

    for subdir in subdirs {
        let sub_meta = subdir.join("META");
        if sub_meta.is_dir() {
            return Ok(sub_meta);
        }
    }

    // Let the missing file check name what is absent
    Ok(base.to_path_buf())
}

/// Extracts a release name such as `2024AA` from a path component.
fn extract_release(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let bytes = name.as_bytes();

    if bytes.len() == 6
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_uppercase)
    {
        return Some(name.to_string());
    }

    None
}

fn file_size(path: &Path) -> String {
    fs::metadata(path)
        .map(|m| format_bytes(m.len() as usize))
        .unwrap_or_else(|_| "unknown size".to_string())
}

/// Formats a byte count as a human-readable string.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

//! JSON persistence for code mappings.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};
use umls_types::{well_known, PropagationMethod};

use crate::mapping::CodeMapping;
use crate::types::{UmlsError, UmlsResult};

/// Short name of a vocabulary as used in output file names.
///
/// `SNOMEDCT_US` is `snomed` and `ICD10CM` is `icd10`; any other
/// abbreviation is lowercased.
pub fn vocabulary_slug(source: &str) -> String {
    match source {
        well_known::SNOMEDCT_US => "snomed".to_string(),
        well_known::ICD10CM => "icd10".to_string(),
        other => other.to_ascii_lowercase(),
    }
}

/// Path of the output file for one vocabulary and method.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use umls_loader::output::output_path;
/// use umls_types::PropagationMethod;
///
/// let path = output_path(Path::new("out"), "SNOMEDCT_US", PropagationMethod::ParentChild);
/// assert_eq!(path, Path::new("out/cui_to_snomed_PAR_CHD.json"));
/// ```
pub fn output_path(dir: &Path, source: &str, method: PropagationMethod) -> PathBuf {
    dir.join(format!("cui_to_{}_{}.json", vocabulary_slug(source), method.name()))
}

/// Writes a mapping as a JSON object from CUI to code list.
///
/// The file is replaced in one rename, so readers never see it half written.
pub fn save_mapping<P: AsRef<Path>>(
    path: P,
    mapping: &CodeMapping,
    pretty: bool,
) -> UmlsResult<()> {
    save_mapping_files(&[(path.as_ref(), mapping)], pretty)
}

/// Writes several mappings so that either every file is replaced or none is.
///
/// Each mapping goes to a temporary file next to its target first. The
/// temporaries are renamed into place only after all of them are written,
/// and if a rename fails the files this call already renamed are removed.
pub fn save_mapping_files(outputs: &[(&Path, &CodeMapping)], pretty: bool) -> UmlsResult<()> {
    let mut staged = Vec::with_capacity(outputs.len());
    for &(path, mapping) in outputs {
        staged.push((stage_mapping(path, mapping, pretty)?, path, mapping.len()));
    }

    let mut written: Vec<&Path> = Vec::with_capacity(staged.len());
    for (temp, path, cuis) in staged {
        if let Err(err) = temp.persist(path) {
            for done in written {
                if let Err(e) = fs::remove_file(done) {
                    warn!("Could not remove {}: {}", done.display(), e);
                }
            }
            return Err(err.error.into());
        }
        debug!("Wrote {} CUIs to {}", cuis, path.display());
        written.push(path);
    }

    Ok(())
}

/// Serializes a mapping into a temporary file in the target's directory.
fn stage_mapping(path: &Path, mapping: &CodeMapping, pretty: bool) -> UmlsResult<NamedTempFile> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(&mut temp);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, mapping)?;
        } else {
            serde_json::to_writer(&mut writer, mapping)?;
        }
        writer.flush()?;
    }
    Ok(temp)
}

/// Reads a mapping written by [`save_mapping`].
pub fn load_mapping<P: AsRef<Path>>(path: P) -> UmlsResult<CodeMapping> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(UmlsError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_slug() {
        assert_eq!(vocabulary_slug("SNOMEDCT_US"), "snomed");
        assert_eq!(vocabulary_slug("ICD10CM"), "icd10");
        assert_eq!(vocabulary_slug("RXNORM"), "rxnorm");
    }

    #[test]
    fn test_output_path() {
        let dir = Path::new("/tmp/out");
        assert_eq!(
            output_path(dir, "ICD10CM", PropagationMethod::Exact),
            PathBuf::from("/tmp/out/cui_to_icd10_EXACT.json")
        );
        assert_eq!(
            output_path(dir, "SNOMEDCT_US", PropagationMethod::RelatedOther),
            PathBuf::from("/tmp/out/cui_to_snomed_RO.json")
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/cui_to_snomed_EXACT.json");
        let mapping: CodeMapping = [("C1", "S1"), ("C1", "S2")].into_iter().collect();

        save_mapping(&path, &mapping, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"C1":["S1","S2"]}"#);
        assert_eq!(load_mapping(&path).unwrap(), mapping);
    }

    #[test]
    fn test_pretty_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pretty.json");
        let mapping: CodeMapping = [("C1", "S1")].into_iter().collect();

        save_mapping(&path, &mapping, true).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(load_mapping(&path).unwrap(), mapping);
    }

    #[test]
    fn test_failed_rename_removes_earlier_files() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("cui_to_snomed_EXACT.json");
        let second = dir.path().join("cui_to_icd10_EXACT.json");
        fs::create_dir(&second).unwrap();
        let mapping: CodeMapping = [("C1", "S1")].into_iter().collect();

        let outputs = [(first.as_path(), &mapping), (second.as_path(), &mapping)];
        let result = save_mapping_files(&outputs, false);

        assert!(result.is_err());
        assert!(!first.exists());
        assert!(second.is_dir());
        // No temporary files are left behind either
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cui_to_icd10_RO.json");
        fs::write(&path, "stale").unwrap();
        let mapping: CodeMapping = [("C2", "I2")].into_iter().collect();

        save_mapping(&path, &mapping, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"C2":["I2"]}"#);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_load_missing() {
        assert!(matches!(
            load_mapping("/nonexistent/cui_to_icd10_RO.json"),
            Err(UmlsError::FileNotFound { .. })
        ));
    }
}

//! End-to-end mapping generation.
//!
//! [`generate_mappings`] runs extraction and propagation in memory;
//! [`save_mappings`] also writes the two JSON files. Every setting comes
//! from the [`MappingConfig`] passed in.

use std::path::PathBuf;

use tracing::info;
use umls_types::PropagationMethod;

use crate::extract::extract_codes_from_path;
use crate::loader::discover_umls_files;
use crate::mapping::CodeMappings;
use crate::output::{output_path, save_mapping_files};
use crate::propagate::propagate_codes_from_path;
use crate::types::{
    ExtractConfig, ExtractStats, PropagateConfig, PropagateStats, UmlsError, UmlsResult,
};

/// Configuration for one mapping run.
#[derive(Debug, Clone)]
pub struct MappingConfig {
    /// UMLS directory containing (or above) MRCONSO.RRF and MRREL.RRF.
    pub umls_dir: PathBuf,
    /// Directory the JSON files are written to.
    pub output_dir: PathBuf,
    /// How codes propagate across relationships.
    pub method: PropagationMethod,
    /// Concept extraction settings.
    pub extract: ExtractConfig,
    /// Relationship propagation settings.
    pub propagate: PropagateConfig,
    /// Pretty-print the JSON output.
    pub pretty: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            umls_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            method: PropagationMethod::Exact,
            extract: ExtractConfig::default(),
            propagate: PropagateConfig::default(),
            pretty: false,
        }
    }
}

impl MappingConfig {
    /// Creates a config for `umls_dir` with the given method name.
    ///
    /// # Errors
    /// Returns [`UmlsError::InvalidMethod`] for anything other than
    /// `EXACT`, `RO` or `PAR_CHD`. No file is touched.
    pub fn new(umls_dir: impl Into<PathBuf>, method: &str) -> UmlsResult<Self> {
        Ok(Self {
            umls_dir: umls_dir.into(),
            method: method.parse()?,
            ..Self::default()
        })
    }

    /// Path the primary mapping is written to.
    pub fn primary_output(&self) -> PathBuf {
        output_path(&self.output_dir, &self.extract.primary_source, self.method)
    }

    /// Path the secondary mapping is written to.
    pub fn secondary_output(&self) -> PathBuf {
        output_path(&self.output_dir, &self.extract.secondary_source, self.method)
    }
}

/// Mappings and statistics from one run.
#[derive(Debug, Clone)]
pub struct MappingReport {
    /// The generated mappings.
    pub mappings: CodeMappings,
    /// Concept extraction statistics.
    pub extract: ExtractStats,
    /// Propagation statistics (all zero for `EXACT`).
    pub propagate: PropagateStats,
    /// UMLS release name, when the directory names one.
    pub release: Option<String>,
}

/// Builds both mappings as configured.
///
/// Input files are located before anything is read, so a missing file
/// fails the run up front.
pub fn generate_mappings(config: &MappingConfig) -> UmlsResult<MappingReport> {
    let files = discover_umls_files(&config.umls_dir, config.method.propagates())?;
    let concept_file = files
        .concept_file
        .clone()
        .ok_or_else(|| UmlsError::FileNotFound {
            path: config.umls_dir.display().to_string(),
        })?;

    info!(
        "Generating {} mappings from {} (release {})",
        config.method,
        concept_file.display(),
        files.release.as_deref().unwrap_or("unknown")
    );

    let (mut mappings, extract) = extract_codes_from_path(&concept_file, &config.extract)?;

    let propagate = match (config.method.propagates(), &files.relationship_file) {
        (true, Some(relationship_file)) => propagate_codes_from_path(
            relationship_file,
            config.method,
            &config.propagate,
            &mut mappings,
        )?,
        _ => PropagateStats::default(),
    };

    Ok(MappingReport {
        mappings,
        extract,
        propagate,
        release: files.release,
    })
}

/// Paths written by [`save_mappings`].
#[derive(Debug, Clone)]
pub struct SavedMappings {
    /// Primary mapping file.
    pub primary_path: PathBuf,
    /// Secondary mapping file.
    pub secondary_path: PathBuf,
    /// The run that produced them.
    pub report: MappingReport,
}

/// Builds both mappings and writes them as JSON.
///
/// Nothing is written unless both stages succeed, and the two files are
/// replaced together: a failed write leaves neither new file behind.
pub fn save_mappings(config: &MappingConfig) -> UmlsResult<SavedMappings> {
    let report = generate_mappings(config)?;

    let primary_path = config.primary_output();
    let secondary_path = config.secondary_output();
    save_mapping_files(
        &[
            (primary_path.as_path(), &report.mappings.primary),
            (secondary_path.as_path(), &report.mappings.secondary),
        ],
        config.pretty,
    )?;

    info!(
        "Saved {} CUIs to {} and {} CUIs to {}",
        report.mappings.primary.len(),
        primary_path.display(),
        report.mappings.secondary.len(),
        secondary_path.display()
    );

    Ok(SavedMappings {
        primary_path,
        secondary_path,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_unknown_method() {
        let err = MappingConfig::new("/nonexistent", "PARENT").unwrap_err();
        assert!(matches!(err, UmlsError::InvalidMethod { ref value } if value == "PARENT"));
    }

    #[test]
    fn test_config_output_paths() {
        let mut config = MappingConfig::new("/umls", "RO").unwrap();
        config.output_dir = PathBuf::from("/out");

        assert_eq!(config.primary_output(), PathBuf::from("/out/cui_to_snomed_RO.json"));
        assert_eq!(config.secondary_output(), PathBuf::from("/out/cui_to_icd10_RO.json"));
    }

    #[test]
    fn test_missing_directory_fails_before_processing() {
        let config = MappingConfig::new("/nonexistent/umls", "EXACT").unwrap();
        assert!(matches!(
            generate_mappings(&config),
            Err(UmlsError::DirectoryNotFound { .. })
        ));
    }
}

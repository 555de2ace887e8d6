//! Loader-specific types for RRF file processing.

use std::path::PathBuf;

use thiserror::Error;
use umls_types::well_known;

/// Errors that can occur while building code mappings.
#[derive(Error, Debug)]
pub enum UmlsError {
    /// I/O error reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level error while reading an RRF file.
    #[error("Error reading {file}: {source}")]
    Csv {
        /// File being read.
        file: String,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Required file missing from the UMLS directory.
    #[error("Required UMLS file not found: {file_name} in {directory}")]
    RequiredFileMissing {
        /// Name of the missing file.
        file_name: String,
        /// The directory that was searched.
        directory: String,
    },

    /// A row has fewer fields than the column layout needs.
    #[error("Malformed row {row} in {file}: expected at least {expected} fields, found {found}")]
    MalformedRow {
        /// File containing the row.
        file: String,
        /// 1-based line number of the row.
        row: u64,
        /// Minimum number of fields required.
        expected: usize,
        /// Number of fields found.
        found: usize,
    },

    /// Unknown source vocabulary, when unknown sources are rejected.
    #[error("Unknown source vocabulary '{source_name}' at row {row} in {file}")]
    UnknownSource {
        /// File containing the row.
        file: String,
        /// 1-based line number of the row.
        row: u64,
        /// The unrecognized source abbreviation.
        source_name: String,
    },

    /// Propagation method name not recognized.
    #[error("Invalid propagation method: '{value}' (expected EXACT, RO or PAR_CHD)")]
    InvalidMethod {
        /// The rejected value.
        value: String,
    },
}

impl From<umls_types::ParseMethodError> for UmlsError {
    fn from(err: umls_types::ParseMethodError) -> Self {
        UmlsError::InvalidMethod { value: err.0 }
    }
}

/// Result type for UMLS loader operations.
pub type UmlsResult<T> = Result<T, UmlsError>;

/// Column positions of the fields read from MRCONSO.RRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptColumns {
    /// Position of `CUI`.
    pub cui: usize,
    /// Position of `SAB`.
    pub source: usize,
    /// Position of `CODE`.
    pub code: usize,
}

impl Default for ConceptColumns {
    fn default() -> Self {
        Self {
            cui: 0,
            source: 11,
            code: 13,
        }
    }
}

/// Column positions of the fields read from MRREL.RRF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipColumns {
    /// Position of `CUI1`.
    pub source_cui: usize,
    /// Position of `CUI2`.
    pub target_cui: usize,
    /// Position of the relationship label, `REL` by default.
    pub label: usize,
}

impl Default for RelationshipColumns {
    fn default() -> Self {
        Self {
            source_cui: 0,
            target_cui: 4,
            label: 3,
        }
    }
}

/// What to do with concept rows whose source vocabulary is neither target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSourcePolicy {
    /// Skip the row and count it in [`ExtractStats::skipped_records`].
    #[default]
    Ignore,
    /// Abort with [`UmlsError::UnknownSource`].
    ///
    /// Every vocabulary other than the two targets counts as unknown, so a
    /// full MRCONSO.RRF (which carries rows from a couple of hundred
    /// sources) fails on its first such row. Only useful on a subset that
    /// was already filtered down to the two targets; it does not validate
    /// abbreviations against the UMLS source list.
    Reject,
}

/// Which mappings are checked before a relationship merges codes.
///
/// `CrossMapping` requires the source CUI in the primary mapping and the
/// target CUI in the secondary mapping, then merges both mappings. This
/// asymmetry is how the mapping files have always been produced and is
/// kept as the default; whether it is intended is an open question, so
/// `PerMapping` exists to compare the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    /// Source in primary and target in secondary gates both merges.
    #[default]
    CrossMapping,
    /// Each mapping merges when source and target are both in it.
    PerMapping,
}

/// Configuration for concept code extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Column layout of the concept file.
    pub columns: ConceptColumns,
    /// Source abbreviation collected into the primary mapping.
    pub primary_source: String,
    /// Source abbreviation collected into the secondary mapping.
    pub secondary_source: String,
    /// Handling of rows from other vocabularies.
    pub unknown_sources: UnknownSourcePolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            columns: ConceptColumns::default(),
            primary_source: well_known::SNOMEDCT_US.to_string(),
            secondary_source: well_known::ICD10CM.to_string(),
            unknown_sources: UnknownSourcePolicy::Ignore,
        }
    }
}

/// Configuration for relationship propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropagateConfig {
    /// Column layout of the relationship file.
    pub columns: RelationshipColumns,
    /// Gating rule for merges.
    pub gate: GatePolicy,
}

/// Statistics from extracting concept codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Total records read from file.
    pub total_records: usize,
    /// Records whose code was added to the primary mapping.
    pub primary_records: usize,
    /// Records whose code was added to the secondary mapping.
    pub secondary_records: usize,
    /// Records for a target vocabulary whose code was already present.
    pub duplicate_records: usize,
    /// Records from other vocabularies.
    pub skipped_records: usize,
}

/// Statistics from propagating codes across relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagateStats {
    /// Total records read from file.
    pub total_records: usize,
    /// Records whose label the method selects.
    pub matched_records: usize,
    /// Selected records that passed the gate.
    pub merged_records: usize,
    /// Codes appended to the primary mapping.
    pub primary_codes_added: usize,
    /// Codes appended to the secondary mapping.
    pub secondary_codes_added: usize,
}

impl PropagateStats {
    /// Returns the percentage of selected records that passed the gate.
    pub fn gate_rate(&self) -> f64 {
        if self.matched_records == 0 {
            0.0
        } else {
            (self.merged_records as f64 / self.matched_records as f64) * 100.0
        }
    }
}

/// Discovered RRF files in a UMLS directory.
#[derive(Debug, Clone, Default)]
pub struct UmlsFiles {
    /// Path to MRCONSO.RRF.
    pub concept_file: Option<PathBuf>,
    /// Path to MRREL.RRF.
    pub relationship_file: Option<PathBuf>,
    /// Release name taken from the directory path (e.g. `2024AA`).
    pub release: Option<String>,
}

impl UmlsFiles {
    /// Creates a new empty UmlsFiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a list of missing files, given whether relationships are needed.
    pub fn missing_files(&self, need_relationships: bool) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.concept_file.is_none() {
            missing.push(crate::loader::CONCEPT_FILE_NAME);
        }
        if need_relationships && self.relationship_file.is_none() {
            missing.push(crate::loader::RELATIONSHIP_FILE_NAME);
        }
        missing
    }
}

//! # umls-loader
//!
//! Builds CUI to code mappings from UMLS Metathesaurus RRF files.
//!
//! `MRCONSO.RRF` is streamed once to collect, per CUI, the codes of two
//! source vocabularies (SNOMED CT US and ICD-10-CM by default). When a
//! propagating [`PropagationMethod`] is selected, `MRREL.RRF` is streamed
//! once more and the codes of related concepts are merged in.
//!
//! ```ignore
//! use umls_loader::{save_mappings, MappingConfig};
//!
//! let config = MappingConfig::new("/data/umls/2024AA", "PAR_CHD")?;
//! let saved = save_mappings(&config)?;
//! println!("wrote {}", saved.primary_path.display());
//! ```

#![warn(missing_docs)]

mod concept;
pub mod extract;
pub mod loader;
mod mapping;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod propagate;
mod relationship;
pub mod types;

pub use extract::{extract_codes, extract_codes_from_path};
pub use loader::{discover_umls_files, format_bytes, CONCEPT_FILE_NAME, RELATIONSHIP_FILE_NAME};
pub use mapping::{CodeMapping, CodeMappings};
pub use output::{load_mapping, save_mapping, save_mapping_files};
pub use parser::{RrfParser, RrfRecord};
pub use pipeline::{generate_mappings, save_mappings, MappingConfig, MappingReport, SavedMappings};
pub use propagate::{apply_relationship, propagate_codes, propagate_codes_from_path, MergeOutcome};
pub use types::{
    ConceptColumns, ExtractConfig, ExtractStats, GatePolicy, PropagateConfig, PropagateStats,
    RelationshipColumns, UmlsError, UmlsFiles, UmlsResult, UnknownSourcePolicy,
};

// Re-export umls-types for convenience
pub use umls_types;
pub use umls_types::PropagationMethod;

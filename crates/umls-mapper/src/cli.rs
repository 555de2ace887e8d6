//! Command-line arguments and the run entry point.

use std::path::PathBuf;

use clap::Parser;
use umls_loader::{
    save_mappings, GatePolicy, MappingConfig, SavedMappings, UmlsResult, UnknownSourcePolicy,
};
use umls_types::well_known;

/// Build UMLS CUI to SNOMED CT / ICD-10-CM code mappings
#[derive(Parser, Debug, Clone)]
#[command(name = "umls-mapper", version, about)]
pub struct Args {
    /// UMLS release directory (holding MRCONSO.RRF, or META/ below it)
    #[arg(long, env = "UMLS_DATA_PATH", default_value = ".")]
    pub umls_dir: PathBuf,

    /// Propagation method: EXACT, RO or PAR_CHD
    #[arg(short, long, env = "UMLS_METHOD", default_value = "EXACT")]
    pub method: String,

    /// Directory the JSON mapping files are written to
    #[arg(short, long, env = "UMLS_OUTPUT_PATH", default_value = ".")]
    pub output_dir: PathBuf,

    /// Source abbreviation collected into the first mapping
    #[arg(long, default_value = well_known::SNOMEDCT_US)]
    pub primary_source: String,

    /// Source abbreviation collected into the second mapping
    #[arg(long, default_value = well_known::ICD10CM)]
    pub secondary_source: String,

    /// MRREL.RRF column holding the relationship label
    #[arg(long)]
    pub label_column: Option<usize>,

    /// Fail on MRCONSO.RRF rows from any other vocabulary
    #[arg(long)]
    pub reject_unknown_sources: bool,

    /// Gate each mapping on its own contents instead of across mappings
    #[arg(long)]
    pub per_mapping_gate: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Converts the arguments into a [`MappingConfig`].
    ///
    /// Fails on an unknown method before any file is touched.
    pub fn into_config(self) -> UmlsResult<MappingConfig> {
        let mut config = MappingConfig::new(self.umls_dir, &self.method)?;
        config.output_dir = self.output_dir;
        config.pretty = self.pretty;

        config.extract.primary_source = self.primary_source;
        config.extract.secondary_source = self.secondary_source;
        if self.reject_unknown_sources {
            config.extract.unknown_sources = UnknownSourcePolicy::Reject;
        }

        if let Some(label) = self.label_column {
            config.propagate.columns.label = label;
        }
        if self.per_mapping_gate {
            config.propagate.gate = GatePolicy::PerMapping;
        }

        Ok(config)
    }
}

/// Builds and writes both mappings.
pub fn run(args: Args) -> UmlsResult<SavedMappings> {
    let config = args.into_config()?;
    tracing::debug!("Running with {:?}", config);
    save_mappings(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use umls_loader::UmlsError;
    use umls_types::PropagationMethod;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("umls-mapper").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_build_config() {
        let config = parse(&[
            "--umls-dir",
            "/data/2024AA",
            "--method",
            "PAR_CHD",
            "--output-dir",
            "/out",
            "--label-column",
            "7",
            "--reject-unknown-sources",
            "--per-mapping-gate",
            "--pretty",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.umls_dir, PathBuf::from("/data/2024AA"));
        assert_eq!(config.method, PropagationMethod::ParentChild);
        assert_eq!(config.output_dir, PathBuf::from("/out"));
        assert_eq!(config.propagate.columns.label, 7);
        assert_eq!(config.propagate.gate, GatePolicy::PerMapping);
        assert_eq!(config.extract.unknown_sources, UnknownSourcePolicy::Reject);
        assert!(config.pretty);
    }

    #[test]
    fn test_invalid_method_rejected() {
        let err = parse(&["--umls-dir", "/nonexistent", "--method", "ALL"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, UmlsError::InvalidMethod { ref value } if value == "ALL"));
    }

    #[test]
    fn test_run_writes_files() {
        let umls = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(
            umls.path().join("MRCONSO.RRF"),
            "C1|ENG|P|L1|PF|S1|Y|A1||||SNOMEDCT_US|PT|73211009|Diabetes mellitus|0|N||\n",
        )
        .unwrap();

        let saved = run(parse(&[
            "--umls-dir",
            umls.path().to_str().unwrap(),
            "--output-dir",
            out.path().to_str().unwrap(),
        ]))
        .unwrap();

        assert_eq!(saved.primary_path, out.path().join("cui_to_snomed_EXACT.json"));
        assert_eq!(
            std::fs::read_to_string(saved.primary_path).unwrap(),
            r#"{"C1":["73211009"]}"#
        );
        assert_eq!(std::fs::read_to_string(saved.secondary_path).unwrap(), "{}");
    }
}

//! Concept code extraction from MRCONSO.RRF.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};
use umls_types::ConceptCode;

use crate::mapping::CodeMappings;
use crate::parser::RrfParser;
use crate::types::{ExtractConfig, ExtractStats, UmlsError, UmlsResult, UnknownSourcePolicy};

/// Builds the primary and secondary mappings from a stream of concept rows.
///
/// Each code lands under its CUI in the mapping for its source vocabulary,
/// once, in first-seen order. The first malformed row aborts extraction.
pub fn extract_codes<R: Read>(
    mut parser: RrfParser<R, ConceptCode>,
    config: &ExtractConfig,
) -> UmlsResult<(CodeMappings, ExtractStats)> {
    let mut mappings = CodeMappings::default();
    let mut stats = ExtractStats::default();

    while let Some(record) = parser.next() {
        let concept = record?;
        stats.total_records += 1;

        let (mapping, added) = if concept.is_from(&config.primary_source) {
            (&mut mappings.primary, &mut stats.primary_records)
        } else if concept.is_from(&config.secondary_source) {
            (&mut mappings.secondary, &mut stats.secondary_records)
        } else {
            if config.unknown_sources == UnknownSourcePolicy::Reject {
                return Err(UmlsError::UnknownSource {
                    file: parser.source_name().to_string(),
                    row: parser.row(),
                    source_name: concept.source,
                });
            }
            stats.skipped_records += 1;
            continue;
        };

        if mapping.insert(&concept.cui, &concept.code) {
            *added += 1;
        } else {
            stats.duplicate_records += 1;
        }
    }

    debug!("Extracted {:?} from {}", stats, parser.source_name());

    Ok((mappings, stats))
}

/// Extracts concept codes from an MRCONSO.RRF file.
pub fn extract_codes_from_path<P: AsRef<Path>>(
    path: P,
    config: &ExtractConfig,
) -> UmlsResult<(CodeMappings, ExtractStats)> {
    let parser = RrfParser::<_, ConceptCode>::from_path(path, config.columns)?;
    let source_name = parser.source_name().to_string();
    let (mappings, stats) = extract_codes(parser, config)?;

    info!(
        "Read {} concept rows from {}: {} CUIs with {} codes, {} CUIs with {} codes",
        stats.total_records,
        source_name,
        mappings.primary.len(),
        config.primary_source,
        mappings.secondary.len(),
        config.secondary_source
    );

    Ok((mappings, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConceptColumns;

    const COLUMNS: ConceptColumns = ConceptColumns {
        cui: 0,
        source: 1,
        code: 2,
    };

    fn config() -> ExtractConfig {
        ExtractConfig {
            columns: COLUMNS,
            ..ExtractConfig::default()
        }
    }

    fn parser(input: &str) -> RrfParser<&[u8], ConceptCode> {
        RrfParser::from_reader(input.as_bytes(), COLUMNS, "MRCONSO.RRF")
    }

    #[test]
    fn test_codes_split_by_source() {
        let input = "\
C1|SNOMEDCT_US|S1|
C1|ICD10CM|I1|
C2|SNOMEDCT_US|S2a|
C2|MSH|D003924|
C2|ICD10CM|I2|
";
        let (mappings, stats) = extract_codes(parser(input), &config()).unwrap();

        assert_eq!(mappings.primary.codes("C1").unwrap(), ["S1"]);
        assert_eq!(mappings.primary.codes("C2").unwrap(), ["S2a"]);
        assert_eq!(mappings.secondary.codes("C1").unwrap(), ["I1"]);
        assert_eq!(mappings.secondary.codes("C2").unwrap(), ["I2"]);
        assert_eq!(
            stats,
            ExtractStats {
                total_records: 5,
                primary_records: 2,
                secondary_records: 2,
                duplicate_records: 0,
                skipped_records: 1,
            }
        );
    }

    #[test]
    fn test_duplicates_dropped_in_first_seen_order() {
        let input = "C1|SNOMEDCT_US|B|\nC1|SNOMEDCT_US|A|\nC1|SNOMEDCT_US|B|\n";
        let (mappings, stats) = extract_codes(parser(input), &config()).unwrap();

        assert_eq!(mappings.primary.codes("C1").unwrap(), ["B", "A"]);
        assert_eq!(stats.duplicate_records, 1);
    }

    #[test]
    fn test_unknown_source_creates_no_entry() {
        let input = "C9|MSH|D1|\n";
        let (mappings, _) = extract_codes(parser(input), &config()).unwrap();

        assert!(mappings.primary.is_empty());
        assert!(mappings.secondary.is_empty());
    }

    #[test]
    fn test_unknown_source_rejected() {
        let config = ExtractConfig {
            unknown_sources: UnknownSourcePolicy::Reject,
            ..config()
        };
        let input = "C1|SNOMEDCT_US|S1|\nC9|MSH|D1|\n";

        let err = extract_codes(parser(input), &config).unwrap_err();
        match err {
            UmlsError::UnknownSource { row, source_name, .. } => {
                assert_eq!(row, 2);
                assert_eq!(source_name, "MSH");
            }
            other => panic!("expected unknown source, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_row_aborts() {
        let input = "C1|SNOMEDCT_US|S1|\nC2|ICD10CM\n";
        let err = extract_codes(parser(input), &config()).unwrap_err();
        assert!(matches!(err, UmlsError::MalformedRow { row: 2, .. }));
    }

    #[test]
    fn test_blank_line_aborts_at_its_line() {
        let input = "C1|SNOMEDCT_US|S1|\n\n\nC9|ENG\n";
        let err = extract_codes(parser(input), &config()).unwrap_err();
        assert!(matches!(
            err,
            UmlsError::MalformedRow { row: 2, expected: 3, found: 0, .. }
        ));

        let input = "C1|SNOMEDCT_US|S1|\n\nC2|ICD10CM|I2|";
        assert!(extract_codes(parser(input), &config()).is_err());
    }

    #[test]
    fn test_row_numbers_count_every_line() {
        let config = ExtractConfig {
            unknown_sources: UnknownSourcePolicy::Reject,
            ..config()
        };
        let mut parser = parser("C1|SNOMEDCT_US|S1|\n\nC2|ICD10CM|I2|\nC9|MSH|D1|\n");
        assert!(parser.nth(1).unwrap().is_err());

        let err = extract_codes(parser, &config).unwrap_err();
        assert!(matches!(err, UmlsError::UnknownSource { row: 4, .. }));
    }

    #[test]
    fn test_custom_sources() {
        let config = ExtractConfig {
            primary_source: "MSH".to_string(),
            secondary_source: "RXNORM".to_string(),
            ..config()
        };
        let input = "C1|MSH|D1|\nC1|RXNORM|R1|\nC1|SNOMEDCT_US|S1|\n";
        let (mappings, stats) = extract_codes(parser(input), &config).unwrap();

        assert_eq!(mappings.primary.codes("C1").unwrap(), ["D1"]);
        assert_eq!(mappings.secondary.codes("C1").unwrap(), ["R1"]);
        assert_eq!(stats.skipped_records, 1);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let input = "C3|SNOMEDCT_US|z|\nC1|SNOMEDCT_US|y|\nC2|ICD10CM|x|\nC1|SNOMEDCT_US|w|\n";
        let (first, _) = extract_codes(parser(input), &config()).unwrap();
        let (second, _) = extract_codes(parser(input), &config()).unwrap();

        assert_eq!(
            serde_json::to_string(&first.primary).unwrap(),
            serde_json::to_string(&second.primary).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&first.secondary).unwrap(),
            serde_json::to_string(&second.secondary).unwrap()
        );
    }
}

//! MRCONSO.RRF parser.
//!
//! Reads the concept, source and code columns of concept name rows.

use csv::StringRecord;
use umls_types::ConceptCode;

use crate::parser::{field, RrfRecord};
use crate::types::ConceptColumns;

impl RrfRecord for ConceptCode {
    type Columns = ConceptColumns;

    fn required_fields(columns: &ConceptColumns) -> usize {
        columns.cui.max(columns.source).max(columns.code) + 1
    }

    fn from_record(record: &StringRecord, columns: &ConceptColumns) -> Self {
        ConceptCode {
            cui: field(record, columns.cui),
            source: field(record, columns.source),
            code: field(record, columns.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::RrfParser;
    use crate::types::UmlsError;

    fn make_record(fields: &[&str]) -> StringRecord {
        let mut record = StringRecord::new();
        for field in fields {
            record.push_field(field);
        }
        record
    }

    #[test]
    fn test_parse_concept_record() {
        let record = make_record(&[
            "C0011849", "ENG", "P", "L0011849", "PF", "S0352253", "Y", "A0426391", "", "", "",
            "SNOMEDCT_US", "PT", "73211009", "Diabetes mellitus", "9", "N", "256", "",
        ]);

        let code = ConceptCode::from_record(&record, &ConceptColumns::default());
        assert_eq!(code.cui, "C0011849");
        assert_eq!(code.source, "SNOMEDCT_US");
        assert_eq!(code.code, "73211009");
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(ConceptCode::required_fields(&ConceptColumns::default()), 14);

        let custom = ConceptColumns {
            cui: 2,
            source: 0,
            code: 1,
        };
        assert_eq!(ConceptCode::required_fields(&custom), 3);
    }

    #[test]
    fn test_three_field_row_is_malformed() {
        let input = "C0011849|ENG|P|\n";
        let mut parser = RrfParser::<_, ConceptCode>::from_reader(
            input.as_bytes(),
            ConceptColumns::default(),
            "MRCONSO.RRF",
        );

        let err = parser.next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            UmlsError::MalformedRow { row: 1, expected: 14, found: 4, .. }
        ));
    }
}

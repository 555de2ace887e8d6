//! MRREL.RRF parser.
//!
//! Reads the two concept columns and the relationship label of
//! relationship rows.

use csv::StringRecord;
use umls_types::ConceptRelationship;

use crate::parser::{field, RrfRecord};
use crate::types::RelationshipColumns;

impl RrfRecord for ConceptRelationship {
    type Columns = RelationshipColumns;

    fn required_fields(columns: &RelationshipColumns) -> usize {
        columns.source_cui.max(columns.target_cui).max(columns.label) + 1
    }

    fn from_record(record: &StringRecord, columns: &RelationshipColumns) -> Self {
        ConceptRelationship {
            source_cui: field(record, columns.source_cui),
            target_cui: field(record, columns.target_cui),
            label: field(record, columns.label),
        }
    }
}

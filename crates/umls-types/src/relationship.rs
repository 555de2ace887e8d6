//! UMLS concept relationship type.
//!
//! This module provides the `ConceptRelationship` struct representing the
//! fields of an MRREL.RRF row that matter for code propagation.

use crate::{Cui, RelationshipLabel};

/// A relationship between two UMLS concepts.
///
/// Represents the `CUI1`, `CUI2` and `REL` columns of one row of
/// `MRREL.RRF`. The label is kept as raw text so that labels outside the
/// known vocabulary can still be read; they simply never select a merge.
///
/// # Examples
///
/// ```
/// use umls_types::{ConceptRelationship, RelationshipLabel};
///
/// let relationship = ConceptRelationship {
///     source_cui: "C0011849".to_string(), // Diabetes mellitus
///     target_cui: "C0011860".to_string(), // Diabetes mellitus, type 2
///     label: "CHD".to_string(),
/// };
///
/// assert_eq!(relationship.relationship_label(), Some(RelationshipLabel::Child));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptRelationship {
    /// Concept the relationship starts from (`CUI1`).
    pub source_cui: Cui,
    /// Concept the relationship points at (`CUI2`).
    pub target_cui: Cui,
    /// Relationship label abbreviation (`REL`).
    pub label: String,
}

impl ConceptRelationship {
    /// Returns the relationship label enum value.
    ///
    /// Returns `None` if the label is not recognized.
    pub fn relationship_label(&self) -> Option<RelationshipLabel> {
        RelationshipLabel::from_abbreviation(&self.label)
    }

    /// Returns true if source and target are the same concept.
    pub fn is_reflexive(&self) -> bool {
        self.source_cui == self.target_cui
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_relationship(source: &str, target: &str, label: &str) -> ConceptRelationship {
        ConceptRelationship {
            source_cui: source.to_string(),
            target_cui: target.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_known_label() {
        let rel = make_relationship("C1", "C2", "RO");
        assert_eq!(rel.relationship_label(), Some(RelationshipLabel::Other));
        assert!(!rel.is_reflexive());
    }

    #[test]
    fn test_unknown_label() {
        let rel = make_relationship("C1", "C1", "isa");
        assert_eq!(rel.relationship_label(), None);
        assert!(rel.is_reflexive());
    }
}

//! # umls-types
//!
//! Type definitions for the UMLS Metathesaurus.
//!
//! This crate provides Rust type definitions for the parts of the UMLS
//! Rich Release Format (RRF) used to map concepts (CUIs) to codes in
//! external vocabularies: concept codes from `MRCONSO.RRF`, relationships
//! from `MRREL.RRF`, and the propagation methods that connect them.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use umls_types::{ConceptCode, ConceptRelationship, PropagationMethod};
//! use umls_types::well_known;
//!
//! let code = ConceptCode {
//!     cui: "C0011849".to_string(),
//!     source: well_known::SNOMEDCT_US.to_string(),
//!     code: "73211009".to_string(),
//! };
//! assert!(code.is_from(well_known::SNOMEDCT_US));
//!
//! let relationship = ConceptRelationship {
//!     source_cui: "C0011849".to_string(),
//!     target_cui: "C0011860".to_string(),
//!     label: well_known::REL_CHILD.to_string(),
//! };
//! let method: PropagationMethod = "PAR_CHD".parse().unwrap();
//! assert!(method.selects(relationship.relationship_label().unwrap()));
//! ```

#![warn(missing_docs)]

mod concept;
mod cui;
mod enums;
mod relationship;
pub mod well_known;

// Re-export all public types at crate root
pub use concept::ConceptCode;
pub use cui::Cui;
pub use enums::{ParseMethodError, PropagationMethod, RelationshipLabel};
pub use relationship::ConceptRelationship;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _cui: Cui = "C0011849".to_string();
        let _label = RelationshipLabel::Parent;
        let _method = PropagationMethod::Exact;
    }

    #[test]
    fn test_well_known_accessible() {
        assert_eq!(well_known::SNOMEDCT_US, "SNOMEDCT_US");
        assert_eq!(well_known::REL_OTHER, "RO");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let relationship = ConceptRelationship {
            source_cui: "C0011849".to_string(),
            target_cui: "C0011860".to_string(),
            label: "CHD".to_string(),
        };

        let json = serde_json::to_string(&relationship).unwrap();
        let parsed: ConceptRelationship = serde_json::from_str(&json).unwrap();
        assert_eq!(relationship, parsed);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_method_serializes_as_canonical_name() {
        let json = serde_json::to_string(&PropagationMethod::ParentChild).unwrap();
        assert_eq!(json, "\"PAR_CHD\"");
    }
}

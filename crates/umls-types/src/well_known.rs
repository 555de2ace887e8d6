//! Well-known UMLS abbreviations.
//!
//! This module provides constants for the source vocabulary abbreviations
//! (`SAB` column of MRCONSO.RRF) and relationship labels (`REL` column of
//! MRREL.RRF) used when building code mappings.
//!
//! # Examples
//!
//! ```
//! use umls_types::well_known;
//!
//! assert_eq!(well_known::SNOMEDCT_US, "SNOMEDCT_US");
//! assert_eq!(well_known::REL_PARENT, "PAR");
//! ```

// =============================================================================
// Source Vocabularies
// =============================================================================

/// SNOMED CT, US Edition.
pub const SNOMEDCT_US: &str = "SNOMEDCT_US";

/// ICD-10 Clinical Modification.
pub const ICD10CM: &str = "ICD10CM";

// =============================================================================
// Relationship Labels
// =============================================================================

/// Allowed qualifier.
pub const REL_ALLOWED_QUALIFIER: &str = "AQ";

/// Has child relationship in a Metathesaurus source vocabulary.
pub const REL_CHILD: &str = "CHD";

/// Deleted concept.
pub const REL_DELETED: &str = "DEL";

/// Has parent relationship in a Metathesaurus source vocabulary.
pub const REL_PARENT: &str = "PAR";

/// Can be qualified by.
pub const REL_QUALIFIED_BY: &str = "QB";

/// Has a broader relationship.
pub const REL_BROADER: &str = "RB";

/// The relationship is similar or "alike".
pub const REL_ALIKE: &str = "RL";

/// Has a narrower relationship.
pub const REL_NARROWER: &str = "RN";

/// Has relationship other than synonymous, narrower, or broader.
pub const REL_OTHER: &str = "RO";

/// Related and possibly synonymous.
pub const REL_POSSIBLY_SYNONYMOUS: &str = "RQ";

/// Related, unspecified.
pub const REL_UNSPECIFIED: &str = "RU";

/// Has sibling relationship in a Metathesaurus source vocabulary.
pub const REL_SIBLING: &str = "SIB";

/// Source asserted synonymy.
pub const REL_SYNONYM: &str = "SY";

/// Not related, no mapping.
pub const REL_NOT_RELATED: &str = "XR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets() {
        assert_eq!(SNOMEDCT_US, "SNOMEDCT_US");
        assert_eq!(ICD10CM, "ICD10CM");
    }

    #[test]
    fn test_hierarchy_labels() {
        assert_eq!(REL_PARENT, "PAR");
        assert_eq!(REL_CHILD, "CHD");
        assert_eq!(REL_OTHER, "RO");
    }
}

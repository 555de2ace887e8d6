//! UMLS concept code type.
//!
//! This module provides the `ConceptCode` struct representing the fields of
//! an MRCONSO.RRF row that matter for code mapping.

use crate::Cui;

/// A source code attached to a UMLS concept.
///
/// Represents the CUI, source abbreviation and code columns of one row of
/// `MRCONSO.RRF`.
///
/// # Examples
///
/// ```
/// use umls_types::{ConceptCode, well_known};
///
/// let code = ConceptCode {
///     cui: "C0011849".to_string(),
///     source: well_known::SNOMEDCT_US.to_string(),
///     code: "73211009".to_string(),
/// };
///
/// assert!(code.is_from(well_known::SNOMEDCT_US));
/// assert!(!code.is_from(well_known::ICD10CM));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptCode {
    /// Concept the code belongs to.
    pub cui: Cui,
    /// Source vocabulary abbreviation (`SAB`).
    pub source: String,
    /// Code assigned by the source vocabulary.
    pub code: String,
}

impl ConceptCode {
    /// Returns true if this code comes from the given source vocabulary.
    ///
    /// Comparison is exact and case-sensitive.
    pub fn is_from(&self, source: &str) -> bool {
        self.source == source
    }
}

//! UMLS Concept Unique Identifier (CUI) type.
//!
//! CUIs are opaque strings such as `C0011849`. They are never parsed or
//! normalised; two CUIs are equal exactly when their text is equal.

/// A UMLS Concept Unique Identifier.
///
/// # Examples
///
/// ```
/// use umls_types::Cui;
///
/// let diabetes: Cui = "C0011849".to_string();
/// assert!(diabetes.starts_with('C'));
/// ```
pub type Cui = String;

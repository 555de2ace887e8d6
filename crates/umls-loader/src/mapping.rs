//! CUI to code-list mappings.
//!
//! A [`CodeMapping`] keeps, for each CUI, the distinct codes found for it in
//! discovery order. Keys are kept sorted so that serialized output is
//! stable from run to run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use umls_types::Cui;

/// Mapping from CUI to an ordered list of distinct codes.
///
/// Invariants: a CUI never maps to an empty list, and no code appears
/// twice under the same CUI.
///
/// # Example
///
/// ```
/// use umls_loader::CodeMapping;
///
/// let mut mapping = CodeMapping::new();
/// assert!(mapping.insert("C0011849", "73211009"));
/// assert!(!mapping.insert("C0011849", "73211009"));
/// assert_eq!(mapping.codes("C0011849"), Some(&["73211009".to_string()][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeMapping {
    entries: BTreeMap<Cui, Vec<String>>,
}

impl CodeMapping {
    /// Creates a new empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `code` under `cui` unless it is already there.
    ///
    /// Returns true if the code was added.
    pub fn insert(&mut self, cui: &str, code: &str) -> bool {
        let codes = self.entries.entry(cui.to_string()).or_default();
        if codes.iter().any(|c| c == code) {
            return false;
        }
        codes.push(code.to_string());
        true
    }

    /// Appends the codes of `target` missing from `source`, in `target`'s order.
    ///
    /// Nothing happens unless both CUIs are present, so no entry is ever
    /// created. Returns the number of codes appended.
    pub fn merge_from(&mut self, source: &str, target: &str) -> usize {
        let Some(incoming) = self.entries.get(target).cloned() else {
            return 0;
        };
        let Some(codes) = self.entries.get_mut(source) else {
            return 0;
        };

        let before = codes.len();
        for code in incoming {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes.len() - before
    }

    /// Returns true if `cui` has at least one code.
    pub fn contains_cui(&self, cui: &str) -> bool {
        self.entries.contains_key(cui)
    }

    /// Returns the codes for `cui`, in discovery order.
    pub fn codes(&self, cui: &str) -> Option<&[String]> {
        self.entries.get(cui).map(Vec::as_slice)
    }

    /// Returns the number of CUIs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no CUIs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of codes across all CUIs.
    pub fn code_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl<C: AsRef<str>, K: AsRef<str>> FromIterator<(C, K)> for CodeMapping {
    fn from_iter<I: IntoIterator<Item = (C, K)>>(iter: I) -> Self {
        let mut mapping = CodeMapping::new();
        for (cui, code) in iter {
            mapping.insert(cui.as_ref(), code.as_ref());
        }
        mapping
    }
}

/// The two mappings built in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeMappings {
    /// CUI to codes of the primary vocabulary (SNOMED CT by default).
    pub primary: CodeMapping,
    /// CUI to codes of the secondary vocabulary (ICD-10-CM by default).
    pub secondary: CodeMapping,
}

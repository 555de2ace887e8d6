//! UMLS enumeration types.
//!
//! This module provides enum representations for relationship labels and
//! for the propagation methods that decide which labels merge codes.

use std::fmt;
use std::str::FromStr;

use crate::well_known;

/// Relationship label from the `REL` column of MRREL.RRF.
///
/// # Examples
///
/// ```
/// use umls_types::RelationshipLabel;
///
/// let label = RelationshipLabel::from_abbreviation("PAR");
/// assert_eq!(label, Some(RelationshipLabel::Parent));
/// assert_eq!(RelationshipLabel::from_abbreviation("par"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationshipLabel {
    /// `AQ` - allowed qualifier.
    AllowedQualifier,
    /// `CHD` - has child.
    Child,
    /// `DEL` - deleted concept.
    Deleted,
    /// `PAR` - has parent.
    Parent,
    /// `QB` - can be qualified by.
    QualifiedBy,
    /// `RB` - has a broader relationship.
    Broader,
    /// `RL` - similar or alike.
    Alike,
    /// `RN` - has a narrower relationship.
    Narrower,
    /// `RO` - other than synonymous, narrower, or broader.
    Other,
    /// `RQ` - related and possibly synonymous.
    PossiblySynonymous,
    /// `RU` - related, unspecified.
    Unspecified,
    /// `SIB` - has sibling.
    Sibling,
    /// `SY` - source asserted synonymy.
    Synonym,
    /// `XR` - not related.
    NotRelated,
}

impl RelationshipLabel {
    /// Creates a label from its MRREL abbreviation.
    ///
    /// Matching is exact; returns `None` for unrecognized labels.
    pub fn from_abbreviation(value: &str) -> Option<Self> {
        match value {
            well_known::REL_ALLOWED_QUALIFIER => Some(Self::AllowedQualifier),
            well_known::REL_CHILD => Some(Self::Child),
            well_known::REL_DELETED => Some(Self::Deleted),
            well_known::REL_PARENT => Some(Self::Parent),
            well_known::REL_QUALIFIED_BY => Some(Self::QualifiedBy),
            well_known::REL_BROADER => Some(Self::Broader),
            well_known::REL_ALIKE => Some(Self::Alike),
            well_known::REL_NARROWER => Some(Self::Narrower),
            well_known::REL_OTHER => Some(Self::Other),
            well_known::REL_POSSIBLY_SYNONYMOUS => Some(Self::PossiblySynonymous),
            well_known::REL_UNSPECIFIED => Some(Self::Unspecified),
            well_known::REL_SIBLING => Some(Self::Sibling),
            well_known::REL_SYNONYM => Some(Self::Synonym),
            well_known::REL_NOT_RELATED => Some(Self::NotRelated),
            _ => None,
        }
    }

    /// Returns the MRREL abbreviation for this label.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::AllowedQualifier => well_known::REL_ALLOWED_QUALIFIER,
            Self::Child => well_known::REL_CHILD,
            Self::Deleted => well_known::REL_DELETED,
            Self::Parent => well_known::REL_PARENT,
            Self::QualifiedBy => well_known::REL_QUALIFIED_BY,
            Self::Broader => well_known::REL_BROADER,
            Self::Alike => well_known::REL_ALIKE,
            Self::Narrower => well_known::REL_NARROWER,
            Self::Other => well_known::REL_OTHER,
            Self::PossiblySynonymous => well_known::REL_POSSIBLY_SYNONYMOUS,
            Self::Unspecified => well_known::REL_UNSPECIFIED,
            Self::Sibling => well_known::REL_SIBLING,
            Self::Synonym => well_known::REL_SYNONYM,
            Self::NotRelated => well_known::REL_NOT_RELATED,
        }
    }
}

/// How codes are propagated across concept relationships.
///
/// # Examples
///
/// ```
/// use umls_types::{PropagationMethod, RelationshipLabel};
///
/// let method: PropagationMethod = "PAR_CHD".parse().unwrap();
/// assert!(method.propagates());
/// assert!(method.selects(RelationshipLabel::Child));
/// assert!(!method.selects(RelationshipLabel::Other));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropagationMethod {
    /// `EXACT` - codes come from MRCONSO only; no propagation.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "EXACT"))]
    Exact,
    /// `RO` - merge codes across "related other" relationships.
    #[cfg_attr(feature = "serde", serde(rename = "RO"))]
    RelatedOther,
    /// `PAR_CHD` - merge codes across parent and child relationships.
    #[cfg_attr(feature = "serde", serde(rename = "PAR_CHD"))]
    ParentChild,
}

impl PropagationMethod {
    /// All methods, in canonical order.
    pub const ALL: [PropagationMethod; 3] = [Self::Exact, Self::RelatedOther, Self::ParentChild];

    /// Returns the canonical name, used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::RelatedOther => "RO",
            Self::ParentChild => "PAR_CHD",
        }
    }

    /// Returns the relationship labels that trigger a merge.
    ///
    /// Empty for [`PropagationMethod::Exact`].
    pub fn labels(self) -> &'static [RelationshipLabel] {
        match self {
            Self::Exact => &[],
            Self::RelatedOther => &[RelationshipLabel::Other],
            Self::ParentChild => &[RelationshipLabel::Parent, RelationshipLabel::Child],
        }
    }

    /// Returns true if this method reads relationships at all.
    pub fn propagates(self) -> bool {
        !self.labels().is_empty()
    }

    /// Returns true if a relationship with this label triggers a merge.
    pub fn selects(self, label: RelationshipLabel) -> bool {
        self.labels().contains(&label)
    }
}

impl fmt::Display for PropagationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a propagation method name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMethodError(pub String);

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid propagation method: '{}' (expected EXACT, RO or PAR_CHD)",
            self.0
        )
    }
}

impl std::error::Error for ParseMethodError {}

impl FromStr for PropagationMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

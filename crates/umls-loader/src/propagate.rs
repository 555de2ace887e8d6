//! Code propagation across MRREL.RRF relationships.
//!
//! For every relationship the propagation method selects, the codes of the
//! target concept are appended to those of the source concept. Rows are
//! applied in file order, so a merge sees the result of earlier merges.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};
use umls_types::{ConceptRelationship, PropagationMethod};

use crate::mapping::CodeMappings;
use crate::parser::RrfParser;
use crate::types::{GatePolicy, PropagateConfig, PropagateStats, UmlsResult};

/// Codes appended by a single relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Codes appended to the primary mapping.
    pub primary_added: usize,
    /// Codes appended to the secondary mapping.
    pub secondary_added: usize,
}

/// Applies one relationship to the mappings.
///
/// Returns `None` when the method does not select the relationship's label,
/// the relationship points back at its own concept, or the gate rejects it;
/// `Some` with the appended counts otherwise.
pub fn apply_relationship(
    mappings: &mut CodeMappings,
    relationship: &ConceptRelationship,
    method: PropagationMethod,
    gate: GatePolicy,
) -> Option<MergeOutcome> {
    let label = relationship.relationship_label()?;
    if !method.selects(label) || relationship.is_reflexive() {
        return None;
    }

    let source = relationship.source_cui.as_str();
    let target = relationship.target_cui.as_str();

    match gate {
        GatePolicy::CrossMapping => {
            if !(mappings.primary.contains_cui(source) && mappings.secondary.contains_cui(target)) {
                return None;
            }
            Some(MergeOutcome {
                primary_added: mappings.primary.merge_from(source, target),
                secondary_added: mappings.secondary.merge_from(source, target),
            })
        }
        GatePolicy::PerMapping => {
            let primary_open =
                mappings.primary.contains_cui(source) && mappings.primary.contains_cui(target);
            let secondary_open =
                mappings.secondary.contains_cui(source) && mappings.secondary.contains_cui(target);
            if !(primary_open || secondary_open) {
                return None;
            }
            Some(MergeOutcome {
                primary_added: mappings.primary.merge_from(source, target),
                secondary_added: mappings.secondary.merge_from(source, target),
            })
        }
    }
}

/// Propagates codes across a stream of relationship rows.
///
/// With [`PropagationMethod::Exact`] the parser is dropped unread and the
/// mappings are untouched. The first malformed row aborts propagation.
pub fn propagate_codes<R: Read>(
    parser: RrfParser<R, ConceptRelationship>,
    method: PropagationMethod,
    gate: GatePolicy,
    mappings: &mut CodeMappings,
) -> UmlsResult<PropagateStats> {
    let mut stats = PropagateStats::default();
    if !method.propagates() {
        return Ok(stats);
    }

    for record in parser {
        let relationship = record?;
        stats.total_records += 1;

        if relationship
            .relationship_label()
            .is_some_and(|label| method.selects(label))
        {
            stats.matched_records += 1;
        }

        if let Some(outcome) = apply_relationship(mappings, &relationship, method, gate) {
            stats.merged_records += 1;
            stats.primary_codes_added += outcome.primary_added;
            stats.secondary_codes_added += outcome.secondary_added;
        }
    }

    Ok(stats)
}

/// Propagates codes across relationships read from an MRREL.RRF file.
///
/// The file is not opened when the method does not propagate.
pub fn propagate_codes_from_path<P: AsRef<Path>>(
    path: P,
    method: PropagationMethod,
    config: &PropagateConfig,
    mappings: &mut CodeMappings,
) -> UmlsResult<PropagateStats> {
    if !method.propagates() {
        return Ok(PropagateStats::default());
    }

    let parser = RrfParser::<_, ConceptRelationship>::from_path(path, config.columns)?;
    let source_name = parser.source_name().to_string();
    let labels: Vec<&str> = method.labels().iter().map(|label| label.abbreviation()).collect();
    debug!(
        "Propagating {} across {} relationships from {}",
        method,
        labels.join("/"),
        source_name
    );

    let stats = propagate_codes(parser, method, config.gate, mappings)?;

    info!(
        "Read {} rows from {}: {} labelled {}, {} merged ({:.1}%), {} + {} codes added",
        stats.total_records,
        source_name,
        stats.matched_records,
        labels.join("/"),
        stats.merged_records,
        stats.gate_rate(),
        stats.primary_codes_added,
        stats.secondary_codes_added
    );

    Ok(stats)
}

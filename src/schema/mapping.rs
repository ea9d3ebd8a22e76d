use tracing::trace;

use crate::config::canonical_name;

/// Result of mapping a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumns {
    /// Canonical or pass-through names, one per input label.
    pub names: Vec<String>,
    /// Labels the lookup table does not know, in input order.
    pub unknown: Vec<String>,
}

/// `(canonical name, true)` for known labels, `(label, false)` otherwise.
pub fn lookup(label: &str) -> (String, bool) {
    match canonical_name(label) {
        Some(canonical) => (canonical.to_string(), true),
        None => (label.to_string(), false),
    }
}

/// Map every header label through the canonical lookup. Never fails.
pub fn map_columns(labels: &[String]) -> MappedColumns {
    let mut names = Vec::with_capacity(labels.len());
    let mut unknown = Vec::new();
    for label in labels {
        let (name, found) = lookup(label);
        trace!(label = %label, name = %name, found, "mapped header");
        if !found {
            unknown.push(label.clone());
        }
        names.push(name);
    }
    MappedColumns { names, unknown }
}

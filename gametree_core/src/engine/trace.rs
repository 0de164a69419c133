//! Ordered record of how the alpha/beta window evolved during a search.
//!
//! One `Visit` is appended per child after its value is folded into the
//! parent, and one `Pruned` right after the `Visit` that closed the window.
//! Records arrive in visit order across the whole traversal.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRecord {
    Visit {
        label: String,
        /// Value the child returned.
        #[serde(serialize_with = "serialize_bound")]
        value: f64,
        /// Parent's running best after this child.
        #[serde(serialize_with = "serialize_bound")]
        best: f64,
        #[serde(serialize_with = "serialize_bound")]
        alpha: f64,
        #[serde(serialize_with = "serialize_bound")]
        beta: f64,
    },
    Pruned {
        label: String,
    },
}

// JSON has no infinities; write them the way the trace lines do.
fn serialize_bound<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

impl TraceRecord {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Visit { label, .. } | Self::Pruned { label } => label,
        }
    }

    #[must_use]
    pub const fn is_visit(&self) -> bool {
        matches!(self, Self::Visit { .. })
    }

    /// Child value and running best, e.g. `Node: B - 1, Best: 1`.
    /// Cutoffs render the same as in the window trace.
    #[must_use]
    pub fn value_line(&self) -> String {
        match self {
            Self::Visit {
                label, value, best, ..
            } => format!("Node: {label} - {value}, Best: {best}"),
            Self::Pruned { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visit {
                label, alpha, beta, ..
            } => write!(f, "Node: {label}, Alpha: {alpha}, Beta: {beta}"),
            Self::Pruned { label } => write!(f, "Pruned at node {label}"),
        }
    }
}

/// Receives records as the search produces them.
pub trait TraceSink {
    fn record(&mut self, record: TraceRecord);
}

impl TraceSink for Vec<TraceRecord> {
    fn record(&mut self, record: TraceRecord) {
        self.push(record);
    }
}

/// Append-only log owned by a single search.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TraceLog {
    records: Vec<TraceRecord>,
    #[serde(skip)]
    mirror_to_log: bool,
}

impl TraceLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that also forwards every record to the `log` facade.
    #[must_use]
    pub fn mirrored() -> Self {
        Self {
            records: Vec::new(),
            mirror_to_log: true,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<TraceRecord> {
        self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn visit_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_visit()).count()
    }

    #[must_use]
    pub fn prune_count(&self) -> usize {
        self.len() - self.visit_count()
    }

    /// Labels where a cutoff fired, in order.
    #[must_use]
    pub fn pruned_labels(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.is_visit())
            .map(TraceRecord::label)
            .collect()
    }

    /// The wire form: one `Node: ..` or `Pruned at node ..` line per record.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn value_lines(&self) -> Vec<String> {
        self.records.iter().map(TraceRecord::value_line).collect()
    }
}

impl TraceSink for TraceLog {
    fn record(&mut self, record: TraceRecord) {
        if self.mirror_to_log {
            log::debug!("{record}");
        }
        self.records.push(record);
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = &'a TraceRecord;
    type IntoIter = std::slice::Iter<'a, TraceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

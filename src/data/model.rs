use std::collections::{BTreeMap, BTreeSet};

/// Spacer sequences of one result file, in document order, duplicates kept.
pub type SpacerList = Vec<String>;

/// Spacer → number of occurrences.
pub type SpacerCounts = BTreeMap<String, u64>;

// ---------------------------------------------------------------------------
// DatasetCounts – one found timepoint
// ---------------------------------------------------------------------------

/// Spacer occurrences within a single timepoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCounts {
    /// Internal dataset key, e.g. `S925-T3`.
    pub key: String,
    /// Column header in the merged table, e.g. `925T3`.
    pub label: String,
    pub counts: SpacerCounts,
}

impl DatasetCounts {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            counts: SpacerCounts::new(),
        }
    }

    /// Occurrences of `spacer`, 0 when it was never seen here.
    pub fn count(&self, spacer: &str) -> u64 {
        self.counts.get(spacer).copied().unwrap_or(0)
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

// ---------------------------------------------------------------------------
// SpacerTally – every found timepoint plus global totals
// ---------------------------------------------------------------------------

/// Per-dataset and global spacer counts for one merge run.
///
/// Datasets keep the order in which they were found; that order becomes the
/// column order of the output table.
#[derive(Debug, Clone, Default)]
pub struct SpacerTally {
    pub datasets: Vec<DatasetCounts>,
    /// Occurrences summed over all datasets.
    pub totals: SpacerCounts,
}

impl SpacerTally {
    /// Whether no dataset was found at all.
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Number of spacer occurrences across every dataset.
    pub fn total_spacers(&self) -> u64 {
        self.totals.values().sum()
    }

    /// Union of spacers seen in any dataset, sorted.
    pub fn distinct_spacers(&self) -> BTreeSet<&str> {
        self.datasets
            .iter()
            .flat_map(|ds| ds.counts.keys().map(String::as_str))
            .collect()
    }

    /// Column labels in found order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(|ds| ds.label.as_str())
    }
}

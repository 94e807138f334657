use super::model::{DatasetCounts, SpacerTally};

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

/// Fold one found dataset into the tally.
///
/// The dataset gets a column even when `spacers` is empty. Returns the counts
/// just recorded so the caller can report on them.
pub fn fold_dataset<'t>(
    tally: &'t mut SpacerTally,
    key: &str,
    label: &str,
    spacers: &[String],
) -> &'t DatasetCounts {
    let mut dataset = DatasetCounts::new(key, label);
    for spacer in spacers {
        *dataset.counts.entry(spacer.clone()).or_default() += 1;
        *tally.totals.entry(spacer.clone()).or_default() += 1;
    }
    tally.datasets.push(dataset);
    &tally.datasets[tally.datasets.len() - 1]
}

/// One output row per distinct spacer: the spacer and its count in every
/// dataset column, in column order. Rows are sorted by spacer.
pub fn spacer_rows(tally: &SpacerTally) -> Vec<(String, Vec<u64>)> {
    tally
        .distinct_spacers()
        .into_iter()
        .map(|spacer| {
            let counts = tally.datasets.iter().map(|ds| ds.count(spacer)).collect();
            (spacer.to_string(), counts)
        })
        .collect()
}

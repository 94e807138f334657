use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::MergeConfig;
use crate::data::extract::extract_spacers;
use crate::data::loader::load_document;
use crate::data::model::SpacerTally;
use crate::data::tally::fold_dataset;
use crate::data::writer::{tsv_writer, write_table};

// ---------------------------------------------------------------------------
// Merge run
// ---------------------------------------------------------------------------

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Keys of the datasets that were found, in processing order.
    pub found: Vec<String>,
    /// Number of data rows in the table.
    pub distinct_spacers: usize,
    /// Spacer occurrences across all datasets.
    pub total_spacers: u64,
    pub output: PathBuf,
}

/// Count spacers over every dataset of `config` and write the merged table.
///
/// The output file is created before any input is read, so it exists (empty)
/// even when no dataset is found. Missing and undecodable inputs are logged
/// and skipped; a document without the expected keys aborts the run.
pub fn run(config: &MergeConfig) -> Result<MergeSummary> {
    let file = File::create(&config.output)
        .with_context(|| format!("creating {}", config.output.display()))?;
    let mut writer = tsv_writer(file);

    let tally = collect(config)?;
    let rows = write_table(&mut writer, &tally)
        .with_context(|| format!("writing {}", config.output.display()))?;

    Ok(MergeSummary {
        found: tally.datasets.iter().map(|ds| ds.key.clone()).collect(),
        distinct_spacers: rows,
        total_spacers: tally.total_spacers(),
        output: config.output.clone(),
    })
}

/// Load, extract and count every dataset of the configured range.
pub fn collect(config: &MergeConfig) -> Result<SpacerTally> {
    let mut tally = SpacerTally::default();

    for id in config.datasets() {
        let Some(doc) = load_document(&id.path)? else {
            continue;
        };
        let spacers = extract_spacers(&doc)
            .with_context(|| format!("unexpected layout in {}", id.path.display()))?;

        let counts = fold_dataset(&mut tally, &id.key, &id.label, &spacers);
        log::info!(
            "{}: {} spacers ({} distinct)",
            counts.key,
            counts.total(),
            counts.counts.len()
        );
    }

    log::debug!("{} of {} datasets found", tally.datasets.len(), config.datasets().len());
    Ok(tally)
}

use std::io::Write;

use anyhow::{Context, Result};

use super::model::SpacerTally;
use super::tally::spacer_rows;

/// First header cell of the merged table.
pub const SPACER_COLUMN: &str = "Spacer";

/// Tab-separated writer. Fields are never quoted or escaped.
pub fn tsv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .flexible(false)
        .from_writer(inner)
}

/// Write the merged table: a header with one column per found dataset, then
/// one row per distinct spacer.
///
/// Nothing at all is written when no dataset was found, and no data rows when
/// no spacer was seen.
pub fn write_table<W: Write>(writer: &mut csv::Writer<W>, tally: &SpacerTally) -> Result<usize> {
    if tally.is_empty() {
        return Ok(0);
    }

    let header: Vec<&str> = std::iter::once(SPACER_COLUMN).chain(tally.labels()).collect();
    writer.write_record(&header).context("writing header row")?;

    let rows = spacer_rows(tally);
    for (spacer, counts) in &rows {
        let record = std::iter::once(spacer.clone()).chain(counts.iter().map(u64::to_string));
        writer
            .write_record(record)
            .with_context(|| format!("writing row for spacer {spacer}"))?;
    }
    writer.flush().context("flushing merged table")?;

    Ok(rows.len())
}

/// Data layer: loading, spacer extraction, counting and the TSV table.
///
/// Architecture:
/// ```text
///  S925-T<n>/result.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + parse → serde_json::Value (or skip)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  extract  │  Sequences/Crisprs/Regions → Vec<spacer>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  tally    │  fold into SpacerTally (per dataset + totals)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  merged_spacers.tsv
///   └──────────┘
/// ```

pub mod extract;
pub mod loader;
pub mod model;
pub mod tally;
pub mod writer;

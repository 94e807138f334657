use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Naming scheme and locations for one merge run.
///
/// The defaults are the fixed layout of a CRISPRCasFinder batch for subject
/// `S925`: `S925-T1/result.json` .. `S925-T12/result.json` in the working
/// directory, merged into `merged_spacers.tsv`. Edit [`Default`] to point the
/// tool at another subject.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Dataset key prefix (subject ID).
    pub subject: String,
    /// First timepoint index, inclusive.
    pub first: u32,
    /// Last timepoint index, inclusive.
    pub last: u32,
    /// Input path relative to `root`; `{dataset}` expands to the dataset key.
    pub path_template: String,
    /// Directory the input paths are resolved against.
    pub root: PathBuf,
    /// Where the merged table is written.
    pub output: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            subject: "S925".to_string(),
            first: 1,
            last: 12,
            path_template: "{dataset}/result.json".to_string(),
            root: PathBuf::from("."),
            output: PathBuf::from("merged_spacers.tsv"),
        }
    }
}

/// One timepoint of the configured range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetId {
    /// Internal key, e.g. `S925-T3`.
    pub key: String,
    /// Header label, e.g. `925T3`.
    pub label: String,
    /// Location of the `result.json` for this timepoint.
    pub path: PathBuf,
}

impl MergeConfig {
    /// Dataset key for timepoint `n`.
    pub fn dataset_key(&self, n: u32) -> String {
        format!("{}-T{n}", self.subject)
    }

    /// Output column label for timepoint `n`: the subject's digits, then `T<n>`.
    pub fn column_label(&self, n: u32) -> String {
        let digits: String = self.subject.chars().filter(|c| c.is_ascii_digit()).collect();
        format!("{digits}T{n}")
    }

    /// Input file for timepoint `n`.
    pub fn input_path(&self, n: u32) -> PathBuf {
        let relative = self.path_template.replace("{dataset}", &self.dataset_key(n));
        self.root.join(relative)
    }

    /// All timepoints of the range, in processing order.
    pub fn datasets(&self) -> Vec<DatasetId> {
        (self.first..=self.last)
            .map(|n| DatasetId {
                key: self.dataset_key(n),
                label: self.column_label(n),
                path: self.input_path(n),
            })
            .collect()
    }
}

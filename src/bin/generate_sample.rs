use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Repeat shared by every array of the synthetic subject.
const DIRECT_REPEAT: &str = "GTTTTAGAGCTATGCTGTTTTGAATGGTCCCAAAAC";

/// Timepoints that get no `result.json`, so the merge has something to skip.
const MISSING_TIMEPOINTS: [u32; 2] = [2, 7];

// -- CRISPRCasFinder-shaped output, only the fields the merge reads plus a few neighbours --

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResultFile {
    date: String,
    version: String,
    sequences: Vec<Sequence>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Sequence {
    id: String,
    length: usize,
    crisprs: Vec<Crispr>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Crispr {
    name: String,
    start: usize,
    end: usize,
    spacers: usize,
    regions: Vec<Region>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Region {
    #[serde(rename = "Type")]
    kind: String,
    start: usize,
    end: usize,
    sequence: String,
}

/// Small deterministic PRNG (xorshift64*), so reruns write identical files.
struct SimpleRng(u64);

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn sequence(&mut self, len: usize) -> String {
        (0..len).map(|_| b"ACGT"[self.below(4)] as char).collect()
    }
}

fn build_array(name: String, start: usize, spacers: &[&String]) -> Crispr {
    let mut regions = Vec::new();
    let mut pos = start;
    for spacer in spacers {
        regions.push(Region {
            kind: "DR".to_string(),
            start: pos,
            end: pos + DIRECT_REPEAT.len() - 1,
            sequence: DIRECT_REPEAT.to_string(),
        });
        pos += DIRECT_REPEAT.len();
        regions.push(Region {
            kind: "Spacer".to_string(),
            start: pos,
            end: pos + spacer.len() - 1,
            sequence: (*spacer).clone(),
        });
        pos += spacer.len();
    }
    regions.push(Region {
        kind: "DR".to_string(),
        start: pos,
        end: pos + DIRECT_REPEAT.len() - 1,
        sequence: DIRECT_REPEAT.to_string(),
    });
    pos += DIRECT_REPEAT.len();

    Crispr {
        name,
        start,
        end: pos - 1,
        spacers: spacers.len(),
        regions,
    }
}

fn write_result(root: &Path, key: &str, result: &ResultFile) -> Result<()> {
    let dir = root.join(key);
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("result.json");
    let body = serde_json::to_string_pretty(result).context("serializing result")?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let root = Path::new(".");

    // Spacers acquired over the time course; later timepoints sample deeper into the pool.
    let pool: Vec<String> = (0..40)
        .map(|_| {
            let len = 30 + rng.below(8);
            rng.sequence(len)
        })
        .collect();

    let mut files = 0;
    let mut spacer_total = 0;
    for t in 1..=12u32 {
        if MISSING_TIMEPOINTS.contains(&t) {
            continue;
        }
        let key = format!("S925-T{t}");
        let reachable = (10 + 2 * t as usize).min(pool.len());

        let mut sequences = Vec::new();
        for contig in 1..=2 {
            let id = format!("{key}_contig_{contig}");
            let mut crisprs = Vec::new();
            for array in 1..=1 + rng.below(2) {
                let n = 3 + rng.below(6);
                let spacers: Vec<&String> = (0..n).map(|_| &pool[rng.below(reachable)]).collect();
                spacer_total += spacers.len();
                let start = 1_000 * array + rng.below(500);
                crisprs.push(build_array(format!("{id}_{array}"), start, &spacers));
            }
            sequences.push(Sequence {
                id,
                length: 50_000 + rng.below(10_000),
                crisprs,
            });
        }

        let result = ResultFile {
            date: format!("2023-{:02}-01", t),
            version: "4.3.2".to_string(),
            sequences,
        };
        write_result(root, &key, &result)?;
        files += 1;
    }

    println!("Wrote {files} result.json files with {spacer_total} spacers under {}", root.display());
    Ok(())
}

mod config;
mod data;
mod error;
mod pipeline;

use anyhow::Result;

use config::MergeConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MergeConfig::default();
    let summary = pipeline::run(&config)?;

    log::info!(
        "{} datasets merged, {} distinct spacers",
        summary.found.len(),
        summary.distinct_spacers
    );
    println!("Total number of spacers: {}", summary.total_spacers);
    println!(
        "Spacers extracted, counted, and merged successfully. The result is saved in {}.",
        summary.output.display()
    );
    Ok(())
}

//! Journal listing command.

use anyhow::{Context, Result};
use kumo_config::load_or_default;
use kumo_journal::TradeJournal;
use std::path::Path;

use crate::cli::JournalArgs;

pub async fn run(args: JournalArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path).context("Failed to load configuration")?;
    let journal = TradeJournal::new(config.journal.path.clone());

    let entries = journal.read_all()?;
    if entries.is_empty() {
        println!("No journal entries at {}", journal.path().display());
        return Ok(());
    }

    let start = entries.len().saturating_sub(args.limit);
    println!(
        "Last {} of {} entries in {}",
        entries.len() - start,
        entries.len(),
        journal.path().display()
    );
    for entry in &entries[start..] {
        println!(
            "{}  {:<8} {:<8} {:.2}",
            entry.timestamp.to_rfc3339(),
            entry.symbol,
            entry.action.to_string(),
            entry.price
        );
    }

    Ok(())
}

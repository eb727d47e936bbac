//! Chart command implementation.

use anyhow::{Context, Result};
use kumo_config::load_or_default;
use kumo_core::SeriesIndicator;
use kumo_data::load_csv;
use kumo_indicators::Ichimoku;
use kumo_journal::TradeJournal;
use kumo_monitor::{Dashboard, DashboardState};
use kumo_strategies::{evaluate, OpeningBias};
use std::path::Path;
use tracing::info;

use crate::cli::ChartArgs;

pub async fn run(args: ChartArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path).context("Failed to load configuration")?;

    let data_path = args
        .data
        .to_str()
        .context("Data path is not valid UTF-8")?;
    let fallback = args.symbol.clone().unwrap_or_else(|| "DATA".to_string());
    let series = load_csv(data_path, &fallback).await?;
    let symbol = series.symbol().unwrap_or(&fallback).to_string();
    info!("Loaded {} records for {}", series.len(), symbol);

    let target_price = args
        .target_price
        .or_else(|| series.last().map(|q| q.close))
        .unwrap_or_default();

    let mut state = DashboardState::new(symbol);
    state.quote = series.last().cloned();
    state.set_series(&series);

    match Ichimoku::new().compute(&series) {
        Ok(cloud) => state.set_cloud(&cloud),
        Err(e) => state.push_message(format!("Indicator: {}", e)),
    }

    let journal = TradeJournal::new(config.journal.path.clone());
    match evaluate(&OpeningBias::new(), &series, target_price, &journal) {
        Ok(decision) => {
            state.push_message(format!(
                "{} {} @ {} journaled to {}",
                decision.action,
                decision.symbol,
                decision.price,
                journal.path().display()
            ));
            state.decision = Some(decision);
        }
        Err(e) => state.push_message(format!("Strategy: {}", e)),
    }

    Dashboard::new(250).run(&state)?;

    Ok(())
}

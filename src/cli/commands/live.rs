//! Live quote command implementation.

use anyhow::{Context, Result};
use kumo_config::load_or_default;
use kumo_core::{QuoteGateway, QuoteSeries, SeriesIndicator};
use kumo_gateway::{EtradeConfig, EtradeSession};
use kumo_indicators::Ichimoku;
use kumo_journal::TradeJournal;
use kumo_monitor::{Dashboard, DashboardState};
use kumo_strategies::{evaluate, OpeningBias};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::cli::LiveArgs;

pub async fn run(args: LiveArgs, config_path: &Path) -> Result<()> {
    let config = load_or_default(config_path).context("Failed to load configuration")?;

    let credentials = EtradeConfig::from_named_env(
        &config.etrade.consumer_key_env,
        &config.etrade.consumer_secret_env,
        config.etrade.sandbox,
    )
    .context("Missing consumer credentials")?;

    let symbol = match args.symbol {
        Some(symbol) => symbol,
        None => prompt("Symbol: ")?,
    };
    let target_price = match args.target_price {
        Some(price) => price,
        None => prompt("Target price: ")?
            .parse()
            .context("Target price is not a number")?,
    };

    // Out-of-band authorization: the user opens the URL, approves
    // access and pastes the verification code back here.
    let mut session = EtradeSession::new(credentials)?;
    session.request_token().await?;
    println!("Open this URL in a browser and approve access:");
    println!("  {}", session.authorize_url()?);
    let verifier = prompt("Verification code: ")?;
    session.exchange_verifier(&verifier).await?;
    info!("Authorized session, fetching {}", symbol);

    let quote = session.latest_quote(&symbol).await?;
    let series = QuoteSeries::from_quotes(vec![quote.clone()]);

    let mut state = DashboardState::new(symbol);
    state.quote = Some(quote);
    state.set_series(&series);

    // Indicator and strategy failures surface as dashboard messages
    // instead of aborting the run.
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

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

//! Command execution and rendering

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use swap_core::{AppConfig, TokenQuote};
use swap_engine::{format_with_default, Catalog, RateEngine, SwapForm};
use swap_price_feed::{CatalogRefresher, HttpPriceFeed};

use crate::args::{Cli, Command};

/// Load configuration with CLI overrides applied
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;

    if let Some(url) = &cli.feed_url {
        config.feed.url = url.clone();
        config.validate().context("applying --feed-url")?;
    }
    Ok(config)
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let feed = HttpPriceFeed::new(&config.feed).context("building HTTP client")?;
    let refresher = Arc::new(CatalogRefresher::new(
        Arc::new(feed),
        RateEngine::new(&config.engine),
    ));

    match cli.command {
        Command::Catalog { limit, json } => {
            let catalog = refresher.refresh_once().await.context("fetching prices")?;
            if json {
                println!("{}", serde_json::to_string_pretty(catalog.as_ref())?);
            } else {
                print!("{}", render_catalog(&catalog, limit));
            }
        }
        Command::Quote { from, to, amount, reverse } => {
            let catalog = refresher.refresh_once().await.context("fetching prices")?;
            let mut form = SwapForm::new(&catalog, &config.engine);
            form.select_from(&catalog, &from)?;
            form.select_to(&catalog, &to)?;
            if reverse {
                form.set_to_amount(&amount)?;
            } else {
                form.set_from_amount(&amount)?;
            }
            print!("{}", render_quote(&form));
        }
        Command::Search { query, exclude } => {
            let catalog = refresher.refresh_once().await.context("fetching prices")?;
            let hits = catalog.search(&query, exclude.as_deref());
            print!("{}", render_tokens(&hits));
        }
        Command::Watch { interval_secs } => {
            let every = interval_secs
                .map(std::time::Duration::from_secs)
                .unwrap_or_else(|| config.refresh.interval());
            let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

            let task = {
                let refresher = Arc::clone(&refresher);
                tokio::spawn(async move { refresher.run(every, shutdown_rx).await })
            };

            signal::ctrl_c().await.context("installing Ctrl+C handler")?;
            info!("Received Ctrl+C");
            let _ = shutdown_tx.send(());
            task.await?;

            let stats = refresher.state().stats();
            info!("{} builds, {} tokens in last catalog", stats.build_count, stats.token_count);
        }
    }

    Ok(())
}

fn token_line(out: &mut String, token: &TokenQuote) {
    let _ = writeln!(
        out,
        "{:<10} {:<24} {:>18}",
        token.symbol,
        token.display_name,
        format_with_default(token.price)
    );
}

pub fn render_catalog(catalog: &Catalog, limit: Option<usize>) -> String {
    let tokens: Vec<&TokenQuote> = catalog.iter().take(limit.unwrap_or(usize::MAX)).collect();
    render_tokens(&tokens)
}

pub fn render_tokens(tokens: &[&TokenQuote]) -> String {
    if tokens.is_empty() {
        return "No tokens found\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:<24} {:>18}", "SYMBOL", "NAME", "PRICE (USD)");
    for token in tokens {
        token_line(&mut out, token);
    }
    out
}

pub fn render_quote(form: &SwapForm) -> String {
    let mut out = String::new();
    let symbol = |t: Option<&TokenQuote>| t.map(|t| t.symbol.clone()).unwrap_or_default();

    let usd = |v: Option<String>| v.map(|v| format!(" (≈ {})", v)).unwrap_or_default();

    let _ = writeln!(
        out,
        "From: {} {}{}",
        display_amount(form.from_amount()),
        symbol(form.from_token()),
        usd(form.from_usd_value())
    );
    let _ = writeln!(
        out,
        "To:   {} {}{}",
        display_amount(form.to_amount()),
        symbol(form.to_token()),
        usd(form.to_usd_value())
    );
    if let Some(rate) = form.rate_line() {
        let _ = writeln!(out, "Rate: {}", rate);
    }
    out
}

fn display_amount(field: &str) -> &str {
    if field.is_empty() {
        "0"
    } else {
        field
    }
}

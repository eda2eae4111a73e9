//! Series -> event -> markets -> analysis bars.
//!
//! Usage: `cargo run --example series_candles -- [SERIES_TICKER]`
//! (defaults to `KXHIGHNY`). Reads `KALSHI_*` settings from `.env` if present.

use kalshi_market_data::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), SdkError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let series_ticker = SeriesTicker::new(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "KXHIGHNY".to_string()),
    );

    let config = KalshiConfig::from_env()?;
    let client = KalshiClient::from_config(&config)?;

    let series = client.series().get(&series_ticker).await?;
    info!(
        "{} [{}] - {} ({})",
        series.title, series.ticker, series.category, series.frequency
    );

    let events = client
        .events()
        .list(
            &EventsParams::new()
                .with_series(series_ticker.clone())
                .with_status("open")
                .with_limit(1),
        )
        .await?;
    let Some(event) = events.events.first() else {
        info!("No open events for {}", series_ticker);
        return Ok(());
    };
    info!("Event {}: {}", event.event_ticker, event.title);

    let markets = client
        .markets()
        .list(&MarketsParams::new().with_event(event.event_ticker.as_str()))
        .await?
        .markets;
    if markets.is_empty() {
        info!("Event {} has no markets", event.event_ticker);
        return Ok(());
    }

    let start_ts = earliest_open_ts(&markets)?;
    let end_ts = latest_close_ts(&markets)?;

    for market in &markets {
        let bars = client
            .candlesticks()
            .analysis_between(
                &series_ticker,
                &MarketTicker::new(market.ticker.as_str()),
                start_ts,
                end_ts,
            )
            .await?;

        let mid = column(&bars, AnalysisColumn::Midprice);
        let signals = crossover(&mid, &constant(0.5, mid.len()))
            .into_iter()
            .filter(|s| *s)
            .count();

        println!(
            "\n{} - {} ({} bars, {} midprice crosses above 0.50)",
            market.ticker,
            market.yes_sub_title,
            bars.len(),
            signals
        );
        println!(
            "{:<17} {:>6} {:>6} {:>6} {:>6} {:>8} {:>6} {:>7}",
            "start", "open", "close", "bid", "ask", "volume", "spread", "mid"
        );
        for bar in bars.iter().rev().take(5).rev() {
            let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.2}", v));
            println!(
                "{:<17} {:>6} {:>6} {:>6.2} {:>6.2} {:>8.2} {:>6.2} {:>7.3}",
                unix_to_datestr(bar.start_ts).unwrap_or_default(),
                fmt(bar.open),
                fmt(bar.close),
                bar.bid,
                bar.ask,
                bar.volume,
                bar.spread,
                bar.midprice
            );
        }
    }

    Ok(())
}

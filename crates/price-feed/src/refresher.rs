//! Catalog refresher - fetches the feed and rebuilds the session catalog

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{info, warn};

use swap_core::FeedResult;
use swap_engine::{Catalog, RateEngine};

use crate::feeds::PriceFeed;
use crate::state::CatalogState;

pub struct CatalogRefresher {
    feed: Arc<dyn PriceFeed>,
    engine: RateEngine,
    state: Arc<CatalogState>,
}

impl CatalogRefresher {
    pub fn new(feed: Arc<dyn PriceFeed>, engine: RateEngine) -> Self {
        Self {
            feed,
            engine,
            state: Arc::new(CatalogState::new()),
        }
    }

    /// Get shared state reference
    pub fn state(&self) -> Arc<CatalogState> {
        Arc::clone(&self.state)
    }

    /// Fetch, rebuild and publish one catalog
    ///
    /// On failure the previously published catalog stays in place.
    pub async fn refresh_once(&self) -> FeedResult<Arc<Catalog>> {
        let points = self.feed.fetch().await?;
        let catalog = self.engine.build_catalog(&points);
        info!(
            "Rebuilt catalog from {}: {} tokens",
            self.feed.source(),
            catalog.len()
        );

        self.state.replace(catalog);
        Ok(self.state.snapshot())
    }

    /// Refresh on a fixed interval until `shutdown` fires
    pub async fn run(&self, every: Duration, mut shutdown: oneshot::Receiver<()>) {
        info!("Starting catalog refresher ({:?} interval)", every);
        let mut interval = tokio::time::interval(every);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.refresh_once().await {
                        let stats = self.state.stats();
                        warn!(
                            "Catalog refresh failed: {} (keeping {} tokens from build #{})",
                            e, stats.token_count, stats.build_count
                        );
                    }
                }
                _ = &mut shutdown => {
                    info!("Stopping catalog refresher");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use swap_core::{FeedError, PricePoint};

    /// Replays scripted responses, then keeps failing
    struct ScriptedFeed {
        responses: Mutex<Vec<FeedResult<Vec<PricePoint>>>>,
    }

    impl ScriptedFeed {
        fn new(mut responses: Vec<FeedResult<Vec<PricePoint>>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait::async_trait]
    impl PriceFeed for ScriptedFeed {
        async fn fetch(&self) -> FeedResult<Vec<PricePoint>> {
            self.responses.lock().pop().unwrap_or(Err(FeedError::Timeout))
        }

        fn source(&self) -> &str {
            "scripted"
        }
    }

    fn points(symbols: &[(&str, f64)]) -> Vec<PricePoint> {
        let at = Utc.with_ymd_and_hms(2023, 8, 29, 7, 0, 0).unwrap();
        symbols.iter().map(|(s, p)| PricePoint::new(s, at, *p)).collect()
    }

    #[tokio::test]
    async fn test_refresh_publishes_catalog() {
        let feed = ScriptedFeed::new(vec![Ok(points(&[("ETH", 1645.9), ("USDC", 1.0)]))]);
        let refresher = CatalogRefresher::new(Arc::new(feed), RateEngine::default());

        let catalog = refresher.refresh_once().await.unwrap();
        assert_eq!(catalog.symbols(), vec!["ETH", "USDC"]);
        assert_eq!(refresher.state().stats().build_count, 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_catalog() {
        let feed = ScriptedFeed::new(vec![
            Ok(points(&[("ATOM", 7.2)])),
            Err(FeedError::Status { status: 503, url: "scripted".into() }),
        ]);
        let refresher = CatalogRefresher::new(Arc::new(feed), RateEngine::default());

        refresher.refresh_once().await.unwrap();
        let err = refresher.refresh_once().await.unwrap_err();

        assert!(matches!(err, FeedError::Status { status: 503, .. }));
        assert_eq!(refresher.state().snapshot().symbols(), vec!["ATOM"]);
        assert_eq!(refresher.state().stats().build_count, 1);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let feed = ScriptedFeed::new(vec![Ok(points(&[("OSMO", 0.37)]))]);
        let refresher = Arc::new(CatalogRefresher::new(Arc::new(feed), RateEngine::default()));
        let (tx, rx) = oneshot::channel();

        let task = {
            let refresher = Arc::clone(&refresher);
            tokio::spawn(async move { refresher.run(Duration::from_millis(10), rx).await })
        };

        tokio::time::sleep(Duration::from_millis(50)).await;
        tx.send(()).unwrap();
        task.await.unwrap();

        assert_eq!(refresher.state().snapshot().symbols(), vec!["OSMO"]);
    }
}

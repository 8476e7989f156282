//! Price feed implementations

use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use swap_core::{FeedConfig, FeedError, FeedResult, PricePoint};

/// Source of raw price points
#[async_trait::async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch(&self) -> FeedResult<Vec<PricePoint>>;
    fn source(&self) -> &str;
}

/// Counters from decoding one feed document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub records: usize,
    pub skipped: usize,
    pub untimed: usize,
}

/// Parse an upstream timestamp
///
/// RFC 3339 first; naive ISO-8601 date-times are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Decode a feed document: an array of `{ currency, date, price }` records
///
/// Records without a currency or a numeric price are skipped. A record
/// whose date is missing or unreadable is kept with `observed_at = None`,
/// which the engine never selects.
pub fn decode_records(doc: &Value) -> FeedResult<(Vec<PricePoint>, DecodeStats)> {
    let records = doc
        .as_array()
        .ok_or_else(|| FeedError::Decode("expected a JSON array of price records".into()))?;

    let mut stats = DecodeStats {
        records: records.len(),
        ..Default::default()
    };
    let mut points = Vec::with_capacity(records.len());

    for record in records {
        let currency = record.get("currency").and_then(Value::as_str).filter(|s| !s.is_empty());
        let price = record.get("price").and_then(Value::as_f64);

        let (currency, price) = match (currency, price) {
            (Some(c), Some(p)) => (c, p),
            _ => {
                debug!("Skipping malformed price record: {}", record);
                stats.skipped += 1;
                continue;
            }
        };

        let observed_at = record.get("date").and_then(Value::as_str).and_then(parse_timestamp);
        if observed_at.is_none() {
            stats.untimed += 1;
        }

        points.push(PricePoint {
            symbol: currency.to_string(),
            observed_at,
            price,
        });
    }

    Ok((points, stats))
}

/// Fetches the price document over HTTP
pub struct HttpPriceFeed {
    client: Client,
    url: String,
}

impl HttpPriceFeed {
    pub fn new(config: &FeedConfig) -> FeedResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FeedError::Http(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> FeedError {
    if e.is_timeout() {
        FeedError::Timeout
    } else {
        FeedError::Http(e.to_string())
    }
}

#[async_trait::async_trait]
impl PriceFeed for HttpPriceFeed {
    async fn fetch(&self) -> FeedResult<Vec<PricePoint>> {
        debug!("Fetching prices from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let doc: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                FeedError::Timeout
            } else {
                FeedError::Decode(e.to_string())
            }
        })?;

        let (points, stats) = decode_records(&doc)?;
        if stats.skipped > 0 || stats.untimed > 0 {
            warn!(
                "Feed {}: {} records, {} skipped, {} without a readable date",
                self.url, stats.records, stats.skipped, stats.untimed
            );
        }
        info!("Fetched {} price points from {}", points.len(), self.url);

        Ok(points)
    }

    fn source(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_parse_timestamp_forms() {
        let expected = Utc.with_ymd_and_hms(2023, 8, 29, 7, 10, 40).unwrap();
        assert_eq!(parse_timestamp("2023-08-29T07:10:40.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2023-08-29T09:10:40+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2023-08-29T07:10:40"), Some(expected));
        assert_eq!(parse_timestamp("2023-08-29 07:10:40"), Some(expected));
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_decode_feed_document() {
        let doc = json!([
            { "currency": "BLUR", "date": "2023-08-29T07:10:40.000Z", "price": 0.20811525423728813 },
            { "currency": "bNEO", "date": "2023-08-29T07:10:50.000Z", "price": 7.1282679 },
            { "currency": "USD", "date": "2023-08-29T07:10:30.000Z", "price": 1 }
        ]);

        let (points, stats) = decode_records(&doc).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(stats, DecodeStats { records: 3, skipped: 0, untimed: 0 });
        assert_eq!(points[1].symbol, "bNEO");
        assert_eq!(points[2].price, 1.0);
    }

    #[test]
    fn test_decode_is_tolerant() {
        let doc = json!([
            { "currency": "ETH", "date": "2023-08-29T07:10:52.000Z", "price": 1645.93 },
            { "currency": "ETH", "date": "not a date", "price": 1700.0 },
            { "currency": "ATOM", "date": "2023-08-29T07:10:50.000Z" },
            { "currency": "OSMO", "date": "2023-08-29T07:10:50.000Z", "price": "0.37" },
            { "date": "2023-08-29T07:10:50.000Z", "price": 1.0 },
            { "currency": "ZIL", "price": 0.016 },
            "garbage",
            { "currency": "XYZ", "date": "2023-08-29T07:10:50.000Z", "price": -2 }
        ]);

        let (points, stats) = decode_records(&doc).unwrap();
        let symbols: Vec<_> = points.iter().map(|p| p.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "ETH", "ZIL", "XYZ"]);
        assert_eq!(stats.skipped, 4);
        assert_eq!(stats.untimed, 2);
        assert!(points[1].observed_at.is_none());
        assert_eq!(points[3].price, -2.0);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let result = decode_records(&json!({ "prices": [] }));
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_array() {
        let (points, stats) = decode_records(&json!([])).unwrap();
        assert!(points.is_empty());
        assert_eq!(stats.records, 0);
    }

    #[test]
    fn test_http_feed_source() {
        let feed = HttpPriceFeed::new(&FeedConfig::default()).unwrap();
        assert_eq!(feed.source(), swap_core::DEFAULT_FEED_URL);
    }
}

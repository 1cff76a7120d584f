//! Integration tests for the data providers

use chrono::{TimeZone, Utc};
use macrogate::services::binance::FundingRateProvider;
use macrogate::services::coingecko::CoinGeckoProvider;
use macrogate::services::etf_flows::EtfFlowCsvProvider;
use macrogate::services::market_data::{IndicatorSeriesProvider, PriceSeriesProvider};
use macrogate::services::pmi::PmiCsvProvider;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_csv(test_name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "macrogate-providers-{}-{}",
        test_name,
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("data.csv");
    fs::write(&file, contents).unwrap();
    file
}

fn ms(year: i32, month: u32, day: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

#[tokio::test]
async fn test_coingecko_normalizes_price_history() {
    let server = MockServer::start().await;

    // Out of order, one duplicate timestamp, one non-positive price.
    let body = json!({
        "prices": [
            [ms(2025, 1, 3) as f64, 42_500.0],
            [ms(2025, 1, 1) as f64, 42_000.0],
            [ms(2025, 1, 2) as f64, -1.0],
            [ms(2025, 1, 3) as f64, 42_600.0],
        ]
    });
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = CoinGeckoProvider::with_base_url(server.uri());
    let points = provider.fetch().await.unwrap();

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    // Sorted, negative dropped, duplicate resolved to the latest value.
    assert_eq!(prices, vec![42_000.0, 42_600.0]);
    assert!(points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[tokio::test]
async fn test_coingecko_empty_payload_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "prices": [] })))
        .mount(&server)
        .await;

    let provider = CoinGeckoProvider::with_base_url(server.uri());
    assert!(provider.fetch().await.is_err());
}

#[tokio::test]
async fn test_coingecko_server_error_surfaces_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/coins/bitcoin/market_chart"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let provider = CoinGeckoProvider::with_base_url(server.uri());
    assert!(provider.fetch().await.is_err());
}

#[tokio::test]
async fn test_binance_parses_string_rates() {
    let server = MockServer::start().await;

    let body = json!([
        { "symbol": "BTCUSDT", "fundingTime": ms(2025, 1, 1), "fundingRate": "0.00010000" },
        { "symbol": "BTCUSDT", "fundingTime": ms(2025, 1, 2), "fundingRate": "not-a-number" },
        { "symbol": "BTCUSDT", "fundingTime": ms(2025, 1, 3), "fundingRate": "-0.00025000" },
    ]);
    Mock::given(method("GET"))
        .and(path("/fapi/v1/fundingRate"))
        .and(query_param("symbol", "BTCUSDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = FundingRateProvider::with_base_url(server.uri());
    let points = provider.fetch().await.unwrap();

    // Unparseable row dropped; the rest keep their sign and order.
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].value, 0.0001);
    assert_eq!(points[1].value, -0.00025);
}

#[tokio::test]
async fn test_etf_flow_csv_skips_bad_rows() {
    let csv = "\
 Date ,Total\n\
2025-01-03,120.5\n\
2025-01-01,80.0\n\
not-a-date,50.0\n\
2025-01-02,oops\n\
2025-01-04,-30.25\n";
    let provider = EtfFlowCsvProvider::new(temp_csv("etf", csv));

    let points = provider.fetch().await.unwrap();
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![80.0, 120.5, -30.25]);
}

#[tokio::test]
async fn test_etf_flow_csv_missing_file_is_an_error() {
    let provider = EtfFlowCsvProvider::new(PathBuf::from("/nonexistent/flows.csv"));
    assert!(provider.fetch().await.is_err());
}

#[tokio::test]
async fn test_etf_flow_csv_requires_total_column() {
    let provider =
        EtfFlowCsvProvider::new(temp_csv("etf-cols", "Date,Amount\n2025-01-01,1.0\n"));
    assert!(provider.fetch().await.is_err());
}

#[tokio::test]
async fn test_pmi_csv_accepts_month_periods() {
    let csv = "\
PERIOD,PMI\n\
2024-01,47.1\n\
2024-02-01,47.9\n\
2024-03,48.8\n\
2024-04,49.6\n";
    let provider = PmiCsvProvider::new(temp_csv("pmi", csv));

    let points = provider.fetch().await.unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[0].value, 47.1);
    assert_eq!(
        points[1].timestamp,
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(points[3].value, 49.6);
}

//! Fetch → predict → render, driven through an in-memory transport.
use std::sync::Arc;

use predict_common::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use predict_common::predictor::{FixedRandom, predict, weighted_trend};
use predict_common::symbol::read_symbol;
use predict_common::table::report_table;
use predict_common::{ClientConfig, PredictError, PredictionSubject, QuoteClient};

struct StaticHttpClient {
    status: u16,
    body: &'static str,
}

impl HttpClient for StaticHttpClient {
    fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
        Ok(HttpResponse::with_status(self.status, self.body))
    }
}

const BTC_BODY: &str = r#"{
    "status": {"error_code": 0, "error_message": null},
    "data": {"BTC": {"id": 1, "symbol": "BTC", "quote": {"USD": {
        "price": 50000.0, "percent_change_1h": 0.1, "percent_change_24h": 5.0,
        "percent_change_7d": 10.0, "last_updated": "2024-03-01T12:30:00.000Z"}}}}
}"#;

fn client(status: u16, body: &'static str) -> QuoteClient {
    QuoteClient::new(
        ClientConfig::from_lookup(|_| Some(String::from("integration-key"))),
        Arc::new(StaticHttpClient { status, body }),
    )
}

#[test]
fn btc_run_predicts_within_band_and_renders_report() {
    let symbol = read_symbol(" btc\n".as_bytes()).expect("symbol line");
    let mut subject = PredictionSubject::new(symbol);

    let quote = client(200, BTC_BODY)
        .fetch_quote(&subject.symbol)
        .expect("quote fetched");
    subject.apply_quote(&quote);

    assert!((weighted_trend(&subject) - 0.065).abs() < 1e-12);

    for sample in [0.0, 0.25, 0.5, 0.75, 0.999] {
        let prediction = predict(&subject, &mut FixedRandom(sample));
        assert!(
            (52750.0 - 1e-6..=53750.0 + 1e-6).contains(&prediction),
            "prediction {prediction} out of range"
        );
    }

    let prediction = predict(&subject, &mut FixedRandom(0.5));
    let rendered = report_table(&subject, prediction).expect("table").render();
    assert!(rendered.contains("| Symbol           | BTC       |"), "{rendered}");
    assert!(rendered.contains("| Predicted Price  | $53250.00 |"), "{rendered}");
    assert!(rendered.contains("| Predicted Change | 6.50%     |"), "{rendered}");
}

#[test]
fn failed_fetch_leaves_subject_unpopulated() {
    let mut subject = PredictionSubject::new("BTC");

    let result = client(500, "{}").fetch_quote(&subject.symbol);
    assert!(matches!(result, Err(PredictError::Api { status: 500 })));
    if let Ok(quote) = result {
        subject.apply_quote(&quote);
    }

    assert_eq!(subject, PredictionSubject::new("BTC"));
}

#[test]
fn unknown_symbol_reports_not_found() {
    let err = client(200, BTC_BODY)
        .fetch_quote("DOGE")
        .expect_err("DOGE is not in the payload");
    assert_eq!(err.to_string(), "Not found: no data found for 'DOGE'");
}

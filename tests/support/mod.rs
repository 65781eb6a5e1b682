//! Offline stand-in for the quote service.
//!
//! Answers like the live endpoint: it returns its full field set for every
//! recognized symbol regardless of the `fields` filter and silently drops
//! symbols it does not know.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use ferroquote_core::{HttpClient, HttpError, HttpRequest, HttpResponse};
use serde_json::{json, Value};

#[derive(Debug)]
pub struct FakeQuoteService {
    universe: BTreeMap<String, Value>,
    failure: Option<HttpError>,
    status: u16,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeQuoteService {
    pub fn new() -> Self {
        Self {
            universe: universe(),
            failure: None,
            status: 200,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: HttpError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    fn respond(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if self.status != 200 {
            return Ok(HttpResponse {
                status: self.status,
                body: String::from(r#"{"finance":{"result":null,"error":{"code":"Unauthorized"}}}"#),
            });
        }

        let result = query_param(&request.url, "symbols")
            .map(|symbols| {
                symbols
                    .split(',')
                    .filter_map(|symbol| self.universe.get(symbol).cloned())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        let body = json!({ "quoteResponse": { "result": result, "error": null } });
        Ok(HttpResponse::ok_json(body.to_string()))
    }
}

impl HttpClient for FakeQuoteService {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.respond(&request);
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        Box::pin(async move { response })
    }
}

/// Decoded value of one query-string parameter.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_owned())
        })
    })
}

fn universe() -> BTreeMap<String, Value> {
    [
        json!({
            "language": "en-US",
            "region": "US",
            "quoteType": "EQUITY",
            "currency": "USD",
            "marketState": "REGULAR",
            "tradeable": false,
            "triggerable": true,
            "bid": 61.21,
            "ask": 61.24,
            "bidSize": 9,
            "askSize": 12,
            "regularMarketPrice": 61.22,
            "regularMarketTime": 1_704_067_200,
            "regularMarketVolume": 14_203_118,
            "longName": "Citigroup Inc.",
            "shortName": "Citigroup, Inc.",
            "exchange": "NYQ",
            "twoHundredDayAverageChange": 8.4,
            "symbol": "C"
        }),
        json!({
            "language": "en-US",
            "region": "US",
            "quoteType": "EQUITY",
            "currency": "USD",
            "marketState": "REGULAR",
            "tradeable": false,
            "bid": 189.41,
            "ask": 189.47,
            "regularMarketPrice": 189.43,
            "regularMarketTime": 1_704_067_200,
            "firstTradeDateMilliseconds": 345_479_400_000_i64,
            "longName": "Apple Inc.",
            "exchange": "NMS",
            "symbol": "AAPL"
        }),
        json!({
            "language": "en-US",
            "currency": "USD",
            "tradeable": false,
            "bid": 0,
            "ask": 29.11,
            "regularMarketPrice": 29.1,
            "longName": "United States Steel Corporation",
            "symbol": "X"
        }),
    ]
    .into_iter()
    .filter_map(|entry| {
        let symbol = entry.get("symbol")?.as_str()?.to_owned();
        Some((symbol, entry))
    })
    .collect()
}

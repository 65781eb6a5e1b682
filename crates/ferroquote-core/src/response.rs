//! Maps quote-service payloads into [`Securities`].
//!
//! The service answers with
//! `{"quoteResponse": {"result": [{...}, ...], "error": null}}`. Each result
//! entry becomes one [`Security`] holding every key the service sent, which
//! is usually more than was asked for. Symbols the service rejected are not
//! in `result` and therefore not in the output.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::TransportError;
use crate::field::{Field, FieldKey};
use crate::security::{Securities, Security};
use crate::value::FieldValue;

#[derive(Debug, Deserialize)]
struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResponseBody,
}

#[derive(Debug, Deserialize)]
struct QuoteResponseBody {
    #[serde(default)]
    result: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    error: Option<Value>,
}

/// Parse a raw response body.
pub fn parse(body: &str) -> Result<Securities, TransportError> {
    let envelope: QuoteEnvelope = serde_json::from_str(body)?;
    let QuoteResponseBody { result, error } = envelope.quote_response;

    if let Some(error) = error.filter(|error| !error.is_null()) {
        return Err(TransportError::Service {
            message: service_error_message(&error),
        });
    }

    Ok(map_entries(result.unwrap_or_default()))
}

/// Build one [`Security`] per entry that names a symbol.
pub fn map_entries(entries: Vec<Map<String, Value>>) -> Securities {
    let mut securities = Securities::new();

    for entry in entries {
        let Some(symbol) = entry
            .get(Field::Symbol.wire_name())
            .and_then(Value::as_str)
            .map(str::to_owned)
        else {
            warn!(keys = entry.len(), "skipping quote entry without a symbol");
            continue;
        };

        let security = Security::new(symbol.clone(), map_fields(entry));
        if !securities.insert_first(security) {
            debug!(%symbol, "ignoring repeated quote entry");
        }
    }

    debug!(securities = securities.len(), "mapped quote response");
    securities
}

fn map_fields(entry: Map<String, Value>) -> BTreeMap<FieldKey, FieldValue> {
    entry
        .into_iter()
        .map(|(name, value)| {
            let key = FieldKey::normalize(&name);
            let value = FieldValue::from_json(key.field(), value);
            (key, value)
        })
        .collect()
}

fn service_error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("description")
            .or_else(|| fields.get("code"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| error.to_string()),
        other => other.to_string(),
    }
}

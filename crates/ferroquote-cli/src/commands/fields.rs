use ferroquote_core::{Field, FieldKind};
use serde::Serialize;
use serde_json::Value;

use crate::error::CliError;

#[derive(Debug, Serialize)]
struct FieldEntry {
    name: &'static str,
    kind: FieldKind,
}

pub fn run() -> Result<Value, CliError> {
    let fields = Field::all()
        .map(|field| FieldEntry {
            name: field.wire_name(),
            kind: field.kind(),
        })
        .collect::<Vec<_>>();
    Ok(serde_json::to_value(fields)?)
}

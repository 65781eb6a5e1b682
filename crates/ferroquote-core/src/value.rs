use serde::Serialize;
use serde_json::Value;

use crate::field::{Field, FieldKind};
use crate::timestamp::UtcDateTime;

/// Dynamically typed value returned by the quote service for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Number(f64),
    Text(String),
    Bool(bool),
    Date(UtcDateTime),
    /// Arrays and objects, kept verbatim.
    Structured(Value),
    /// The service sent the key with a `null` value.
    Absent,
}

impl FieldValue {
    /// Convert a raw payload value. `field` selects date handling for
    /// integer epochs of known date fields.
    pub fn from_json(field: Option<Field>, value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(flag) => Self::Bool(flag),
            Value::String(text) => Self::Text(text),
            Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    match field {
                        Some(field) if field.kind() == FieldKind::Date => {
                            let date = if field.is_millisecond_epoch() {
                                UtcDateTime::from_unix_millis(integer)
                            } else {
                                UtcDateTime::from_unix_seconds(integer)
                            };
                            date.map_or(Self::Integer(integer), Self::Date)
                        }
                        _ => Self::Integer(integer),
                    }
                } else if let Some(float) = number.as_f64() {
                    Self::Number(float)
                } else {
                    Self::Structured(Value::Number(number))
                }
            }
            other => Self::Structured(other),
        }
    }

    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Bool(_) => "boolean",
            Self::Date(_) => "date",
            Self::Structured(_) => "structured",
            Self::Absent => "absent",
        }
    }

    /// Numeric view; integers widen to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Integer view; accepts whole-valued floats within `i64` range.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Number(value)
                if value.is_finite()
                    && value.fract() == 0.0
                    && *value >= i64::MIN as f64
                    && *value < i64::MAX as f64 =>
            {
                Some(*value as i64)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<UtcDateTime> {
        match self {
            Self::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            _ => None,
        }
    }

    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn date_fields_convert_epoch_seconds() {
        let value = FieldValue::from_json(Some(Field::RegularMarketTime), json!(1_704_067_200));
        assert_eq!(
            value.as_date().map(UtcDateTime::format_rfc3339).as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn millisecond_date_fields_convert_epoch_millis() {
        let value = FieldValue::from_json(
            Some(Field::FirstTradeDateMilliseconds),
            json!(1_704_067_200_000_i64),
        );
        assert_eq!(value.as_date().map(UtcDateTime::unix_seconds), Some(1_704_067_200));
    }

    #[test]
    fn non_date_integers_stay_integers() {
        let value = FieldValue::from_json(Some(Field::RegularMarketVolume), json!(12_345));
        assert_eq!(value, FieldValue::Integer(12_345));
        assert_eq!(value.as_f64(), Some(12_345.0));
    }

    #[test]
    fn null_is_absent_not_a_default() {
        let value = FieldValue::from_json(Some(Field::Bid), Value::Null);
        assert!(value.is_absent());
        assert_eq!(value.as_f64(), None);
    }

    #[test]
    fn falsy_values_are_preserved() {
        assert_eq!(
            FieldValue::from_json(Some(Field::Tradeable), json!(false)).as_bool(),
            Some(false)
        );
        assert_eq!(FieldValue::from_json(Some(Field::Bid), json!(0.0)).as_f64(), Some(0.0));
    }

    #[test]
    fn arrays_are_kept_structured() {
        let value = FieldValue::from_json(None, json!([1, 2]));
        assert_eq!(value.as_structured(), Some(&json!([1, 2])));
        assert_eq!(value.type_name(), "structured");
    }

    #[test]
    fn whole_floats_read_as_integers() {
        assert_eq!(FieldValue::Number(3.0e9).as_i64(), Some(3_000_000_000));
        assert_eq!(FieldValue::Number(1.5).as_i64(), None);
    }

    #[test]
    fn floats_beyond_i64_range_do_not_saturate() {
        // 2^63 is exactly i64::MAX as f64 and one past the largest i64.
        assert_eq!(FieldValue::Number(9_223_372_036_854_775_808.0).as_i64(), None);
        assert_eq!(FieldValue::Number(f64::MAX).as_i64(), None);
        assert_eq!(
            FieldValue::Number(-9_223_372_036_854_775_808.0).as_i64(),
            Some(i64::MIN)
        );
    }
}

//! Custom serde helpers for the bank's wire formats.

/// Deserializes a seconds count that may arrive as a number, a numeric
/// string, `null`, or be absent. Anything unusable becomes `0`.
///
/// Strings are read like a leading integer: an optional `+`, then digits up
/// to the first non-digit. Values past `u64::MAX` saturate.
///
/// Use together with `#[serde(default)]`.
pub mod lenient_seconds {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(from_value(&value))
    }

    pub(crate) fn from_value(value: &Value) -> u64 {
        match value {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
                .unwrap_or(0),
            Value::String(s) => leading_digits(s.trim()),
            _ => 0,
        }
    }

    fn leading_digits(s: &str) -> u64 {
        let s = s.strip_prefix('+').unwrap_or(s);
        s.bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u64, |acc, d| {
                acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
            })
    }
}

/// `Option<Decimal>` written as a JSON number and read from a JSON number or
/// a numeric string. Numbers are parsed from their JSON text, so `123.45`
/// stays exactly `123.45`.
///
/// Use together with `#[serde(default)]`.
pub mod decimal_number_option {
    use std::str::FromStr;

    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal::Decimal;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value.as_ref().and_then(|d| d.to_f64()) {
            Some(f) => serializer.serialize_some(&f),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(None),
            Value::Number(n) => parse(&n.to_string()).map(Some).map_err(D::Error::custom),
            Value::String(s) => parse(s.trim()).map(Some).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a decimal number, got {}",
                other
            ))),
        }
    }

    fn parse(s: &str) -> Result<Decimal, String> {
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| format!("invalid decimal {:?}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::lenient_seconds::from_value;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_lenient_seconds() {
        assert_eq!(from_value(&json!(3600)), 3600);
        assert_eq!(from_value(&json!("3600")), 3600);
        assert_eq!(from_value(&json!("600s")), 600);
        assert_eq!(from_value(&json!(59.9)), 59);
        assert_eq!(from_value(&json!(-5)), 0);
        assert_eq!(from_value(&json!("soon")), 0);
        assert_eq!(from_value(&json!(null)), 0);
        assert_eq!(from_value(&json!({"s": 1})), 0);
    }

    #[test]
    fn test_lenient_seconds_sign_and_overflow() {
        assert_eq!(from_value(&json!("+600")), 600);
        assert_eq!(from_value(&json!(" +42 ")), 42);
        assert_eq!(from_value(&json!("-600")), 0);
        assert_eq!(from_value(&json!("99999999999999999999999")), u64::MAX);
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Amount {
        #[serde(default, with = "super::decimal_number_option")]
        value: Option<Decimal>,
    }

    #[test]
    fn test_decimal_number_option() {
        let parse = |v: serde_json::Value| serde_json::from_value::<Amount>(v).map(|a| a.value);

        assert_eq!(
            parse(json!({ "value": 123.45 })).unwrap(),
            Some(Decimal::from_str("123.45").unwrap())
        );
        assert_eq!(
            parse(json!({ "value": " 10.50 " })).unwrap(),
            Some(Decimal::from_str("10.50").unwrap())
        );
        assert_eq!(parse(json!({ "value": 7 })).unwrap(), Some(Decimal::from(7)));
        assert_eq!(parse(json!({ "value": null })).unwrap(), None);
        assert_eq!(parse(json!({})).unwrap(), None);
        assert!(parse(json!({ "value": "ten" })).is_err());
        assert!(parse(json!({ "value": true })).is_err());

        let out = serde_json::to_value(Amount {
            value: Some(Decimal::from_str("10.5").unwrap()),
        })
        .unwrap();
        assert_eq!(out, json!({ "value": 10.5 }));
    }
}

//! Lenient numeric deserialization.
//!
//! Stored records come from hand-filled forms, so a counter may be a number,
//! a numeric string, `null`, or missing entirely. Anything that is not a
//! usable number reads as zero instead of failing the whole snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `None` when the value carries no usable finite number.
pub fn value_to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

pub fn value_to_f64(value: &Value) -> f64 {
    value_to_number(value).unwrap_or(0.0)
}

pub fn value_to_count(value: &Value) -> u32 {
    let n = value_to_f64(value);
    if n <= 0.0 {
        0
    } else if n >= u32::MAX as f64 {
        u32::MAX
    } else {
        n.trunc() as u32
    }
}

pub fn value_to_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim(), "true" | "1"),
        _ => false,
    }
}

/// `#[serde(default, deserialize_with = "lenient_count")]`
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_count(&value))
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value).max(0.0))
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_bool(&value))
}

/// Free text that older snapshots sometimes stored as a number.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Record ids were numeric timestamps in older snapshots; both shapes read as text.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Accepts "YYYY-MM-DD" and full ISO timestamps; anything else reads as absent.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s
            .get(..10)
            .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_coercion() {
        assert_eq!(value_to_count(&json!(4)), 4);
        assert_eq!(value_to_count(&json!("3")), 3);
        assert_eq!(value_to_count(&json!(" 7 ")), 7);
        assert_eq!(value_to_count(&json!(2.9)), 2);
        assert_eq!(value_to_count(&json!(null)), 0);
        assert_eq!(value_to_count(&json!("abc")), 0);
        assert_eq!(value_to_count(&json!(-2)), 0);
        assert_eq!(value_to_count(&json!({"x": 1})), 0);
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(value_to_f64(&json!("6.1")), 6.1);
        assert_eq!(value_to_f64(&json!(5)), 5.0);
        assert_eq!(value_to_f64(&json!([])), 0.0);
    }

    #[test]
    fn test_date_coercion() {
        #[derive(Deserialize)]
        struct Sample {
            #[serde(default, deserialize_with = "lenient_date")]
            date: Option<NaiveDate>,
        }
        let p: Sample = serde_json::from_str(r#"{"date":"2025-03-10T09:00:00.000Z"}"#).unwrap();
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2025, 3, 10));
        let p: Sample = serde_json::from_str(r#"{"date":"soon"}"#).unwrap();
        assert_eq!(p.date, None);
        let p: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(p.date, None);
    }

    #[test]
    fn test_id_coercion() {
        #[derive(Deserialize)]
        struct Sample {
            #[serde(default, deserialize_with = "lenient_id")]
            id: String,
        }
        let p: Sample = serde_json::from_str(r#"{"id":1741600000000}"#).unwrap();
        assert_eq!(p.id, "1741600000000");
        let p: Sample = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(p.id, "");
    }

    #[test]
    fn test_number_detection() {
        assert_eq!(value_to_number(&json!("4")), Some(4.0));
        assert_eq!(value_to_number(&json!(false)), Some(0.0));
        assert_eq!(value_to_number(&json!("four")), None);
        assert_eq!(value_to_number(&json!(null)), None);
    }

    #[test]
    fn test_text_coercion() {
        #[derive(Deserialize)]
        struct Sample {
            #[serde(default, deserialize_with = "lenient_text")]
            value: String,
        }
        let p: Sample = serde_json::from_str(r#"{"value":100}"#).unwrap();
        assert_eq!(p.value, "100");
        let p: Sample = serde_json::from_str(r#"{"value":"100"}"#).unwrap();
        assert_eq!(p.value, "100");
        let p: Sample = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_bool_coercion() {
        assert!(value_to_bool(&json!(true)));
        assert!(value_to_bool(&json!(1)));
        assert!(value_to_bool(&json!("true")));
        assert!(!value_to_bool(&json!(null)));
        assert!(!value_to_bool(&json!("no")));
    }
}

//! Identifier deserialisation.
//!
//! The JSON-server backend uses integer ids, the MongoDB backend uses hex strings.
//! Both are normalised to `String` so ownership checks compare like with like.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Str(s) => s,
            RawId::Int(n) => n.to_string(),
            // `Date.now()` ids written by older clients can come back as floats.
            RawId::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
            RawId::Float(f) => f.to_string(),
        }
    }
}

pub(crate) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?
        .map(String::from)
        .filter(|s| !s.is_empty()))
}

/// The `id` field of a raw JSON object, normalised like [`id`].
pub(crate) fn value_id(value: &serde_json::Value) -> Option<String> {
    RawId::deserialize(value.get("id")?).ok().map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "id")]
        id: String,
        #[serde(default, deserialize_with = "opt_id")]
        other: Option<String>,
    }

    #[test]
    fn test_integer_and_string_ids() {
        let p: Probe = serde_json::from_str(r#"{"id": 12, "other": "65a1f0"}"#).unwrap();
        assert_eq!(p.id, "12");
        assert_eq!(p.other.as_deref(), Some("65a1f0"));
    }

    #[test]
    fn test_missing_null_and_empty_optional_ids() {
        let p: Probe = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert!(p.other.is_none());
        let p: Probe = serde_json::from_str(r#"{"id": "a", "other": null}"#).unwrap();
        assert!(p.other.is_none());
        let p: Probe = serde_json::from_str(r#"{"id": "a", "other": ""}"#).unwrap();
        assert!(p.other.is_none());
    }

    #[test]
    fn test_float_millisecond_id() {
        let p: Probe = serde_json::from_str(r#"{"id": 1700000000123.0}"#).unwrap();
        assert_eq!(p.id, "1700000000123");
    }

    #[test]
    fn test_value_id() {
        assert_eq!(value_id(&serde_json::json!({"id": 3})).as_deref(), Some("3"));
        assert_eq!(value_id(&serde_json::json!({"id": "c1"})).as_deref(), Some("c1"));
        assert!(value_id(&serde_json::json!({"text": "x"})).is_none());
        assert!(value_id(&serde_json::json!({"id": null})).is_none());
    }
}

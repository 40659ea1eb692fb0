// src/message.rs
use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    #[serde(deserialize_with = "lenient_int")]
    pub price: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub bedrooms: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub bathrooms: i64,
    pub address: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub recommendations: Vec<Recommendation>,
}

/// Accepts `1200`, `1200.0` and `"1200"`; rejects anything with a fractional part.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
        Raw::Float(f)
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 =>
        {
            Ok(f as i64)
        }
        Raw::Float(f) => Err(de::Error::custom(format!("expected an integer, got {f}"))),
        Raw::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

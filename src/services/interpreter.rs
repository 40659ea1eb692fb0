// src/services/interpreter.rs
use tracing::warn;

use crate::message::{ChatResponse, Recommendation};

pub const PARSE_FAILURE_NOTICE: &str = "Could not parse model output.";

/// Outcome of reading the model's text as recommendations.
#[derive(Debug, Clone, PartialEq)]
pub enum Interpretation {
    Parsed(Vec<Recommendation>),
    Unparsed { raw: String, error: String },
}

/// Parse raw model output. Any shape mismatch lands in `Unparsed`.
pub fn interpret(raw: &str) -> Interpretation {
    match serde_json::from_str::<Vec<Recommendation>>(raw) {
        Ok(recommendations) => Interpretation::Parsed(recommendations),
        Err(e) => Interpretation::Unparsed {
            raw: raw.to_string(),
            error: e.to_string(),
        },
    }
}

impl Interpretation {
    pub fn into_response(self) -> ChatResponse {
        match self {
            Interpretation::Parsed(recommendations) => ChatResponse {
                reply: format!(
                    "I found {} housing options matching your request.",
                    recommendations.len()
                ),
                recommendations,
            },
            Interpretation::Unparsed { raw, error } => {
                warn!(%error, "failed to parse model output as recommendations");
                ChatResponse {
                    reply: format!("{PARSE_FAILURE_NOTICE} Raw text:\n{raw}"),
                    recommendations: Vec::new(),
                }
            }
        }
    }
}

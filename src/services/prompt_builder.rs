// src/services/prompt_builder.rs
use serde_json::Value;

/// Build the instruction sent to the completion model.
///
/// The whole catalog is embedded on every call; output is a pure function of
/// the inputs.
pub fn build_prompt(user_query: &str, listings: &[Value]) -> String {
    // Serializing a slice of `Value` cannot fail.
    let catalog = serde_json::to_string_pretty(listings).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"
You are an expert student housing assistant.

Here is the housing data:
{catalog}

User request: "{user_query}"

Pick the top 3 housing options that best match the user's request.
For each, return a JSON object with fields:
  title, price, bedrooms, bathrooms, address, reason

Explain in the "reason" field why it fits the request.
Return valid JSON only, like:

[
  {{
    "title": "...",
    "price": 0,
    "bedrooms": 0,
    "bathrooms": 0,
    "address": "...",
    "reason": "..."
  }}
]
"#
    )
}

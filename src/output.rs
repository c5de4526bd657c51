//! How command results are written: human text or a JSON envelope.

use serde::Serialize;
use serde_json::{Value, json};

use crate::snippet::{PutReceipt, Snippet};
use crate::storage::NOT_FOUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Human }
    }

    pub fn is_human(self) -> bool {
        self == Self::Human
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    status: &'static str,
    command: &'a str,
    data: Value,
}

/// Build the JSON envelope printed for a successful command
pub fn success_envelope(command: &str, data: Value) -> anyhow::Result<String> {
    let envelope = Envelope {
        status: "ok",
        command,
        data,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Print the JSON envelope for a successful command (no-op in human mode)
pub fn emit_success(mode: OutputMode, command: &str, data: Value) -> anyhow::Result<()> {
    if mode == OutputMode::Json {
        println!("{}", success_envelope(command, data)?);
    }
    Ok(())
}

/// Text shown for a lookup; unknown keywords become the not-found sentinel
pub fn render_lookup(message: Option<&str>) -> &str {
    message.unwrap_or(NOT_FOUND)
}

pub fn put_data(receipt: &PutReceipt) -> Value {
    json!({
        "keyword": receipt.snippet.keyword,
        "message": receipt.snippet.message,
        "inserted": receipt.inserted(),
    })
}

pub fn get_data(keyword: &str, message: Option<&str>) -> Value {
    json!({
        "keyword": keyword,
        "message": message,
        "found": message.is_some(),
    })
}

pub fn catalog_data(keywords: &[String]) -> Value {
    json!({ "keywords": keywords })
}

pub fn search_data(query: &str, results: &[Snippet]) -> Value {
    json!({
        "query": query,
        "results": results,
    })
}

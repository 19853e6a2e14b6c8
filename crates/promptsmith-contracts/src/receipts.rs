use std::path::Path;

use anyhow::Context;
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use similar::TextDiff;

use crate::events::now_utc_iso;
use crate::request::{CompiledPrompt, ComposeRequest, RequestMode};

pub const RECEIPT_SCHEMA_VERSION: u64 = 1;

/// Snapshot of one compose run: the inputs, the compiled prompt, the text a
/// generation client would send, and every batch variant with its diff
/// against the base prompt. `warnings` lists degradations noticed while
/// compiling, such as unset builder categories.
pub fn build_receipt(
    request: &ComposeRequest,
    compiled: &CompiledPrompt,
    mode: RequestMode,
    request_text: &str,
    variants: &[String],
    warnings: &[String],
) -> anyhow::Result<Value> {
    let mut root = Map::new();
    root.insert(
        "schema_version".to_string(),
        Value::Number(RECEIPT_SCHEMA_VERSION.into()),
    );
    root.insert("created_at".to_string(), Value::String(now_utc_iso()));
    root.insert(
        "request".to_string(),
        sanitize_payload(&serde_json::to_value(request).context("failed to serialize request")?),
    );
    root.insert(
        "compiled".to_string(),
        serde_json::to_value(compiled).context("failed to serialize compiled prompt")?,
    );
    root.insert(
        "fingerprint".to_string(),
        Value::String(prompt_fingerprint(&compiled.positive_prompt)),
    );
    root.insert("mode".to_string(), Value::String(mode.label().to_string()));
    root.insert(
        "request_text".to_string(),
        Value::String(request_text.to_string()),
    );

    let rows = variants
        .iter()
        .enumerate()
        .map(|(index, prompt)| {
            json!({
                "index": index,
                "prompt": prompt,
                "fingerprint": prompt_fingerprint(prompt),
                "diff": prompt_diff(&compiled.positive_prompt, prompt),
            })
        })
        .collect();
    root.insert("variants".to_string(), Value::Array(rows));
    root.insert(
        "warnings".to_string(),
        Value::Array(warnings.iter().cloned().map(Value::String).collect()),
    );
    Ok(Value::Object(root))
}

pub fn write_receipt(path: &Path, payload: &Value) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, serde_json::to_string_pretty(payload)?)
        .with_context(|| format!("failed to write receipt {}", path.display()))?;
    Ok(())
}

/// Hex SHA-256 of the prompt text.
pub fn prompt_fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Unified diff of two prompts, one sentence per line. Empty when equal.
pub fn prompt_diff(base: &str, variant: &str) -> Vec<String> {
    if base == variant {
        return Vec::new();
    }
    let base = sentence_lines(base);
    let variant = sentence_lines(variant);
    let diff = TextDiff::from_lines(&base, &variant);
    let rendered = diff.unified_diff().header("base", "variant").to_string();
    rendered.lines().map(str::to_string).collect()
}

fn sentence_lines(text: &str) -> String {
    let mut out = text.replace(". ", ".\n");
    out.push('\n');
    out
}

fn sanitize_payload(value: &Value) -> Value {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        Value::String(text) if text.starts_with("data:") => {
            Value::String("<omitted>".to_string())
        }
        Value::String(_) => value.clone(),
        Value::Array(rows) => Value::Array(rows.iter().map(sanitize_payload).collect()),
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, row) in map {
                let lowered = key.to_ascii_lowercase();
                if matches!(lowered.as_str(), "bytes" | "image" | "image_bytes" | "data") {
                    out.insert(key.clone(), Value::String("<omitted>".to_string()));
                    continue;
                }
                out.insert(key.clone(), sanitize_payload(row));
            }
            Value::Object(out)
        }
    }
}

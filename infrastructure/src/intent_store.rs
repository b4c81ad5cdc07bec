use anyhow::Context;
use domain::intent::{IntentCategory, IntentTable};
use serde::{Deserialize, Serialize};
use shared::types::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct IntentFile {
    categories: Vec<CategoryEntry>,
    fallback: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryEntry {
    label: String,
    keywords: Vec<String>,
    response: String,
}

/// Parse an intent table from JSON. Category order in the file is priority order.
pub fn parse_intent_table(json: &str) -> Result<IntentTable> {
    let file: IntentFile = serde_json::from_str(json).context("Invalid intent table JSON")?;

    let mut categories = Vec::with_capacity(file.categories.len());
    for entry in file.categories {
        categories.push(IntentCategory::new(entry.label, entry.keywords, entry.response)?);
    }
    Ok(IntentTable::new(categories, file.fallback)?)
}

pub fn load_intent_table(path: &Path) -> Result<IntentTable> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read intent table at {:?}", path))?;
    let table = parse_intent_table(&json)
        .with_context(|| format!("Failed to load intent table from {:?}", path))?;
    tracing::info!(
        path = %path.display(),
        categories = table.categories().len(),
        "loaded intent table"
    );
    Ok(table)
}

/// The configured table, or the built-in one when no file is set.
pub fn resolve_intent_table(path: Option<&Path>) -> Result<IntentTable> {
    match path {
        Some(path) => load_intent_table(path),
        None => Ok(IntentTable::builtin()),
    }
}

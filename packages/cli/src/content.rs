//! Reading stored page content from disk.
//!
//! A content file holds one of:
//! - a bare document (`{ "ROOT": {...}, ... }`)
//! - a document serialized into a JSON string, as the editor emits it
//! - a CMS pages export (`{ "data": [{ "attributes": { "slug", "content" } }] }`)

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One document found in a content file
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// File path, plus the page slug for exports
    pub label: String,
    pub content: Value,
}

pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    let source = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&source)?;
    Ok(entries_from_value(&path.display().to_string(), value))
}

pub fn entries_from_value(label: &str, value: Value) -> Vec<Entry> {
    match value {
        Value::Object(mut root) if root.get("data").is_some_and(Value::is_array) => {
            let pages = match root.remove("data") {
                Some(Value::Array(pages)) => pages,
                _ => Vec::new(),
            };

            pages
                .into_iter()
                .enumerate()
                .map(|(index, page)| page_entry(label, index, page))
                .collect()
        }
        other => vec![Entry {
            label: label.to_string(),
            content: unwrap_serialized(other),
        }],
    }
}

fn page_entry(label: &str, index: usize, page: Value) -> Entry {
    // Older exports nest fields under `attributes`
    let fields = page.get("attributes").unwrap_or(&page);

    let name = fields
        .get("slug")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| index.to_string());

    let content = fields.get("content").cloned().unwrap_or(Value::Null);

    Entry {
        label: format!("{}#{}", label, name),
        content: unwrap_serialized(content),
    }
}

fn unwrap_serialized(content: Value) -> Value {
    match content {
        Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        other => other,
    }
}

/// Content files under `input`, or `input` itself when it is a file
pub fn find_content_files(input: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            input.display()
        ));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(input)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file()
            && path.extension().map(|e| e == extension).unwrap_or(false)
            && path.file_name().map(|n| n != crate::config::DEFAULT_CONFIG_NAME).unwrap_or(true)
        {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

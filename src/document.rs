use crate::errors::LoadError;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error};

/// Reads the file at `path` and parses it as a JSON document.
pub fn try_load(path: &Path) -> Result<Value, LoadError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a document, logging the cause and returning `None` when the file
/// cannot be read or is not valid JSON. Callers decide whether that is fatal.
pub fn load_document(path: &Path) -> Option<Value> {
    match try_load(path) {
        Ok(document) => {
            debug!(path = %path.display(), "document loaded");
            Some(document)
        }
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

/// Returns the text stored under `key`. Absent, `null` and non-text fields
/// all read as missing.
pub fn field_text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Returns the field stored under `key` unless it is absent or `null`.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}

/// Reads a decimal number from either a JSON number or a string holding one.
pub fn coerce_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// ISO-8601 local time, no offset (e.g. `2025-06-01T14:03:27.512034`)
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Pretty-print `value` to `path` (2-space indent, UTF-8, non-ASCII kept literal).
/// Overwrites any existing file.
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("writing {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert!(!ts.ends_with('Z'));
        assert!(!ts.contains('+'));
    }

    #[test]
    fn test_write_keeps_cyrillic_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        write_pretty_json(&path, &json!({"name": "Вокзал"})).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Вокзал"));
        assert!(!raw.contains("\\u"));
        assert!(raw.contains("\n  \"name\""));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "stale content that is much longer than the new one").unwrap();
        write_pretty_json(&path, &json!([1])).unwrap();

        let back: Value = read_json(&path).unwrap();
        assert_eq!(back, json!([1]));
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope").join("out.json");
        let err = write_pretty_json(&path, &json!({})).unwrap_err();
        assert!(err.to_string().contains("creating"));
    }
}

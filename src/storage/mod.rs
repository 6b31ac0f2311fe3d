use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::Result;
use crate::expense::Expense;

const TMP_SUFFIX: &str = "tmp";

/// Reads the expense log at `path`. A missing file, unreadable file, or
/// contents that fail to parse all yield an empty log; corruption is logged
/// but never surfaced.
pub fn load_expenses(path: &Path) -> Vec<Expense> {
    if !path.exists() {
        return Vec::new();
    }
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!("failed to read {}: {err}; starting empty", path.display());
            return Vec::new();
        }
    };
    match serde_json::from_str(&data) {
        Ok(expenses) => expenses,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}; starting empty", path.display());
            Vec::new()
        }
    }
}

/// Serializes the full log as a pretty JSON array and replaces the file at
/// `path` via a sibling temp file and rename, so a failed write never leaves
/// a truncated log behind.
pub fn save_expenses(path: &Path, expenses: &[Expense]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(expenses)?;
    let tmp = tmp_path(path);
    write_all(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("expenses.json");
        let expenses = vec![
            Expense::new(12.50, "food", "lunch"),
            Expense::new(40.0, "transport", ""),
        ];

        save_expenses(&path, &expenses).expect("save log");
        let loaded = load_expenses(&path);
        assert_eq!(loaded, expenses);
    }

    #[test]
    fn load_missing_file_yields_empty_log() {
        let dir = TempDir::new().expect("temp dir");
        assert!(load_expenses(&dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn load_corrupt_file_yields_empty_log() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("expenses.json");
        fs::write(&path, "{ not json").expect("write corrupt file");
        assert!(load_expenses(&path).is_empty());
    }

    #[test]
    fn save_after_corrupt_load_produces_parseable_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("expenses.json");
        fs::write(&path, "[[[").expect("write corrupt file");

        let mut expenses = load_expenses(&path);
        assert!(expenses.is_empty());
        expenses.push(Expense::new(3.0, "snacks", ""));
        save_expenses(&path, &expenses).expect("save over corrupt file");

        assert_eq!(load_expenses(&path).len(), 1);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("data").join("expenses.json");
        save_expenses(&path, &[]).expect("save into fresh directory tree");
        assert!(path.exists());
    }

    #[test]
    fn saved_file_uses_stable_field_names() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("expenses.json");
        save_expenses(&path, &[Expense::new(7.0, "books", "novel")]).expect("save log");

        let raw = fs::read_to_string(&path).expect("read saved file");
        for key in ["\"date\"", "\"amount\"", "\"category\"", "\"description\""] {
            assert!(raw.contains(key), "missing key {key} in {raw}");
        }
    }
}

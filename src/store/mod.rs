use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::sheets::AGGREGATE_FILES;
use crate::errors::{parse_context, read_context, write_context};

/// Output directory of pretty-printed JSON collections.
///
/// Every save fully overwrites the named file.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open the store, creating the directory when needed
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let store = Self::existing(dir);
        store.create_dir()?;
        Ok(store)
    }

    /// Open an existing directory without creating it
    pub fn existing<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn create_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create output directory {}", self.dir.display()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    pub fn exists(&self, file_name: &str) -> bool {
        self.path_for(file_name).is_file()
    }

    pub fn save<T: Serialize + ?Sized>(&self, file_name: &str, data: &T) -> Result<PathBuf> {
        let path = self.path_for(file_name);
        write_json(&path, data)?;
        info!("  Saved: {}", path.display());
        Ok(path)
    }

    pub fn load<T: for<'de> Deserialize<'de>>(&self, file_name: &str) -> Result<Option<T>> {
        read_json_opt(&self.path_for(file_name))
    }

    /// Names of all `.json` files, sorted
    pub fn json_files(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir).with_context(|| read_context(&self.dir))? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".json") && entry.path().is_file() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// JSON files other than the three aggregates
    pub fn tournament_files(&self) -> Result<Vec<String>> {
        Ok(self
            .json_files()?
            .into_iter()
            .filter(|name| !AGGREGATE_FILES.contains(&name.as_str()))
            .collect())
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    fs::write(path, json).with_context(|| write_context(path))?;
    Ok(())
}

fn read_json_opt<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).with_context(|| read_context(path))?;
    let data = serde_json::from_str(&json).with_context(|| {
        format!(
            "{}. First 200 chars: {}",
            parse_context("JSON", path),
            json.chars().take(200).collect::<String>()
        )
    })?;
    Ok(Some(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    #[test]
    fn test_store_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path().join("out")).unwrap();

        let data = vec![TestData { value: "test".to_string() }];
        store.save("2024-01-01 M.json", &data).unwrap();
        store.save("Champions.json", &data).unwrap();

        let loaded: Option<Vec<TestData>> = store.load("2024-01-01 M.json").unwrap();
        assert_eq!(loaded, Some(data));

        let missing: Option<Vec<TestData>> = store.load("nope.json").unwrap();
        assert!(missing.is_none());

        assert_eq!(store.tournament_files().unwrap(), vec!["2024-01-01 M.json"]);
    }

    #[test]
    fn test_pretty_printed_with_two_spaces() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(temp_dir.path()).unwrap();
        let path = store.save("x.json", &serde_json::json!([{"a": 1}])).unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert_eq!(text, "[\n  {\n    \"a\": 1\n  }\n]\n");
    }
}

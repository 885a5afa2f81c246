use std::path::PathBuf;

const DEFAULT_WORKBOOK: &str = "json/BOD Scores History_2025-08-01.xlsx";
const DEFAULT_OUTPUT_DIR: &str = "json";

#[derive(Debug, Clone)]
pub struct PathSettings {
    pub workbook: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            workbook: PathBuf::from(DEFAULT_WORKBOOK),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl PathSettings {
    /// Defaults, overridden by `BOD_WORKBOOK` / `BOD_OUTPUT_DIR` when set.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            workbook: env_path("BOD_WORKBOOK").unwrap_or(defaults.workbook),
            output_dir: env_path("BOD_OUTPUT_DIR").unwrap_or(defaults.output_dir),
        }
    }

    pub fn with_overrides(mut self, workbook: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if let Some(workbook) = workbook {
            self.workbook = workbook;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        self
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

#[derive(Debug, Clone)]
pub struct AdapterSettings {
    /// Substituted for a missing best result so unranked players sort last
    pub missing_rank: i64,
    pub missing_avg_finish: f64,
    pub top_champions: usize,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            missing_rank: 99,
            missing_avg_finish: 99.0,
            top_champions: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: PathSettings,
    pub adapter: AdapterSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            paths: PathSettings::from_env(),
            adapter: AdapterSettings::default(),
        }
    }

    pub fn with_paths(mut self, workbook: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        self.paths = self.paths.with_overrides(workbook, output_dir);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_paths_override_defaults() {
        let paths = PathSettings::default()
            .with_overrides(Some(PathBuf::from("book.xlsx")), None);

        assert_eq!(paths.workbook, PathBuf::from("book.xlsx"));
        assert_eq!(paths.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_adapter_defaults_sort_missing_last() {
        let settings = AdapterSettings::default();
        assert_eq!(settings.missing_rank, 99);
        assert_eq!(settings.missing_avg_finish, 99.0);
    }
}

//! Configuration for hintpatch

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the question dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: PathBuf,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(crate::DEFAULT_DATASET_PATH)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("hintpatch").join("config.yml")),
            Some(PathBuf::from("hintpatch.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_dataset_path() {
        let config = Config::default();
        assert_eq!(config.dataset_path, PathBuf::from(crate::DEFAULT_DATASET_PATH));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yml");
        std::fs::write(&config_path, "dataset_path: data/bank.json\n").unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("data/bank.json"));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yml");

        let config = Config {
            dataset_path: PathBuf::from("elsewhere/questions.json"),
        };
        config.save(&config_path).unwrap();

        let reloaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(reloaded.dataset_path, config.dataset_path);
    }
}

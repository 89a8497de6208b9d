use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::{DatasetIdentity, DatasetRegistry};
use crate::error::ConfigError;
use crate::loader::FileLabelReader;

pub const DEFAULT_RESOURCE_ROOT: &str = "res";

/// Where label files live and which datasets are recognized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default = "default_resource_root")]
    pub resource_root: PathBuf,
    /// Replaces the built-in datasets when present
    #[serde(default)]
    pub datasets: Option<Vec<DatasetIdentity>>,
}

fn default_resource_root() -> PathBuf {
    PathBuf::from(DEFAULT_RESOURCE_ROOT)
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            resource_root: default_resource_root(),
            datasets: None,
        }
    }
}

impl PluginConfig {
    /// Load a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Dataset registry described by this config
    pub fn registry(&self) -> Result<DatasetRegistry, ConfigError> {
        match &self.datasets {
            Some(datasets) => DatasetRegistry::from_identities(datasets.iter().cloned()),
            None => Ok(DatasetRegistry::builtin()),
        }
    }

    /// Reader for label files under `resource_root`
    pub fn reader(&self) -> FileLabelReader {
        FileLabelReader::new(&self.resource_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_uses_builtin_datasets() {
        let config = PluginConfig::default();
        let registry = config.registry().unwrap();

        assert_eq!(config.resource_root, PathBuf::from("res"));
        assert_eq!(registry.dataset_count(), 2);
        assert_eq!(config.reader().root(), Path::new("res"));
    }

    #[test]
    fn test_load_custom_datasets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "resource_root": "/opt/labels",
                "datasets": [{
                    "name": "Iris_Cluster",
                    "expected_point_count": 150,
                    "label_resource_path": ":iris.bin",
                    "cluster_names": ["setosa", "versicolor", "virginica"],
                    "cluster_colors": [[255, 0, 0], [0, 255, 0], [0, 0, 255]]
                }]
            }"#,
        )
        .unwrap();

        let config = PluginConfig::from_file(&path).unwrap();
        let registry = config.registry().unwrap();

        assert_eq!(config.resource_root, PathBuf::from("/opt/labels"));
        assert_eq!(registry.dataset_count(), 1);
        assert_eq!(registry.resolve(150).unwrap().cluster_names[2], "virginica");
        assert!(registry.resolve(60000).is_err());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: PluginConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PluginConfig::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = PluginConfig::from_file("/nonexistent/config.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = PluginConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}

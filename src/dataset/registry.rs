use super::DatasetIdentity;
use crate::error::{ConfigError, PipelineError};
use std::collections::HashMap;

/// Lookup table from point count to dataset identity
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    /// Expected point count -> identity
    map: HashMap<usize, DatasetIdentity>,
}

impl DatasetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry holding the immune-cell and MNIST datasets
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for identity in [DatasetIdentity::cell_cluster(), DatasetIdentity::mnist_cluster()] {
            registry.map.insert(identity.expected_point_count, identity);
        }
        registry
    }

    /// Build a registry from a list of identities
    pub fn from_identities(
        identities: impl IntoIterator<Item = DatasetIdentity>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for identity in identities {
            registry.register(identity)?;
        }
        Ok(registry)
    }

    /// Register a dataset identity
    ///
    /// Rejects a second identity for the same point count and identities
    /// whose name and color tables differ in length.
    pub fn register(&mut self, identity: DatasetIdentity) -> Result<(), ConfigError> {
        if identity.cluster_names.len() != identity.cluster_colors.len() {
            return Err(ConfigError::TableLengthMismatch {
                name: identity.name,
                names: identity.cluster_names.len(),
                colors: identity.cluster_colors.len(),
            });
        }

        if let Some(existing) = self.map.get(&identity.expected_point_count) {
            return Err(ConfigError::DuplicatePointCount {
                count: identity.expected_point_count,
                existing: existing.name.clone(),
                duplicate: identity.name,
            });
        }

        self.map.insert(identity.expected_point_count, identity);
        Ok(())
    }

    /// Resolve the identity for a dataset of `num_points` points
    pub fn resolve(&self, num_points: usize) -> Result<&DatasetIdentity, PipelineError> {
        self.map
            .get(&num_points)
            .ok_or(PipelineError::UnsupportedDataset { num_points })
    }

    /// Get the number of registered datasets
    pub fn dataset_count(&self) -> usize {
        self.map.len()
    }

    /// Registered identities, ordered by point count
    pub fn identities(&self) -> Vec<&DatasetIdentity> {
        let mut identities: Vec<&DatasetIdentity> = self.map.values().collect();
        identities.sort_by_key(|identity| identity.expected_point_count);
        identities
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

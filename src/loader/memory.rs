use super::{decode_labels, encode_labels, LabelReader};
use crate::error::PipelineError;
use std::collections::HashMap;

/// Label resources held in memory, keyed by resource path
#[derive(Debug, Clone, Default)]
pub struct MemoryLabelReader {
    resources: HashMap<String, Vec<u8>>,
}

impl MemoryLabelReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw resource blob
    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.resources.insert(path.into(), bytes);
    }

    /// Add a resource holding `labels` in the on-disk layout
    pub fn with_labels(mut self, path: impl Into<String>, labels: &[i32]) -> Self {
        self.insert(path, encode_labels(labels));
        self
    }

    /// Get the number of stored resources
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl LabelReader for MemoryLabelReader {
    fn read_labels(&self, path: &str, count: usize) -> Result<Vec<i32>, PipelineError> {
        let bytes = self
            .resources
            .get(path)
            .ok_or_else(|| PipelineError::ResourceUnavailable {
                path: path.to_string(),
                reason: "no such resource".to_string(),
            })?;

        decode_labels(path, bytes, count)
    }
}

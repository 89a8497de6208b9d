use crate::dataset::Rgb;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, colored bucket handed to the host's cluster dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRecord {
    pub id: Uuid,
    pub name: String,
    pub color: Rgb,
    /// Member point indices, ascending
    pub indices: Vec<u32>,
}

impl ClusterRecord {
    pub fn new(name: impl Into<String>, color: Rgb, indices: Vec<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
            indices,
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

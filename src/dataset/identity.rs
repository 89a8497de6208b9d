use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Packed `0xffRRGGBB`, the layout most host color types accept
    pub fn to_argb(self) -> u32 {
        0xff00_0000 | (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// A recognized point dataset: where its labels live and how its clusters
/// are named and colored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetIdentity {
    /// Name of the output cluster dataset (e.g., "MNIST_Cluster")
    pub name: String,
    /// Point count that identifies this dataset
    pub expected_point_count: usize,
    /// Resource path of the label file (e.g., ":data/cell_all_labels.bin")
    pub label_resource_path: String,
    /// Cluster names, indexed by sorted label position
    pub cluster_names: Vec<String>,
    /// Cluster colors, index-aligned with `cluster_names`
    pub cluster_colors: Vec<Rgb>,
}

impl DatasetIdentity {
    pub fn new(
        name: impl Into<String>,
        expected_point_count: usize,
        label_resource_path: impl Into<String>,
        cluster_names: Vec<String>,
        cluster_colors: Vec<Rgb>,
    ) -> Self {
        Self {
            name: name.into(),
            expected_point_count,
            label_resource_path: label_resource_path.into(),
            cluster_names,
            cluster_colors,
        }
    }

    /// Number of clusters this identity can name and color
    pub fn table_len(&self) -> usize {
        self.cluster_names.len().min(self.cluster_colors.len())
    }
}

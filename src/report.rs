use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetIdentity;
use crate::emitter::ClusterRecord;

/// JSON summary of one pipeline run
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub generator: String,
    pub generated_at: String,
    pub dataset: String,
    pub num_points: usize,
    pub label_resource_path: String,
    pub clusters: Vec<ClusterRecord>,
}

impl RunReport {
    pub fn new(identity: &DatasetIdentity, num_points: usize, clusters: Vec<ClusterRecord>) -> Self {
        Self {
            generator: format!("cluster-init v{}", env!("CARGO_PKG_VERSION")),
            generated_at: Utc::now().to_rfc3339(),
            dataset: identity.name.clone(),
            num_points,
            label_resource_path: identity.label_resource_path.clone(),
            clusters,
        }
    }

    /// Total points across all clusters
    pub fn assigned_points(&self) -> usize {
        self.clusters.iter().map(|c| c.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Rgb;

    #[test]
    fn test_report_json() {
        let identity = DatasetIdentity::mnist_cluster();
        let clusters = vec![
            ClusterRecord::new("0", Rgb::new(1, 2, 3), vec![0, 2]),
            ClusterRecord::new("1", Rgb::new(4, 5, 6), vec![1]),
        ];
        let report = RunReport::new(&identity, 3, clusters);

        assert_eq!(report.assigned_points(), 3);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["dataset"], "MNIST_Cluster");
        assert_eq!(json["clusters"][0]["indices"], serde_json::json!([0, 2]));
        assert_eq!(json["clusters"][1]["color"], serde_json::json!([4, 5, 6]));
        assert!(json["generator"].as_str().unwrap().starts_with("cluster-init v"));
    }
}

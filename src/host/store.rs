use crate::emitter::ClusterRecord;

/// Input dataset as seen by the plugin
pub trait PointDataset {
    fn num_points(&self) -> usize;
    fn gui_name(&self) -> &str;
}

/// Output dataset receiving cluster records
pub trait ClusterStore {
    /// Drop every cluster from a previous run
    fn clear_clusters(&mut self);
    fn add_cluster(&mut self, record: ClusterRecord);
    /// Tell the host the clusters changed; raised once per successful run
    fn notify_data_changed(&mut self);
}

/// Fixed-size point dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPoints {
    pub name: String,
    pub num_points: usize,
}

impl StaticPoints {
    pub fn new(name: impl Into<String>, num_points: usize) -> Self {
        Self {
            name: name.into(),
            num_points,
        }
    }
}

impl PointDataset for StaticPoints {
    fn num_points(&self) -> usize {
        self.num_points
    }

    fn gui_name(&self) -> &str {
        &self.name
    }
}

/// Cluster dataset kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryClusterStore {
    pub clusters: Vec<ClusterRecord>,
    /// Number of data-changed notifications raised so far
    pub notifications: usize,
}

impl MemoryClusterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClusterStore for MemoryClusterStore {
    fn clear_clusters(&mut self) {
        self.clusters.clear();
    }

    fn add_cluster(&mut self, record: ClusterRecord) {
        self.clusters.push(record);
    }

    fn notify_data_changed(&mut self) {
        self.notifications += 1;
    }
}

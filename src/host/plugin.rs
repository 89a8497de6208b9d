use super::event::{DataType, DatasetEvent, DatasetEventKind};
use super::store::{ClusterStore, PointDataset};
use crate::dataset::{DatasetIdentity, DatasetRegistry};
use crate::error::PipelineError;
use crate::loader::LabelReader;
use crate::pipeline::run_for_identity;
use tracing::{debug, error, info, warn};

/// Menu entry offered by the host for a selection of datasets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginTrigger {
    pub title: &'static str,
    pub description: &'static str,
}

/// Data types the plugin can run on
pub fn supported_data_types() -> &'static [DataType] {
    &[DataType::Points]
}

/// Trigger for `datasets`, offered when there is at least one and all are
/// point datasets
pub fn trigger_for(datasets: &[DataType]) -> Option<PluginTrigger> {
    if datasets.is_empty() || datasets.iter().any(|t| *t != DataType::Points) {
        return None;
    }

    Some(PluginTrigger {
        title: "Cluster Init Analysis",
        description: "Perform an Cluster Init Analysis",
    })
}

/// Host-side wrapper that keeps an output cluster dataset in sync with the
/// label table of its input point dataset.
///
/// Failures are logged and never returned to the host.
pub struct ClusterInitPlugin<D, S, R> {
    input: D,
    store: S,
    registry: DatasetRegistry,
    reader: R,
    /// Identity resolved by `init`, fixed for the plugin's lifetime
    identity: Option<DatasetIdentity>,
}

impl<D, S, R> ClusterInitPlugin<D, S, R>
where
    D: PointDataset,
    S: ClusterStore,
    R: LabelReader,
{
    pub fn new(input: D, store: S, registry: DatasetRegistry, reader: R) -> Self {
        Self {
            input,
            store,
            registry,
            reader,
            identity: None,
        }
    }

    /// Recognize the input dataset and publish its clusters
    ///
    /// Leaves the plugin idle if the point count matches no registered dataset.
    pub fn init(&mut self) {
        let num_points = self.input.num_points();
        match self.registry.resolve(num_points) {
            Ok(identity) => {
                info!(
                    "{}: creating output dataset {}",
                    self.input.gui_name(),
                    identity.name
                );
                self.identity = Some(identity.clone());
                self.refresh();
            }
            Err(e) => {
                error!(
                    "{}: neither immune-cell nor MNIST dataset ({})",
                    self.input.gui_name(),
                    e
                );
            }
        }
    }

    /// Recompute every cluster from scratch
    ///
    /// Returns the number of clusters published; 0 on failure, in which case
    /// the store is left as it was.
    pub fn refresh(&mut self) -> usize {
        if self.identity.is_none() {
            warn!("{}: refresh before init, ignored", self.input.gui_name());
            return 0;
        }

        match self.run() {
            Ok(count) => count,
            Err(e) => {
                error!("{}: cluster update failed: {}", self.input.gui_name(), e);
                0
            }
        }
    }

    fn run(&mut self) -> Result<usize, PipelineError> {
        let num_points = self.input.num_points();
        let Some(identity) = &self.identity else {
            return Err(PipelineError::UnsupportedDataset { num_points });
        };
        // The input may no longer be the dataset recognized at init
        if identity.expected_point_count != num_points {
            return Err(PipelineError::UnsupportedDataset { num_points });
        }
        let records = run_for_identity(identity, num_points, &self.reader)?;
        let count = records.len();

        self.store.clear_clusters();
        for record in records {
            self.store.add_cluster(record);
        }
        self.store.notify_data_changed();

        Ok(count)
    }

    /// Handle a dataset notification from the host
    pub fn on_data_event(&mut self, event: &DatasetEvent) {
        if event.data_type != DataType::Points {
            return;
        }

        debug!("{}", event.describe());

        let about_input = event.dataset == self.input.gui_name();
        match event.kind {
            DatasetEventKind::Added
            | DatasetEventKind::DataChanged
            | DatasetEventKind::SelectionChanged
                if about_input =>
            {
                self.refresh();
            }
            // Removed input has nothing left to cluster; logged only
            _ => {}
        }
    }

    pub fn output_name(&self) -> Option<&str> {
        self.identity.as_ref().map(|identity| identity.name.as_str())
    }

    pub fn input(&self) -> &D {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut D {
        &mut self.input
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

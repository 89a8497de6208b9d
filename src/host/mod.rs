//! Adapter between the label pipeline and a host visualization application.
//!
//! The host supplies the input point dataset and the output cluster dataset
//! through [`PointDataset`] and [`ClusterStore`], and forwards its dataset
//! notifications to [`ClusterInitPlugin::on_data_event`].

mod event;
mod plugin;
mod store;


pub use event::{DataType, DatasetEvent, DatasetEventKind};
pub use plugin::{supported_data_types, trigger_for, ClusterInitPlugin, PluginTrigger};
pub use store::{ClusterStore, MemoryClusterStore, PointDataset, StaticPoints};

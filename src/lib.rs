// Public API exports
pub mod bucketizer;
pub mod config;
pub mod dataset;
pub mod emitter;
pub mod error;
pub mod host;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod security;

// Re-export main types for convenience
pub use error::{ConfigError, PipelineError};

pub use dataset::{DatasetIdentity, DatasetRegistry, Rgb, CELL_POINT_COUNT, MNIST_POINT_COUNT};

pub use loader::{FileLabelReader, LabelReader, MemoryLabelReader};

pub use bucketizer::{bucketize, Bucket};
pub use emitter::{emit, ClusterRecord, SINGLE_CLUSTER_NAME};

pub use pipeline::{run_for_identity, run_pipeline};

pub use config::PluginConfig;
pub use host::{ClusterInitPlugin, ClusterStore, DatasetEvent, PointDataset};
pub use report::RunReport;
pub use scan::{scan_resources, ResourceEntry};

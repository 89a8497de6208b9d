use thiserror::Error;

/// Terminal failures of a single pipeline run. No cluster records are emitted
/// when any of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Unsupported dataset: no label table registered for {num_points} points")]
    UnsupportedDataset { num_points: usize },

    #[error("Label resource unavailable: {path} ({reason})")]
    ResourceUnavailable { path: String, reason: String },

    #[error("Truncated label resource {path}: expected {expected} bytes, found {found}")]
    TruncatedRead {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("Label name table exhausted: {distinct} distinct labels, {available} names/colors")]
    LabelNameTableExhausted { distinct: usize, available: usize },

    #[error("Label value {label} outside the name table (0..{table_len})")]
    LabelOutOfRange { label: i32, table_len: usize },
}

/// Problems with a dataset registry built from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duplicate dataset for {count} points: {existing} and {duplicate}")]
    DuplicatePointCount {
        count: usize,
        existing: String,
        duplicate: String,
    },

    #[error("Dataset {name}: {names} cluster names but {colors} colors")]
    TableLengthMismatch {
        name: String,
        names: usize,
        colors: usize,
    },
}

/// Kind of data a host dataset holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Points,
    Clusters,
}

/// Dataset lifecycle notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetEventKind {
    Added,
    DataChanged,
    Removed,
    SelectionChanged,
}

/// A lifecycle notification about one host dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEvent {
    pub kind: DatasetEventKind,
    /// GUI name of the dataset the event is about
    pub dataset: String,
    pub data_type: DataType,
}

impl DatasetEvent {
    pub fn new(kind: DatasetEventKind, dataset: impl Into<String>, data_type: DataType) -> Self {
        Self {
            kind,
            dataset: dataset.into(),
            data_type,
        }
    }

    /// Log line for this event
    pub fn describe(&self) -> String {
        let what = match self.kind {
            DatasetEventKind::Added => "was added",
            DatasetEventKind::DataChanged => "data changed",
            DatasetEventKind::Removed => "was removed",
            DatasetEventKind::SelectionChanged => "selection has changed",
        };
        format!("{} {}", self.dataset, what)
    }
}

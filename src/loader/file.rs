use super::{byte_len, decode_labels, LabelReader};
use crate::error::PipelineError;
use crate::security::ResourcePath;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads label resources from a directory on disk
///
/// Resource paths are resolved relative to `root`, so `:data/x.bin` maps to
/// `<root>/data/x.bin`.
#[derive(Debug, Clone)]
pub struct FileLabelReader {
    root: PathBuf,
}

impl FileLabelReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a resource path onto the filesystem
    pub fn locate(&self, resource_path: &str) -> Result<PathBuf, PipelineError> {
        let relative =
            ResourcePath::sanitize(resource_path).map_err(|e| PipelineError::ResourceUnavailable {
                path: resource_path.to_string(),
                reason: e.to_string(),
            })?;
        Ok(self.root.join(relative))
    }
}

impl LabelReader for FileLabelReader {
    fn read_labels(&self, path: &str, count: usize) -> Result<Vec<i32>, PipelineError> {
        let location = self.locate(path)?;
        let unavailable = |e: std::io::Error| PipelineError::ResourceUnavailable {
            path: path.to_string(),
            reason: e.to_string(),
        };

        let file = File::open(&location).map_err(unavailable)?;

        // Only the requested prefix is read; trailing data stays on disk
        let wanted = byte_len(count) as u64;
        let on_disk = file.metadata().map_err(unavailable)?.len();
        let mut bytes = Vec::with_capacity(on_disk.min(wanted) as usize);
        file.take(wanted)
            .read_to_end(&mut bytes)
            .map_err(unavailable)?;

        debug!(
            "Read {} label bytes from {}",
            bytes.len(),
            location.display()
        );

        decode_labels(path, &bytes, count)
    }
}

mod file;
mod memory;


pub use file::FileLabelReader;
pub use memory::MemoryLabelReader;

use crate::dataset::DatasetIdentity;
use crate::error::PipelineError;

/// Bytes per label: one signed 32-bit integer, native byte order
pub const LABEL_WIDTH: usize = std::mem::size_of::<i32>();

/// Source of per-point label arrays
pub trait LabelReader {
    /// Read exactly `count` labels from the resource at `path`
    ///
    /// # Errors
    /// * `ResourceUnavailable` if the resource cannot be opened
    /// * `TruncatedRead` if it holds fewer than `count * 4` bytes
    fn read_labels(&self, path: &str, count: usize) -> Result<Vec<i32>, PipelineError>;
}

impl<F> LabelReader for F
where
    F: Fn(&str, usize) -> Result<Vec<i32>, PipelineError>,
{
    fn read_labels(&self, path: &str, count: usize) -> Result<Vec<i32>, PipelineError> {
        self(path, count)
    }
}

/// Load the label array for `identity`
pub fn load(
    identity: &DatasetIdentity,
    num_points: usize,
    reader: &dyn LabelReader,
) -> Result<Vec<i32>, PipelineError> {
    let mut labels = reader.read_labels(&identity.label_resource_path, num_points)?;

    // Readers are external; hold them to the requested length
    if labels.len() < num_points {
        return Err(PipelineError::TruncatedRead {
            path: identity.label_resource_path.clone(),
            expected: byte_len(num_points),
            found: labels.len() * LABEL_WIDTH,
        });
    }

    labels.truncate(num_points);
    Ok(labels)
}

/// Number of bytes `count` labels occupy
pub fn byte_len(count: usize) -> usize {
    count.saturating_mul(LABEL_WIDTH)
}

/// Decode the first `count` native-endian i32 values from `bytes`
///
/// Trailing bytes past `count * 4` are ignored.
pub fn decode_labels(path: &str, bytes: &[u8], count: usize) -> Result<Vec<i32>, PipelineError> {
    let expected = byte_len(count);
    if bytes.len() < expected {
        return Err(PipelineError::TruncatedRead {
            path: path.to_string(),
            expected,
            found: bytes.len(),
        });
    }

    Ok(bytes[..expected]
        .chunks_exact(LABEL_WIDTH)
        .map(|chunk| i32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

/// Encode labels in the on-disk layout
pub fn encode_labels(labels: &[i32]) -> Vec<u8> {
    labels.iter().flat_map(|label| label.to_ne_bytes()).collect()
}

mod types;


pub use types::ClusterRecord;

use crate::bucketizer::Bucket;
use crate::dataset::DatasetIdentity;
use crate::error::PipelineError;
use tracing::debug;

/// Name given to the only cluster when every point shares one label
pub const SINGLE_CLUSTER_NAME: &str = "All Cells";

/// Name for bucket `position` out of `bucket_count`
///
/// `position` must index into the identity's name table.
pub fn resolve_name(
    position: usize,
    bucket_count: usize,
    identity: &DatasetIdentity,
) -> &str {
    if bucket_count == 1 {
        return SINGLE_CLUSTER_NAME;
    }
    &identity.cluster_names[position]
}

/// Turn buckets into cluster records using the identity's name/color tables.
///
/// Buckets must already be in ascending label order; bucket `j` takes
/// table entry `j`. Fails before producing anything if the tables are too
/// short or a label falls outside them.
pub fn emit(
    buckets: Vec<Bucket>,
    identity: &DatasetIdentity,
) -> Result<Vec<ClusterRecord>, PipelineError> {
    let available = identity.table_len();
    let bucket_count = buckets.len();

    if bucket_count > available {
        return Err(PipelineError::LabelNameTableExhausted {
            distinct: bucket_count,
            available,
        });
    }

    if let Some(bucket) = buckets
        .iter()
        .find(|b| b.label < 0 || b.label as usize >= available)
    {
        return Err(PipelineError::LabelOutOfRange {
            label: bucket.label,
            table_len: available,
        });
    }

    let mut records = Vec::with_capacity(bucket_count);
    for (position, bucket) in buckets.into_iter().enumerate() {
        let name = resolve_name(position, bucket_count, identity);
        let color = identity.cluster_colors[position];

        debug!("cluster name: {} ({} points)", name, bucket.len());
        records.push(ClusterRecord::new(name, color, bucket.indices));
    }

    Ok(records)
}

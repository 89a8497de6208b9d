mod types;

#[cfg(test)]
mod tests;

pub use types::Bucket;

/// Sorted, deduplicated label values
pub fn distinct_labels(labels: &[i32]) -> Vec<i32> {
    let mut distinct = labels.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    distinct
}

/// Partition point indices by label value.
///
/// Buckets come out in ascending label order, and each bucket lists its
/// point indices in ascending order. Every index lands in exactly one bucket.
pub fn bucketize(labels: &[i32]) -> Vec<Bucket> {
    let distinct = distinct_labels(labels);

    let mut buckets: Vec<Bucket> = distinct.iter().map(|&label| Bucket::new(label)).collect();

    for (point, label) in labels.iter().enumerate() {
        // Every label is in `distinct`, so the search always hits
        if let Ok(slot) = distinct.binary_search(label) {
            buckets[slot].indices.push(point as u32);
        }
    }

    buckets
}

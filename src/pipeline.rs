use crate::bucketizer::bucketize;
use crate::dataset::{DatasetIdentity, DatasetRegistry};
use crate::emitter::{emit, ClusterRecord};
use crate::error::PipelineError;
use crate::loader::{load, LabelReader};
use tracing::info;

/// Resolve the dataset for `num_points`, load its labels and turn them into
/// cluster records.
///
/// Either every record for the run is returned or none is.
pub fn run_pipeline(
    num_points: usize,
    registry: &DatasetRegistry,
    reader: &dyn LabelReader,
) -> Result<Vec<ClusterRecord>, PipelineError> {
    let identity = registry.resolve(num_points)?;
    run_for_identity(identity, num_points, reader)
}

/// Same as [`run_pipeline`] for an already resolved identity
pub fn run_for_identity(
    identity: &DatasetIdentity,
    num_points: usize,
    reader: &dyn LabelReader,
) -> Result<Vec<ClusterRecord>, PipelineError> {
    let labels = load(identity, num_points, reader)?;
    let buckets = bucketize(&labels);
    let records = emit(buckets, identity)?;

    info!(
        "{}: {} clusters over {} points",
        identity.name,
        records.len(),
        num_points
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Rgb, MNIST_POINT_COUNT};
    use crate::loader::MemoryLabelReader;

    fn ten_point_registry() -> DatasetRegistry {
        let mnist = DatasetIdentity::mnist_cluster();
        let mut registry = DatasetRegistry::builtin();
        registry
            .register(DatasetIdentity::new(
                "Ten",
                10,
                ":data/ten.bin",
                mnist.cluster_names,
                mnist.cluster_colors,
            ))
            .unwrap();
        registry
    }

    #[test]
    fn test_end_to_end_two_classes() {
        let registry = ten_point_registry();
        let reader =
            MemoryLabelReader::new().with_labels(":data/ten.bin", &[0, 0, 1, 1, 1, 0, 1, 0, 1, 1]);

        let records = run_pipeline(10, &registry, &reader).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "0");
        assert_eq!(records[0].indices, vec![0, 1, 5, 7]);
        assert_eq!(records[0].color, Rgb::new(245, 149, 28));
        assert_eq!(records[1].name, "1");
        assert_eq!(records[1].indices, vec![2, 3, 4, 6, 8, 9]);
    }

    #[test]
    fn test_unsupported_count_produces_nothing() {
        let registry = DatasetRegistry::builtin();
        let reader = MemoryLabelReader::new();

        let err = run_pipeline(123, &registry, &reader).unwrap_err();
        assert_eq!(err, PipelineError::UnsupportedDataset { num_points: 123 });
    }

    #[test]
    fn test_truncated_resource() {
        let registry = ten_point_registry();
        let reader = MemoryLabelReader::new().with_labels(":data/ten.bin", &[0, 1, 0]);

        let err = run_pipeline(10, &registry, &reader).unwrap_err();
        assert_eq!(
            err,
            PipelineError::TruncatedRead {
                path: ":data/ten.bin".to_string(),
                expected: 40,
                found: 12,
            }
        );
    }

    #[test]
    fn test_missing_resource() {
        let registry = DatasetRegistry::builtin();
        let reader = MemoryLabelReader::new();

        let err = run_pipeline(MNIST_POINT_COUNT, &registry, &reader).unwrap_err();
        assert!(matches!(err, PipelineError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_full_mnist_run() {
        let registry = DatasetRegistry::builtin();
        let labels: Vec<i32> = (0..MNIST_POINT_COUNT as i32).map(|i| i % 10).collect();
        let reader = MemoryLabelReader::new().with_labels(":data/mnist_60000_labels.bin", &labels);

        let records = run_pipeline(MNIST_POINT_COUNT, &registry, &reader).unwrap();

        assert_eq!(records.len(), 10);
        assert!(records.iter().all(|r| r.len() == 6000));
        assert_eq!(records[9].name, "9");
        assert_eq!(records[9].indices[0], 9);
    }
}

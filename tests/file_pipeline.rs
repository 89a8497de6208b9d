use cluster_init::loader::encode_labels;
use cluster_init::{
    run_pipeline, DatasetRegistry, FileLabelReader, PipelineError, CELL_POINT_COUNT,
    SINGLE_CLUSTER_NAME,
};
use std::fs;
use tempfile::TempDir;

fn write_resource(dir: &TempDir, name: &str, labels: &[i32]) {
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join(name), encode_labels(labels)).unwrap();
}

#[test]
fn test_cell_dataset_from_disk() {
    let dir = TempDir::new().unwrap();
    let labels: Vec<i32> = (0..CELL_POINT_COUNT as i32).map(|i| i % 18).collect();
    write_resource(&dir, "cell_all_labels.bin", &labels);

    let records = run_pipeline(
        CELL_POINT_COUNT,
        &DatasetRegistry::builtin(),
        &FileLabelReader::new(dir.path()),
    )
    .unwrap();

    assert_eq!(records.len(), 18);
    assert_eq!(records[0].name, "CD56+CD8a-NK MC17");
    assert_eq!(records[17].name, "CD7_NK MC18");
    assert_eq!(records.iter().map(|r| r.len()).sum::<usize>(), CELL_POINT_COUNT);
}

#[test]
fn test_single_population_on_disk() {
    let dir = TempDir::new().unwrap();
    write_resource(&dir, "cell_all_labels.bin", &vec![6; CELL_POINT_COUNT]);

    let records = run_pipeline(
        CELL_POINT_COUNT,
        &DatasetRegistry::builtin(),
        &FileLabelReader::new(dir.path()),
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, SINGLE_CLUSTER_NAME);
}

#[test]
fn test_truncated_file_on_disk() {
    let dir = TempDir::new().unwrap();
    write_resource(&dir, "mnist_60000_labels.bin", &[1; 100]);

    let err = run_pipeline(
        60000,
        &DatasetRegistry::builtin(),
        &FileLabelReader::new(dir.path()),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PipelineError::TruncatedRead {
            path: ":data/mnist_60000_labels.bin".to_string(),
            expected: 240000,
            found: 400,
        }
    );
}

#[test]
fn test_too_many_labels_for_table() {
    let dir = TempDir::new().unwrap();
    let labels: Vec<i32> = (0..60000).map(|i| i % 11).collect();
    write_resource(&dir, "mnist_60000_labels.bin", &labels);

    let err = run_pipeline(
        60000,
        &DatasetRegistry::builtin(),
        &FileLabelReader::new(dir.path()),
    )
    .unwrap_err();

    assert_eq!(
        err,
        PipelineError::LabelNameTableExhausted {
            distinct: 11,
            available: 10
        }
    );
}

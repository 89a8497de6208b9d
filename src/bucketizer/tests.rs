use super::*;

#[test]
fn test_bucket_order_is_ascending_label() {
    let buckets = bucketize(&[2, 0, 1, 0, 2]);

    assert_eq!(
        buckets,
        vec![
            Bucket {
                label: 0,
                indices: vec![1, 3]
            },
            Bucket {
                label: 1,
                indices: vec![2]
            },
            Bucket {
                label: 2,
                indices: vec![0, 4]
            },
        ]
    );
}

#[test]
fn test_two_class_example() {
    let buckets = bucketize(&[0, 0, 1, 1, 1, 0, 1, 0, 1, 1]);

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].indices, vec![0, 1, 5, 7]);
    assert_eq!(buckets[1].indices, vec![2, 3, 4, 6, 8, 9]);
}

#[test]
fn test_single_class() {
    let buckets = bucketize(&[4, 4, 4]);

    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].label, 4);
    assert_eq!(buckets[0].indices, vec![0, 1, 2]);
}

#[test]
fn test_empty_labels() {
    assert!(bucketize(&[]).is_empty());
}

#[test]
fn test_gaps_and_negative_values() {
    let buckets = bucketize(&[7, -1, 3, 7]);
    let labels: Vec<i32> = buckets.iter().map(|b| b.label).collect();

    assert_eq!(labels, vec![-1, 3, 7]);
    assert_eq!(buckets[2].indices, vec![0, 3]);
}

#[test]
fn test_distinct_labels_sorted_dedup() {
    assert_eq!(distinct_labels(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
}

#[test]
fn test_bucket_len() {
    let mut bucket = Bucket::new(0);
    assert!(bucket.is_empty());
    bucket.indices.push(9);
    assert_eq!(bucket.len(), 1);
}

mod common;

use dataprep_pipeline::data_ingestion::{CsvLoader, TrainTestSplitter};
use polars::prelude::*;
use rstest::rstest;

fn frame_of(n: usize) -> DataFrame {
    let ids: Vec<i64> = (0..n as i64).collect();
    df!("booking_id" => ids).unwrap()
}

#[rstest]
#[case(10, 0.5)]
#[case(20, 0.8)]
#[case(33, 0.7)]
#[case(100, 0.25)]
#[case(9, 0.9)]
fn test_partition_counts_and_coverage(#[case] n: usize, #[case] ratio: f64) {
    let df = frame_of(n);
    let (train, test) = TrainTestSplitter::new(ratio, 42).split(&df).unwrap();

    // |train| = round(r·N)，|test| 為其餘列
    let expected_train = (ratio * n as f64).round() as usize;
    assert_eq!(train.height(), expected_train);
    assert_eq!(test.height(), n - expected_train);

    // 兩個子集為原始資料列的不重疊分割
    let collect = |df: &DataFrame| -> Vec<i64> {
        df.column("booking_id")
            .unwrap()
            .as_materialized_series()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect()
    };
    let mut combined = collect(&train);
    combined.extend(collect(&test));
    combined.sort();
    let expected: Vec<i64> = (0..n as i64).collect();
    assert_eq!(combined, expected);
}

#[test]
fn test_sample_dataset_splits_deterministically() {
    let df = CsvLoader::default().read_string(&common::sample_csv()).unwrap();
    let splitter = TrainTestSplitter::new(0.8, 42);

    let (train_a, test_a) = splitter.split(&df).unwrap();
    let (train_b, test_b) = splitter.split(&df).unwrap();

    assert!(train_a.equals(&train_b));
    assert!(test_a.equals(&test_b));
}

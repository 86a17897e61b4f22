use dataprep_pipeline::config::{
    ApplicationConfig, DataIngestionConfig, LogConfig, PathsConfig, StorageConfig,
};
use dataprep_pipeline::storage::RemoteStore;
use opendal::{services::Memory, Operator};
use std::path::Path;

/// 建立記憶體內物件儲存後端
pub fn memory_operator() -> Operator {
    Operator::new(Memory::default())
        .expect("無法建立記憶體儲存後端")
        .finish()
}

/// 以記憶體後端建立 RemoteStore
pub fn memory_store(bucket: &str) -> (RemoteStore, Operator) {
    let operator = memory_operator();
    (RemoteStore::from_operator(operator.clone(), bucket), operator)
}

/// 範例資料集 CSV 內容，共 20 筆資料列
pub fn sample_csv() -> String {
    let mut csv = String::from("booking_id,lead_time,avg_price_per_room,booking_status\n");
    for i in 0..20 {
        let status = if i % 3 == 0 { "Canceled" } else { "Not_Canceled" };
        csv.push_str(&format!("{},{},{:.1},{}\n", i, 10 + i * 7, 50.0 + i as f64 * 2.5, status));
    }
    csv
}

/// 建立指向暫存目錄的測試配置
pub fn test_config(raw_dir: &Path) -> ApplicationConfig {
    ApplicationConfig {
        log: LogConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
            directory: "logs".to_string(),
        },
        storage: StorageConfig {
            endpoint: None,
            credential_path: None,
        },
        data_ingestion: DataIngestionConfig {
            bucket_name: "test-bucket".to_string(),
            bucket_file_name: "hotel_reservations.csv".to_string(),
            train_ratio: 0.8,
            random_seed: 42,
        },
        paths: PathsConfig {
            raw_dir: raw_dir.to_str().expect("暫存目錄路徑非 UTF-8").to_string(),
            raw_file: "raw.csv".to_string(),
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
        },
    }
}

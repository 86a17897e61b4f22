//! 資料攝取示範程式
//!
//! 以記憶體內儲存後端展示完整的攝取流程，不需要任何雲端憑證。

use anyhow::Result;
use dataprep_pipeline::config::{
    ApplicationConfig, DataIngestionConfig, LogConfig, PathsConfig, StorageConfig,
};
use dataprep_pipeline::data_ingestion::DataIngestion;
use dataprep_pipeline::storage::RemoteStore;
use opendal::{services::Memory, Operator};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日誌
    tracing_subscriber::fmt::init();

    // 準備記憶體內儲存桶與範例物件
    let operator = Operator::new(Memory::default())?.finish();
    let mut csv = String::from("booking_id,lead_time,avg_price_per_room,booking_status\n");
    for i in 0..10 {
        csv.push_str(&format!("{},{},{:.1},Not_Canceled\n", i, 30 + i, 80.0 + i as f64));
    }
    operator
        .write("hotel_reservations.csv", csv.into_bytes())
        .await?;
    info!("範例物件已寫入記憶體儲存桶");

    // 組裝示範配置
    let config = ApplicationConfig {
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
            bucket_name: "demo-bucket".to_string(),
            bucket_file_name: "hotel_reservations.csv".to_string(),
            train_ratio: 0.8,
            random_seed: 42,
        },
        paths: PathsConfig {
            raw_dir: "artifacts/demo".to_string(),
            raw_file: "raw.csv".to_string(),
            train_file: "train.csv".to_string(),
            test_file: "test.csv".to_string(),
        },
    };

    // 建立管線並執行完整流程
    let store = RemoteStore::from_operator(operator, &config.data_ingestion.bucket_name);
    let ingestion = DataIngestion::with_store(&config, store)?;
    ingestion.run().await?;

    info!(
        "示範完成，輸出位於 {} 與 {}",
        config.paths.train_path().display(),
        config.paths.test_path().display()
    );

    Ok(())
}

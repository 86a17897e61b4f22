//! 資料攝取管線
//!
//! 依固定順序執行：儲存診斷 → 下載原始 CSV → 切分訓練／測試資料集。
//! 任一步驟失敗即中止後續步驟，錯誤記錄後回傳給呼叫端。

use super::csv_io::{CsvError, CsvLoader, CsvStore};
use super::splitter::TrainTestSplitter;
use crate::config::{ApplicationConfig, DataIngestionConfig, PathsConfig, Validator};
use crate::storage::{RemoteStore, StorageError};
use chrono::Utc;
use std::fs;
use thiserror::Error;
use tracing::{error, info, warn};

/// 資料攝取錯誤類型
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("配置錯誤: {0}")]
    Config(#[from] crate::config::ValidationError),

    #[error("遠端儲存錯誤: {0}")]
    Storage(#[from] StorageError),

    #[error("資料處理錯誤: {0}")]
    Data(#[from] CsvError),

    #[error("本地檔案系統錯誤: {0}")]
    Io(#[from] std::io::Error),
}

/// 資料攝取結果類型
pub type IngestionResult<T> = Result<T, IngestionError>;

/// 資料攝取管線
///
/// 自設定的儲存桶下載原始 CSV，並以固定種子切分為訓練／測試資料集。
#[derive(Debug)]
pub struct DataIngestion {
    config: DataIngestionConfig,
    paths: PathsConfig,
    store: RemoteStore,
}

impl DataIngestion {
    /// 依應用程式配置建立管線，儲存後端為配置指定的 GCS 儲存桶
    pub fn new(app_config: &ApplicationConfig) -> IngestionResult<Self> {
        let store = RemoteStore::new_gcs(
            &app_config.storage,
            &app_config.data_ingestion.bucket_name,
        )?;
        Self::with_store(app_config, store)
    }

    /// 以指定的儲存後端建立管線
    pub fn with_store(app_config: &ApplicationConfig, store: RemoteStore) -> IngestionResult<Self> {
        let config = app_config.data_ingestion.clone();
        let paths = app_config.paths.clone();

        // 攝取區段與路徑需為有效配置
        config.validate()?;
        paths.validate()?;

        // 確保原始資料目錄存在，重複執行不報錯
        fs::create_dir_all(&paths.raw_dir)?;

        info!(
            "資料攝取啟動，儲存桶: {}，目標檔案: {}",
            config.bucket_name, config.bucket_file_name
        );

        Ok(Self {
            config,
            paths,
            store,
        })
    }

    /// 記錄遠端儲存的診斷資訊
    ///
    /// 僅產生日誌輸出：檢查儲存桶可用性並列出其中的物件，
    /// 空的儲存桶記為警告而非錯誤。
    pub async fn log_storage_info(&self) -> IngestionResult<()> {
        info!("檢查儲存桶 '{}' 可用性...", self.config.bucket_name);
        self.store.check().await?;

        info!("列出儲存桶 '{}' 內的物件", self.config.bucket_name);
        let objects = self.store.list_objects().await?;

        if objects.is_empty() {
            warn!("儲存桶 '{}' 內沒有任何物件", self.config.bucket_name);
        }
        for name in &objects {
            info!("發現物件: {}", name);
        }

        Ok(())
    }

    /// 自儲存桶下載設定的 CSV 物件到本地原始資料路徑
    pub async fn download_csv(&self) -> IngestionResult<()> {
        let raw_path = self.paths.raw_path();

        self.store
            .download_to(&self.config.bucket_file_name, &raw_path)
            .await?;

        info!("CSV 檔案已下載至 {}", raw_path.display());
        Ok(())
    }

    /// 讀取本地原始 CSV 並切分為訓練／測試資料集
    ///
    /// 讀取失敗時不會寫出任何輸出檔案。
    pub async fn split_data(&self) -> IngestionResult<()> {
        info!("開始切分訓練／測試資料集");

        let raw_path = self.paths.raw_path();
        let data = CsvLoader::default().read_file(&raw_path)?;

        let splitter = TrainTestSplitter::new(self.config.train_ratio, self.config.random_seed);
        let (mut train, mut test) = splitter.split(&data).map_err(CsvError::from)?;

        let store = CsvStore::default();
        let train_path = self.paths.train_path();
        let test_path = self.paths.test_path();

        store.write_file(&mut train, &train_path)?;
        store.write_file(&mut test, &test_path)?;

        info!(
            "訓練資料集已寫入 {}，共 {} 列",
            train_path.display(),
            train.height()
        );
        info!(
            "測試資料集已寫入 {}，共 {} 列",
            test_path.display(),
            test.height()
        );

        Ok(())
    }

    /// 依固定順序執行完整攝取流程
    ///
    /// 無論成敗，結尾一定會輸出完成日誌；錯誤會記錄後回傳給呼叫端，
    /// 由進入點決定結束碼。
    pub async fn run(&self) -> IngestionResult<()> {
        let started = Utc::now();
        info!("開始資料攝取流程");

        let result = self.execute().await;
        if let Err(err) = &result {
            error!("資料攝取流程失敗: {}", err);
        }

        // 結尾日誌在成功與失敗路徑都會輸出
        let elapsed_ms = (Utc::now() - started).num_milliseconds();
        info!("資料攝取流程結束，耗時 {} ms", elapsed_ms);

        result
    }

    async fn execute(&self) -> IngestionResult<()> {
        self.log_storage_info().await?;
        self.download_csv().await?;
        self.split_data().await?;

        info!("資料攝取全部步驟完成");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogConfig, StorageConfig};
    use opendal::{services::Memory, Operator};

    fn test_app_config(raw_dir: &str) -> ApplicationConfig {
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
                bucket_file_name: "dataset.csv".to_string(),
                train_ratio: 0.8,
                random_seed: 42,
            },
            paths: PathsConfig {
                raw_dir: raw_dir.to_string(),
                raw_file: "raw.csv".to_string(),
                train_file: "train.csv".to_string(),
                test_file: "test.csv".to_string(),
            },
        }
    }

    fn memory_store() -> RemoteStore {
        let operator = Operator::new(Memory::default())
            .expect("無法建立記憶體儲存後端")
            .finish();
        RemoteStore::from_operator(operator, "test-bucket")
    }

    #[tokio::test]
    async fn test_with_store_creates_raw_dir() {
        let dir = tempfile::tempdir().unwrap();
        let raw_dir = dir.path().join("raw");
        let config = test_app_config(raw_dir.to_str().unwrap());

        let _ingestion = DataIngestion::with_store(&config, memory_store()).unwrap();
        assert!(raw_dir.is_dir());

        // 重複建立不報錯
        let _again = DataIngestion::with_store(&config, memory_store()).unwrap();
    }

    #[tokio::test]
    async fn test_with_store_rejects_invalid_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_app_config(dir.path().to_str().unwrap());
        config.data_ingestion.train_ratio = 1.5;

        let err = DataIngestion::with_store(&config, memory_store()).unwrap_err();
        assert!(matches!(err, IngestionError::Config(_)));
    }
}

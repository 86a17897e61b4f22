use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 應用程序配置結構
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub log: LogConfig,
    pub storage: StorageConfig,
    pub data_ingestion: DataIngestionConfig,
    pub paths: PathsConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.data_ingestion.validate()?;
        self.paths.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
    pub directory: String,
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證日誌級別
        ValidationUtils::one_of(
            &self.level.to_lowercase(),
            &["trace", "debug", "info", "warn", "error"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
            "log.level",
        )?;

        // 驗證日誌格式
        ValidationUtils::one_of(
            &self.format.to_lowercase(),
            &["pretty", "json"]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>(),
            "log.format",
        )?;

        ValidationUtils::not_empty(&self.directory, "log.directory")?;

        Ok(())
    }
}

/// 遠端物件儲存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 自訂服務端點，本地模擬器等情境使用
    pub endpoint: Option<String>,
    /// 服務帳戶金鑰檔案路徑，未設定時使用環境預設憑證
    pub credential_path: Option<String>,
}

/// 資料攝取配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataIngestionConfig {
    /// 儲存桶名稱
    pub bucket_name: String,
    /// 儲存桶內的目標 CSV 物件名稱
    pub bucket_file_name: String,
    /// 訓練集佔比，需嚴格落在 (0, 1) 區間
    pub train_ratio: f64,
    /// 切分用的隨機種子，固定種子確保切分結果可重現
    #[serde(default = "default_random_seed")]
    pub random_seed: u64,
}

fn default_random_seed() -> u64 {
    42
}

impl Validator for DataIngestionConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.bucket_name, "data_ingestion.bucket_name")?;
        ValidationUtils::not_empty(&self.bucket_file_name, "data_ingestion.bucket_file_name")?;
        ValidationUtils::ratio_in_open_unit(self.train_ratio, "data_ingestion.train_ratio")?;

        Ok(())
    }
}

/// 本地檔案路徑配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// 原始資料目錄
    pub raw_dir: String,
    /// 原始 CSV 檔名
    pub raw_file: String,
    /// 訓練集輸出檔名
    pub train_file: String,
    /// 測試集輸出檔名
    pub test_file: String,
}

impl PathsConfig {
    /// 原始 CSV 的完整路徑
    pub fn raw_path(&self) -> PathBuf {
        Path::new(&self.raw_dir).join(&self.raw_file)
    }

    /// 訓練集輸出的完整路徑
    pub fn train_path(&self) -> PathBuf {
        Path::new(&self.raw_dir).join(&self.train_file)
    }

    /// 測試集輸出的完整路徑
    pub fn test_path(&self) -> PathBuf {
        Path::new(&self.raw_dir).join(&self.test_file)
    }
}

impl Validator for PathsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.raw_dir, "paths.raw_dir")?;
        ValidationUtils::not_empty(&self.raw_file, "paths.raw_file")?;
        ValidationUtils::not_empty(&self.train_file, "paths.train_file")?;
        ValidationUtils::not_empty(&self.test_file, "paths.test_file")?;

        Ok(())
    }
}

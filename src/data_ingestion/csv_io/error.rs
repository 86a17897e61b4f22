//! CSV 處理錯誤定義

use thiserror::Error;

/// CSV 處理錯誤類型
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("檔案讀寫錯誤: {0}")]
    Io(#[from] std::io::Error),

    #[error("找不到 CSV 檔案: {0}")]
    FileNotFound(String),

    #[error("Polars 錯誤: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

/// CSV 處理結果類型
pub type CsvResult<T> = Result<T, CsvError>;

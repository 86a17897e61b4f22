//! 物件儲存錯誤定義

use thiserror::Error;

/// 物件儲存錯誤類型
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("初始化儲存後端失敗: {0}")]
    Backend(#[source] opendal::Error),

    #[error("儲存桶 '{bucket}' 不可用: {source}")]
    Unavailable {
        bucket: String,
        #[source]
        source: opendal::Error,
    },

    #[error("列舉儲存桶 '{bucket}' 內的物件失敗: {source}")]
    List {
        bucket: String,
        #[source]
        source: opendal::Error,
    },

    #[error("下載物件 '{object}' 失敗: {source}")]
    Download {
        object: String,
        #[source]
        source: opendal::Error,
    },

    #[error("寫入本地檔案 '{path}' 失敗: {source}")]
    LocalWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// 錯誤是否源自遠端物件不存在
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::Download { source, .. } => source.kind() == opendal::ErrorKind::NotFound,
            _ => false,
        }
    }
}

/// 物件儲存結果類型
pub type StorageResult<T> = Result<T, StorageError>;

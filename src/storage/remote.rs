//! GCS 物件儲存封裝

use super::error::{StorageError, StorageResult};
use crate::config::StorageConfig;
use opendal::{services::Gcs, Operator};
use std::path::Path;
use tracing::debug;

/// 遠端物件儲存封裝，範圍限定於單一儲存桶
#[derive(Debug, Clone)]
pub struct RemoteStore {
    operator: Operator,
    bucket: String,
}

impl RemoteStore {
    /// 依配置建立 GCS 後端
    pub fn new_gcs(config: &StorageConfig, bucket: &str) -> StorageResult<Self> {
        let mut builder = Gcs::default().bucket(bucket);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(credential_path) = &config.credential_path {
            builder = builder.credential_path(credential_path);
        }

        let operator = Operator::new(builder)
            .map_err(StorageError::Backend)?
            .finish();

        Ok(Self::from_operator(operator, bucket))
    }

    /// 由現成的 Operator 建立，供測試或替代後端使用
    pub fn from_operator(operator: Operator, bucket: &str) -> Self {
        Self {
            operator,
            bucket: bucket.to_string(),
        }
    }

    /// 此儲存封裝對應的儲存桶名稱
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// 檢查儲存桶是否可用
    pub async fn check(&self) -> StorageResult<()> {
        self.operator
            .check()
            .await
            .map_err(|source| StorageError::Unavailable {
                bucket: self.bucket.clone(),
                source,
            })
    }

    /// 列出儲存桶內所有物件名稱
    pub async fn list_objects(&self) -> StorageResult<Vec<String>> {
        let entries = self
            .operator
            .list("/")
            .await
            .map_err(|source| StorageError::List {
                bucket: self.bucket.clone(),
                source,
            })?;

        let names = entries
            .into_iter()
            .filter(|entry| entry.metadata().mode().is_file())
            .map(|entry| entry.path().trim_start_matches('/').to_string())
            .collect();

        Ok(names)
    }

    /// 下載物件並寫入本地路徑
    ///
    /// 物件內容先完整讀入，讀取失敗時不會建立本地檔案。
    pub async fn download_to(&self, object: &str, local_path: &Path) -> StorageResult<()> {
        debug!("自儲存桶 '{}' 下載物件 '{}'", self.bucket, object);

        let data = self
            .operator
            .read(object)
            .await
            .map_err(|source| StorageError::Download {
                object: object.to_string(),
                source,
            })?;

        tokio::fs::write(local_path, data.to_vec())
            .await
            .map_err(|source| StorageError::LocalWrite {
                path: local_path.display().to_string(),
                source,
            })?;

        Ok(())
    }
}

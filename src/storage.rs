//! 遠端物件儲存模組
//!
//! 封裝單一儲存桶範圍的物件存取：可用性檢查、物件列舉與下載。

pub mod error;
pub mod remote;

pub use error::{StorageError, StorageResult};
pub use remote::RemoteStore;

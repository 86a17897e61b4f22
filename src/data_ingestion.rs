//! 資料攝取模組
//!
//! 負責自遠端儲存桶取得原始 CSV，並以固定種子切分為訓練／測試資料集。

pub mod csv_io;
pub mod pipeline;
pub mod splitter;

pub use csv_io::{CsvError, CsvLoader, CsvReaderConfig, CsvResult, CsvStore, CsvWriterConfig};
pub use pipeline::{DataIngestion, IngestionError, IngestionResult};
pub use splitter::TrainTestSplitter;

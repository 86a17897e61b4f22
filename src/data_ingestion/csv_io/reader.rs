//! CSV 檔案讀取器

use super::error::{CsvError, CsvResult};
use polars::prelude::*;
use std::path::Path;

/// CSV 讀取器配置
#[derive(Debug, Clone)]
pub struct CsvReaderConfig {
    /// 是否有標題行
    pub has_header: bool,
    /// 分隔符
    pub separator: u8,
    /// 要跳過的行數
    pub skip_rows: usize,
    /// 要讀取的行數，None 表示全部
    pub n_rows: Option<usize>,
    /// 推斷模式類型的取樣行數
    pub infer_schema_length: Option<usize>,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
            skip_rows: 0,
            n_rows: None,
            infer_schema_length: Some(1000),
        }
    }
}

/// CSV 檔案讀取器
#[derive(Debug, Clone)]
pub struct CsvLoader {
    config: CsvReaderConfig,
}

impl CsvLoader {
    /// 創建新的 CSV 讀取器
    pub fn new(config: CsvReaderConfig) -> Self {
        Self { config }
    }

    /// 使用預設配置創建 CSV 讀取器
    pub fn default() -> Self {
        Self::new(CsvReaderConfig::default())
    }

    /// 設定分隔符
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.config.separator = separator;
        self
    }

    /// 設定是否有標題行
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    /// 設定要讀取的行數
    pub fn with_n_rows(mut self, n_rows: Option<usize>) -> Self {
        self.config.n_rows = n_rows;
        self
    }

    /// 從檔案路徑讀取 CSV
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> CsvResult<DataFrame> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CsvError::FileNotFound(path.display().to_string()));
        }

        let df = self
            .read_options()
            .try_into_reader_with_file_path(Some(path.into()))?
            .finish()?;

        Ok(df)
    }

    /// 從字節數組讀取 CSV
    pub fn read_bytes(&self, data: &[u8]) -> CsvResult<DataFrame> {
        use std::io::Cursor;

        let cursor = Cursor::new(data);
        let df = self
            .read_options()
            .into_reader_with_file_handle(cursor)
            .finish()?;

        Ok(df)
    }

    /// 從字串讀取 CSV
    pub fn read_string(&self, data: &str) -> CsvResult<DataFrame> {
        self.read_bytes(data.as_bytes())
    }

    fn read_options(&self) -> CsvReadOptions {
        CsvReadOptions::default()
            .with_has_header(self.config.has_header)
            .with_parse_options(CsvParseOptions::default().with_separator(self.config.separator))
            .with_skip_rows(self.config.skip_rows)
            .with_n_rows(self.config.n_rows)
            .with_infer_schema_length(self.config.infer_schema_length)
    }
}

//! CSV 檔案寫入器

use super::error::CsvResult;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// CSV 寫入器配置
#[derive(Debug, Clone)]
pub struct CsvWriterConfig {
    /// 是否寫入標題行
    pub include_header: bool,
    /// 分隔符
    pub separator: u8,
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self {
            include_header: true,
            separator: b',',
        }
    }
}

/// CSV 檔案寫入器
///
/// 輸出不含列索引欄位，僅寫出資料框本身的欄位。
#[derive(Debug, Clone)]
pub struct CsvStore {
    config: CsvWriterConfig,
}

impl CsvStore {
    /// 創建新的 CSV 寫入器
    pub fn new(config: CsvWriterConfig) -> Self {
        Self { config }
    }

    /// 使用預設配置創建 CSV 寫入器
    pub fn default() -> Self {
        Self::new(CsvWriterConfig::default())
    }

    /// 將資料框寫入指定路徑
    ///
    /// 寫入非原子性，中途失敗可能留下不完整的檔案。
    pub fn write_file<P: AsRef<Path>>(&self, df: &mut DataFrame, path: P) -> CsvResult<()> {
        let mut file = File::create(path.as_ref())?;

        CsvWriter::new(&mut file)
            .include_header(self.config.include_header)
            .with_separator(self.config.separator)
            .finish(df)?;

        Ok(())
    }
}

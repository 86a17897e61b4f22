//! 訓練／測試資料切分

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 以固定種子進行訓練／測試切分的切分器
///
/// 相同輸入、比例與種子會得到完全相同的切分結果。
#[derive(Debug, Clone)]
pub struct TrainTestSplitter {
    train_ratio: f64,
    seed: u64,
}

impl TrainTestSplitter {
    /// 創建切分器
    ///
    /// `train_ratio` 為訓練集佔比，需嚴格落在 (0, 1) 區間，由配置層驗證。
    pub fn new(train_ratio: f64, seed: u64) -> Self {
        Self { train_ratio, seed }
    }

    /// 將資料列隨機切分為（訓練集, 測試集）
    ///
    /// 訓練集取 `round(train_ratio * n)` 列，其餘為測試集；
    /// 兩個子集不重疊且合併後涵蓋全部原始資料列。
    pub fn split(&self, df: &DataFrame) -> PolarsResult<(DataFrame, DataFrame)> {
        let height = df.height();

        let mut indices: Vec<IdxSize> = (0..height as IdxSize).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let train_size = (self.train_ratio * height as f64).round() as usize;
        let train_idx = IdxCa::from_vec("train_idx".into(), indices[..train_size].to_vec());
        let test_idx = IdxCa::from_vec("test_idx".into(), indices[train_size..].to_vec());

        let train = df.take(&train_idx)?;
        let test = df.take(&test_idx)?;

        Ok((train, test))
    }
}

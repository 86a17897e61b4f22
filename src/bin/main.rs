use anyhow::{anyhow, Result};
use dataprep_pipeline::config;
use dataprep_pipeline::data_ingestion::DataIngestion;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化配置
    config::init_config()?;
    let app_config = config::get_config();

    // 初始化日誌系統，守衛需存活至程式結束
    let _log_guard = init_logging(&app_config.log)?;

    // 建立並執行資料攝取管線
    let ingestion = DataIngestion::new(app_config)?;
    ingestion.run().await?;

    info!("程式執行完成");
    Ok(())
}

fn init_logging(
    log_config: &config::LogConfig,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    // 檔案日誌目錄（每日輪替）
    std::fs::create_dir_all(&log_config.directory)
        .map_err(|e| anyhow!("無法創建日誌目錄: {}", e))?;

    let file_appender = tracing_appender::rolling::daily(&log_config.directory, "dataprep.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // 環境變數優先，否則採用配置檔的日誌級別
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.clone()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish()
        .with(fmt::Layer::default().with_ansi(false).with_writer(file_writer));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(guard)
}

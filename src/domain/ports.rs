use crate::domain::model::{ConversionRecord, MetricsReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sheet_id(&self) -> &str;
    fn export_base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn poll_interval_secs(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ConversionRecord>>;
    async fn transform(&self, records: Vec<ConversionRecord>) -> Result<MetricsReport>;
    async fn load(&self, report: MetricsReport) -> Result<String>;
}

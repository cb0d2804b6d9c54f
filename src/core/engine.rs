use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs one extract/transform/load pass over whatever pipeline it is given.
pub struct MetricsEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MetricsEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Refreshing conversion metrics");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} conversion records", records.len());

        let report = self.pipeline.transform(records).await?;
        tracing::info!(
            "Aggregated {} records across {} departments",
            report.record_count,
            report.departments.len()
        );

        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report written to {}", output_path);

        Ok(output_path)
    }
}

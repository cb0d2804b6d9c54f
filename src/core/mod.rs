pub mod engine;
pub mod metrics;
pub mod mock;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{
    ConversionRecord, DepartmentMetrics, EmployeeConversion, MetricsReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

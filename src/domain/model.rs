use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One parsed row of the conversions sheet. All fields are kept as the raw
/// text from the sheet; `create_date` in particular is free-form and never
/// parsed into a date type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    pub first_name: String,
    pub last_name: String,
    pub create_date: String,
    pub lead_status: String,
    pub lifecycle_stage: String,
    pub contact_owner_first_name: String,
    pub contact_owner_last_name: String,
    pub dept: String,
}

/// Per-employee conversion tally within one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeConversion {
    pub name: String,
    pub count: u64,
    pub department: String,
}

/// Aggregated totals for one department. `total_conversions` counts every
/// record assigned to the department, including records whose contact owner
/// matched no roster employee, so it is always >= the sum of employee counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentMetrics {
    pub name: String,
    pub total_conversions: u64,
    pub employees: Vec<EmployeeConversion>,
}

/// Transform output: the department aggregates plus refresh metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub departments: Vec<DepartmentMetrics>,
}

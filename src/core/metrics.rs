use crate::domain::model::{ConversionRecord, DepartmentMetrics, EmployeeConversion};
use crate::domain::roster::ROSTER;

/// Aggregate conversion records into per-department metrics.
///
/// Every call starts from the static roster with zeroed counters, so the
/// result depends only on the input batch. Department assignment is an exact
/// match on the trimmed `dept` field; records naming any other department
/// are ignored outright. Employee credit goes to the first roster entry (in
/// declaration order) whose lowercased name contains the record's trimmed,
/// lowercased contact-owner first name. Note the containment direction:
/// roster "Juan G" matches owner "Juan", while owner "Juan Garcia" matches
/// nobody. An unmatched owner still counts toward the department total.
pub fn calculate_metrics(records: &[ConversionRecord]) -> Vec<DepartmentMetrics> {
    let mut departments: Vec<DepartmentMetrics> = ROSTER
        .iter()
        .map(|dept| DepartmentMetrics {
            name: dept.name.to_string(),
            total_conversions: 0,
            employees: dept
                .employees
                .iter()
                .map(|name| EmployeeConversion {
                    name: name.to_string(),
                    count: 0,
                    department: dept.name.to_string(),
                })
                .collect(),
        })
        .collect();

    for record in records {
        let dept = record.dept.trim();
        let Some(metrics) = departments.iter_mut().find(|m| m.name == dept) else {
            continue;
        };
        metrics.total_conversions += 1;

        let owner = record.contact_owner_first_name.trim().to_lowercase();
        if let Some(employee) = metrics
            .employees
            .iter_mut()
            .find(|e| e.name.to_lowercase().contains(&owner))
        {
            employee.count += 1;
        }
    }

    departments
}

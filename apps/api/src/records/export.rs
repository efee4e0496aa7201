//! CSV export of the full record history.

use anyhow::{anyhow, Context, Result};
use csv::Writer;

use crate::models::record::AnalysisRecord;

const HEADER: [&str; 7] = [
    "timestamp",
    "candidate_name",
    "job_title",
    "score",
    "jd_skills",
    "resume_skills",
    "missing_skills",
];

/// One row per record, skill lists joined with "; ".
pub fn records_to_csv(records: &[AnalysisRecord]) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;

    for record in records {
        wtr.write_record([
            record.timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            record.candidate_name.clone(),
            record.job_title.clone(),
            record.score.to_string(),
            record.jd_skills.join("; "),
            record.resume_skills.join("; "),
            record.missing_skills.join("; "),
        ])?;
    }

    wtr.flush().context("Failed to flush CSV export")?;
    wtr.into_inner()
        .map_err(|e| anyhow!("Failed to finish CSV export: {}", e.error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_export_rows_and_quoting() {
        let record = AnalysisRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 2, 3)
                .unwrap()
                .and_hms_opt(14, 5, 0)
                .unwrap(),
            candidate_name: "Doe, Jane".to_string(),
            job_title: "Data Analyst".to_string(),
            score: 66.67,
            jd_skills: vec!["SQL".into(), "Excel".into(), "Tableau".into()],
            resume_skills: vec!["SQL".into(), "Excel".into()],
            missing_skills: vec!["Tableau".into()],
        };
        let csv = String::from_utf8(records_to_csv(&[record]).unwrap()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("timestamp,candidate_name,job_title,score,jd_skills,resume_skills,missing_skills")
        );
        assert_eq!(
            lines.next(),
            Some("2025-02-03T14:05:00,\"Doe, Jane\",Data Analyst,66.67,SQL; Excel; Tableau,SQL; Excel,Tableau")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_history_is_header_only() {
        let csv = String::from_utf8(records_to_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}

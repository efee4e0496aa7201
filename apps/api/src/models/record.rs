use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted outcome of a single resume analysis.
///
/// `resume_skills` and `missing_skills` partition `jd_skills`. Records are
/// immutable once appended; the store only ever appends or clears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Local wall-clock time, persisted as ISO-8601 without offset.
    pub timestamp: NaiveDateTime,
    pub candidate_name: String,
    pub job_title: String,
    pub score: f64,
    pub jd_skills: Vec<String>,
    pub resume_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> AnalysisRecord {
        AnalysisRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_micro_opt(9, 26, 53, 589_793)
                .unwrap(),
            candidate_name: "Jane Doe".to_string(),
            job_title: "Data Analyst".to_string(),
            score: 66.67,
            jd_skills: vec!["Excel".into(), "SQL".into(), "Power BI".into()],
            resume_skills: vec!["Excel".into(), "SQL".into()],
            missing_skills: vec!["Power BI".into()],
        }
    }

    #[test]
    fn test_timestamp_serializes_as_iso_string() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["timestamp"], "2025-03-14T09:26:53.589793");
        assert_eq!(value["score"], 66.67);
    }

    #[test]
    fn test_deserializes_persisted_shape() {
        let json = r#"{
            "timestamp": "2025-03-14T09:26:53.589793",
            "candidate_name": "Jane Doe",
            "job_title": "Data Analyst",
            "score": 66.67,
            "jd_skills": ["Excel", "SQL", "Power BI"],
            "resume_skills": ["Excel", "SQL"],
            "missing_skills": ["Power BI"]
        }"#;
        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, sample());
    }
}

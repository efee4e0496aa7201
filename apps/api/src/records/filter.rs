//! Dashboard filter resolution.
//!
//! Raw query parameters are turned into a `DashboardFilter`. Malformed date
//! input never fails the request: it falls back to the full data range and
//! leaves an informational notice instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::record::AnalysisRecord;

/// Job-title value that disables the job filter.
pub const ALL_JOBS: &str = "All";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query string accepted by the dashboard endpoint.
///
/// Dates are `YYYY-MM-DD`. `date_range` is a comma-separated list of one or
/// two dates and takes precedence over `start_date` / `end_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub job_title: Option<String>,
    /// Kept as text so an unparsable value becomes a notice, not a rejection.
    pub min_score: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub date_range: Option<String>,
}

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardFilter {
    /// `None` or `"All"` means every job title.
    pub job_title: Option<String>,
    /// Inclusive lower bound, 0 – 100.
    pub min_score: f64,
    /// `None` means no date restriction.
    pub date_range: Option<DateRange>,
}

impl DashboardFilter {
    pub fn job_filter(&self) -> Option<&str> {
        self.job_title
            .as_deref()
            .filter(|title| !title.is_empty() && *title != ALL_JOBS)
    }
}

/// Resolved filter plus user-facing notices about how the input was interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedFilter {
    pub filter: DashboardFilter,
    pub notices: Vec<String>,
}

/// Builds the filter for `query` against the current history.
///
/// The default date range spans the earliest record's date to the later of
/// the latest record's date and `today`. With no records there is no date filter.
pub fn resolve_filter(
    query: &DashboardQuery,
    records: &[AnalysisRecord],
    today: NaiveDate,
) -> ResolvedFilter {
    let mut notices = Vec::new();

    let min_score = match non_blank(query.min_score.as_deref()).map(str::parse::<f64>) {
        Some(Ok(score)) if score.is_finite() => score.clamp(0.0, 100.0),
        Some(_) => {
            notices.push("Minimum score was not a number; using 0.".to_string());
            0.0
        }
        None => 0.0,
    };

    let bounds = data_bounds(records);
    let date_range = bounds.map(|(data_min, data_max)| {
        let default = DateRange {
            start: data_min,
            end: data_max.max(today),
        };
        let range = match requested_range(query) {
            Requested::None => default,
            Requested::Range(range) => range,
            Requested::Malformed(reason) => {
                notices.push(format!(
                    "{reason}; showing records from {} to {}.",
                    default.start, default.end
                ));
                default
            }
        };

        if range.start < data_min {
            notices.push(format!(
                "Analysis data is only available from {data_min}. Results will effectively start from that date."
            ));
        }
        if range.end > today {
            notices.push(format!(
                "You selected an end date in the future ({}). Only existing records up to today ({today}) will be shown.",
                range.end
            ));
        }
        range
    });

    ResolvedFilter {
        filter: DashboardFilter {
            job_title: query
                .job_title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from),
            min_score,
            date_range,
        },
        notices,
    }
}

enum Requested {
    None,
    Range(DateRange),
    Malformed(String),
}

fn requested_range(query: &DashboardQuery) -> Requested {
    let parts: Vec<String> = match query.date_range.as_deref() {
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect(),
        None => {
            let start = non_blank(query.start_date.as_deref());
            let end = non_blank(query.end_date.as_deref());
            match (start, end) {
                (None, None) => return Requested::None,
                (Some(s), None) => vec![s.to_string()],
                (None, Some(e)) => vec![e.to_string()],
                (Some(s), Some(e)) => vec![s.to_string(), e.to_string()],
            }
        }
    };

    let dates: Result<Vec<NaiveDate>, String> = parts
        .iter()
        .map(|p| {
            NaiveDate::parse_from_str(p, DATE_FORMAT)
                .map_err(|_| format!("Could not read date '{p}'"))
        })
        .collect();
    let dates = match dates {
        Ok(dates) => dates,
        Err(reason) => return Requested::Malformed(reason),
    };

    match dates.as_slice() {
        [] => Requested::None,
        [single] => Requested::Range(DateRange {
            start: *single,
            end: *single,
        }),
        [start, end] if start <= end => Requested::Range(DateRange {
            start: *start,
            end: *end,
        }),
        [_, _] => Requested::Malformed("End date is before start date".to_string()),
        _ => Requested::Malformed("Date range must have one or two dates".to_string()),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn data_bounds(records: &[AnalysisRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let dates = records.iter().map(|r| r.timestamp.date());
    let min = dates.clone().min()?;
    let max = dates.max()?;
    Some((min, max))
}

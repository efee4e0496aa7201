//! Aggregation Engine: filtered views and summary statistics over the record history.
//!
//! Everything here is a pure function of the record snapshot it is handed.
//! Input records are never mutated; the same inputs always give the same output.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::models::record::AnalysisRecord;
use crate::records::filter::{DashboardFilter, ResolvedFilter};
use crate::skills::scoring::round2;

/// Reported as the top missing skill when there is nothing to report.
pub const NO_MISSING_SKILL: &str = "—";

const SKILL_SUMMARY_LIMIT: usize = 10;
const RECENT_LIMIT: usize = 10;
const HISTOGRAM_BUCKETS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// Per-skill tally across filtered records whose `jd_skills` listed the skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTally {
    pub skill: String,
    pub matched: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub filtered: Vec<AnalysisRecord>,
    pub count: usize,
    pub avg_score: f64,
    pub distinct_job_count: usize,
    pub top_missing_skill: String,
    pub skill_summary_top10: Vec<SkillTally>,
}

/// Half-open score interval `[lower, upper)`; the last bucket also holds 100.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBucket {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Everything the dashboard endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub filter: DashboardFilter,
    pub notices: Vec<String>,
    pub total_count: usize,
    pub available_job_titles: Vec<String>,
    #[serde(flatten)]
    pub aggregate: Aggregate,
    pub recent: Vec<AnalysisRecord>,
    pub score_histogram: Vec<ScoreBucket>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Job, minimum-score and date-range test for one record.
/// The date range is inclusive of both calendar days, end-of-day included.
pub fn passes(record: &AnalysisRecord, filter: &DashboardFilter) -> bool {
    if let Some(job) = filter.job_filter() {
        if record.job_title != job {
            return false;
        }
    }
    if record.score < filter.min_score {
        return false;
    }
    match filter.date_range {
        Some(range) => {
            let day = record.timestamp.date();
            range.start <= day && day <= range.end
        }
        None => true,
    }
}

pub fn aggregate(records: &[AnalysisRecord], filter: &DashboardFilter) -> Aggregate {
    let filtered: Vec<AnalysisRecord> = records
        .iter()
        .filter(|r| passes(r, filter))
        .cloned()
        .collect();

    let count = filtered.len();
    let avg_score = if count == 0 {
        0.0
    } else {
        round2(filtered.iter().map(|r| r.score).sum::<f64>() / count as f64)
    };
    let distinct_job_count = filtered
        .iter()
        .map(|r| r.job_title.as_str())
        .collect::<HashSet<_>>()
        .len();

    Aggregate {
        top_missing_skill: top_missing_skill(&filtered),
        skill_summary_top10: skill_summary(&filtered, SKILL_SUMMARY_LIMIT),
        filtered,
        count,
        avg_score,
        distinct_job_count,
    }
}

/// Most frequent entry across every `missing_skills` list.
/// Ties go to the skill seen first.
fn top_missing_skill(records: &[AnalysisRecord]) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for skill in records.iter().flat_map(|r| r.missing_skills.iter()) {
        let entry = counts.entry(skill.as_str()).or_insert_with(|| {
            order.push(skill.as_str());
            0
        });
        *entry += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for skill in order {
        let n = counts[skill];
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((skill, n));
        }
    }
    best.map_or_else(|| NO_MISSING_SKILL.to_string(), |(s, _)| s.to_string())
}

/// Matched/missing tallies for every JD skill, highest missing count first.
/// Stable sort, so equal counts keep first-encountered order.
fn skill_summary(records: &[AnalysisRecord], limit: usize) -> Vec<SkillTally> {
    let mut tallies: Vec<SkillTally> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let have: HashSet<String> = record
            .resume_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        for skill in &record.jd_skills {
            let slot = *index.entry(skill.clone()).or_insert_with(|| {
                tallies.push(SkillTally {
                    skill: skill.clone(),
                    matched: 0,
                    missing: 0,
                });
                tallies.len() - 1
            });
            if have.contains(&skill.to_lowercase()) {
                tallies[slot].matched += 1;
            } else {
                tallies[slot].missing += 1;
            }
        }
    }

    tallies.sort_by(|a, b| b.missing.cmp(&a.missing));
    tallies.truncate(limit);
    tallies
}

/// Ten equal-width buckets over 0–100.
pub fn score_histogram(records: &[AnalysisRecord]) -> Vec<ScoreBucket> {
    let width = 100.0 / HISTOGRAM_BUCKETS as f64;
    let mut buckets: Vec<ScoreBucket> = (0..HISTOGRAM_BUCKETS)
        .map(|i| ScoreBucket {
            lower: i as f64 * width,
            upper: (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for record in records {
        let score = record.score.clamp(0.0, 100.0);
        let slot = ((score / width).floor() as usize).min(HISTOGRAM_BUCKETS - 1);
        buckets[slot].count += 1;
    }
    buckets
}

/// The `limit` newest records, newest first.
pub fn recent(records: &[AnalysisRecord], limit: usize) -> Vec<AnalysisRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Assembles the full dashboard view from the history and a resolved filter.
pub fn build_dashboard(records: &[AnalysisRecord], resolved: ResolvedFilter) -> Dashboard {
    let aggregate = aggregate(records, &resolved.filter);
    let available_job_titles = records
        .iter()
        .map(|r| r.job_title.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    Dashboard {
        recent: recent(&aggregate.filtered, RECENT_LIMIT),
        score_histogram: score_histogram(&aggregate.filtered),
        total_count: records.len(),
        available_job_titles,
        filter: resolved.filter,
        notices: resolved.notices,
        aggregate,
    }
}

use std::collections::HashMap;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::{CategoryCount, Scholarship};
use crate::urgency::{days_until, deadline_label, Urgency};

#[derive(Debug, Clone)]
pub struct DeadlineEntry<'a> {
    pub scholarship: &'a Scholarship,
    pub days_left: i64,
    pub urgency: Urgency,
}

pub fn summarize_by_category(scholarships: &[&Scholarship]) -> Vec<CategoryCount> {
    let mut map: HashMap<&str, usize> = HashMap::new();

    for scholarship in scholarships {
        *map.entry(scholarship.category).or_insert(0) += 1;
    }

    let mut summaries: Vec<CategoryCount> = map
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();

    summaries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    summaries
}

/// Scholarships with a parseable deadline, soonest first.
pub fn deadline_outlook<'a>(
    scholarships: &[&'a Scholarship],
    now: DateTime<Utc>,
) -> Vec<DeadlineEntry<'a>> {
    let mut entries: Vec<DeadlineEntry<'a>> = scholarships
        .iter()
        .filter_map(|&scholarship| {
            let days_left = days_until(scholarship.deadline_date()?, now);
            Some(DeadlineEntry {
                scholarship,
                days_left,
                urgency: Urgency::classify(days_left),
            })
        })
        .collect();

    entries.sort_by_key(|entry| entry.days_left);
    entries
}

pub fn build_report(
    filter_label: Option<&str>,
    now: DateTime<Utc>,
    scholarships: &[&Scholarship],
) -> String {
    let outlook = deadline_outlook(scholarships, now);
    let summaries = summarize_by_category(scholarships);

    let mut output = String::new();
    let label = filter_label.unwrap_or("all scholarships");

    let _ = writeln!(output, "# Scholarship Deadline Report");
    let _ = writeln!(output, "Generated for {} on {}", label, now.date_naive());
    let _ = writeln!(output);
    let _ = writeln!(output, "## Deadline Outlook");

    if outlook.is_empty() {
        let _ = writeln!(output, "No scholarships match this selection.");
    } else {
        for entry in outlook.iter() {
            let _ = writeln!(
                output,
                "- {} ({}, {}): {} [{}]",
                entry.scholarship.title,
                entry.scholarship.provider,
                entry.scholarship.deadline,
                deadline_label(entry.days_left),
                entry.urgency.as_str()
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Category Mix");

    if summaries.is_empty() {
        let _ = writeln!(output, "No scholarships match this selection.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(output, "- {}: {} scholarships", summary.category, summary.count);
        }
    }

    let closing: Vec<&DeadlineEntry> = outlook
        .iter()
        .filter(|entry| entry.days_left > 0 && entry.urgency != Urgency::Normal)
        .collect();
    let _ = writeln!(output);
    let _ = writeln!(output, "## Closing Soon");

    if closing.is_empty() {
        let _ = writeln!(output, "Nothing closes within the next 30 days.");
    } else {
        for entry in closing {
            let _ = writeln!(
                output,
                "- {} closes in {} days ({})",
                entry.scholarship.title,
                entry.days_left,
                entry.scholarship.amount
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SCHOLARSHIPS;
    use chrono::TimeZone;

    fn all() -> Vec<&'static Scholarship> {
        SCHOLARSHIPS.iter().collect()
    }

    #[test]
    fn outlook_is_sorted_soonest_first() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let outlook = deadline_outlook(&all(), now);
        let days: Vec<i64> = outlook.iter().map(|e| e.days_left).collect();
        assert_eq!(days, vec![-2, 14, 31, 80]);
        assert_eq!(outlook[0].urgency, Urgency::Urgent);
        assert_eq!(outlook[1].urgency, Urgency::Soon);
        assert_eq!(outlook[2].urgency, Urgency::Normal);
    }

    #[test]
    fn categories_are_counted() {
        let summaries = summarize_by_category(&all());
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().all(|s| s.count == 1));
        assert_eq!(summaries[0].category, "Field-specific");
    }

    #[test]
    fn report_lists_closing_soon_without_passed() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let report = build_report(None, now, &all());
        assert!(report.contains("Generated for all scholarships on 2024-03-01"));
        assert!(report.contains("- Merit Excellence Scholarship closes in 14 days"));
        assert!(!report.contains("Innovation in Business Scholarship closes"));
        assert!(report.contains("Deadline passed [urgent]"));
    }

    #[test]
    fn empty_selection_reports_nothing() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let report = build_report(Some("category=Sports"), now, &[]);
        assert!(report.contains("No scholarships match this selection."));
        assert!(report.contains("Nothing closes within the next 30 days."));
    }
}

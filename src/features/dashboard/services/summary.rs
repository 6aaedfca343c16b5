use chrono::NaiveDate;
use crate::core::models::{shift_minutes, Shift};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleSummary {
    pub shift_count: usize,
    pub recurring_count: usize,
    pub break_count: usize,
    pub scheduled_minutes: i64,
    /// Shifts whose times could not be read and were left out of `scheduled_minutes`.
    pub unreadable: Vec<String>,
}

pub fn summarize(shifts: &[Shift]) -> ScheduleSummary {
    let mut summary = ScheduleSummary {
        shift_count: shifts.len(),
        ..ScheduleSummary::default()
    };

    for shift in shifts {
        if shift.recurring {
            summary.recurring_count += 1;
        }
        summary.break_count += shift.breaks.len();
        match shift_minutes(&shift.start_time, &shift.end_time) {
            Ok(minutes) => summary.scheduled_minutes += minutes,
            Err(e) => summary.unreadable.push(format!("{}: {}", shift.title, e)),
        }
    }

    summary
}

pub fn format_hours(minutes: i64) -> String {
    match (minutes / 60, minutes % 60) {
        (h, 0) => format!("{}h", h),
        (0, m) => format!("{}m", m),
        (h, m) => format!("{}h {}m", h, m),
    }
}

// Shifts on or after `today`, earliest first
pub fn upcoming(shifts: &[Shift], today: NaiveDate) -> Vec<Shift> {
    let mut upcoming: Vec<Shift> = shifts.iter()
        .filter(|s| s.date >= today)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.start_time.cmp(&b.start_time)));
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::core::models::BreakItem;

    fn shift(title: &str, date: (i32, u32, u32), start: &str, end: &str, breaks: usize, recurring: bool) -> Shift {
        Shift {
            id: title.to_string(),
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            recurring,
            breaks: (0..breaks).map(|i| BreakItem {
                name: format!("break {}", i),
                start_time: "12:00".to_string(),
                end_time: "12:15".to_string(),
            }).collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_schedule_summary() {
        assert_eq!(summarize(&[]), ScheduleSummary::default());
    }

    #[test]
    fn summary_counts_shifts_breaks_and_hours() {
        let shifts = vec![
            shift("Open", (2026, 5, 4), "06:00", "14:00", 2, true),
            shift("Close", (2026, 5, 4), "14:00", "22:30", 1, false),
            shift("Night", (2026, 5, 5), "22:00", "06:00", 0, true),
        ];
        let summary = summarize(&shifts);
        assert_eq!(summary.shift_count, 3);
        assert_eq!(summary.recurring_count, 2);
        assert_eq!(summary.break_count, 3);
        assert_eq!(summary.scheduled_minutes, 480 + 510 + 480);
        assert!(summary.unreadable.is_empty());
    }

    #[test]
    fn unreadable_times_are_skipped_not_fatal() {
        let shifts = vec![
            shift("Good", (2026, 5, 4), "09:00", "17:00", 0, false),
            shift("Bad", (2026, 5, 4), "", "17:00", 0, false),
        ];
        let summary = summarize(&shifts);
        assert_eq!(summary.shift_count, 2);
        assert_eq!(summary.scheduled_minutes, 480);
        assert_eq!(summary.unreadable.len(), 1);
        assert!(summary.unreadable[0].starts_with("Bad:"));
    }

    #[test]
    fn hours_formatting() {
        assert_eq!(format_hours(0), "0h");
        assert_eq!(format_hours(45), "45m");
        assert_eq!(format_hours(480), "8h");
        assert_eq!(format_hours(1470), "24h 30m");
    }

    #[test]
    fn upcoming_drops_past_and_sorts() {
        let shifts = vec![
            shift("Later", (2026, 5, 6), "09:00", "17:00", 0, false),
            shift("Past", (2026, 5, 1), "09:00", "17:00", 0, false),
            shift("Afternoon", (2026, 5, 4), "13:00", "21:00", 0, false),
            shift("Morning", (2026, 5, 4), "05:00", "13:00", 0, false),
        ];
        let titles: Vec<String> = upcoming(&shifts, NaiveDate::from_ymd_opt(2026, 5, 4).unwrap())
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(titles, vec!["Morning", "Afternoon", "Later"]);
    }
}

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use super::break_item::{BreakEntry, BreakItem};

pub const DEFAULT_SHIFT_START: &str = "09:00";
pub const DEFAULT_SHIFT_END: &str = "17:00";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shift {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub recurring: bool,
    pub breaks: Vec<BreakItem>,
    pub created_at: DateTime<Utc>,
}

// Form state for the shift being scheduled, including the breaks collected so far
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub recurring: bool,
    pub breaks: Vec<BreakEntry>,
}

impl Default for ShiftDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            start_time: DEFAULT_SHIFT_START.to_string(),
            end_time: DEFAULT_SHIFT_END.to_string(),
            recurring: false,
            breaks: Vec::new(),
        }
    }
}

impl ShiftDraft {
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn add_break(&mut self, item: BreakItem) {
        self.breaks.push(BreakEntry::new(item));
    }

    pub fn remove_break(&mut self, break_id: &str) {
        self.breaks.retain(|b| b.id != break_id);
    }

    pub fn into_shift(self) -> Result<Shift, String> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|e| format!("Invalid shift date '{}': {}", self.date, e))?;
        Ok(Shift {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            date,
            start_time: self.start_time,
            end_time: self.end_time,
            recurring: self.recurring,
            breaks: self.breaks.into_iter().map(|b| b.item).collect(),
            created_at: Utc::now(),
        })
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|e| format!("Invalid time '{}': {}", value, e))
}

/// Length of a shift in minutes. An end at or before the start runs past midnight.
pub fn shift_minutes(start: &str, end: &str) -> Result<i64, String> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    let minutes = (end - start).num_minutes();
    Ok(if minutes <= 0 { minutes + 24 * 60 } else { minutes })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunch() -> BreakItem {
        BreakItem {
            name: "Lunch".to_string(),
            start_time: "12:00".to_string(),
            end_time: "13:00".to_string(),
        }
    }

    #[test]
    fn day_shift_minutes() {
        assert_eq!(shift_minutes("09:00", "17:00"), Ok(480));
        assert_eq!(shift_minutes("09:15", "09:45"), Ok(30));
    }

    #[test]
    fn overnight_shift_wraps_past_midnight() {
        assert_eq!(shift_minutes("22:00", "06:00"), Ok(480));
        assert_eq!(shift_minutes("08:00", "08:00"), Ok(24 * 60));
    }

    #[test]
    fn garbage_times_are_rejected() {
        assert!(shift_minutes("noon", "13:00").is_err());
        assert!(shift_minutes("09:00", "25:00").is_err());
    }

    #[test]
    fn can_save_requires_non_blank_title() {
        let mut draft = ShiftDraft::default();
        assert!(!draft.can_save());
        draft.title = "   ".to_string();
        assert!(!draft.can_save());
        draft.title = "Morning".to_string();
        assert!(draft.can_save());
    }

    #[test]
    fn breaks_are_kept_in_submission_order_and_removable() {
        let mut draft = ShiftDraft::default();
        draft.add_break(lunch());
        draft.add_break(BreakItem { name: "Coffee".to_string(), ..lunch() });
        assert_eq!(draft.breaks.len(), 2);
        assert_eq!(draft.breaks[1].item.name, "Coffee");

        let first_id = draft.breaks[0].id.clone();
        draft.remove_break(&first_id);
        assert_eq!(draft.breaks.len(), 1);
        assert_eq!(draft.breaks[0].item.name, "Coffee");
    }

    #[test]
    fn into_shift_carries_breaks_and_trims_title() {
        let mut draft = ShiftDraft {
            title: " Front desk ".to_string(),
            date: "2026-03-02".to_string(),
            recurring: true,
            ..ShiftDraft::default()
        };
        draft.add_break(lunch());
        let shift = draft.into_shift().unwrap();
        assert_eq!(shift.title, "Front desk");
        assert_eq!(shift.date, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(shift.start_time, DEFAULT_SHIFT_START);
        assert!(shift.recurring);
        assert_eq!(shift.breaks, vec![lunch()]);
    }

    #[test]
    fn into_shift_rejects_bad_date() {
        let draft = ShiftDraft {
            title: "Night".to_string(),
            date: "2026-02-30".to_string(),
            ..ShiftDraft::default()
        };
        assert!(draft.into_shift().is_err());
    }
}

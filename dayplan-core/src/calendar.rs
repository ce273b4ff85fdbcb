//! Month grid computation for the calendar view

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::task::Task;

/// Rows in a month grid. Six weeks always cover any month.
pub const WEEKS_PER_GRID: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for the padding days taken from the adjacent months
    pub in_month: bool,
}

/// Six weeks of days around one month, starting on `week_start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub week_start: Weekday,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`
    pub fn new(anchor: NaiveDate, week_start: Weekday) -> Self {
        let first = first_of_month(anchor);
        let lead = (7 + first.weekday().num_days_from_monday()
            - week_start.num_days_from_monday())
            % 7;
        let start = first.checked_sub_days(Days::new(u64::from(lead))).unwrap_or(first);

        let mut weeks = Vec::with_capacity(WEEKS_PER_GRID);
        let mut cursor = start;
        for _ in 0..WEEKS_PER_GRID {
            let mut week = [DayCell {
                date: cursor,
                in_month: false,
            }; 7];
            for cell in week.iter_mut() {
                *cell = DayCell {
                    date: cursor,
                    in_month: cursor.month() == first.month() && cursor.year() == first.year(),
                };
                cursor = cursor.succ_opt().unwrap_or(cursor);
            }
            weeks.push(week);
        }

        Self {
            year: first.year(),
            month: first.month(),
            week_start,
            weeks,
        }
    }

    /// Weekday column headers, e.g. ["Mo", "Tu", ...]
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        let mut labels = [""; 7];
        let mut day = self.week_start;
        for label in labels.iter_mut() {
            *label = weekday_short(day);
            day = day.succ();
        }
        labels
    }

    /// "January 2024"
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

/// Tasks scheduled on exactly `date`, in insertion order
pub fn tasks_on(tasks: &[Task], date: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_on(date)).collect()
}

/// Move by whole months, clamping the day to the target month's length
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// Move by whole days, saturating at the calendar bounds
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Parse a configured week start; anything but "sunday" means Monday
pub fn parse_week_start(raw: &str) -> Weekday {
    if raw.trim().eq_ignore_ascii_case("sunday") {
        Weekday::Sun
    } else {
        Weekday::Mon
    }
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

use attendance_tool::HolidayCalendar;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn added_dates_are_holidays() {
    let mut calendar = HolidayCalendar::new();
    assert!(!calendar.is_holiday(d(2025, 3, 8)));
    assert!(calendar.add_holiday(d(2025, 3, 8)));
    assert!(calendar.is_holiday(d(2025, 3, 8)));
    assert!(!calendar.is_holiday(d(2025, 3, 9)));
}

#[test]
fn duplicates_collapse() {
    let mut calendar = HolidayCalendar::new();
    assert!(calendar.add_holiday(d(2025, 3, 8)));
    assert!(!calendar.add_holiday(d(2025, 3, 8)));
    assert_eq!(calendar.len(), 1);
}

#[test]
fn iteration_is_date_ordered() {
    let mut calendar = HolidayCalendar::new();
    calendar.add_holidays(&[d(2025, 12, 25), d(2025, 1, 1), d(2025, 7, 4)]);
    let dates: Vec<NaiveDate> = calendar.iter().collect();
    assert_eq!(dates, [d(2025, 1, 1), d(2025, 7, 4), d(2025, 12, 25)]);
}

#[test]
fn empty_calendar_reports_empty() {
    let calendar = HolidayCalendar::new();
    assert!(calendar.is_empty());
    assert_eq!(calendar.len(), 0);
}

use attendance_tool::{Timetable, WEEKDAYS, weekday_name};
use chrono::Weekday;

#[test]
fn new_timetable_has_all_weekdays_empty() {
    let timetable = Timetable::new();
    assert_eq!(timetable.days().count(), 7);
    for day in WEEKDAYS {
        assert!(timetable.subjects_for(day).is_empty());
    }
    assert!(timetable.is_empty());
}

#[test]
fn set_day_trims_and_splits_on_commas() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Mon, " Math ,  Physics,Chemistry ");
    assert_eq!(
        timetable.subjects_for(Weekday::Mon),
        ["Math", "Physics", "Chemistry"]
    );
}

#[test]
fn blank_entry_yields_empty_list() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Tue, "Biology");
    timetable.set_day(Weekday::Tue, "   ");
    assert!(timetable.subjects_for(Weekday::Tue).is_empty());
}

#[test]
fn stray_commas_produce_no_empty_subjects() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Wed, "Math,,Physics,");
    assert_eq!(timetable.subjects_for(Weekday::Wed), ["Math", "Physics"]);
}

#[test]
fn duplicate_subjects_are_preserved_in_order() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Thu, "Math, Lab, Math");
    assert_eq!(timetable.subjects_for(Weekday::Thu), ["Math", "Lab", "Math"]);
}

#[test]
fn replace_week_resets_unlisted_days() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Tue, "Biology");

    timetable.replace_week([(Weekday::Mon, "Math, Physics")]);

    assert_eq!(timetable.subjects_for(Weekday::Mon), ["Math", "Physics"]);
    assert!(timetable.subjects_for(Weekday::Tue).is_empty());
}

#[test]
fn joined_uses_comma_and_space() {
    let mut timetable = Timetable::new();
    timetable.set_day(Weekday::Fri, "Math,Physics");
    assert_eq!(timetable.joined(Weekday::Fri), "Math, Physics");
    assert_eq!(timetable.joined(Weekday::Sat), "");
}

#[test]
fn weekday_names_round_trip_through_chrono() {
    for day in WEEKDAYS {
        let parsed: Weekday = weekday_name(day).parse().unwrap();
        assert_eq!(parsed, day);
    }
}

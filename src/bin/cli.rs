use std::io::{self, Write};

use attendance_tool::{CsvStore, DayRecord, Status, Tracker, WEEKDAYS, weekday_name};
use chrono::{Datelike, Local, NaiveDate, Weekday};

fn print_help() {
    println!(
        "Commands:\n  help                     Show this help\n  cal [YYYY-MM]            Show month calendar (* holiday, + recorded)\n  show                     Show timetable and holidays\n  timetable                Enter subjects for each weekday\n  holiday <YYYY-MM-DD>     Mark a date as a holiday\n  mark <YYYY-MM-DD>        Record attendance for a date\n  record <YYYY-MM-DD>      Show the record stored for a date\n  pct                      Show per-subject attendance percentages\n  save                     Write the three csv files\n  quit|exit                Exit"
    );
}

fn read_trimmed(stdin: &io::Stdin, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

/// Text port of the month-grid view: one cell per day, holidays starred,
/// recorded days marked with a plus.
fn render_month(tracker: &Tracker, year: i32, month: u32) -> String {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return String::from("Invalid month");
    };

    let mut out = String::new();
    out.push_str(&format!("{:^28}\n", first.format("%B %Y").to_string()));
    out.push_str(" Mo  Tu  We  Th  Fr  Sa  Su\n");
    out.push_str(&"    ".repeat(first.weekday().num_days_from_monday() as usize));

    let mut day = first;
    loop {
        let marker = if tracker.holidays().is_holiday(day) {
            '*'
        } else if tracker.log().contains(day) {
            '+'
        } else {
            ' '
        };
        out.push_str(&format!("{:>3}{marker}", day.day()));
        if day.weekday() == Weekday::Sun {
            out.push('\n');
        }
        day = match day.succ_opt() {
            Some(next) if next.month() == month => next,
            _ => break,
        };
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("  * holiday   + recorded\n");
    out
}

fn timetable_form(stdin: &io::Stdin, tracker: &mut Tracker) {
    println!("Enter subjects per weekday, comma-separated (blank for none).");
    let mut entries = Vec::with_capacity(WEEKDAYS.len());
    for day in WEEKDAYS {
        let current = tracker.timetable().joined(day);
        let prompt = if current.is_empty() {
            format!("  {}: ", weekday_name(day))
        } else {
            format!("  {} [{current}]: ", weekday_name(day))
        };
        let Some(raw) = read_trimmed(stdin, &prompt) else {
            println!("Timetable entry aborted.");
            return;
        };
        entries.push((day, raw));
    }
    tracker.timetable_mut().replace_week(entries);
    println!("Timetable saved.");
}

fn mark_form(stdin: &io::Stdin, tracker: &mut Tracker, date: NaiveDate) {
    // Gate before prompting; mark_attendance enforces the same rules again.
    if tracker.holidays().is_holiday(date) {
        println!("{date} is a holiday!");
        return;
    }
    let subjects: Vec<String> = tracker
        .timetable()
        .subjects_for(date.weekday())
        .to_vec();
    if subjects.is_empty() {
        println!("No subjects found for {}.", weekday_name(date.weekday()));
        return;
    }

    let mut overrides = DayRecord::new();
    let mut seen: Vec<&str> = Vec::new();
    for subject in &subjects {
        if seen.contains(&subject.as_str()) {
            continue;
        }
        seen.push(subject.as_str());
        let Some(answer) = read_trimmed(stdin, &format!("  {subject} [P/a]: ")) else {
            println!("Marking aborted.");
            return;
        };
        if matches!(answer.to_ascii_lowercase().as_str(), "a" | "absent") {
            overrides.insert(subject.clone(), Status::Absent);
        }
    }

    match tracker.mark_attendance(date, &overrides) {
        Ok(record) => {
            println!("Attendance saved for {date}:");
            for (subject, status) in &record {
                println!("  {subject}: {}", status.as_str());
            }
        }
        Err(err) => println!("Error: {err}"),
    }
}

fn show_stores(tracker: &Tracker) {
    println!("Timetable:");
    for (day, subjects) in tracker.timetable().days() {
        if subjects.is_empty() {
            println!("  {:<10} -", weekday_name(day));
        } else {
            println!("  {:<10} {}", weekday_name(day), subjects.join(", "));
        }
    }
    if tracker.holidays().is_empty() {
        println!("Holidays: none");
    } else {
        let dates: Vec<String> = tracker.holidays().iter().map(|d| d.to_string()).collect();
        println!("Holidays: {}", dates.join(", "));
    }
}

fn show_percentages(tracker: &Tracker) {
    let stats = tracker.percentages();
    if stats.is_empty() {
        println!("No attendance recorded yet.");
        return;
    }
    for entry in stats {
        println!(
            "  {:<20} {:>7}  ({}/{})",
            entry.subject,
            format!("{:.2}%", entry.percent()),
            entry.present,
            entry.total
        );
    }
}

fn main() {
    env_logger::init();

    let store = CsvStore::new(".");
    let outcome = store.load();
    let mut tracker = outcome.tracker;
    for failure in &outcome.failures {
        eprintln!("Warning: {failure}");
    }

    println!("Attendance Tracker - type 'help' for commands\n");
    let stdin = io::stdin();

    // First run without a timetable goes straight to the form.
    if tracker.timetable().is_empty() {
        println!("No timetable set yet.");
        timetable_form(&stdin, &mut tracker);
    }

    let today = Local::now().date_naive();
    println!("{}", render_month(&tracker, today.year(), today.month()));

    loop {
        let Some(input) = read_trimmed(&stdin, "> ") else {
            break;
        };
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "cal" => match parts.next() {
                None => println!("{}", render_month(&tracker, today.year(), today.month())),
                Some(arg) => match arg.split_once('-') {
                    Some((y, m)) => match (y.parse::<i32>(), m.parse::<u32>()) {
                        (Ok(year), Ok(month)) => {
                            println!("{}", render_month(&tracker, year, month))
                        }
                        _ => println!("Usage: cal [YYYY-MM]"),
                    },
                    None => println!("Usage: cal [YYYY-MM]"),
                },
            },
            "show" => show_stores(&tracker),
            "timetable" => timetable_form(&stdin, &mut tracker),
            "holiday" => match parts.next() {
                // Blank entry is a silent no-op.
                None => {}
                Some(arg) => match parse_iso_date(arg) {
                    Some(date) => {
                        if tracker.holidays_mut().add_holiday(date) {
                            println!("Holiday added: {date}");
                        } else {
                            println!("{date} is already a holiday.");
                        }
                    }
                    None => println!("Invalid date (YYYY-MM-DD)"),
                },
            },
            "mark" => match parts.next().and_then(parse_iso_date) {
                Some(date) => mark_form(&stdin, &mut tracker, date),
                None => println!("Usage: mark <YYYY-MM-DD>"),
            },
            "record" => match parts.next().and_then(parse_iso_date) {
                Some(date) => match tracker.log().record_for(date) {
                    Some(record) => {
                        for (subject, status) in record {
                            println!("  {subject}: {}", status.as_str());
                        }
                    }
                    None => println!("No attendance recorded for {date}."),
                },
                None => println!("Usage: record <YYYY-MM-DD>"),
            },
            "pct" => show_percentages(&tracker),
            "save" => match store.save(&tracker) {
                Ok(()) => println!("Data saved."),
                Err(err) => println!("Save failed: {err}"),
            },
            _ => println!("Unknown command '{cmd}'. Type 'help' for commands."),
        }
    }
}

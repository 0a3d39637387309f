use std::collections::BTreeMap;

use crate::attendance::{AttendanceLog, Status};

/// Present/total counters for one subject across the whole log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectStats {
    pub subject: String,
    pub present: usize,
    pub total: usize,
}

impl SubjectStats {
    /// Attendance percentage in 0..=100. Zero when nothing is recorded.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.present as f64 / self.total as f64 * 100.0
        }
    }
}

/// Fold the log into per-subject counters, ordered by subject name.
///
/// Every recorded status counts toward `total`; only `Present` counts toward
/// `present`.
pub fn subject_percentages(log: &AttendanceLog) -> Vec<SubjectStats> {
    let mut counters: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (_, record) in log.iter() {
        for (subject, status) in record {
            let entry = counters.entry(subject.as_str()).or_insert((0, 0));
            entry.1 += 1;
            if *status == Status::Present {
                entry.0 += 1;
            }
        }
    }

    counters
        .into_iter()
        .map(|(subject, (present, total))| SubjectStats {
            subject: subject.to_string(),
            present,
            total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mark(log: &mut AttendanceLog, date: NaiveDate, pairs: &[(&str, Status)]) {
        let record = pairs
            .iter()
            .map(|(subject, status)| (subject.to_string(), *status))
            .collect();
        log.record_day(date, record);
    }

    #[test]
    fn counts_present_and_total_per_subject() {
        let mut log = AttendanceLog::new();
        mark(
            &mut log,
            d(2025, 3, 3),
            &[("Math", Status::Present), ("Physics", Status::Absent)],
        );
        mark(&mut log, d(2025, 3, 4), &[("Math", Status::Present)]);
        mark(&mut log, d(2025, 3, 5), &[("Math", Status::Present)]);
        mark(&mut log, d(2025, 3, 6), &[("Math", Status::Absent)]);

        let stats = subject_percentages(&log);
        assert_eq!(stats.len(), 2);
        let math = &stats[0];
        assert_eq!(math.subject, "Math");
        assert_eq!(math.present, 3);
        assert_eq!(math.total, 4);
        assert_eq!(format!("{:.2}%", math.percent()), "75.00%");
    }

    #[test]
    fn output_is_ordered_by_subject_name() {
        let mut log = AttendanceLog::new();
        mark(
            &mut log,
            d(2025, 3, 3),
            &[("Zoology", Status::Present), ("Algebra", Status::Present)],
        );
        let names: Vec<String> = subject_percentages(&log)
            .into_iter()
            .map(|s| s.subject)
            .collect();
        assert_eq!(names, ["Algebra", "Zoology"]);
    }

    #[test]
    fn zero_total_is_zero_percent() {
        let stats = SubjectStats {
            subject: "Math".into(),
            present: 0,
            total: 0,
        };
        assert_eq!(stats.percent(), 0.0);
    }

    #[test]
    fn empty_log_yields_no_rows() {
        assert!(subject_percentages(&AttendanceLog::new()).is_empty());
    }
}

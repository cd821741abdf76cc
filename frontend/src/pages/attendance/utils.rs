use crate::api::{
    AttendanceRecord, AttendanceStatus, AttendanceUpdate, AttendanceUpsert, Employee,
};
use crate::utils::time::{parse_date_input, today_iso};
use leptos::*;

/// Draft signals for the attendance form. The employee selection is the
/// scoped parent: it survives a successful submit so several days can be
/// marked for the same employee in a row.
#[derive(Clone, Copy)]
pub struct AttendanceFormState {
    employee_id: RwSignal<String>,
    date: RwSignal<String>,
    status: RwSignal<AttendanceStatus>,
}

impl AttendanceFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            date: create_rw_signal(today_iso()),
            status: create_rw_signal(AttendanceStatus::Present),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn date_signal(&self) -> RwSignal<String> {
        self.date
    }

    pub fn status_signal(&self) -> RwSignal<AttendanceStatus> {
        self.status
    }

    pub fn snapshot(&self) -> AttendanceDraft {
        AttendanceDraft {
            employee_id: self.employee_id.get(),
            date: self.date.get(),
            status: self.status.get(),
        }
    }

    /// Clears date and status back to their defaults while keeping the
    /// scoped parent employee selected.
    pub fn reset_preserving_employee(&self) {
        self.date.set(today_iso());
        self.status.set(AttendanceStatus::Present);
    }

    pub fn load(&self, record: &AttendanceRecord) {
        self.employee_id.set(record.employee_id.to_string());
        self.date.set(record.date.format("%Y-%m-%d").to_string());
        self.status.set(record.status);
    }
}

impl Default for AttendanceFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceDraft {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl AttendanceDraft {
    pub fn selected_employee_id(&self) -> Option<i64> {
        self.employee_id.trim().parse().ok().filter(|id| *id > 0)
    }

    pub fn to_upsert(&self) -> Result<AttendanceUpsert, String> {
        let employee_id = self
            .selected_employee_id()
            .ok_or_else(|| "Employee is required.".to_string())?;
        Ok(AttendanceUpsert {
            employee_id,
            date: parse_date_input(&self.date, "Date must be in YYYY-MM-DD format.")?,
            status: self.status,
        })
    }

    pub fn to_update(&self) -> Result<AttendanceUpdate, String> {
        Ok(AttendanceUpdate {
            date: parse_date_input(&self.date, "Date must be in YYYY-MM-DD format.")?,
            status: self.status,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttendanceFieldErrors {
    pub employee_id: Option<&'static str>,
    pub date: Option<&'static str>,
}

impl AttendanceFieldErrors {
    pub fn is_clear(&self) -> bool {
        self.employee_id.is_none() && self.date.is_none()
    }
}

/// Hidden until the first submit attempt, then recomputed on every change.
/// Edit mode locks the employee selection, so only the date can go missing.
pub fn validate_attendance_draft(
    draft: &AttendanceDraft,
    editing: bool,
    submit_attempted: bool,
) -> AttendanceFieldErrors {
    if !submit_attempted {
        return AttendanceFieldErrors::default();
    }
    AttendanceFieldErrors {
        employee_id: (!editing && draft.selected_employee_id().is_none())
            .then_some("Employee is required."),
        date: draft.date.trim().is_empty().then_some("Date is required."),
    }
}

pub fn attendance_draft_can_submit(draft: &AttendanceDraft, editing: bool) -> bool {
    let date_present = !draft.date.trim().is_empty();
    if editing {
        date_present
    } else {
        date_present && draft.selected_employee_id().is_some()
    }
}

/// Exact-date filter over the already-fetched records; an empty filter shows
/// everything.
pub fn filter_records_by_date(records: &[AttendanceRecord], filter: &str) -> Vec<AttendanceRecord> {
    let filter = filter.trim();
    if filter.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| record.date.format("%Y-%m-%d").to_string() == filter)
        .cloned()
        .collect()
}

pub fn count_by_status(records: &[AttendanceRecord], status: AttendanceStatus) -> usize {
    records.iter().filter(|record| record.status == status).count()
}

pub fn find_employee(employees: &[Employee], value: &str) -> Option<Employee> {
    let id: i64 = value.trim().parse().ok()?;
    employees.iter().find(|employee| employee.id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: i64, date: (i32, u32, u32), status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: 7,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status,
        }
    }

    #[test]
    fn validation_requires_employee_and_date_after_attempt() {
        let empty = AttendanceDraft {
            employee_id: String::new(),
            date: String::new(),
            status: AttendanceStatus::Present,
        };
        assert!(validate_attendance_draft(&empty, false, false).is_clear());

        let errors = validate_attendance_draft(&empty, false, true);
        assert_eq!(errors.employee_id, Some("Employee is required."));
        assert_eq!(errors.date, Some("Date is required."));

        // Edit mode locks the employee, so only the date is re-validated.
        let errors = validate_attendance_draft(&empty, true, true);
        assert!(errors.employee_id.is_none());
        assert!(errors.date.is_some());
    }

    #[test]
    fn can_submit_requires_a_parseable_employee_selection() {
        let draft = AttendanceDraft {
            employee_id: "7".into(),
            date: "2026-08-07".into(),
            status: AttendanceStatus::Present,
        };
        assert!(attendance_draft_can_submit(&draft, false));

        let no_employee = AttendanceDraft {
            employee_id: String::new(),
            ..draft.clone()
        };
        assert!(!attendance_draft_can_submit(&no_employee, false));
        assert!(attendance_draft_can_submit(&no_employee, true));

        let junk_employee = AttendanceDraft {
            employee_id: "abc".into(),
            ..draft
        };
        assert!(!attendance_draft_can_submit(&junk_employee, false));
    }

    #[test]
    fn upsert_payload_parses_selection_and_date() {
        let draft = AttendanceDraft {
            employee_id: "7".into(),
            date: "2026-08-07".into(),
            status: AttendanceStatus::Absent,
        };
        let payload = draft.to_upsert().unwrap();
        assert_eq!(payload.employee_id, 7);
        assert_eq!(payload.status, AttendanceStatus::Absent);

        let bad = AttendanceDraft {
            date: "07/08/2026".into(),
            ..draft
        };
        assert!(bad.to_upsert().is_err());
        assert!(bad.to_update().is_err());
    }

    #[test]
    fn date_filter_is_exact_match_and_blank_shows_all() {
        let records = vec![
            record(1, (2026, 8, 6), AttendanceStatus::Present),
            record(2, (2026, 8, 7), AttendanceStatus::Absent),
        ];
        assert_eq!(filter_records_by_date(&records, "").len(), 2);
        let filtered = filter_records_by_date(&records, "2026-08-07");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
        assert!(filter_records_by_date(&records, "2026-01-01").is_empty());
    }

    #[test]
    fn status_counts_split_present_and_absent() {
        let records = vec![
            record(1, (2026, 8, 5), AttendanceStatus::Present),
            record(2, (2026, 8, 6), AttendanceStatus::Present),
            record(3, (2026, 8, 7), AttendanceStatus::Absent),
        ];
        assert_eq!(count_by_status(&records, AttendanceStatus::Present), 2);
        assert_eq!(count_by_status(&records, AttendanceStatus::Absent), 1);
    }

    #[test]
    fn find_employee_matches_the_select_value() {
        let employees = vec![Employee {
            id: 7,
            employee_id: "EMP-007".into(),
            full_name: "Jane Doe".into(),
            email: "jane@company.com".into(),
            department: "Engineering".into(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }];
        assert!(find_employee(&employees, "7").is_some());
        assert!(find_employee(&employees, "8").is_none());
        assert!(find_employee(&employees, "").is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use chrono::NaiveDate;

    #[test]
    fn reset_keeps_the_scoped_employee_selection() {
        with_runtime(|| {
            let state = AttendanceFormState::new();
            state.employee_id_signal().set("7".into());
            state.status_signal().set(AttendanceStatus::Absent);
            state.date_signal().set("2026-01-01".into());

            state.reset_preserving_employee();
            let draft = state.snapshot();
            assert_eq!(draft.employee_id, "7");
            assert_eq!(draft.status, AttendanceStatus::Present);
            assert_ne!(draft.date, "2026-01-01");
        });
    }

    #[test]
    fn load_populates_the_draft_from_a_record() {
        with_runtime(|| {
            let state = AttendanceFormState::new();
            state.load(&AttendanceRecord {
                id: 3,
                employee_id: 7,
                date: NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
                status: AttendanceStatus::Absent,
            });
            let draft = state.snapshot();
            assert_eq!(draft.employee_id, "7");
            assert_eq!(draft.date, "2026-08-06");
            assert_eq!(draft.status, AttendanceStatus::Absent);
        });
    }
}

use crate::api::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::utils::time::{parse_date_input, today_iso};
use leptos::*;

/// Per-field draft signals for the employee form. The draft holds raw input
/// strings; typed payloads are built only at submit time.
#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    employee_id: RwSignal<String>,
    full_name: RwSignal<String>,
    email: RwSignal<String>,
    department: RwSignal<String>,
    date_of_joining: RwSignal<String>,
}

impl EmployeeFormState {
    pub fn new() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            full_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            department: create_rw_signal(String::new()),
            date_of_joining: create_rw_signal(today_iso()),
        }
    }

    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn full_name_signal(&self) -> RwSignal<String> {
        self.full_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn department_signal(&self) -> RwSignal<String> {
        self.department
    }

    pub fn date_of_joining_signal(&self) -> RwSignal<String> {
        self.date_of_joining
    }

    pub fn snapshot(&self) -> EmployeeDraft {
        EmployeeDraft {
            employee_id: self.employee_id.get(),
            full_name: self.full_name.get(),
            email: self.email.get(),
            department: self.department.get(),
            date_of_joining: self.date_of_joining.get(),
        }
    }

    pub fn reset(&self) {
        self.employee_id.set(String::new());
        self.full_name.set(String::new());
        self.email.set(String::new());
        self.department.set(String::new());
        self.date_of_joining.set(today_iso());
    }

    pub fn load(&self, employee: &Employee) {
        self.employee_id.set(employee.employee_id.clone());
        self.full_name.set(employee.full_name.clone());
        self.email.set(employee.email.clone());
        self.department.set(employee.department.clone());
        self.date_of_joining
            .set(employee.date_of_joining.format("%Y-%m-%d").to_string());
    }
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    pub date_of_joining: String,
}

impl EmployeeDraft {
    pub fn to_create(&self) -> Result<EmployeeCreate, String> {
        Ok(EmployeeCreate {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            date_of_joining: parse_date_input(
                &self.date_of_joining,
                "Date of joining must be in YYYY-MM-DD format.",
            )?,
        })
    }

    pub fn to_update(&self) -> Result<EmployeeUpdate, String> {
        Ok(EmployeeUpdate {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
            date_of_joining: parse_date_input(
                &self.date_of_joining,
                "Date of joining must be in YYYY-MM-DD format.",
            )?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeFieldErrors {
    pub employee_id: Option<&'static str>,
    pub full_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub department: Option<&'static str>,
    pub date_of_joining: Option<&'static str>,
}

impl EmployeeFieldErrors {
    pub fn is_clear(&self) -> bool {
        self.employee_id.is_none()
            && self.full_name.is_none()
            && self.email.is_none()
            && self.department.is_none()
            && self.date_of_joining.is_none()
    }
}

/// Errors stay hidden until the first submit attempt, then recompute on
/// every change so they clear as the user fixes fields. Edit mode skips the
/// immutable employee code.
pub fn validate_employee_draft(
    draft: &EmployeeDraft,
    editing: bool,
    submit_attempted: bool,
) -> EmployeeFieldErrors {
    if !submit_attempted {
        return EmployeeFieldErrors::default();
    }
    EmployeeFieldErrors {
        employee_id: (!editing && draft.employee_id.trim().is_empty())
            .then_some("Employee ID is required."),
        full_name: draft
            .full_name
            .trim()
            .is_empty()
            .then_some("Full name is required."),
        email: draft.email.trim().is_empty().then_some("Email is required."),
        department: draft
            .department
            .trim()
            .is_empty()
            .then_some("Department is required."),
        date_of_joining: draft
            .date_of_joining
            .trim()
            .is_empty()
            .then_some("Date of joining is required."),
    }
}

pub fn employee_draft_can_submit(draft: &EmployeeDraft, editing: bool) -> bool {
    let base_valid = !draft.full_name.trim().is_empty()
        && !draft.email.trim().is_empty()
        && !draft.department.trim().is_empty()
        && !draft.date_of_joining.trim().is_empty();
    if editing {
        base_valid
    } else {
        base_valid && !draft.employee_id.trim().is_empty()
    }
}

/// Case-insensitive substring match over a composite of name, email and
/// employee code, applied to the already-fetched set.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|employee| {
            let composite = format!(
                "{} {} {}",
                employee.full_name, employee.email, employee.employee_id
            )
            .to_lowercase();
            composite.contains(&query)
        })
        .cloned()
        .collect()
}

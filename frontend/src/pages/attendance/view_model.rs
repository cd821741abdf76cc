use crate::api::{ApiClient, ApiError, AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::attendance::{
    repository::{self, AttendanceSaveKind, AttendanceSavePayload, SavedAttendance},
    utils::{attendance_draft_can_submit, find_employee, AttendanceFormState},
};
use crate::state::toasts::use_toaster;
use crate::utils::focus::{focus_input_on_next_frame, focus_select_on_next_frame};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    html, *,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RosterQuery {
    pub token: u32,
}

impl RosterQuery {
    pub fn new() -> Self {
        Self { token: 0 }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
        }
    }
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Resource key for the records load: the scoped parent employee plus a
/// token so refreshes re-run the same scope. A stale response for a
/// previously selected employee can never overwrite the newer list because
/// only the latest key's result is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RecordsQuery {
    pub employee_id: Option<i64>,
    pub token: u32,
}

impl RecordsQuery {
    pub fn new() -> Self {
        Self {
            employee_id: None,
            token: 0,
        }
    }

    pub fn with_employee(self, employee_id: Option<i64>) -> Self {
        Self {
            employee_id,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(self) -> Self {
        Self {
            employee_id: self.employee_id,
            token: self.token.wrapping_add(1),
        }
    }
}

impl Default for RecordsQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct AttendanceViewModel {
    pub form_state: AttendanceFormState,
    pub editing_id: RwSignal<Option<i64>>,
    pub submit_attempted: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub filter_date: RwSignal<String>,
    pub confirm_target: RwSignal<Option<AttendanceRecord>>,
    pub list_error: RwSignal<Option<String>>,
    pub roster_query: RwSignal<RosterQuery>,
    pub roster_resource: Resource<RosterQuery, Result<Vec<Employee>, ApiError>>,
    pub records_query: RwSignal<RecordsQuery>,
    pub records_resource: Resource<RecordsQuery, Result<Vec<AttendanceRecord>, ApiError>>,
    pub save_action: Action<AttendanceSavePayload, Result<SavedAttendance, ApiError>>,
    pub delete_action: Action<AttendanceRecord, Result<AttendanceRecord, ApiError>>,
    pub employee_select: NodeRef<html::Select>,
    pub date_input: NodeRef<html::Input>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();

        let form_state = AttendanceFormState::new();
        let editing_id = create_rw_signal(None::<i64>);
        let submit_attempted = create_rw_signal(false);
        let form_error = create_rw_signal(None::<ApiError>);
        let filter_date = create_rw_signal(String::new());
        let confirm_target = create_rw_signal(None::<AttendanceRecord>);
        let list_error = create_rw_signal(None::<String>);
        let roster_query = create_rw_signal(RosterQuery::new());
        let records_query = create_rw_signal(RecordsQuery::new());
        let employee_select = create_node_ref::<html::Select>();
        let date_input = create_node_ref::<html::Input>();

        let api_for_roster = api.clone();
        let roster_resource = create_resource(
            move || roster_query.get(),
            move |_query| {
                let api = api_for_roster.clone();
                async move {
                    match repository::fetch_roster(&api).await {
                        Ok(employees) => Ok(employees),
                        Err(err) => {
                            toaster.error("Unable to load employees", err.message.clone());
                            Err(err)
                        }
                    }
                }
            },
        );

        let api_for_records = api.clone();
        let records_resource = create_resource(
            move || records_query.get(),
            move |query| {
                let api = api_for_records.clone();
                async move {
                    let Some(employee_id) = query.employee_id else {
                        return Ok(Vec::new());
                    };
                    match repository::fetch_records(&api, employee_id).await {
                        Ok(records) => {
                            // A fresh load clears any stale delete-failure banner.
                            list_error.set(None);
                            Ok(records)
                        }
                        Err(err) => {
                            toaster.error("Unable to load attendance", err.message.clone());
                            Err(err)
                        }
                    }
                }
            },
        );

        let api_for_save = api.clone();
        let save_action = create_action(move |payload: &AttendanceSavePayload| {
            let api = api_for_save.clone();
            let payload = payload.clone();
            async move { repository::save_attendance(&api, payload).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |record: &AttendanceRecord| {
            let api = api_for_delete.clone();
            let record = record.clone();
            async move { repository::remove_attendance(&api, record).await }
        });

        let employee_name = move |employee_id: i64| {
            untrack(|| roster_resource.get())
                .and_then(|result| result.ok())
                .and_then(|employees| find_employee(&employees, &employee_id.to_string()))
                .map(|employee| employee.full_name)
                .unwrap_or_else(|| "Employee".to_string())
        };

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(saved) => {
                        let name = employee_name(saved.record.employee_id);
                        let status = saved.record.status;
                        match saved.kind {
                            AttendanceSaveKind::Created => {
                                toaster.success(
                                    "Attendance marked",
                                    format!("{} marked as {}.", name, status.label_lower()),
                                );
                            }
                            AttendanceSaveKind::UpdatedExisting => {
                                toaster.success(
                                    "Attendance updated",
                                    format!(
                                        "{} status updated to {}.",
                                        name,
                                        status.label_lower()
                                    ),
                                );
                            }
                            AttendanceSaveKind::Edited => {
                                toaster.success(
                                    "Attendance updated",
                                    format!("{} attendance was updated.", name),
                                );
                            }
                        }
                        form_state.reset_preserving_employee();
                        editing_id.set(None);
                        submit_attempted.set(false);
                        form_error.set(None);
                        focus_select_on_next_frame(employee_select);
                        records_query.update(|query| *query = query.refresh());
                    }
                    Err(err) => {
                        toaster.error("Save failed", err.message.clone());
                        form_error.set(Some(err));
                    }
                }
            }
        });

        create_effect(move |_| {
            if let Some(result) = delete_action.value().get() {
                confirm_target.set(None);
                match result {
                    Ok(record) => {
                        let name = employee_name(record.employee_id);
                        toaster.success(
                            "Attendance deleted",
                            format!("{} attendance entry removed.", name),
                        );
                        if editing_id.get_untracked() == Some(record.id) {
                            form_state.reset_preserving_employee();
                            editing_id.set(None);
                            submit_attempted.set(false);
                            form_error.set(None);
                            focus_select_on_next_frame(employee_select);
                        }
                        records_query.update(|query| *query = query.refresh());
                    }
                    Err(err) => {
                        list_error.set(Some(err.message.clone()));
                        toaster.error("Delete failed", err.message);
                    }
                }
            }
        });

        Self {
            form_state,
            editing_id,
            submit_attempted,
            form_error,
            filter_date,
            confirm_target,
            list_error,
            roster_query,
            roster_resource,
            records_query,
            records_resource,
            save_action,
            delete_action,
            employee_select,
            date_input,
        }
    }

    /// Select-change handler: updates the draft and re-scopes the records
    /// load to the newly selected employee.
    pub fn on_employee_change(&self) -> impl Fn(String) {
        let form_state = self.form_state;
        let records_query = self.records_query;
        move |value| {
            form_state.employee_id_signal().set(value.clone());
            let employee_id = value.trim().parse::<i64>().ok().filter(|id| *id > 0);
            records_query.update(|query| *query = query.with_employee(employee_id));
        }
    }

    pub fn on_submit(&self) -> impl Fn(SubmitEvent) {
        let form_state = self.form_state;
        let editing_id = self.editing_id;
        let submit_attempted = self.submit_attempted;
        let form_error = self.form_error;
        let save_action = self.save_action;

        move |ev| {
            ev.prevent_default();
            submit_attempted.set(true);
            form_error.set(None);

            let draft = form_state.snapshot();
            let editing = editing_id.get_untracked();
            if !attendance_draft_can_submit(&draft, editing.is_some()) {
                form_error.set(Some(ApiError::validation(
                    "Please fix the highlighted fields.",
                )));
                return;
            }

            let payload = match editing {
                Some(id) => draft
                    .to_update()
                    .map(|update| AttendanceSavePayload::Update(id, update)),
                None => draft.to_upsert().map(AttendanceSavePayload::Create),
            };
            match payload {
                Ok(payload) => save_action.dispatch(payload),
                Err(message) => form_error.set(Some(ApiError::validation(message))),
            }
        }
    }

    pub fn on_edit(&self) -> impl Fn(AttendanceRecord) {
        let form_state = self.form_state;
        let editing_id = self.editing_id;
        let submit_attempted = self.submit_attempted;
        let form_error = self.form_error;
        let date_input = self.date_input;

        move |record| {
            editing_id.set(Some(record.id));
            form_state.load(&record);
            submit_attempted.set(false);
            form_error.set(None);
            focus_input_on_next_frame(date_input);
        }
    }

    pub fn on_cancel_edit(&self) -> impl Fn(MouseEvent) {
        let form_state = self.form_state;
        let editing_id = self.editing_id;
        let submit_attempted = self.submit_attempted;
        let form_error = self.form_error;
        let employee_select = self.employee_select;

        move |_ev| {
            form_state.reset_preserving_employee();
            editing_id.set(None);
            submit_attempted.set(false);
            form_error.set(None);
            focus_select_on_next_frame(employee_select);
        }
    }

    pub fn on_set_status(&self) -> impl Fn(AttendanceStatus) {
        let form_state = self.form_state;
        move |status| form_state.status_signal().set(status)
    }

    pub fn on_delete_request(&self) -> impl Fn(AttendanceRecord) {
        let confirm_target = self.confirm_target;
        move |record| confirm_target.set(Some(record))
    }

    pub fn on_cancel_delete(&self) -> impl Fn(()) {
        let confirm_target = self.confirm_target;
        move |_| confirm_target.set(None)
    }

    pub fn on_confirm_delete(&self) -> impl Fn(()) {
        let confirm_target = self.confirm_target;
        let delete_action = self.delete_action;
        move |_| {
            if delete_action.pending().get_untracked() {
                return;
            }
            if let Some(target) = confirm_target.get_untracked() {
                delete_action.dispatch(target);
            }
        }
    }

    /// Disabled until an employee is selected; re-runs the scoped load.
    pub fn on_refresh(&self) -> impl Fn(MouseEvent) {
        let records_query = self.records_query;
        move |_ev| {
            if records_query.get_untracked().employee_id.is_none() {
                return;
            }
            records_query.update(|query| *query = query.refresh());
        }
    }

    pub fn on_clear_filter(&self) -> impl Fn(MouseEvent) {
        let filter_date = self.filter_date;
        move |_ev| filter_date.set(String::new())
    }
}

impl Default for AttendanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn selecting_an_employee_changes_the_query_identity() {
        let query = RecordsQuery::new();
        assert!(query.employee_id.is_none());

        let scoped = query.with_employee(Some(7));
        assert_eq!(scoped.employee_id, Some(7));
        assert_ne!(query, scoped);

        // Re-selecting the same employee still forces a re-fetch.
        let rescoped = scoped.with_employee(Some(7));
        assert_ne!(scoped, rescoped);
    }

    #[test]
    fn refresh_keeps_the_scope_but_changes_identity() {
        let query = RecordsQuery::new().with_employee(Some(7));
        let refreshed = query.refresh();
        assert_eq!(refreshed.employee_id, Some(7));
        assert_ne!(query, refreshed);
    }
}

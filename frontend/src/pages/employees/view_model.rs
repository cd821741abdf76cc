use crate::api::{ApiClient, ApiError, Employee};
use crate::pages::employees::{
    repository::{self, EmployeeSavePayload, SavedEmployee},
    utils::{employee_draft_can_submit, EmployeeFormState},
};
use crate::state::toasts::use_toaster;
use crate::utils::focus::focus_input_on_next_frame;
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    html, *,
};

/// Resource key for the directory load; bumping `token` re-fetches and a
/// stale in-flight response can no longer clobber the newer result.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DirectoryQuery {
    pub token: u32,
}

impl DirectoryQuery {
    pub fn new() -> Self {
        Self { token: 0 }
    }

    pub fn refresh(self) -> Self {
        Self {
            token: self.token.wrapping_add(1),
        }
    }
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct EmployeesViewModel {
    pub form_state: EmployeeFormState,
    pub editing_id: RwSignal<Option<i64>>,
    pub submit_attempted: RwSignal<bool>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub search_query: RwSignal<String>,
    pub details_employee: RwSignal<Option<Employee>>,
    pub confirm_target: RwSignal<Option<Employee>>,
    pub list_error: RwSignal<Option<String>>,
    pub directory_query: RwSignal<DirectoryQuery>,
    pub employees_resource: Resource<DirectoryQuery, Result<Vec<Employee>, ApiError>>,
    pub save_action: Action<EmployeeSavePayload, Result<SavedEmployee, ApiError>>,
    pub delete_action: Action<Employee, Result<Employee, ApiError>>,
    pub code_input: NodeRef<html::Input>,
    pub name_input: NodeRef<html::Input>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let toaster = use_toaster();

        let form_state = EmployeeFormState::new();
        let editing_id = create_rw_signal(None::<i64>);
        let submit_attempted = create_rw_signal(false);
        let form_error = create_rw_signal(None::<ApiError>);
        let search_query = create_rw_signal(String::new());
        let details_employee = create_rw_signal(None::<Employee>);
        let confirm_target = create_rw_signal(None::<Employee>);
        let list_error = create_rw_signal(None::<String>);
        let directory_query = create_rw_signal(DirectoryQuery::new());
        let code_input = create_node_ref::<html::Input>();
        let name_input = create_node_ref::<html::Input>();

        let api_for_list = api.clone();
        let employees_resource = create_resource(
            move || directory_query.get(),
            move |_query| {
                let api = api_for_list.clone();
                async move {
                    match repository::fetch_employees(&api).await {
                        Ok(employees) => {
                            // A fresh load clears any stale delete-failure banner.
                            list_error.set(None);
                            Ok(employees)
                        }
                        Err(err) => {
                            toaster.error("Unable to load employees", err.message.clone());
                            Err(err)
                        }
                    }
                }
            },
        );

        let api_for_save = api.clone();
        let save_action = create_action(move |payload: &EmployeeSavePayload| {
            let api = api_for_save.clone();
            let payload = payload.clone();
            async move { repository::save_employee(&api, payload).await }
        });

        let api_for_delete = api.clone();
        let delete_action = create_action(move |employee: &Employee| {
            let api = api_for_delete.clone();
            let employee = employee.clone();
            async move { repository::remove_employee(&api, employee).await }
        });

        create_effect(move |_| {
            if let Some(result) = save_action.value().get() {
                match result {
                    Ok(saved) => {
                        if saved.updated {
                            toaster.success(
                                "Employee updated",
                                format!("{} was updated successfully.", saved.employee.full_name),
                            );
                        } else {
                            toaster.success(
                                "Employee created",
                                format!("{} has been added.", saved.employee.full_name),
                            );
                        }
                        form_state.reset();
                        editing_id.set(None);
                        submit_attempted.set(false);
                        form_error.set(None);
                        focus_input_on_next_frame(code_input);
                        directory_query.update(|query| *query = query.refresh());
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
                    Ok(employee) => {
                        toaster.success(
                            "Employee deleted",
                            format!("{} was removed.", employee.full_name),
                        );
                        if editing_id.get_untracked() == Some(employee.id) {
                            form_state.reset();
                            editing_id.set(None);
                            submit_attempted.set(false);
                            form_error.set(None);
                            focus_input_on_next_frame(code_input);
                        }
                        directory_query.update(|query| *query = query.refresh());
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
            search_query,
            details_employee,
            confirm_target,
            list_error,
            directory_query,
            employees_resource,
            save_action,
            delete_action,
            code_input,
            name_input,
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
            if !employee_draft_can_submit(&draft, editing.is_some()) {
                form_error.set(Some(ApiError::validation(
                    "Please fix the highlighted fields.",
                )));
                return;
            }

            let payload = match editing {
                Some(id) => draft
                    .to_update()
                    .map(|update| EmployeeSavePayload::Update(id, update)),
                None => draft.to_create().map(EmployeeSavePayload::Create),
            };
            match payload {
                Ok(payload) => save_action.dispatch(payload),
                Err(message) => form_error.set(Some(ApiError::validation(message))),
            }
        }
    }

    pub fn on_edit(&self) -> impl Fn(Employee) {
        let form_state = self.form_state;
        let editing_id = self.editing_id;
        let submit_attempted = self.submit_attempted;
        let form_error = self.form_error;
        let name_input = self.name_input;

        move |employee| {
            editing_id.set(Some(employee.id));
            form_state.load(&employee);
            submit_attempted.set(false);
            form_error.set(None);
            focus_input_on_next_frame(name_input);
        }
    }

    pub fn on_cancel_edit(&self) -> impl Fn(MouseEvent) {
        let form_state = self.form_state;
        let editing_id = self.editing_id;
        let submit_attempted = self.submit_attempted;
        let form_error = self.form_error;
        let code_input = self.code_input;

        move |_ev| {
            form_state.reset();
            editing_id.set(None);
            submit_attempted.set(false);
            form_error.set(None);
            focus_input_on_next_frame(code_input);
        }
    }

    pub fn on_show_details(&self) -> impl Fn(Employee) {
        let details_employee = self.details_employee;
        move |employee| details_employee.set(Some(employee))
    }

    pub fn on_close_details(&self) -> impl Fn(()) {
        let details_employee = self.details_employee;
        move |_| details_employee.set(None)
    }

    pub fn on_delete_request(&self) -> impl Fn(Employee) {
        let confirm_target = self.confirm_target;
        move |employee| confirm_target.set(Some(employee))
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

    pub fn on_refresh(&self) -> impl Fn(MouseEvent) {
        let directory_query = self.directory_query;
        move |_ev| directory_query.update(|query| *query = query.refresh())
    }

    pub fn on_clear_search(&self) -> impl Fn(MouseEvent) {
        let search_query = self.search_query;
        move |_ev| search_query.set(String::new())
    }
}

impl Default for EmployeesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn directory_query_refresh_changes_identity() {
        let query = DirectoryQuery::new();
        assert_ne!(query, query.refresh());
        assert_eq!(query.refresh().refresh().token, 2);
    }
}

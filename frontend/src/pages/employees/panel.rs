use super::{
    components::{DetailsModal, DirectorySection, EmployeeFormSection},
    layout::EmployeesFrame,
    utils::{employee_draft_can_submit, filter_employees, validate_employee_draft},
    view_model::use_employees_view_model,
};
use crate::components::{
    common::{Badge, BadgeVariant, Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! { <EmployeesPanel /> }
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let form_state = vm.form_state;
    let editing_id = vm.editing_id;
    let submit_attempted = vm.submit_attempted;
    let search_query = vm.search_query;
    let employees_resource = vm.employees_resource;

    let editing = Signal::derive(move || editing_id.get().is_some());
    let saving = vm.save_action.pending();
    let deleting = vm.delete_action.pending();
    let loading = employees_resource.loading();

    let employees = Signal::derive(move || {
        employees_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let load_error =
        Signal::derive(move || employees_resource.get().and_then(|result| result.err()));
    let filtered =
        Signal::derive(move || filter_employees(&employees.get(), &search_query.get()));

    let field_errors = create_memo(move |_| {
        validate_employee_draft(
            &form_state.snapshot(),
            editing.get(),
            submit_attempted.get(),
        )
    });
    let can_submit = create_memo(move |_| {
        employee_draft_can_submit(&form_state.snapshot(), editing.get()) && !saving.get()
    });

    let total_badge = move || format!("{} total", employees.get().len());

    let confirm_target = vm.confirm_target;
    let confirm_open = Signal::derive(move || confirm_target.get().is_some());
    let confirm_message = Signal::derive(move || {
        confirm_target
            .get()
            .map(|employee| {
                format!(
                    "Delete {} ({})? This action cannot be undone.",
                    employee.full_name, employee.employee_id
                )
            })
            .unwrap_or_else(|| "This action cannot be undone.".to_string())
    });

    view! {
        <EmployeesFrame>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <h1 class="text-2xl font-semibold tracking-tight text-fg">"Employee Management"</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            "Manage employee records with reliable validation and safe actions."
                        </p>
                    </div>
                    <div class="flex items-center gap-2">
                        <Badge variant=BadgeVariant::Neutral>{total_badge}</Badge>
                        <Button
                            variant=ButtonVariant::Secondary
                            loading=Signal::derive(move || loading.get())
                            on:click=vm.on_refresh()
                        >
                            "Refresh"
                        </Button>
                    </div>
                </div>

                <div class="grid grid-cols-1 gap-6 lg:grid-cols-[420px_1fr]">
                    <EmployeeFormSection
                        form_state=form_state
                        editing=editing
                        field_errors=field_errors.into()
                        can_submit=can_submit.into()
                        saving=Signal::derive(move || saving.get())
                        form_error=vm.form_error.read_only().into()
                        on_submit=Callback::new(vm.on_submit())
                        on_cancel=Callback::new(vm.on_cancel_edit())
                        code_input=vm.code_input
                        name_input=vm.name_input
                    />
                    <DirectorySection
                        employees=employees
                        filtered=filtered
                        loading=Signal::derive(move || loading.get())
                        load_error=load_error
                        list_error=vm.list_error.read_only().into()
                        search_query=search_query
                        editing_id=editing_id.read_only().into()
                        on_show_details=Callback::new(vm.on_show_details())
                        on_edit=Callback::new(vm.on_edit())
                        on_delete_request=Callback::new(vm.on_delete_request())
                        on_clear_search=Callback::new(vm.on_clear_search())
                    />
                </div>
            </div>

            <DetailsModal
                details_employee=vm.details_employee.read_only().into()
                on_close=Callback::new(vm.on_close_details())
            />

            <ConfirmDialog
                is_open=confirm_open
                title="Delete Employee"
                message=confirm_message
                confirm_label="Delete employee"
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=Callback::new(vm.on_cancel_delete())
                pending=Signal::derive(move || deleting.get())
            />
        </EmployeesFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn employees_panel_renders_form_and_directory_shell() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://localhost:8000"));
            view! { <EmployeesPage /> }
        });
        assert!(html.contains("Employee Management"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Employee Directory"));
        assert!(html.contains("Refresh"));
    }
}

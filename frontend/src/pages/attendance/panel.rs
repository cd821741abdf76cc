use super::{
    components::{MarkAttendanceSection, RecordsSection},
    layout::AttendanceFrame,
    utils::{
        attendance_draft_can_submit, filter_records_by_date, find_employee,
        validate_attendance_draft,
    },
    view_model::use_attendance_view_model,
};
use crate::components::{
    common::{Badge, BadgeVariant, Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
};
use leptos::*;

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! { <AttendancePanel /> }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let form_state = vm.form_state;
    let editing_id = vm.editing_id;
    let submit_attempted = vm.submit_attempted;
    let filter_date = vm.filter_date;
    let roster_resource = vm.roster_resource;
    let records_resource = vm.records_resource;
    let records_query = vm.records_query;

    let editing = Signal::derive(move || editing_id.get().is_some());
    let saving = vm.save_action.pending();
    let deleting = vm.delete_action.pending();
    let roster_loading = roster_resource.loading();
    let records_loading = records_resource.loading();

    let employees = Signal::derive(move || {
        roster_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let roster_error =
        Signal::derive(move || roster_resource.get().and_then(|result| result.err()));
    let records = Signal::derive(move || {
        records_resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });
    let records_error =
        Signal::derive(move || records_resource.get().and_then(|result| result.err()));
    let visible =
        Signal::derive(move || filter_records_by_date(&records.get(), &filter_date.get()));

    let selected_employee = Signal::derive(move || {
        find_employee(&employees.get(), &form_state.employee_id_signal().get())
    });
    let has_employee = Signal::derive(move || records_query.get().employee_id.is_some());

    let field_errors = create_memo(move |_| {
        validate_attendance_draft(
            &form_state.snapshot(),
            editing.get(),
            submit_attempted.get(),
        )
    });
    let can_submit = create_memo(move |_| {
        attendance_draft_can_submit(&form_state.snapshot(), editing.get()) && !saving.get()
    });

    let confirm_target = vm.confirm_target;
    let confirm_open = Signal::derive(move || confirm_target.get().is_some());
    let confirm_message = Signal::derive(move || {
        confirm_target
            .get()
            .map(|record| {
                format!(
                    "Delete {} record for {}? This action cannot be undone.",
                    record.status.label_lower(),
                    record.date.format("%Y-%m-%d")
                )
            })
            .unwrap_or_else(|| "This action cannot be undone.".to_string())
    });

    view! {
        <AttendanceFrame>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <h1 class="text-2xl font-semibold tracking-tight text-fg">"Attendance Management"</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            "Track daily attendance, edit entries, and review present-day totals."
                        </p>
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        {move || selected_employee.get().map(|employee| view! {
                            <Badge variant=BadgeVariant::Neutral>
                                {format!("{} ({})", employee.full_name, employee.employee_id)}
                            </Badge>
                        })}
                        <Button
                            variant=ButtonVariant::Secondary
                            disabled=Signal::derive(move || !has_employee.get())
                            loading=Signal::derive(move || records_loading.get())
                            attr:title="Refresh attendance"
                            on:click=vm.on_refresh()
                        >
                            "Refresh"
                        </Button>
                    </div>
                </div>

                <div class="grid grid-cols-1 gap-6 lg:grid-cols-[420px_1fr]">
                    <MarkAttendanceSection
                        form_state=form_state
                        employees=employees
                        employees_loading=Signal::derive(move || roster_loading.get())
                        employees_error=roster_error
                        selected_employee=selected_employee
                        editing=editing
                        field_errors=field_errors.into()
                        can_submit=can_submit.into()
                        saving=Signal::derive(move || saving.get())
                        form_error=vm.form_error.read_only().into()
                        on_submit=Callback::new(vm.on_submit())
                        on_cancel=Callback::new(vm.on_cancel_edit())
                        on_employee_change=Callback::new(vm.on_employee_change())
                        on_set_status=Callback::new(vm.on_set_status())
                        employee_select=vm.employee_select
                        date_input=vm.date_input
                    />
                    <RecordsSection
                        selected_employee=selected_employee
                        records=records
                        visible=visible
                        loading=Signal::derive(move || records_loading.get())
                        load_error=records_error
                        list_error=vm.list_error.read_only().into()
                        filter_date=filter_date
                        editing_id=editing_id.read_only().into()
                        on_edit=Callback::new(vm.on_edit())
                        on_delete_request=Callback::new(vm.on_delete_request())
                        on_clear_filter=Callback::new(vm.on_clear_filter())
                    />
                </div>
            </div>

            <ConfirmDialog
                is_open=confirm_open
                title="Delete Attendance"
                message=confirm_message
                confirm_label="Delete attendance"
                on_confirm=Callback::new(vm.on_confirm_delete())
                on_cancel=Callback::new(vm.on_cancel_delete())
                pending=Signal::derive(move || deleting.get())
            />
        </AttendanceFrame>
    }
}

use crate::{
    api::{ApiError, AttendanceStatus, Employee},
    components::{
        common::{Badge, BadgeVariant, Button, ButtonVariant},
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::ErrorMessage,
        skeleton::Skeleton,
    },
    pages::attendance::utils::{AttendanceFieldErrors, AttendanceFormState},
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    html, *,
};

fn input_class(has_error: bool) -> String {
    let border = if has_error {
        "border-status-error-border"
    } else {
        "border-border"
    };
    format!(
        "mt-1 block w-full rounded-md border bg-surface-elevated px-3 py-2 text-sm shadow-sm focus:border-action-primary-focus focus:outline-none disabled:cursor-not-allowed disabled:bg-surface-muted disabled:opacity-70 {}",
        border
    )
}

#[component]
pub fn MarkAttendanceSection(
    form_state: AttendanceFormState,
    employees: Signal<Vec<Employee>>,
    employees_loading: Signal<bool>,
    employees_error: Signal<Option<ApiError>>,
    selected_employee: Signal<Option<Employee>>,
    editing: Signal<bool>,
    field_errors: Signal<AttendanceFieldErrors>,
    can_submit: Signal<bool>,
    saving: Signal<bool>,
    form_error: Signal<Option<ApiError>>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<MouseEvent>,
    on_employee_change: Callback<String>,
    on_set_status: Callback<AttendanceStatus>,
    employee_select: NodeRef<html::Select>,
    date_input: NodeRef<html::Input>,
) -> impl IntoView {
    let employee_value = form_state.employee_id_signal();
    let date_value = form_state.date_signal();
    let status_value = form_state.status_signal();

    let status_button_class = move |status: AttendanceStatus| {
        let active = status_value.get() == status;
        let tone = match (active, status) {
            (true, AttendanceStatus::Present) => {
                "bg-surface-elevated text-status-success-text shadow-sm ring-1 ring-status-success-border"
            }
            (true, AttendanceStatus::Absent) => {
                "bg-surface-elevated text-status-error-text shadow-sm ring-1 ring-status-error-border"
            }
            (false, _) => "text-fg-muted hover:bg-surface-elevated",
        };
        format!("rounded-md px-3 py-2 text-sm font-semibold transition {}", tone)
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="border-b border-border p-5">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h2 class="text-sm font-semibold text-fg">
                            {move || if editing.get() { "Edit Attendance" } else { "Mark Attendance" }}
                        </h2>
                        <p class="mt-1 text-xs text-fg-muted">
                            {move || {
                                if editing.get() {
                                    "Update the selected record. Employee selection is locked."
                                } else {
                                    "Choose an employee, date, and attendance status."
                                }
                            }}
                        </p>
                    </div>
                    {move || {
                        if editing.get() {
                            view! { <Badge variant=BadgeVariant::Info>"Editing"</Badge> }
                        } else {
                            view! { <Badge variant=BadgeVariant::Neutral>"New"</Badge> }
                        }
                    }}
                </div>
            </div>

            <div class="p-5">
                {move || {
                    if employees_loading.get() {
                        view! {
                            <div class="space-y-4">
                                <Skeleton class="h-4 w-24" />
                                <Skeleton class="h-10 w-full" />
                                <Skeleton class="h-4 w-20" />
                                <Skeleton class="h-10 w-full" />
                                <Skeleton class="h-10 w-40" />
                            </div>
                        }
                        .into_view()
                    } else if let Some(err) = employees_error.get() {
                        view! { <ErrorMessage message={err.message} /> }.into_view()
                    } else if employees.get().is_empty() {
                        view! {
                            <EmptyState
                                title="No employees"
                                description="Add employees before marking attendance."
                            />
                        }
                        .into_view()
                    } else {
                        view! {
                            <form class="space-y-4" on:submit=move |ev| on_submit.call(ev)>
                                <div>
                                    <label class="block text-xs font-semibold text-fg-muted" for="attendance-employee">
                                        "Employee"<span class="text-status-error-text">"*"</span>
                                    </label>
                                    <select
                                        id="attendance-employee"
                                        node_ref=employee_select
                                        class=move || input_class(field_errors.get().employee_id.is_some())
                                        disabled=move || saving.get() || editing.get()
                                        prop:value=move || employee_value.get()
                                        on:change=move |ev| on_employee_change.call(event_target_value(&ev))
                                    >
                                        <option value="">"Select employee"</option>
                                        <For
                                            each=move || employees.get()
                                            key=|employee| employee.id
                                            children=move |employee: Employee| {
                                                view! {
                                                    <option value={employee.id.to_string()}>
                                                        {format!("{} ({})", employee.full_name, employee.employee_id)}
                                                    </option>
                                                }
                                            }
                                        />
                                    </select>
                                    {move || match field_errors.get().employee_id {
                                        Some(message) => view! {
                                            <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                                        }
                                        .into_view(),
                                        None => selected_employee
                                            .get()
                                            .map(|employee| view! {
                                                <p class="mt-1 text-xs text-fg-muted">
                                                    {format!(
                                                        "Selected: {} ({})",
                                                        employee.full_name, employee.employee_id
                                                    )}
                                                </p>
                                            })
                                            .into_view(),
                                    }}
                                </div>

                                <div>
                                    <label class="block text-xs font-semibold text-fg-muted" for="attendance-date">
                                        "Date"<span class="text-status-error-text">"*"</span>
                                    </label>
                                    <input
                                        id="attendance-date"
                                        type="date"
                                        node_ref=date_input
                                        class=move || input_class(field_errors.get().date.is_some())
                                        disabled=move || saving.get()
                                        prop:value=move || date_value.get()
                                        on:input=move |ev| date_value.set(event_target_value(&ev))
                                    />
                                    {move || field_errors.get().date.map(|message| view! {
                                        <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                                    })}
                                </div>

                                <div>
                                    <span class="block text-xs font-semibold text-fg-muted">"Status"</span>
                                    <div class="mt-2 rounded-md border border-border bg-surface-muted p-1">
                                        <div class="grid grid-cols-2 gap-1">
                                            <button
                                                type="button"
                                                class=move || status_button_class(AttendanceStatus::Present)
                                                aria-pressed=move || status_value.get() == AttendanceStatus::Present
                                                disabled=move || saving.get()
                                                on:click=move |_| on_set_status.call(AttendanceStatus::Present)
                                            >
                                                "Present"
                                            </button>
                                            <button
                                                type="button"
                                                class=move || status_button_class(AttendanceStatus::Absent)
                                                aria-pressed=move || status_value.get() == AttendanceStatus::Absent
                                                disabled=move || saving.get()
                                                on:click=move |_| on_set_status.call(AttendanceStatus::Absent)
                                            >
                                                "Absent"
                                            </button>
                                        </div>
                                    </div>
                                </div>

                                <InlineErrorMessage error=form_error />

                                <div class="flex flex-col gap-2 sm:flex-row sm:items-center">
                                    <Button
                                        variant=ButtonVariant::Primary
                                        disabled=Signal::derive(move || !can_submit.get())
                                        loading=saving
                                        attr:type="submit"
                                    >
                                        {move || {
                                            if saving.get() {
                                                "Saving..."
                                            } else if editing.get() {
                                                "Update Attendance"
                                            } else {
                                                "Mark Attendance"
                                            }
                                        }}
                                    </Button>
                                    <Show when=move || editing.get()>
                                        <Button
                                            variant=ButtonVariant::Secondary
                                            disabled=saving
                                            on:click=move |ev| on_cancel.call(ev)
                                            attr:type="button"
                                        >
                                            "Cancel"
                                        </Button>
                                    </Show>
                                </div>
                            </form>
                        }
                        .into_view()
                    }
                }}
            </div>
        </section>
    }
}

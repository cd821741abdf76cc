use crate::{
    api::ApiError,
    components::{
        common::{Badge, BadgeVariant, Button, ButtonVariant},
        error::InlineErrorMessage,
    },
    pages::employees::utils::{EmployeeFieldErrors, EmployeeFormState},
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
pub fn EmployeeFormSection(
    form_state: EmployeeFormState,
    editing: Signal<bool>,
    field_errors: Signal<EmployeeFieldErrors>,
    can_submit: Signal<bool>,
    saving: Signal<bool>,
    form_error: Signal<Option<ApiError>>,
    on_submit: Callback<SubmitEvent>,
    on_cancel: Callback<MouseEvent>,
    code_input: NodeRef<html::Input>,
    name_input: NodeRef<html::Input>,
) -> impl IntoView {
    let employee_id = form_state.employee_id_signal();
    let full_name = form_state.full_name_signal();
    let email = form_state.email_signal();
    let department = form_state.department_signal();
    let date_of_joining = form_state.date_of_joining_signal();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="border-b border-border p-5">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h2 class="text-sm font-semibold text-fg">
                            {move || if editing.get() { "Edit Employee" } else { "Add Employee" }}
                        </h2>
                        <p class="mt-1 text-xs text-fg-muted">
                            {move || {
                                if editing.get() {
                                    "Update details. Employee ID is locked."
                                } else {
                                    "Create a new employee. Employee ID must be unique."
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

            <form class="p-5 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                <div>
                    <label class="block text-xs font-semibold text-fg-muted" for="employee-code">
                        "Employee ID"
                        <Show when=move || !editing.get()>
                            <span class="text-status-error-text">"*"</span>
                        </Show>
                    </label>
                    <input
                        id="employee-code"
                        node_ref=code_input
                        class=move || input_class(field_errors.get().employee_id.is_some())
                        placeholder="EMP-001"
                        disabled=move || saving.get() || editing.get()
                        prop:value=move || employee_id.get()
                        on:input=move |ev| employee_id.set(event_target_value(&ev))
                    />
                    {move || match field_errors.get().employee_id {
                        Some(message) => view! {
                            <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                        }
                        .into_view(),
                        None => view! {
                            <p class="mt-1 text-xs text-fg-muted">"Example: EMP-001, EMP-100"</p>
                        }
                        .into_view(),
                    }}
                </div>

                <div>
                    <label class="block text-xs font-semibold text-fg-muted" for="employee-name">
                        "Full Name"<span class="text-status-error-text">"*"</span>
                    </label>
                    <input
                        id="employee-name"
                        node_ref=name_input
                        class=move || input_class(field_errors.get().full_name.is_some())
                        placeholder="Jane Doe"
                        disabled=move || saving.get()
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().full_name.map(|message| view! {
                        <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                    })}
                </div>

                <div>
                    <label class="block text-xs font-semibold text-fg-muted" for="employee-email">
                        "Email"<span class="text-status-error-text">"*"</span>
                    </label>
                    <input
                        id="employee-email"
                        type="email"
                        class=move || input_class(field_errors.get().email.is_some())
                        placeholder="jane@company.com"
                        disabled=move || saving.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().email.map(|message| view! {
                        <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                    })}
                </div>

                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                    <div>
                        <label class="block text-xs font-semibold text-fg-muted" for="employee-department">
                            "Department"<span class="text-status-error-text">"*"</span>
                        </label>
                        <input
                            id="employee-department"
                            class=move || input_class(field_errors.get().department.is_some())
                            placeholder="Engineering"
                            disabled=move || saving.get()
                            prop:value=move || department.get()
                            on:input=move |ev| department.set(event_target_value(&ev))
                        />
                        {move || field_errors.get().department.map(|message| view! {
                            <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                        })}
                    </div>

                    <div>
                        <label class="block text-xs font-semibold text-fg-muted" for="employee-joined">
                            "Date of Joining"<span class="text-status-error-text">"*"</span>
                        </label>
                        <input
                            id="employee-joined"
                            type="date"
                            class=move || input_class(field_errors.get().date_of_joining.is_some())
                            disabled=move || saving.get()
                            prop:value=move || date_of_joining.get()
                            on:input=move |ev| date_of_joining.set(event_target_value(&ev))
                        />
                        {move || field_errors.get().date_of_joining.map(|message| view! {
                            <p class="mt-1 text-xs font-medium text-status-error-text">{message}</p>
                        })}
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
                                "Update Employee"
                            } else {
                                "Create Employee"
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
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::employees::utils::{validate_employee_draft, EmployeeDraft};
    use crate::test_support::ssr::{render_to_string, with_runtime};

    fn render_form(editing: bool, attempted: bool) -> String {
        render_to_string(move || {
            let form_state = EmployeeFormState::new();
            let errors = Signal::derive(move || {
                validate_employee_draft(&EmployeeDraft::default(), editing, attempted)
            });
            view! {
                <EmployeeFormSection
                    form_state=form_state
                    editing=Signal::derive(move || editing)
                    field_errors=errors
                    can_submit=Signal::derive(|| false)
                    saving=Signal::derive(|| false)
                    form_error=Signal::derive(|| None)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    code_input=create_node_ref()
                    name_input=create_node_ref()
                />
            }
        })
    }

    #[test]
    fn create_mode_shows_add_header_and_code_hint() {
        let html = render_form(false, false);
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Example: EMP-001, EMP-100"));
        assert!(!html.contains("Employee ID is required."));
    }

    #[test]
    fn field_errors_appear_after_submit_attempt() {
        let html = render_form(false, true);
        assert!(html.contains("Employee ID is required."));
        assert!(html.contains("Full name is required."));
    }

    #[test]
    fn edit_mode_locks_code_and_offers_cancel() {
        let html = render_form(true, false);
        assert!(html.contains("Edit Employee"));
        assert!(html.contains("Employee ID is locked."));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn form_state_signals_render_into_inputs() {
        with_runtime(|| {
            let form_state = EmployeeFormState::new();
            form_state.full_name_signal().set("Jane Doe".into());
            assert_eq!(form_state.snapshot().full_name, "Jane Doe");
        });
    }
}

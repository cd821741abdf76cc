use crate::{
    api::Employee,
    components::{
        common::{Button, ButtonVariant},
        modal::Modal,
    },
};
use leptos::*;

#[component]
pub fn DetailsModal(
    details_employee: Signal<Option<Employee>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let is_open = Signal::derive(move || details_employee.get().is_some());
    let close_on_footer = on_close;

    view! {
        <Modal
            is_open=is_open
            title="Employee Details"
            description="Read-only employee profile snapshot."
            on_close=on_close
        >
            {move || details_employee.get().map(|employee| view! {
                <div class="space-y-4">
                    <div class="grid gap-4 sm:grid-cols-2">
                        <DetailField label="Employee ID" value={employee.employee_id.clone()} />
                        <DetailField label="Full Name" value={employee.full_name.clone()} />
                        <DetailField label="Email" value={employee.email.clone()} />
                        <DetailField label="Department" value={employee.department.clone()} />
                        <DetailField
                            label="Date of Joining"
                            value={employee.date_of_joining.format("%Y-%m-%d").to_string()}
                        />
                    </div>
                    <div class="flex items-center justify-end">
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| close_on_footer.call(())
                        >
                            "Close"
                        </Button>
                    </div>
                </div>
            })}
        </Modal>
    }
}

#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="rounded-md border border-border bg-surface-muted p-3">
            <div class="text-xs uppercase tracking-wide text-fg-muted">{label}</div>
            <div class="mt-1 text-sm font-semibold text-fg">{value}</div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn details_modal_renders_profile_snapshot() {
        let html = render_to_string(move || {
            let employee = Employee {
                id: 7,
                employee_id: "EMP-007".into(),
                full_name: "Jane Doe".into(),
                email: "jane@company.com".into(),
                department: "Engineering".into(),
                date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            };
            let details = Signal::derive(move || Some(employee.clone()));
            view! { <DetailsModal details_employee=details on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Employee Details"));
        assert!(html.contains("EMP-007"));
        assert!(html.contains("2024-03-01"));
    }
}

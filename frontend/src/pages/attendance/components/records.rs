use crate::{
    api::{ApiError, AttendanceRecord, AttendanceStatus, Employee},
    components::{
        common::{Badge, BadgeVariant, Button, ButtonVariant},
        empty_state::EmptyState,
        layout::ErrorMessage,
        skeleton::TableSkeleton,
    },
    pages::attendance::utils::count_by_status,
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn RecordsSection(
    selected_employee: Signal<Option<Employee>>,
    records: Signal<Vec<AttendanceRecord>>,
    visible: Signal<Vec<AttendanceRecord>>,
    loading: Signal<bool>,
    load_error: Signal<Option<ApiError>>,
    list_error: Signal<Option<String>>,
    filter_date: RwSignal<String>,
    editing_id: Signal<Option<i64>>,
    on_edit: Callback<AttendanceRecord>,
    on_delete_request: Callback<AttendanceRecord>,
    on_clear_filter: Callback<MouseEvent>,
) -> impl IntoView {
    let has_employee = move || selected_employee.get().is_some();
    let has_filter = move || !filter_date.get().trim().is_empty();
    let record_count = move || {
        let count = records.get().len();
        if count == 1 {
            "1 record".to_string()
        } else {
            format!("{} records", count)
        }
    };
    let present_days =
        move || format!("{} present days", count_by_status(&records.get(), AttendanceStatus::Present));
    let absent_days =
        move || format!("{} absent days", count_by_status(&records.get(), AttendanceStatus::Absent));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="border-b border-border p-5">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-start sm:justify-between">
                    <div>
                        <h2 class="text-sm font-semibold text-fg">"Attendance Records"</h2>
                        <p class="mt-1 text-xs text-fg-muted">
                            {move || match selected_employee.get() {
                                Some(employee) => format!(
                                    "{} - {}",
                                    employee.full_name, employee.employee_id
                                ),
                                None => "Choose an employee to view attendance history.".to_string(),
                            }}
                        </p>
                    </div>
                    <Show when=has_employee>
                        <div class="flex flex-wrap items-center gap-2">
                            <Badge variant=BadgeVariant::Neutral>{record_count}</Badge>
                            <Badge variant=BadgeVariant::Success>{present_days}</Badge>
                            <Badge variant=BadgeVariant::Danger>{absent_days}</Badge>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="p-5 space-y-4">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div class="w-full sm:max-w-xs">
                        <label class="block text-xs font-semibold text-fg-muted" for="attendance-filter-date">
                            "Filter by date"
                        </label>
                        <input
                            id="attendance-filter-date"
                            type="date"
                            class="mt-1 block w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm shadow-sm focus:border-action-primary-focus focus:outline-none"
                            prop:value=move || filter_date.get()
                            on:input=move |ev| filter_date.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=has_filter>
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |ev| on_clear_filter.call(ev)
                        >
                            "Clear filter"
                        </Button>
                    </Show>
                </div>

                {move || list_error.get().map(|message| view! { <ErrorMessage message=message /> })}

                {move || {
                    if !has_employee() {
                        view! {
                            <EmptyState
                                title="Select an employee"
                                description="Choose an employee to view attendance records."
                            />
                        }
                        .into_view()
                    } else if loading.get() {
                        view! { <TableSkeleton columns=4 rows=6 /> }.into_view()
                    } else if let Some(err) = load_error.get() {
                        view! { <ErrorMessage message={err.message} /> }.into_view()
                    } else if visible.get().is_empty() {
                        if has_filter() {
                            let date = filter_date.get();
                            let action = view! {
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on:click=move |ev| on_clear_filter.call(ev)
                                >
                                    "Clear filter"
                                </Button>
                            }
                            .into_view();
                            view! {
                                <EmptyState
                                    title="No records found"
                                    description=format!("No attendance records for {}.", date)
                                    action=action
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <EmptyState
                                    title="No records found"
                                    description="Mark attendance to populate this list."
                                />
                            }
                            .into_view()
                        }
                    } else {
                        let employee_name = selected_employee
                            .get()
                            .map(|employee| employee.full_name)
                            .unwrap_or_default();
                        view! {
                            <div class="max-h-[560px] overflow-auto rounded-lg border border-border">
                                <table class="min-w-full text-sm">
                                    <thead class="sticky top-0 z-10 bg-surface-muted">
                                        <tr>
                                            <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Employee"
                                            </th>
                                            <th class="whitespace-nowrap px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Date"
                                            </th>
                                            <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Status"
                                            </th>
                                            <th class="px-4 py-3 text-right text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Actions"
                                            </th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        <For
                                            each=move || visible.get()
                                            key=|record| record.id
                                            children={
                                                let employee_name = employee_name.clone();
                                                move |record: AttendanceRecord| {
                                                    let row_id = record.id;
                                                    let row_class = move || {
                                                        if editing_id.get() == Some(row_id) {
                                                            "bg-status-info-bg"
                                                        } else {
                                                            "hover:bg-surface-muted"
                                                        }
                                                    };
                                                    let badge = if record.status == AttendanceStatus::Present {
                                                        BadgeVariant::Success
                                                    } else {
                                                        BadgeVariant::Danger
                                                    };
                                                    let edit_target = record.clone();
                                                    let delete_target = record.clone();
                                                    view! {
                                                        <tr class=row_class>
                                                            <td class="px-4 py-3 text-fg">{employee_name.clone()}</td>
                                                            <td class="whitespace-nowrap px-4 py-3 text-fg-muted">
                                                                {record.date.format("%Y-%m-%d").to_string()}
                                                            </td>
                                                            <td class="px-4 py-3">
                                                                <Badge variant=badge>{record.status.label()}</Badge>
                                                            </td>
                                                            <td class="whitespace-nowrap px-4 py-3">
                                                                <div class="flex justify-end gap-2">
                                                                    <Button
                                                                        variant=ButtonVariant::Secondary
                                                                        class="!px-2 !py-1 text-xs"
                                                                        attr:title="Edit"
                                                                        on:click=move |_| on_edit.call(edit_target.clone())
                                                                    >
                                                                        "Edit"
                                                                    </Button>
                                                                    <Button
                                                                        variant=ButtonVariant::Danger
                                                                        class="!px-2 !py-1 text-xs"
                                                                        attr:title="Delete"
                                                                        on:click=move |_| on_delete_request.call(delete_target.clone())
                                                                    >
                                                                        "Delete"
                                                                    </Button>
                                                                </div>
                                                            </td>
                                                        </tr>
                                                    }
                                                }
                                            }
                                        />
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_view()
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn employee() -> Employee {
        Employee {
            id: 7,
            employee_id: "EMP-007".into(),
            full_name: "Jane Doe".into(),
            email: "jane@company.com".into(),
            department: "Engineering".into(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    fn record(id: i64, day: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id,
            employee_id: 7,
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            status,
        }
    }

    fn render_records(
        selected: Option<Employee>,
        records: Vec<AttendanceRecord>,
        visible: Vec<AttendanceRecord>,
        filter: &'static str,
    ) -> String {
        render_to_string(move || {
            let filter_date = create_rw_signal(filter.to_string());
            view! {
                <RecordsSection
                    selected_employee=Signal::derive(move || selected.clone())
                    records=Signal::derive(move || records.clone())
                    visible=Signal::derive(move || visible.clone())
                    loading=Signal::derive(|| false)
                    load_error=Signal::derive(|| None)
                    list_error=Signal::derive(|| None)
                    filter_date=filter_date
                    editing_id=Signal::derive(|| None)
                    on_edit=Callback::new(|_| {})
                    on_delete_request=Callback::new(|_| {})
                    on_clear_filter=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn prompts_for_employee_before_any_load() {
        let html = render_records(None, Vec::new(), Vec::new(), "");
        assert!(html.contains("Select an employee"));
        assert!(html.contains("Choose an employee to view attendance history."));
    }

    #[test]
    fn renders_rows_and_summary_badges_for_selected_employee() {
        let records = vec![
            record(1, 6, AttendanceStatus::Present),
            record(2, 7, AttendanceStatus::Absent),
        ];
        let html = render_records(Some(employee()), records.clone(), records, "");
        assert!(html.contains("2 records"));
        assert!(html.contains("1 present days"));
        assert!(html.contains("1 absent days"));
        assert!(html.contains("2026-08-06"));
        assert!(html.contains("Jane Doe"));
    }

    #[test]
    fn filtered_empty_state_names_the_date_and_offers_clear() {
        let records = vec![record(1, 6, AttendanceStatus::Present)];
        let html = render_records(Some(employee()), records, Vec::new(), "2026-01-01");
        assert!(html.contains("No attendance records for 2026-01-01."));
        assert!(html.contains("Clear filter"));
    }

    #[test]
    fn unfiltered_empty_state_suggests_marking_attendance() {
        let html = render_records(Some(employee()), Vec::new(), Vec::new(), "");
        assert!(html.contains("Mark attendance to populate this list."));
        assert!(!html.contains("Clear filter"));
    }
}

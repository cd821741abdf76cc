use crate::{
    api::{ApiError, Employee},
    components::{
        common::{Badge, BadgeVariant, Button, ButtonVariant},
        empty_state::EmptyState,
        layout::ErrorMessage,
        skeleton::TableSkeleton,
    },
};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn DirectorySection(
    employees: Signal<Vec<Employee>>,
    filtered: Signal<Vec<Employee>>,
    loading: Signal<bool>,
    load_error: Signal<Option<ApiError>>,
    list_error: Signal<Option<String>>,
    search_query: RwSignal<String>,
    editing_id: Signal<Option<i64>>,
    on_show_details: Callback<Employee>,
    on_edit: Callback<Employee>,
    on_delete_request: Callback<Employee>,
    on_clear_search: Callback<MouseEvent>,
) -> impl IntoView {
    let shown_of_total = move || {
        format!(
            "{} shown of {} total",
            filtered.get().len(),
            employees.get().len()
        )
    };
    let has_query = move || !search_query.get().trim().is_empty();

    view! {
        <section class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="border-b border-border p-5">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <div>
                        <h2 class="text-sm font-semibold text-fg">"Employee Directory"</h2>
                        <p class="mt-1 text-xs text-fg-muted">{shown_of_total}</p>
                    </div>
                    <div class="w-full sm:max-w-xs">
                        <label class="sr-only" for="employee-search">"Search employees"</label>
                        <input
                            id="employee-search"
                            class="w-full rounded-md border border-border bg-surface-elevated px-3 py-2 text-sm shadow-sm focus:border-action-primary-focus focus:outline-none"
                            placeholder="Search by name, email, ID"
                            prop:value=move || search_query.get()
                            on:input=move |ev| search_query.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </div>

            <div class="p-5">
                {move || list_error.get().map(|message| view! { <ErrorMessage message=message /> })}

                {move || {
                    if loading.get() {
                        view! { <TableSkeleton columns=6 rows=6 /> }.into_view()
                    } else if let Some(err) = load_error.get() {
                        view! { <ErrorMessage message={err.message} /> }.into_view()
                    } else if filtered.get().is_empty() {
                        if has_query() {
                            let query = search_query.get();
                            let action = view! {
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on:click=move |ev| on_clear_search.call(ev)
                                >
                                    "Clear search"
                                </Button>
                            }
                            .into_view();
                            view! {
                                <EmptyState
                                    title="No matching employees"
                                    description=format!("No employee matched \"{}\".", query)
                                    action=action
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <EmptyState
                                    title="No employees found"
                                    description="Create your first employee using the form on the left."
                                />
                            }
                            .into_view()
                        }
                    } else {
                        view! {
                            <div class="max-h-[560px] overflow-auto rounded-lg border border-border">
                                <table class="min-w-full text-sm">
                                    <thead class="sticky top-0 z-10 bg-surface-muted">
                                        <tr>
                                            <th class="whitespace-nowrap px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Employee ID"
                                            </th>
                                            <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Name"
                                            </th>
                                            <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Email"
                                            </th>
                                            <th class="whitespace-nowrap px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Department"
                                            </th>
                                            <th class="whitespace-nowrap px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Joined"
                                            </th>
                                            <th class="px-4 py-3 text-right text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                                "Actions"
                                            </th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        <For
                                            each=move || filtered.get()
                                            key=|employee| employee.id
                                            children=move |employee: Employee| {
                                                let row_id = employee.id;
                                                let row_class = move || {
                                                    if editing_id.get() == Some(row_id) {
                                                        "bg-status-info-bg"
                                                    } else {
                                                        "hover:bg-surface-muted"
                                                    }
                                                };
                                                let details_target = employee.clone();
                                                let edit_target = employee.clone();
                                                let delete_target = employee.clone();
                                                view! {
                                                    <tr class=row_class>
                                                        <td class="whitespace-nowrap px-4 py-3 font-semibold text-fg">
                                                            {employee.employee_id.clone()}
                                                        </td>
                                                        <td class="px-4 py-3 text-fg">{employee.full_name.clone()}</td>
                                                        <td class="px-4 py-3 text-fg-muted">{employee.email.clone()}</td>
                                                        <td class="whitespace-nowrap px-4 py-3">
                                                            <Badge variant=BadgeVariant::Neutral>
                                                                {employee.department.clone()}
                                                            </Badge>
                                                        </td>
                                                        <td class="whitespace-nowrap px-4 py-3 text-fg-muted">
                                                            {employee.date_of_joining.format("%Y-%m-%d").to_string()}
                                                        </td>
                                                        <td class="whitespace-nowrap px-4 py-3">
                                                            <div class="flex justify-end gap-2">
                                                                <Button
                                                                    variant=ButtonVariant::Secondary
                                                                    class="!px-2 !py-1 text-xs"
                                                                    attr:title="View details"
                                                                    on:click=move |_| on_show_details.call(details_target.clone())
                                                                >
                                                                    "View"
                                                                </Button>
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

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            employee_id: format!("EMP-{:03}", id),
            full_name: name.into(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
            department: "Engineering".into(),
            date_of_joining: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    fn render_directory(
        all: Vec<Employee>,
        shown: Vec<Employee>,
        query: &'static str,
        loading: bool,
    ) -> String {
        render_to_string(move || {
            let search_query = create_rw_signal(query.to_string());
            view! {
                <DirectorySection
                    employees=Signal::derive(move || all.clone())
                    filtered=Signal::derive(move || shown.clone())
                    loading=Signal::derive(move || loading)
                    load_error=Signal::derive(|| None)
                    list_error=Signal::derive(|| None)
                    search_query=search_query
                    editing_id=Signal::derive(|| None)
                    on_show_details=Callback::new(|_| {})
                    on_edit=Callback::new(|_| {})
                    on_delete_request=Callback::new(|_| {})
                    on_clear_search=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn renders_rows_and_shown_of_total_count() {
        let rows = vec![employee(1, "Jane Doe"), employee(2, "John Roe")];
        let html = render_directory(rows.clone(), rows, "", false);
        assert!(html.contains("2 shown of 2 total"));
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("EMP-001"));
    }

    #[test]
    fn empty_filter_result_offers_clear_search() {
        let rows = vec![employee(1, "Jane Doe")];
        let html = render_directory(rows, Vec::new(), "zzz", false);
        assert!(html.contains("No matching employees"));
        assert!(html.contains("No employee matched \"zzz\"."));
        assert!(html.contains("Clear search"));
    }

    #[test]
    fn empty_directory_uses_distinct_message_without_action() {
        let html = render_directory(Vec::new(), Vec::new(), "", false);
        assert!(html.contains("No employees found"));
        assert!(html.contains("Create your first employee"));
        assert!(!html.contains("Clear search"));
    }

    #[test]
    fn loading_state_renders_skeleton_table() {
        let html = render_directory(Vec::new(), Vec::new(), "", true);
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("No employees found"));
    }
}

use crate::{
    api::{AttendanceStatus, RecentAttendance},
    components::{
        common::{Badge, BadgeVariant},
        empty_state::EmptyState,
    },
};
use leptos::*;

#[component]
pub fn RecentActivitySection(recent: Signal<Vec<RecentAttendance>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <div class="border-b border-border p-5">
                <h2 class="text-sm font-semibold text-fg">"Recent Activity"</h2>
                <p class="mt-1 text-xs text-fg-muted">"Latest attendance events recorded in the system."</p>
            </div>
            <div class="p-5">
                <Show
                    when=move || !recent.get().is_empty()
                    fallback=|| view! {
                        <EmptyState
                            title="No activity yet"
                            description="Mark attendance to start building activity logs."
                        />
                    }
                >
                    <div class="overflow-auto rounded-lg border border-border">
                        <table class="min-w-full text-sm">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                        "Employee"
                                    </th>
                                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                        "Date"
                                    </th>
                                    <th class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted">
                                        "Status"
                                    </th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || recent.get()
                                    key=|row| (row.employee_id, row.date)
                                    children=move |row: RecentAttendance| {
                                        let badge = if row.status == AttendanceStatus::Present {
                                            BadgeVariant::Success
                                        } else {
                                            BadgeVariant::Danger
                                        };
                                        view! {
                                            <tr>
                                                <td class="px-4 py-3 font-semibold text-fg">{row.employee_name.clone()}</td>
                                                <td class="whitespace-nowrap px-4 py-3 text-fg-muted">
                                                    {row.date.format("%Y-%m-%d").to_string()}
                                                </td>
                                                <td class="px-4 py-3">
                                                    <Badge variant=badge>{row.status.label()}</Badge>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn renders_rows_with_status_badges() {
        let html = render_to_string(move || {
            let recent = Signal::derive(|| {
                vec![RecentAttendance {
                    employee_id: 7,
                    employee_name: "Jane Doe".into(),
                    date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                    status: AttendanceStatus::Present,
                }]
            });
            view! { <RecentActivitySection recent=recent /> }
        });
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("2026-08-07"));
        assert!(html.contains("Present"));
    }

    #[test]
    fn renders_empty_state_without_rows() {
        let html = render_to_string(move || {
            let recent = Signal::derive(Vec::new);
            view! { <RecentActivitySection recent=recent /> }
        });
        assert!(html.contains("No activity yet"));
    }
}

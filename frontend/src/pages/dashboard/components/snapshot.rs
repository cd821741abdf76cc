use crate::pages::dashboard::repository::DerivedSummary;
use leptos::*;

#[component]
pub fn SnapshotSection(derived: Signal<DerivedSummary>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-5">
            <div>
                <h2 class="text-sm font-semibold text-fg">"Today Snapshot"</h2>
                <p class="mt-1 text-xs text-fg-muted">"Quick ratio view of attendance and workforce coverage."</p>
            </div>
            <Meter
                label="Attendance rate"
                value=Signal::derive(move || derived.get().attendance_rate)
                bar_class="bg-status-success-border"
            />
            <Meter
                label="Coverage of total employees"
                value=Signal::derive(move || derived.get().coverage_rate)
                bar_class="bg-action-primary-bg"
            />
            <Meter
                label="Absent impact"
                value=Signal::derive(move || derived.get().absent_impact)
                bar_class="bg-status-error-border"
            />
        </div>
    }
}

#[component]
fn Meter(label: &'static str, value: Signal<i64>, bar_class: &'static str) -> impl IntoView {
    let clamped = move || value.get().clamp(0, 100);
    view! {
        <div>
            <div class="mb-1 flex items-center justify-between text-xs text-fg-muted">
                <span>{label}</span>
                <span>{move || format!("{}%", clamped())}</span>
            </div>
            <div class="h-2 w-full overflow-hidden rounded-full bg-surface-muted">
                <div
                    class=format!("h-full rounded-full {}", bar_class)
                    style=move || format!("width: {}%", clamped())
                ></div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn snapshot_renders_three_meters_with_percentages() {
        let html = render_to_string(move || {
            let derived = Signal::derive(|| DerivedSummary {
                total_employees: 10,
                present_today: 6,
                absent_today: 2,
                checked_in_today: 8,
                attendance_rate: 75,
                coverage_rate: 80,
                absent_impact: 20,
            });
            view! { <SnapshotSection derived=derived /> }
        });
        assert!(html.contains("Attendance rate"));
        assert!(html.contains("width: 75%"));
        assert!(html.contains("width: 80%"));
        assert!(html.contains("Absent impact"));
    }
}

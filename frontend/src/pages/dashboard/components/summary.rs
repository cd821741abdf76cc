use crate::{
    components::common::{Badge, BadgeVariant},
    pages::dashboard::repository::DerivedSummary,
};
use leptos::*;

#[component]
pub fn StatCardsSection(derived: Signal<DerivedSummary>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-4">
            <StatCard
                label="Total Employees"
                hint="Current workforce"
                badge=BadgeVariant::Neutral
                value=Signal::derive(move || derived.get().total_employees.to_string())
            />
            <StatCard
                label="Present Today"
                hint="Checked in"
                badge=BadgeVariant::Success
                value=Signal::derive(move || derived.get().present_today.to_string())
            />
            <StatCard
                label="Absent Today"
                hint="Marked absent"
                badge=BadgeVariant::Danger
                value=Signal::derive(move || derived.get().absent_today.to_string())
            />
            <StatCard
                label="Attendance Rate"
                hint="Present among marked"
                badge=BadgeVariant::Info
                value=Signal::derive(move || format!("{}%", derived.get().attendance_rate))
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    hint: &'static str,
    badge: BadgeVariant,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-5">
            <div class="flex items-center justify-between gap-2">
                <div class="text-xs font-semibold uppercase tracking-wider text-fg-muted">{label}</div>
                <Badge variant=badge>{hint}</Badge>
            </div>
            <div class="mt-3 text-3xl font-semibold tracking-tight text-fg">{move || value.get()}</div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_cards_render_counts_and_rate() {
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
            view! { <StatCardsSection derived=derived /> }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("75%"));
        assert!(html.contains("Checked in"));
    }
}

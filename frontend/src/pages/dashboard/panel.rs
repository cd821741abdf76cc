use super::{
    components::{HeaderActions, RecentActivitySection, SnapshotSection, StatCardsSection},
    layout::DashboardFrame,
    repository::derive_summary,
    view_model::use_dashboard_view_model,
};
use crate::{
    api::RecentAttendance,
    components::{layout::ErrorMessage, skeleton::Skeleton},
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! { <DashboardPanel /> }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let summary_resource = vm.summary_resource;
    let refreshing = summary_resource.loading();

    let derived = Signal::derive(move || {
        summary_resource
            .get()
            .and_then(|result| result.ok())
            .map(|summary| derive_summary(&summary))
            .unwrap_or_default()
    });
    let recent: Signal<Vec<RecentAttendance>> = Signal::derive(move || {
        summary_resource
            .get()
            .and_then(|result| result.ok())
            .map(|summary| summary.recent_attendance)
            .unwrap_or_default()
    });
    let load_error =
        Signal::derive(move || summary_resource.get().and_then(|result| result.err()));

    view! {
        <DashboardFrame>
            <div class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <h1 class="text-2xl font-semibold tracking-tight text-fg">"Dashboard"</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            "Overview of workforce and attendance activity for today."
                        </p>
                    </div>
                    <HeaderActions
                        on_refresh=Callback::new(vm.on_refresh())
                        refreshing=Signal::derive(move || refreshing.get())
                    />
                </div>

                {move || match summary_resource.get() {
                    None => view! { <DashboardSkeleton /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message={err.message} /> }.into_view(),
                    Some(Ok(_)) => view! {
                        <div class="space-y-6">
                            <StatCardsSection derived=derived />
                            <SnapshotSection derived=derived />
                            <RecentActivitySection recent=recent />
                        </div>
                    }
                    .into_view(),
                }}
            </div>
        </DashboardFrame>
    }
}

#[component]
fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-4">
                {(0..4)
                    .map(|_| view! {
                        <div class="bg-surface-elevated shadow rounded-lg p-5">
                            <Skeleton class="h-3 w-24" />
                            <Skeleton class="mt-3 h-8 w-16" />
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-3">
                <Skeleton class="h-4 w-32" />
                <Skeleton class="h-2 w-full" />
                <Skeleton class="h-2 w-5/6" />
                <Skeleton class="h-2 w-2/3" />
            </div>
            <div class="bg-surface-elevated shadow rounded-lg p-5 space-y-3">
                <Skeleton class="h-4 w-40" />
                {(0..5)
                    .map(|_| view! { <Skeleton class="h-4 w-full" /> })
                    .collect_view()}
            </div>
        </div>
    }
}

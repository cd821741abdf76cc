use leptos::*;

#[component]
pub fn Skeleton(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <div class=format!("animate-pulse rounded bg-surface-muted {}", class) aria-hidden="true"></div>
    }
}

/// Placeholder matching the shape of a directory table while the initial
/// fetch is in flight.
#[component]
pub fn TableSkeleton(
    #[prop(default = 4)] columns: usize,
    #[prop(default = 6)] rows: usize,
) -> impl IntoView {
    let grid_style = format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns);
    let header_style = grid_style.clone();

    view! {
        <div class="rounded-lg border border-border">
            <div class="grid gap-4 border-b border-border bg-surface-muted px-4 py-3" style=header_style>
                {(0..columns)
                    .map(|_| view! { <Skeleton class="h-3 w-full" /> })
                    .collect_view()}
            </div>
            <div class="space-y-4 px-4 py-4">
                {(0..rows)
                    .map(|_| {
                        let row_style = grid_style.clone();
                        view! {
                            <div class="grid gap-4" style=row_style>
                                {(0..columns)
                                    .map(|_| view! { <Skeleton class="h-4 w-full" /> })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

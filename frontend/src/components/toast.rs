use leptos::*;

use crate::state::toasts::{use_toaster, Toast};

/// Provides the shared `Toaster` to the subtree and renders the stacked
/// viewport in the top-right corner.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toaster = use_toaster();

    view! {
        {children()}
        <ToastViewport toaster=toaster />
    }
}

#[component]
fn ToastViewport(toaster: crate::state::toasts::Toaster) -> impl IntoView {
    let toasts = toaster.toasts();

    view! {
        <div class="pointer-events-none fixed right-4 top-4 z-[80] flex w-full max-w-sm flex-col gap-2">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!(
                                "pointer-events-auto w-full rounded-lg border px-4 py-3 shadow-sm {}",
                                toast.kind.classes()
                            )
                            role="status"
                        >
                            <div class="flex items-start gap-3">
                                <div class="min-w-0 flex-1">
                                    <div class="text-sm font-semibold">{toast.title.clone()}</div>
                                    <Show when={
                                        let message = toast.message.clone();
                                        move || !message.is_empty()
                                    }>
                                        <div class="mt-1 text-sm opacity-90">{toast.message.clone()}</div>
                                    </Show>
                                </div>
                                <button
                                    type="button"
                                    aria-label="Dismiss notification"
                                    class="rounded px-2 py-1 text-xs font-semibold hover:bg-action-ghost-bg-hover"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "Close"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

use crate::components::common::{Button, ButtonVariant};
use leptos::{ev::MouseEvent, *};

#[component]
pub fn HeaderActions(
    on_refresh: Callback<MouseEvent>,
    #[prop(into)] refreshing: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="flex flex-wrap items-center gap-2">
            <a
                href="/employees"
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm"
            >
                "Add Employee"
            </a>
            <a
                href="/attendance"
                class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted hover:bg-surface-elevated text-fg border border-border shadow-sm"
            >
                "Mark Attendance"
            </a>
            <Button
                variant=ButtonVariant::Ghost
                loading=refreshing
                on:click=move |ev| on_refresh.call(ev)
            >
                "Refresh"
            </Button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_actions_link_to_management_pages() {
        let html = render_to_string(move || {
            view! {
                <HeaderActions
                    on_refresh=Callback::new(|_| {})
                    refreshing=false
                />
            }
        });
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("href=\"/attendance\""));
        assert!(html.contains("Refresh"));
    }
}

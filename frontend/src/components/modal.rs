use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay dialog. Backdrop click, the header button and Escape all close it
/// unless `close_disabled` is set (a pending action must not lose its
/// dialog).
#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] description: Option<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] close_disabled: MaybeSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());

    let close_on_backdrop = on_close;
    let close_on_header_button = on_close;
    let close_on_esc = on_close;

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close dialog"
                    class="absolute inset-0 bg-overlay-backdrop"
                    disabled=move || close_disabled.get()
                    on:click=move |_| {
                        if !close_disabled.get_untracked() {
                            close_on_backdrop.call(())
                        }
                    }
                ></button>
                <div
                    class="relative z-[71] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" && !close_disabled.get_untracked() {
                            ev.prevent_default();
                            close_on_esc.call(());
                        }
                    }
                >
                    <div class="border-b border-border px-5 py-4">
                        <div class="flex items-start justify-between gap-3">
                            <div>
                                <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                                {description.clone().map(|desc| view! {
                                    <p class="mt-1 text-sm text-fg-muted">{desc}</p>
                                })}
                            </div>
                            <button
                                type="button"
                                aria-label="Close dialog"
                                class="text-fg-muted hover:text-fg disabled:opacity-50"
                                disabled=move || close_disabled.get()
                                on:click=move |_| close_on_header_button.call(())
                            >
                                {"✕"}
                            </button>
                        </div>
                    </div>
                    <div class="p-5">{children()}</div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_description_and_children_when_open() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <Modal
                    is_open=is_open
                    title="Employee Details"
                    description="Read-only employee profile snapshot."
                    on_close=Callback::new(|_| {})
                >
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Employee Details"));
        assert!(html.contains("Read-only employee profile snapshot."));
        assert!(html.contains("body"));
    }

    #[test]
    fn modal_renders_nothing_when_closed() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| false);
            view! {
                <Modal is_open=is_open title="hidden" on_close=Callback::new(|_| {})>
                    <p>"body"</p>
                </Modal>
            }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}

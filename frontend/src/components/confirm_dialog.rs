use leptos::*;

use super::modal::Modal;

/// Two-step destructive confirm. While `pending` the dialog cannot be
/// dismissed and both controls are disabled.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    let message_text = Signal::derive(move || message.get());
    let confirm_label_text = Signal::derive(move || {
        let text = confirm_label.get();
        if text.trim().is_empty() {
            "Confirm".to_string()
        } else {
            text
        }
    });
    let cancel_label_text = Signal::derive(move || {
        let text = cancel_label.get();
        if text.trim().is_empty() {
            "Cancel".to_string()
        } else {
            text
        }
    });

    let cancel_on_footer_button = on_cancel;
    let confirm_on_footer_button = on_confirm;

    view! {
        <Modal
            is_open=is_open
            title=title
            on_close=on_cancel
            close_disabled=pending
        >
            <p class="text-sm text-fg-muted">{move || message_text.get()}</p>
            <div class="mt-5 flex justify-end gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| cancel_on_footer_button.call(())
                >
                    {move || cancel_label_text.get()}
                </button>
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                    disabled=move || pending.get()
                    on:click=move |_| confirm_on_footer_button.call(())
                >
                    {move || {
                        if pending.get() {
                            "Please wait...".to_string()
                        } else {
                            confirm_label_text.get()
                        }
                    }}
                </button>
            </div>
        </Modal>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete Employee"
                    message="This action cannot be undone."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("This action cannot be undone."));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
    }

    #[test]
    fn confirm_dialog_disables_controls_while_pending() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete Attendance"
                    message="Delete this record?"
                    confirm_label="Delete attendance"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    pending=true
                />
            }
        });
        assert!(html.contains("Please wait..."));
        assert!(html.contains("disabled"));
    }
}

use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = e.code;
                    if code != "UNKNOWN" && code != "VALIDATION_ERROR" && !code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message_and_code() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::http(
                409,
                "Employee ID already exists",
                None,
            )));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Employee ID already exists"));
        assert!(html.contains("Code: HTTP_409"));
    }

    #[test]
    fn inline_error_hides_code_for_local_validation() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::validation(
                "Please fix the highlighted fields.",
            )));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please fix the highlighted fields."));
        assert!(!html.contains("Code:"));
    }

    #[test]
    fn inline_error_renders_nothing_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(!html.contains("status-error-bg"));
    }
}

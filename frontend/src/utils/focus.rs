use leptos::{html, request_animation_frame, NodeRef};

/// Moves focus once the node is mounted; the form resets and edit-mode
/// transitions call this after updating their signals.
pub fn focus_input_on_next_frame(node: NodeRef<html::Input>) {
    request_animation_frame(move || {
        if let Some(input) = node.get_untracked() {
            let _ = input.focus();
        }
    });
}

pub fn focus_select_on_next_frame(node: NodeRef<html::Select>) {
    request_animation_frame(move || {
        if let Some(select) = node.get_untracked() {
            let _ = select.focus();
        }
    });
}

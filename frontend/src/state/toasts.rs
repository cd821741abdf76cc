use leptos::*;

/// How long a toast stays on screen before it removes itself.
pub const TOAST_DISMISS_MS: u32 = 3_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Info => {
                "border-status-info-border bg-status-info-bg text-status-info-text"
            }
            ToastKind::Success => {
                "border-status-success-border bg-status-success-bg text-status-success-text"
            }
            ToastKind::Error => {
                "border-status-error-border bg-status-error-bg text-status-error-text"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

pub fn push_toast(queue: &mut Vec<Toast>, toast: Toast) {
    queue.push(toast);
}

pub fn remove_toast(queue: &mut Vec<Toast>, id: u64) {
    queue.retain(|toast| toast.id != id);
}

/// Shared notification channel. Cheap to copy; hand it around through
/// context and call `notify` after every mutating operation.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    // Monotonic ids keep the queue deterministic under test.
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    pub fn notify(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> u64 {
        let id = self.next_id.with_value(|value| *value);
        self.next_id.update_value(|value| *value += 1);

        let toast = Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        };
        self.toasts.update(|queue| push_toast(queue, toast));
        self.schedule_dismiss(id);
        id
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Success, title, message)
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.notify(ToastKind::Error, title, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|queue| remove_toast(queue, id));
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.update(|queue| remove_toast(queue, id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {
        // No timer off-wasm; host tests drive dismissal explicitly.
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    match use_context::<Toaster>() {
        Some(toaster) => toaster,
        None => {
            let toaster = Toaster::new();
            provide_context(toaster);
            toaster
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_arrival_order() {
        let mut queue = Vec::new();
        push_toast(
            &mut queue,
            Toast {
                id: 0,
                kind: ToastKind::Success,
                title: "first".into(),
                message: String::new(),
            },
        );
        push_toast(
            &mut queue,
            Toast {
                id: 1,
                kind: ToastKind::Error,
                title: "second".into(),
                message: String::new(),
            },
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(queue[0].title, "first");
        assert_eq!(queue[1].title, "second");
    }

    #[test]
    fn remove_drops_only_the_matching_entry() {
        let mut queue = vec![
            Toast {
                id: 0,
                kind: ToastKind::Info,
                title: "a".into(),
                message: String::new(),
            },
            Toast {
                id: 1,
                kind: ToastKind::Info,
                title: "b".into(),
                message: String::new(),
            },
        ];
        remove_toast(&mut queue, 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, 1);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut queue = vec![Toast {
            id: 3,
            kind: ToastKind::Info,
            title: "a".into(),
            message: String::new(),
        }];
        remove_toast(&mut queue, 99);
        assert_eq!(queue.len(), 1);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notify_assigns_monotonic_ids_and_stacks_in_order() {
        with_runtime(|| {
            let toaster = Toaster::new();
            let first = toaster.success("Employee created", "Jane has been added.");
            let second = toaster.error("Save failed", "Email already exists");
            assert_eq!(first, 0);
            assert_eq!(second, 1);

            let queue = toaster.toasts().get_untracked();
            assert_eq!(queue.len(), 2);
            assert_eq!(queue[0].kind, ToastKind::Success);
            assert_eq!(queue[1].kind, ToastKind::Error);
        });
    }

    #[test]
    fn dismiss_removes_only_the_dismissed_entry() {
        with_runtime(|| {
            let toaster = Toaster::new();
            let first = toaster.notify(ToastKind::Info, "one", "");
            let _second = toaster.notify(ToastKind::Info, "two", "");
            toaster.dismiss(first);

            let queue = toaster.toasts().get_untracked();
            assert_eq!(queue.len(), 1);
            assert_eq!(queue[0].title, "two");
        });
    }

    #[test]
    fn use_toaster_reuses_the_provided_instance() {
        with_runtime(|| {
            let outer = use_toaster();
            outer.notify(ToastKind::Info, "queued", "");
            let inner = use_toaster();
            assert_eq!(inner.toasts().get_untracked().len(), 1);
        });
    }
}

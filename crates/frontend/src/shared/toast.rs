//! Fire-and-forget notification surface.
//!
//! A `Copy` service handle travels through context; `ToastHost` renders the
//! queue and must be mounted exactly once, at the application root.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ToastEntry {
    id: u64,
    message: String,
    severity: ToastSeverity,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a toast; it dismisses itself after a few seconds.
    pub fn show(&self, message: impl Into<String>, severity: ToastSeverity) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.entries.update(|entries| {
            entries.push(ToastEntry {
                id,
                message: message.into(),
                severity,
            });
        });

        let entries = self.entries;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            entries.update(|list| list.retain(|entry| entry.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastSeverity::Error);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast queue. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let class = match entry.severity {
                        ToastSeverity::Success => "toast toast--success",
                        ToastSeverity::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">{entry.message.clone()}</div>
                    }
                }
            />
        </div>
    }
}

//! Transient notifications.
//!
//! `ToastService` is provided once at the app root and used by data-access
//! callers to surface results. Each toast removes itself
//! after a timeout.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use super::config::{TOAST_DURATION_MS, TOAST_ERROR_DURATION_MS, TOAST_MAX_VISIBLE};
use super::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "check",
            ToastKind::Error => "alert",
            ToastKind::Info => "info",
        }
    }

    fn duration_ms(&self) -> u32 {
        match self {
            ToastKind::Error => TOAST_ERROR_DURATION_MS,
            _ => TOAST_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > TOAST_MAX_VISIBLE {
            let overflow = self.items.len() - TOAST_MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            ToastKind::Error => log::warn!("toast: {}", message),
            _ => log::info!("toast: {}", message),
        }
        let id = self
            .queue
            .try_update(|q| q.push(kind, message))
            .unwrap_or_default();
        let queue = self.queue;
        Timeout::new(kind.duration_ms(), move || {
            queue.update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(ToastKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

/// Renders the toast stack; mount once at the app root
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status">
                            {icon(toast.kind.icon())}
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest() {
        let mut queue = ToastQueue::default();
        for i in 0..(TOAST_MAX_VISIBLE + 2) {
            queue.push(ToastKind::Info, format!("m{}", i));
        }
        assert_eq!(queue.items().len(), TOAST_MAX_VISIBLE);
        assert_eq!(queue.items()[0].message, "m2");
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a");
        let b = queue.push(ToastKind::Error, "b");
        assert_ne!(a, b);
        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, b);
    }
}

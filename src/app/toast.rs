//! Toast notifications shared across pages.
//!
//! A single queue lives in context at the app root; pages push to it and the
//! layout renders it.

use dioxus::prelude::*;

use crate::app::api::FetchError;

/// Toasts visible at once; older ones drop off.
const TOAST_LIMIT: usize = 3;

/// How long a toast stays up in the browser.
#[cfg(target_arch = "wasm32")]
const TOAST_DURATION_MS: i32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    /// Confirmation of something removed
    Destructive,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "border-emerald-500",
            ToastKind::Error => "border-red-500 bg-red-950",
            ToastKind::Destructive => "border-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
        });
        if self.toasts.len() > TOAST_LIMIT {
            let excess = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the app-wide toast queue
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<ToastQueue>,
}

impl Toasts {
    pub fn list(&self) -> Vec<Toast> {
        self.queue.read().toasts().to_vec()
    }

    pub fn show(&mut self, kind: ToastKind, title: &str, description: &str) {
        let id = self.queue.write().push(kind, title, description);

        #[cfg(target_arch = "wasm32")]
        {
            let mut toasts = *self;
            spawn(async move {
                sleep_ms(TOAST_DURATION_MS).await;
                toasts.dismiss(id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    pub fn success(&mut self, title: &str, description: &str) {
        self.show(ToastKind::Success, title, description);
    }

    pub fn destructive(&mut self, title: &str, description: &str) {
        self.show(ToastKind::Destructive, title, description);
    }

    /// Report a failed call: console diagnostic plus the shared error toast.
    pub fn network_error(&mut self, context: &str, err: &FetchError) {
        tracing::warn!("{}: {}", context, err);
        self.show(ToastKind::Error, err.user_message(), context);
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Install the toast queue at the app root.
pub fn use_toast_provider() -> Toasts {
    use_context_provider(|| Toasts {
        queue: Signal::new(ToastQueue::default()),
    })
}

/// Access the toast queue from any page or component.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

//! Transient notifications

use leptos::*;
use std::time::Duration;
use wx_core::{Notice, NoticeLevel, Notifier};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Shared handle to the on-screen toast stack; provided as context by `App`
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime: Duration,
}

impl Toaster {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            lifetime,
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        tracing::debug!(id, message = %notice.message, "Showing toast");
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let this = *self;
        set_timeout(move || this.dismiss(id), self.lifetime);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        self.push(notice);
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 w-80">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let (icon, accent) = match toast.notice.level {
                        NoticeLevel::Info => ("ℹ️", "border-blue-500"),
                        NoticeLevel::Success => ("✓", "border-green-500"),
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("bg-white shadow-lg rounded-lg p-4 border-l-4 flex items-start {}", accent)>
                            <span class="mr-3">{icon}</span>
                            <p class="flex-1 text-sm text-gray-800">{toast.notice.message}</p>
                            <button
                                class="ml-2 text-gray-400 hover:text-gray-600"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

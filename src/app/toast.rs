use std::time::Duration;

use leptos::prelude::*;

use crate::contact::{Notice, NoticeLevel};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Queue of transient notices shown in the corner of the page.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }

    pub fn push_all(&self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();
    view! {
        <div class="fixed top-20 right-4 z-[60] flex flex-col gap-2 max-w-sm" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (icon, class) = match toast.notice.level {
                        NoticeLevel::Success => ("✓", "border-green-500 text-green-700 dark:text-green-300"),
                        NoticeLevel::Error => ("✗", "border-red-500 text-red-700 dark:text-red-300"),
                    };
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "flex items-start gap-2 px-4 py-3 rounded-md shadow-lg border-l-4 bg-white dark:bg-gray-800 text-sm {class}",
                            )
                            on:click=move |_| toaster.dismiss(toast.id)
                        >
                            <span class="font-bold">{icon}</span>
                            <span>{toast.notice.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::STATUS_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

static NEXT_STATUS_ID: AtomicU64 = AtomicU64::new(1);

/// Banner message shown above the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Unique per notification, so repeating a text is a new message
    id: u64,
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        let id = NEXT_STATUS_ID.fetch_add(1, Ordering::Relaxed);
        Self { id, kind, text: text.into() }
    }
}

/// Whether the banner still shows `shown`, i.e. no later notification
/// replaced it, even one with the same text
fn still_shown(current: Option<&StatusMessage>, shown: &StatusMessage) -> bool {
    current.is_some_and(|current| current.id == shown.id)
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch the structure forest - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch the structure forest - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current banner message - read
    pub status: ReadSignal<Option<StatusMessage>>,
    /// Current banner message - write
    set_status: WriteSignal<Option<StatusMessage>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        status: (ReadSignal<Option<StatusMessage>>, WriteSignal<Option<StatusMessage>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            status: status.0,
            set_status: status.1,
        }
    }

    /// Refetch the forest from scratch
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a success message; it clears itself after a few seconds
    /// unless another message replaced it in the meantime.
    pub fn notify_success(&self, text: impl Into<String>) {
        let message = StatusMessage::new(StatusKind::Success, text);
        self.set_status.set(Some(message.clone()));

        let status = self.status;
        let set_status = self.set_status;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(STATUS_DISMISS_MS).await;
            if still_shown(status.get_untracked().as_ref(), &message) {
                set_status.set(None);
            }
        });
    }

    /// Show an error message; stays until dismissed or replaced
    pub fn notify_error(&self, text: impl Into<String>) {
        self.set_status.set(Some(StatusMessage::new(StatusKind::Error, text)));
    }

    pub fn dismiss_status(&self) {
        self.set_status.set(None);
    }
}

//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const TOAST_DURATION_MS: u32 = 2_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current transient toast message - read
    pub toast_message: ReadSignal<Option<String>>,
    /// Current transient toast message - write
    set_toast_message: WriteSignal<Option<String>>,
    /// Sequence number of the latest toast - read
    toast_seq: ReadSignal<u32>,
    /// Sequence number of the latest toast - write
    set_toast_seq: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        toast_message: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        toast_seq: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            toast_message: toast_message.0,
            set_toast_message: toast_message.1,
            toast_seq: toast_seq.0,
            set_toast_seq: toast_seq.1,
        }
    }

    /// Show a transient toast that dismisses itself
    ///
    /// The sequence number ties the dismiss timer to the message it was
    /// started for, so a newer toast is never cleared by an older timer.
    pub fn toast(&self, message: &str) {
        let seq = self.toast_seq.get_untracked() + 1;
        self.set_toast_seq.set(seq);
        self.set_toast_message.set(Some(message.to_string()));

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            if ctx.toast_seq.get_untracked() == seq {
                ctx.set_toast_message.set(None);
            }
        });
    }
}

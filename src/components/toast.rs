//! Toast Component
//!
//! Transient success notification in the top-right corner. The message
//! lives in [`AppContext`]; this component only renders it.

use leptos::prelude::*;

use crate::context::AppContext;

/// Transient notification overlay
#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.toast_message.get().map(|message| view! {
            <div class="toast">{message}</div>
        })}
    }
}

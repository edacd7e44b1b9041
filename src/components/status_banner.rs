//! Status Banner Component
//!
//! Success/error message above the structures table.

use leptos::prelude::*;

use crate::context::{AppContext, StatusKind};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || {
        ctx.status.get().map(|message| {
            let class = match message.kind {
                StatusKind::Success => "status-banner success",
                StatusKind::Error => "status-banner error",
            };
            view! {
                <div class=class role="status">
                    <span class="status-text">{message.text}</span>
                    <button class="status-dismiss" on:click=move |_| ctx.dismiss_status()>"×"</button>
                </div>
            }
        })
    }
}

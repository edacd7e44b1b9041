//! Delete Confirm Button Component
//!
//! Inline two-step delete for table rows: the trash button turns into a
//! "delete <name>?" prompt with confirm/cancel instead of a blocking
//! `window.confirm`.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// Name shown in the prompt
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let prompt = format!("حذف «{}»؟", item_name);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="action-btn btn-delete"
                    title="حذف"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "🗑"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}

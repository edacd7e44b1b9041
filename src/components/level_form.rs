//! Level Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::context::AppContext;
use crate::models::{non_blank, Level, LevelDraft};

/// Create a level, or edit `level` when given
#[component]
pub fn LevelForm(
    level: Option<Level>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();

    let editing_id = level.as_ref().map(|level| level.id);
    let initial = level.as_ref().map(LevelDraft::from_level).unwrap_or_default();
    let title = if editing_id.is_some() { "تعديل مستوى" } else { "إضافة مستوى" };

    let (name, set_name) = signal(initial.name);
    let (description, set_description) = signal(initial.description.unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = LevelDraft {
            name: name.get().trim().to_string(),
            description: non_blank(&description.get()),
        };
        if draft.name.is_empty() {
            set_error.set(Some("الاسم مطلوب".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let api = api.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => api.update_level(id, &draft).await,
                None => api.create_level(&draft).await,
            };
            match result {
                Ok(()) => {
                    tracing::info!(id = ?editing_id, name = %draft.name, "level saved");
                    ctx.notify_success(if editing_id.is_some() { "تم التحديث بنجاح" } else { "تم الإضافة بنجاح" });
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => {
                    tracing::warn!(id = ?editing_id, error = %e, "level save failed");
                    set_saving.set(false);
                    set_error.set(Some(format!("فشلت العملية: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form class="modal-body structure-form" on:submit=submit>
                    {move || error.get().map(|message| view! { <div class="form-error">{message}</div> })}

                    <label class="form-field">
                        <span>"الاسم"</span>
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        <span>"الوصف"</span>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="modal-footer">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"إلغاء"</button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "جار الحفظ..." } else { "حفظ" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

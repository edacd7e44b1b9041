//! Level Table Component
//!
//! Flat list of structure levels with edit and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::Level;
use crate::store::{store_levels, store_set_levels, use_console_store};

#[component]
pub fn LevelTable(#[prop(into)] on_edit: Callback<Level>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_console_store();
    let (loading, set_loading) = signal(true);

    let fetch_api = api.clone();
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = fetch_api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.fetch_levels().await {
                Ok(levels) => {
                    tracing::debug!(count = levels.len(), "loaded levels");
                    store_set_levels(&store, levels);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "level fetch failed");
                    ctx.notify_error(format!("فشل تحميل البيانات: {}", e));
                }
            }
            set_loading.set(false);
        });
    });

    let on_delete = Callback::new(move |id: u32| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_level(id).await {
                Ok(()) => {
                    tracing::info!(id, "level deleted");
                    ctx.notify_success("تم الحذف بنجاح");
                    ctx.reload();
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "level delete failed");
                    ctx.notify_error(format!("فشل الحذف: {}", e));
                }
            }
        });
    });

    move || {
        let levels = store_levels(&store);
        if levels.is_empty() && loading.get() {
            view! { <div class="loading-container">"جار التحميل..."</div> }.into_any()
        } else if levels.is_empty() {
            view! { <div class="empty-state">"لا توجد بيانات متاحة."</div> }.into_any()
        } else {
            view! {
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"الاسم"</th>
                                <th>"الوصف"</th>
                                <th class="col-actions">"الإجراءات"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || levels.clone()
                                key=|level| (level.id, level.name.clone(), level.description.clone())
                                children=move |level| {
                                    let id = level.id;
                                    let delete_name = level.name.clone();
                                    let for_edit = level.clone();
                                    view! {
                                        <tr>
                                            <td class="font-medium">{level.name}</td>
                                            <td>{level.description.unwrap_or_default()}</td>
                                            <td>
                                                <div class="row-actions">
                                                    <button
                                                        class="action-btn btn-edit"
                                                        title="تعديل"
                                                        on:click=move |_| on_edit.run(for_edit.clone())
                                                    >
                                                        "✎"
                                                    </button>
                                                    <DeleteConfirmButton
                                                        item_name=delete_name
                                                        on_confirm=Callback::new(move |_: ()| on_delete.run(id))
                                                    />
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            }.into_any()
        }
    }
}

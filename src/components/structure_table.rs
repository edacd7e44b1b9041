//! Structure Table Component
//!
//! The pre-nested structure forest as an indented table. Top-level rows
//! start expanded, deeper rows collapsed; toggling is purely local.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::StructureRow;
use crate::context::AppContext;
use crate::models::StructureNode;
use crate::store::{store_forest_is_empty, store_toggle_expanded, store_visible_rows, use_console_store};

#[component]
pub fn StructureTable(
    loading: ReadSignal<bool>,
    #[prop(into)] on_show_tree: Callback<StructureNode>,
    #[prop(into)] on_edit: Callback<StructureNode>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_console_store();

    let on_toggle = Callback::new(move |id: u32| store_toggle_expanded(&store, id));

    let on_delete = Callback::new(move |id: u32| {
        let api = api.clone();
        spawn_local(async move {
            match api.delete_structure(id).await {
                Ok(()) => {
                    tracing::info!(id, "structure deleted");
                    ctx.notify_success("تم الحذف بنجاح");
                    ctx.reload();
                }
                Err(e) => {
                    tracing::warn!(id, error = %e, "structure delete failed");
                    ctx.notify_error(format!("فشل الحذف: {}", e));
                }
            }
        });
    });

    let rows = move || store_visible_rows(&store);

    move || {
        let empty = store_forest_is_empty(&store);
        if empty && loading.get() {
            view! { <div class="loading-container">"جار التحميل..."</div> }.into_any()
        } else if empty {
            view! { <div class="empty-state">"لا توجد بيانات متاحة."</div> }.into_any()
        } else {
            view! {
                <div class="table-container">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th class="col-name">"الاسم"</th>
                                <th>"المستوى"</th>
                                <th>"النوع"</th>
                                <th>"الترتيب"</th>
                                <th class="col-actions">"الإجراءات"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=rows
                                key=|row| {
                                    // Every displayed field, so edits re-render the row
                                    (
                                        row.node.id,
                                        row.depth,
                                        row.expanded,
                                        row.has_children,
                                        row.node.name.clone(),
                                        row.node.level_name.clone(),
                                        row.node.is_branch,
                                        row.node.order,
                                    )
                                }
                                children=move |row| {
                                    view! {
                                        <StructureRow
                                            row=row
                                            on_toggle=on_toggle
                                            on_show_tree=on_show_tree
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
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

//! Structure Form Component
//!
//! Modal form for creating or editing a structure.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{read_image_file, ApiClient};
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{non_blank, StructureDraft, StructureNode};
use crate::store::{
    store_forest_untracked, store_levels, store_set_options, store_structures, use_console_store,
};
use crate::tree::subtree_ids;

/// What the form was opened for
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(StructureNode),
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "إضافة هيكل",
            FormMode::Edit(_) => "تعديل هيكل",
        }
    }

    fn editing_id(&self) -> Option<u32> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(node) => Some(node.id),
        }
    }
}

fn parse_id(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

async fn save_structure(
    api: &ApiClient,
    editing_id: Option<u32>,
    draft: &StructureDraft,
    file: Option<&web_sys::File>,
) -> Result<(), ApiError> {
    let image = match file {
        Some(file) => Some(read_image_file(file).await?),
        None => None,
    };
    match editing_id {
        Some(id) => api.update_structure(id, draft, image.as_ref()).await,
        None => api.create_structure(draft, image.as_ref()).await,
    }
}

#[component]
pub fn StructureForm(
    mode: FormMode,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let api = expect_context::<ApiClient>();
    let store = use_console_store();

    let initial = match &mode {
        FormMode::Create => StructureDraft::default(),
        FormMode::Edit(node) => StructureDraft::from_node(node),
    };
    let editing_id = mode.editing_id();
    let title = mode.title();

    let (name, set_name) = signal(initial.name.clone());
    let (parent_id, set_parent_id) = signal(initial.parent_id);
    let (level_id, set_level_id) = signal(initial.level);
    let (order, set_order) = signal(initial.order.map(|o| o.to_string()).unwrap_or_default());
    let (is_branch, set_is_branch) = signal(initial.is_branch);
    let (description, set_description) = signal(initial.description.clone().unwrap_or_default());
    let (right_address, set_right_address) = signal(initial.right_address.clone().unwrap_or_default());
    let (left_address, set_left_address) = signal(initial.left_address.clone().unwrap_or_default());
    // Browser file handles aren't Send, so this one stays local
    let (image_file, set_image_file) = signal_local::<Option<web_sys::File>>(None);
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // A structure can't move under itself or its own descendants
    let excluded = editing_id
        .map(|id| subtree_ids(&store_forest_untracked(&store), id))
        .unwrap_or_default();

    // Selector options, fresh each time the form opens
    let options_api = api.clone();
    spawn_local(async move {
        let structures = options_api.fetch_structures().await;
        let levels = options_api.fetch_levels().await;
        match (structures, levels) {
            (Ok(structures), Ok(levels)) => store_set_options(&store, structures, levels),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "failed to load form options");
            }
        }
    });

    let parent_options = move || {
        store_structures(&store)
            .into_iter()
            .filter(|s| !excluded.contains(&s.id))
            .collect::<Vec<_>>()
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = StructureDraft {
            name: name.get().trim().to_string(),
            parent_id: parent_id.get(),
            level: level_id.get(),
            order: order.get().trim().parse().ok(),
            is_branch: is_branch.get(),
            description: non_blank(&description.get()),
            right_address: non_blank(&right_address.get()),
            left_address: non_blank(&left_address.get()),
        };
        if draft.name.is_empty() {
            set_error.set(Some("الاسم مطلوب".to_string()));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let api = api.clone();
        let file = image_file.get_untracked();
        spawn_local(async move {
            let result = save_structure(&api, editing_id, &draft, file.as_ref()).await;
            match result {
                Ok(()) => {
                    tracing::info!(id = ?editing_id, name = %draft.name, "structure saved");
                    ctx.notify_success(if editing_id.is_some() { "تم التحديث بنجاح" } else { "تم الإضافة بنجاح" });
                    on_close.run(());
                    ctx.reload();
                }
                Err(e) => {
                    tracing::warn!(id = ?editing_id, error = %e, "structure save failed");
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
                        <span>"الهيكل الأب"</span>
                        <select on:change=move |ev| set_parent_id.set(parse_id(&event_target_value(&ev)))>
                            <option value="" selected=move || parent_id.get().is_none()>"بدون"</option>
                            <For
                                each=parent_options
                                key=|s| s.id
                                children=move |s| {
                                    let id = s.id;
                                    view! {
                                        <option value=id.to_string() selected=move || parent_id.get() == Some(id)>
                                            {s.display_name().to_string()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </label>

                    <label class="form-field">
                        <span>"المستوى"</span>
                        <select on:change=move |ev| set_level_id.set(parse_id(&event_target_value(&ev)))>
                            <option value="" selected=move || level_id.get().is_none()>"بدون"</option>
                            <For
                                each=move || store_levels(&store)
                                key=|level| level.id
                                children=move |level| {
                                    let id = level.id;
                                    view! {
                                        <option value=id.to_string() selected=move || level_id.get() == Some(id)>
                                            {level.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </label>

                    <label class="form-field">
                        <span>"الصورة"</span>
                        <input
                            type="file"
                            accept="image/*"
                            on:change=move |ev| {
                                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                                set_image_file.set(input.files().and_then(|files| files.get(0)));
                            }
                        />
                    </label>

                    <label class="form-field">
                        <span>"الترتيب"</span>
                        <input
                            type="number"
                            prop:value=move || order.get()
                            on:input=move |ev| set_order.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_branch.get()
                            on:change=move |ev| set_is_branch.set(event_target_checked(&ev))
                        />
                        <span>"فرع"</span>
                    </label>

                    <label class="form-field">
                        <span>"الوصف"</span>
                        <textarea
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="form-field">
                        <span>"العنوان الأيمن"</span>
                        <input
                            type="text"
                            prop:value=move || right_address.get()
                            on:input=move |ev| set_right_address.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form-field">
                        <span>"العنوان الأيسر"</span>
                        <input
                            type="text"
                            prop:value=move || left_address.get()
                            on:input=move |ev| set_left_address.set(event_target_value(&ev))
                        />
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

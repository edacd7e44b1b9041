//! Structure Console App
//!
//! Main component: structures and levels tabs, form modals and the
//! family tree modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{
    FamilyTreeModal, FormMode, LevelForm, LevelTable, StatusBanner, StructureForm, StructureTable,
};
use crate::config::ConsoleConfig;
use crate::context::{AppContext, StatusMessage};
use crate::load_state::RequestGeneration;
use crate::models::{Level, StructureNode};
use crate::store::{store_set_forest, ConsoleState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Structures,
    Levels,
}

#[component]
pub fn App() -> impl IntoView {
    let config = ConsoleConfig::from_env();
    tracing::info!(api = %config.api_url, "starting structure console");
    let api = ApiClient::from_browser(config);
    provide_context(api.clone());

    let store = Store::new(ConsoleState::default());
    provide_context(store);

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (status, set_status) = signal::<Option<StatusMessage>>(None);
    let (loading, set_loading) = signal(false);
    let (form_mode, set_form_mode) = signal::<Option<FormMode>>(None);
    let (tree_root, set_tree_root) = signal::<Option<StructureNode>>(None);
    let (tab, set_tab) = signal(Tab::Structures);
    // Outer `None`: form closed; inner `None`: creating a level
    let (level_form, set_level_form) = signal::<Option<Option<Level>>>(None);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (status, set_status));
    provide_context(ctx);

    // Refetch the whole forest on mount and after every mutation
    let generation = RequestGeneration::new();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let ticket = generation.issue();
        let generation = generation.clone();
        let api = api.clone();
        set_loading.set(true);
        tracing::debug!(trigger, "loading structure forest");
        spawn_local(async move {
            let result = api.fetch_structure_tree().await;
            if !generation.is_current(ticket) {
                return;
            }
            match result {
                Ok(forest) => {
                    tracing::info!(count = forest.len(), "loaded structure forest");
                    store_set_forest(&store, forest);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "structure forest fetch failed");
                    ctx.notify_error(format!("فشل تحميل البيانات: {}", e));
                }
            }
            set_loading.set(false);
        });
    });

    let add_label = move || match tab.get() {
        Tab::Structures => "إضافة هيكل",
        Tab::Levels => "إضافة مستوى",
    };
    let on_add = move |_| match tab.get_untracked() {
        Tab::Structures => set_form_mode.set(Some(FormMode::Create)),
        Tab::Levels => set_level_form.set(Some(None)),
    };
    let tab_class = move |which: Tab| {
        move || if tab.get() == which { "tab-btn active" } else { "tab-btn" }
    };

    view! {
        <div class="console-layout" dir="rtl">
            <header class="page-header">
                <h1>"الهياكل التنظيمية"</h1>
                <button class="btn-primary" on:click=on_add>{add_label}</button>
            </header>

            <div class="tabs">
                <button class=tab_class(Tab::Structures) on:click=move |_| set_tab.set(Tab::Structures)>
                    "الهياكل التنظيمية"
                </button>
                <button class=tab_class(Tab::Levels) on:click=move |_| set_tab.set(Tab::Levels)>
                    "المستويات"
                </button>
            </div>

            <StatusBanner />

            {move || match tab.get() {
                Tab::Structures => view! {
                    <StructureTable
                        loading=loading
                        on_show_tree=move |node: StructureNode| set_tree_root.set(Some(node))
                        on_edit=move |node: StructureNode| set_form_mode.set(Some(FormMode::Edit(node)))
                    />
                }.into_any(),
                Tab::Levels => view! {
                    <LevelTable on_edit=move |level: Level| set_level_form.set(Some(Some(level))) />
                }.into_any(),
            }}

            {move || form_mode.get().map(|mode| view! {
                <StructureForm mode=mode on_close=move |_: ()| set_form_mode.set(None) />
            })}

            {move || level_form.get().map(|level| view! {
                <LevelForm level=level on_close=move |_: ()| set_level_form.set(None) />
            })}

            <FamilyTreeModal root=tree_root on_close=move |_: ()| set_tree_root.set(None) />
        </div>
    }
}

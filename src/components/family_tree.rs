//! Family Tree Modal
//!
//! Full subtree of one chosen structure. The descendants are fetched flat
//! and linked client-side; each request carries a generation ticket so a
//! late response for a previously chosen root never replaces the tree of
//! the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::load_state::{LoadState, RequestGeneration, RequestTicket};
use crate::models::{StructureNode, TreeNode};
use crate::palette::color_for_id;
use crate::tree::{build_subtree, SubtreeBuild};

/// Modal shown while `root` is `Some`
#[component]
pub fn FamilyTreeModal(
    root: ReadSignal<Option<StructureNode>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let generation = RequestGeneration::new();

    let (state, set_state) = signal(LoadState::<SubtreeBuild>::Loading);
    let (ancestors, set_ancestors) = signal(Vec::<StructureNode>::new());
    let (retry, set_retry) = signal(0u32);

    Effect::new(move |_| {
        let _ = retry.get();
        let Some(root_node) = root.get() else {
            generation.invalidate();
            return;
        };

        let ticket = generation.issue();
        set_state.set(LoadState::Loading);
        set_ancestors.set(Vec::new());
        tracing::debug!(root = root_node.id, "loading family tree");

        let api = api.clone();
        let generation = generation.clone();
        spawn_local(async move {
            let result = api.fetch_descendants(root_node.id).await;
            let Some(next) = settle_subtree(&generation, ticket, &root_node, result) else {
                return;
            };
            set_state.set(next);

            // Breadcrumb is optional; a failure only hides it
            match api.fetch_ancestors(root_node.id).await {
                Ok(path) if generation.is_current(ticket) => set_ancestors.set(path),
                Ok(_) => {}
                Err(e) => tracing::debug!(root = root_node.id, error = %e, "ancestor path unavailable"),
            }
        });
    });

    move || {
        root.get().map(|root_node| {
            let title = format!("شجرة العائلة: {}", root_node.display_name());
            view! {
                <div class="modal-overlay" on:click=move |_| on_close.run(())>
                    <div class="modal-content large-modal" on:click=|ev| ev.stop_propagation()>
                        <div class="modal-header">
                            <h2>{title}</h2>
                            <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                        </div>
                        <Breadcrumb ancestors=ancestors />
                        <div class="modal-body tree-view-container">
                            {move || match state.get() {
                                LoadState::Loading => view! {
                                    <div class="loading-container">"جار التحميل..."</div>
                                }.into_any(),
                                LoadState::Failed(message) => view! {
                                    <div class="error-state">
                                        <p>"فشل تحميل الشجرة: " {message}</p>
                                        <button class="btn-secondary" on:click=move |_| set_retry.update(|n| *n += 1)>
                                            "إعادة المحاولة"
                                        </button>
                                    </div>
                                }.into_any(),
                                LoadState::Loaded(build) => view! {
                                    <div class="org-tree">
                                        <ul>{render_tree_node(build.tree)}</ul>
                                    </div>
                                }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

/// State to show for a finished descendant fetch, or `None` when a newer
/// request has been issued since `ticket` and the result must be dropped
fn settle_subtree(
    generation: &RequestGeneration,
    ticket: RequestTicket,
    root: &StructureNode,
    result: Result<Vec<StructureNode>, ApiError>,
) -> Option<LoadState<SubtreeBuild>> {
    if !generation.is_current(ticket) {
        tracing::debug!(root = root.id, "discarding stale family tree response");
        return None;
    }
    let result = result.map(|descendants| {
        let build = build_subtree(root, &descendants);
        if !build.dropped.is_empty() {
            tracing::warn!(root = root.id, dropped = ?build.dropped, "descendants with unknown parent left out");
        }
        build
    });
    if let Err(e) = &result {
        tracing::warn!(root = root.id, error = %e, "family tree fetch failed");
    }
    Some(LoadState::from_result(result))
}

#[component]
fn Breadcrumb(ancestors: ReadSignal<Vec<StructureNode>>) -> impl IntoView {
    move || {
        let path = ancestors.get();
        (!path.is_empty()).then(|| {
            let labels = path
                .iter()
                .map(|node| node.display_name().to_string())
                .collect::<Vec<_>>()
                .join(" ‹ ");
            view! { <div class="tree-breadcrumb">{labels}</div> }
        })
    }
}

/// Pre-order render: the node card, then its children's subtrees in order
fn render_tree_node(tree: TreeNode) -> AnyView {
    let color = color_for_id(tree.id());
    let TreeNode { node, children } = tree;
    let name = node.display_name().to_string();
    let image = node.image.clone().map(|src| {
        let alt = name.clone();
        view! { <img src=src alt=alt class="node-image" /> }
    });

    view! {
        <li>
            <div class="tree-node" style=color.card_style()>
                {image}
                <div class="node-content">
                    <div class="node-name" style=color.text_style()>{name}</div>
                    <div class="node-level">{node.level_name.unwrap_or_default()}</div>
                </div>
            </div>
            {(!children.is_empty()).then(|| view! {
                <ul>{children.into_iter().map(render_tree_node).collect_view()}</ul>
            })}
        </li>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32, parent_id: Option<u32>) -> StructureNode {
        let json = serde_json::json!({ "id": id, "name": format!("Structure {}", id), "structure": parent_id });
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let generation = RequestGeneration::new();
        let first_root = node(1, None);
        let old_ticket = generation.issue();
        // User picks another root before the first response lands
        let new_ticket = generation.issue();

        let late = settle_subtree(&generation, old_ticket, &first_root, Ok(vec![node(2, Some(1))]));
        assert_eq!(late, None);

        let second_root = node(5, None);
        let current = settle_subtree(&generation, new_ticket, &second_root, Ok(vec![node(6, Some(5))]));
        match current {
            Some(LoadState::Loaded(build)) => assert_eq!(build.tree.id(), 5),
            other => panic!("expected loaded tree, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_becomes_failed_state() {
        let generation = RequestGeneration::new();
        let ticket = generation.issue();
        let result = Err(ApiError::Network("offline".into()));

        let state = settle_subtree(&generation, ticket, &node(1, None), result);
        assert_eq!(state, Some(LoadState::Failed("network error: offline".to_string())));
    }

    #[test]
    fn test_stale_failure_is_dropped_too() {
        let generation = RequestGeneration::new();
        let ticket = generation.issue();
        generation.invalidate();

        let state = settle_subtree(&generation, ticket, &node(1, None), Err(ApiError::Unauthorized));
        assert_eq!(state, None);
    }
}

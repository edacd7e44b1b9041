//! Structure Row Component
//!
//! One row of the structures table.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::StructureNode;
use crate::tree::{row_indent_px, TableRow};

#[component]
pub fn StructureRow(
    row: TableRow,
    on_toggle: Callback<u32>,
    on_show_tree: Callback<StructureNode>,
    on_edit: Callback<StructureNode>,
    on_delete: Callback<u32>,
) -> impl IntoView {
    let TableRow { node, depth, has_children, expanded } = row;
    let id = node.id;
    let name = node.display_name().to_string();
    let delete_name = name.clone();
    // RTL layout: indentation grows from the right
    let indent = row_indent_px(depth);
    let node_for_tree = node.clone();
    let node_for_edit = node.clone();

    view! {
        <tr class="tree-row">
            <td style=format!("padding-right: {}px;", indent)>
                <div class="tree-cell-name">
                    {if has_children {
                        view! {
                            <button class="tree-toggle" on:click=move |_| on_toggle.run(id)>
                                {if expanded { "▼" } else { "◀" }}
                            </button>
                        }.into_any()
                    } else {
                        view! { <span class="tree-toggle-placeholder"></span> }.into_any()
                    }}
                    <span class="structure-name">{name}</span>
                </div>
            </td>
            <td>
                {node.level_name.clone().map(|level| view! { <span class="badge">{level}</span> })}
            </td>
            <td>
                <span class="structure-kind">{node.kind_label()}</span>
            </td>
            <td>{node.order.map(|order| order.to_string()).unwrap_or_default()}</td>
            <td>
                <div class="row-actions">
                    <button
                        class="action-btn btn-view"
                        title="شجرة العائلة"
                        on:click=move |_| on_show_tree.run(node_for_tree.clone())
                    >
                        "🌳"
                    </button>
                    <button
                        class="action-btn btn-edit"
                        title="تعديل"
                        on:click=move |_| on_edit.run(node_for_edit.clone())
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

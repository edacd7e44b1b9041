//! Console State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Level, StructureNode};
use crate::tree::{visible_rows, ExpansionState, TableRow};

/// Per-view state of the structures screen
#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// Top-level structures, pre-nested
    pub forest: Vec<StructureNode>,
    /// Expansion flags for `forest`, rebuilt on every fetch
    pub expansion: ExpansionState,
    /// Flat structure list for the parent selector
    pub structures: Vec<StructureNode>,
    /// Levels for the level selector and the levels tab
    pub levels: Vec<Level>,
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the forest and reset expansion to "first level open"
pub fn store_set_forest(store: &ConsoleStore, forest: Vec<StructureNode>) {
    *store.expansion().write() = ExpansionState::for_forest(&forest);
    *store.forest().write() = forest;
}

/// Flip one row's expansion flag
pub fn store_toggle_expanded(store: &ConsoleStore, id: u32) {
    store.expansion().write().toggle(id);
}

/// Rows currently visible in the table (reactive)
pub fn store_visible_rows(store: &ConsoleStore) -> Vec<TableRow> {
    let forest = store.forest().get();
    let expansion = store.expansion().get();
    visible_rows(&forest, &expansion)
}

pub fn store_forest_is_empty(store: &ConsoleStore) -> bool {
    store.forest().with(|forest| forest.is_empty())
}

/// Forest snapshot without tracking
pub fn store_forest_untracked(store: &ConsoleStore) -> Vec<StructureNode> {
    store.forest().get_untracked()
}

pub fn store_set_options(store: &ConsoleStore, structures: Vec<StructureNode>, levels: Vec<Level>) {
    *store.structures().write() = structures;
    *store.levels().write() = levels;
}

pub fn store_set_levels(store: &ConsoleStore, levels: Vec<Level>) {
    *store.levels().write() = levels;
}

pub fn store_structures(store: &ConsoleStore) -> Vec<StructureNode> {
    store.structures().get()
}

pub fn store_levels(store: &ConsoleStore) -> Vec<Level> {
    store.levels().get()
}

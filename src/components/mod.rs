//! UI Components
//!
//! Leptos components of the structures and levels screen.

mod delete_confirm_button;
mod family_tree;
mod level_form;
mod level_table;
mod status_banner;
mod structure_form;
mod structure_row;
mod structure_table;

pub use delete_confirm_button::DeleteConfirmButton;
pub use family_tree::FamilyTreeModal;
pub use level_form::LevelForm;
pub use level_table::LevelTable;
pub use status_banner::StatusBanner;
pub use structure_form::{FormMode, StructureForm};
pub use structure_row::StructureRow;
pub use structure_table::StructureTable;

//! Frontend Models
//!
//! Data structures matching the structures API.

use serde::{Deserialize, Serialize};

/// One organizational unit (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureNode {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    /// Parent structure id; `None` for top-level structures
    #[serde(rename = "structure", default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub level_name: Option<String>,
    #[serde(default)]
    pub is_branch: bool,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub right_address: Option<String>,
    #[serde(default)]
    pub left_address: Option<String>,
    /// Only filled on the pre-nested forest response
    #[serde(default)]
    pub children: Vec<StructureNode>,
}

impl StructureNode {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Label for the `is_branch` flag
    pub fn kind_label(&self) -> &'static str {
        if self.is_branch { "فرع" } else { "هيكل رئيسي" }
    }
}

/// Assembled subtree node. Rebuilt on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub node: StructureNode,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(mut node: StructureNode) -> Self {
        node.children.clear();
        Self { node, children: Vec::new() }
    }

    pub fn id(&self) -> u32 {
        self.node.id
    }
}

/// Structure level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update payload for a level
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelDraft {
    pub name: String,
    pub description: Option<String>,
}

impl LevelDraft {
    pub fn from_level(level: &Level) -> Self {
        Self { name: level.name.clone(), description: level.description.clone() }
    }
}

/// Create/update payload for a structure.
///
/// Every field is always sent; `None` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructureDraft {
    pub name: String,
    #[serde(rename = "structure")]
    pub parent_id: Option<u32>,
    pub level: Option<u32>,
    pub order: Option<i32>,
    pub is_branch: bool,
    pub description: Option<String>,
    pub right_address: Option<String>,
    pub left_address: Option<String>,
}

impl StructureDraft {
    pub fn from_node(node: &StructureNode) -> Self {
        Self {
            name: node.display_name().to_string(),
            parent_id: node.parent_id,
            level: node.level,
            order: node.order,
            is_branch: node.is_branch,
            description: node.description.clone(),
            right_address: node.right_address.clone(),
            left_address: node.left_address.clone(),
        }
    }

    /// Text fields for a multipart body. Form fields can't carry null, so
    /// `None` becomes an empty value, which the backend stores as empty.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        fn text<T: ToString>(value: &Option<T>) -> String {
            value.as_ref().map(ToString::to_string).unwrap_or_default()
        }

        vec![
            ("name", self.name.clone()),
            ("structure", text(&self.parent_id)),
            ("level", text(&self.level)),
            ("order", text(&self.order)),
            ("is_branch", self.is_branch.to_string()),
            ("description", text(&self.description)),
            ("right_address", text(&self.right_address)),
            ("left_address", text(&self.left_address)),
        ]
    }
}

/// Image picked in the structure form, read into memory for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    /// MIME type reported by the browser; empty when unknown
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Turn a text input into an optional value; blank means "cleared"
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! Family tree node colors.
//!
//! Colors are a pure function of the node id, so every render of the same
//! tree paints the same colors without storing an assignment.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeColor {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

impl NodeColor {
    /// Inline style for the node card
    pub fn card_style(&self) -> String {
        format!(
            "border-color: {0}; background-color: {1}; border-left-width: 4px; border-left-color: {0};",
            self.border, self.background
        )
    }

    pub fn text_style(&self) -> String {
        format!("color: {};", self.text)
    }
}

pub const PALETTE: [NodeColor; 10] = [
    NodeColor { border: "#3b82f6", background: "#eff6ff", text: "#1e40af" }, // blue
    NodeColor { border: "#10b981", background: "#ecfdf5", text: "#065f46" }, // emerald
    NodeColor { border: "#8b5cf6", background: "#f5f3ff", text: "#5b21b6" }, // violet
    NodeColor { border: "#f59e0b", background: "#fffbeb", text: "#92400e" }, // amber
    NodeColor { border: "#ec4899", background: "#fdf2f8", text: "#9d174d" }, // pink
    NodeColor { border: "#06b6d4", background: "#ecfeff", text: "#155e75" }, // cyan
    NodeColor { border: "#f43f5e", background: "#fff1f2", text: "#9f1239" }, // rose
    NodeColor { border: "#6366f1", background: "#eef2ff", text: "#3730a3" }, // indigo
    NodeColor { border: "#84cc16", background: "#f7fee7", text: "#3f6212" }, // lime
    NodeColor { border: "#14b8a6", background: "#f0fdfa", text: "#115e59" }, // teal
];

pub fn color_for_id(id: u32) -> &'static NodeColor {
    &PALETTE[id as usize % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_depends_only_on_id_modulo_palette() {
        for id in 0..100u32 {
            assert_eq!(color_for_id(id), &PALETTE[(id % 10) as usize]);
            assert_eq!(color_for_id(id), color_for_id(id + PALETTE.len() as u32));
        }
    }

    #[test]
    fn test_card_style() {
        let style = color_for_id(1).card_style();
        assert!(style.starts_with("border-color: #10b981;"));
        assert!(style.contains("background-color: #ecfdf5;"));
        assert!(style.ends_with("border-left-color: #10b981;"));
    }
}

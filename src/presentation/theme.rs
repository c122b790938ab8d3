use crossterm::style::Color;

/// Design tokens for tree output.
///
/// All icons used by the renderer come from this module; kind icons live in
/// the kind table.
pub mod colors {
    use super::Color;

    pub const SELECTED: Color = Color::Cyan;
    pub const FOLDER: Color = Color::Blue;
    pub const MATCH: Color = Color::Yellow;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = " ";

    pub const EXPANDED: &str = "▼";
    pub const COLLAPSED: &str = "▶";
    pub const LEAF: &str = " ";

    pub const READ_ONLY: &str = "🔒";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "*";
    pub const UNSELECTED: &str = " ";

    pub const EXPANDED: &str = "v";
    pub const COLLAPSED: &str = ">";
    pub const LEAF: &str = " ";

    pub const READ_ONLY: &str = "(ro)";
}

/// Icon set chosen once per render
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub leaf: &'static str,
    pub read_only: &'static str,
}

impl IconSet {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                expanded: icons::EXPANDED,
                collapsed: icons::COLLAPSED,
                leaf: icons::LEAF,
                read_only: icons::READ_ONLY,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                expanded: icons_ascii::EXPANDED,
                collapsed: icons_ascii::COLLAPSED,
                leaf: icons_ascii::LEAF,
                read_only: icons_ascii::READ_ONLY,
            }
        }
    }
}

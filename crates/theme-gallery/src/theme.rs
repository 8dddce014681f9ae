//! Parsed theme records and the color keys the gallery looks up.

use facet::Facet;
use indexmap::IndexMap;

/// Raw key/value pairs from one theme file, in first-seen key order.
pub type ThemeData = IndexMap<String, String>;

/// One parsed theme file.
#[derive(Debug, Clone, PartialEq, Eq, Facet)]
pub struct ThemeRecord {
    /// Display title derived from the file name.
    pub name: String,
    /// Base name of the source file.
    pub file: String,
    /// Key/value pairs exactly as parsed.
    pub data: ThemeData,
}

impl ThemeRecord {
    pub fn new(name: impl Into<String>, file: impl Into<String>, data: ThemeData) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            data,
        }
    }

    /// Value for a color role, if the theme defines it.
    pub fn color(&self, role: ColorRole) -> Option<&str> {
        self.data.get(role.key()).map(String::as_str)
    }
}

/// The four keys a preview card is styled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Background,
    Text,
    Selection,
    Border,
}

impl ColorRole {
    /// All roles, in the order their swatches appear in the info panel.
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Background,
        ColorRole::Text,
        ColorRole::Selection,
        ColorRole::Border,
    ];

    /// Key looked up in [`ThemeRecord::data`].
    pub const fn key(self) -> &'static str {
        match self {
            ColorRole::Background => "backgroundColor",
            ColorRole::Text => "textColor",
            ColorRole::Selection => "selectionColor",
            ColorRole::Border => "borderColor",
        }
    }

    /// Swatch label shown in the info panel.
    pub const fn label(self) -> &'static str {
        match self {
            ColorRole::Background => "Background",
            ColorRole::Text => "Text",
            ColorRole::Selection => "Selection",
            ColorRole::Border => "Border",
        }
    }
}

/// Serialized form of a [`ColorRole`], embedded next to the themes.
#[derive(Debug, Clone, Facet)]
pub(crate) struct RoleEntry {
    pub key: String,
    pub label: String,
}

impl From<ColorRole> for RoleEntry {
    fn from(role: ColorRole) -> Self {
        Self {
            key: role.key().to_string(),
            label: role.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_role_is_none() {
        let mut data = ThemeData::new();
        data.insert("backgroundColor".into(), "#000000".into());
        let record = ThemeRecord::new("Dark", "dark.json", data);

        assert_eq!(record.color(ColorRole::Background), Some("#000000"));
        assert_eq!(record.color(ColorRole::Text), None);
        assert_eq!(record.color(ColorRole::Selection), None);
        assert_eq!(record.color(ColorRole::Border), None);
    }

    #[test]
    fn test_role_keys_are_distinct() {
        let keys: Vec<_> = ColorRole::ALL.iter().map(|r| r.key()).collect();
        assert_eq!(
            keys,
            ["backgroundColor", "textColor", "selectionColor", "borderColor"]
        );
    }
}

//! Menu Model
//!
//! Display-only catalog: prices are labels, never numbers.

use serde::{Deserialize, Serialize};

/// A single orderable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Display price without currency symbol (e.g. "39,90")
    #[serde(default)]
    pub price_label: Option<String>,
}

/// Named group of items ("Lanches", "Bebidas", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Ordered list of menu sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    pub sections: Vec<MenuSection>,
}

impl Menu {
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }

    /// All items across sections, in display order
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Menu {
        serde_json::from_str(
            r#"[
                { "name": "Lanches", "items": [
                    { "name": "X-Burger", "priceLabel": "24,90" },
                    { "name": "X-Salada", "description": "Com alface e tomate" }
                ] },
                { "name": "Bebidas" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_menu_deserialize() {
        let menu = sample();
        assert_eq!(menu.sections.len(), 2);
        assert!(menu.sections[1].items.is_empty());
        assert_eq!(menu.items().count(), 2);
        assert!(!menu.is_empty());
    }

    #[test]
    fn test_default_menu_is_empty() {
        assert!(Menu::default().is_empty());
    }
}

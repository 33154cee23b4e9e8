//! スピリッツフィルタの選択肢

use crate::types::MenuItem;
use std::collections::HashSet;

/// フィルタの選択肢を作る
///
/// 先頭に「全件」ラベル、以降はスピリッツの初出順（重複・未設定は除外）。
pub fn filter_options(items: &[MenuItem], all_label: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![all_label.to_string()];

    for spirit in items.iter().filter_map(MenuItem::category) {
        if seen.insert(spirit) {
            options.push(spirit.to_string());
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, spirit: Option<&str>) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            ingredients: String::new(),
            section: "Classics".to_string(),
            spirit: spirit.map(str::to_string),
        }
    }

    #[test]
    fn test_options_first_seen_order() {
        let items = vec![
            item("Margarita", Some("Tequila")),
            item("Daiquiri", Some("Rum")),
            item("Paloma", Some("Tequila")),
            item("Negroni", Some("Gin")),
        ];
        assert_eq!(filter_options(&items, "All"), vec!["All", "Tequila", "Rum", "Gin"]);
    }

    #[test]
    fn test_options_skip_missing_spirit() {
        let items = vec![item("Lemonade", None), item("Tonic", Some("")), item("Mojito", Some("Rum"))];
        assert_eq!(filter_options(&items, "All"), vec!["All", "Rum"]);
    }

    #[test]
    fn test_options_empty_menu() {
        assert_eq!(filter_options(&[], "すべて"), vec!["すべて"]);
    }
}

//! ページ描画のプレビュー
//!
//! ブラウザと同じ `PageModel` を組み立て、結果をテキストで確認できる形にする。

use crate::error::{MenuCardsError, Result};
use menu_cards_common::{
    filter_options, group_by_section, parse_menu_document, FilterChange, MenuItem, PageLayout,
    PageModel, RendererConfig, SurprisePick,
};
use std::fmt::Write as _;
use std::path::Path;

/// メニューファイルを読み込む
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>> {
    if !path.exists() {
        return Err(MenuCardsError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let items = parse_menu_document(&content)?;
    log::debug!("{}: {}件読み込み", path.display(), items.len());
    Ok(items)
}

/// プレースホルダ構成を決める
///
/// 指定が無ければメニューに現れるセクションを初出順で並べる。
pub fn layout_for(items: &[MenuItem], sections: &[String]) -> PageLayout {
    if sections.is_empty() {
        let buckets = group_by_section(items);
        PageLayout::from_names(buckets.names())
    } else {
        PageLayout::from_names(sections.iter().map(String::as_str))
    }
}

/// プレビュー用にページを組み立てる
pub fn render_page(items: &[MenuItem], sections: &[String], config: &RendererConfig) -> PageModel {
    let layout = layout_for(items, sections);
    let page = PageModel::render(&layout, items, config);
    log::debug!(
        "{}セクション / {}カード ({})",
        page.sections().len(),
        page.cards().len(),
        page.mode()
    );
    page
}

/// セクションとカードの一覧
pub fn format_page(page: &PageModel, options: &[String]) -> String {
    let mut out = String::new();

    for (list_index, list) in page.lists().iter().enumerate() {
        let ids: Vec<usize> = page.cards_in_list(list_index).collect();
        let shown = ids.iter().filter(|&&id| page.cards()[id].is_shown()).count();
        let empty = list
            .section
            .and_then(|s| page.section(s))
            .map(|s| s.empty)
            .unwrap_or(false);

        let _ = write!(out, "[{}] {}件", list.name, ids.len());
        if shown != ids.len() {
            let _ = write!(out, "（表示 {}件）", shown);
        }
        if ids.is_empty() || empty {
            out.push_str("（空）");
        }
        out.push('\n');

        for id in ids {
            let card = &page.cards()[id];
            let model = &card.model;
            let _ = write!(out, "  {}. {}", model.index + 1, model.name);
            if let Some(spirit) = &model.spirit {
                let _ = write!(out, "  ({})", spirit);
            }
            let _ = write!(out, "  下線 {}%", model.underline_width);
            if let Some(delay) = model.stagger_delay_ms {
                let _ = write!(out, "  遅延 {}ms", delay);
            }
            if !card.is_shown() {
                out.push_str("  [非表示]");
            }
            if card.is_expanded() {
                out.push_str("  [展開]");
            }
            out.push('\n');
            let _ = writeln!(out, "     {}", model.ingredients);
        }
    }

    if !options.is_empty() {
        let _ = writeln!(out, "フィルタ: {}", options.join(" / "));
    }
    out
}

/// 各カードのマークアップ（リストごと）
pub fn format_markup(page: &PageModel) -> String {
    let mut out = String::new();
    for (list_index, list) in page.lists().iter().enumerate() {
        let _ = writeln!(out, "<!-- {} -->", list.name);
        for id in page.cards_in_list(list_index) {
            let _ = writeln!(out, "{}", page.cards()[id].model.to_markup(id));
        }
    }
    out
}

/// フィルタ適用結果
pub fn format_filter(page: &PageModel, change: &FilterChange) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "フィルタ: {}（変更 {}件）", page.filter(), change.cards.len());

    let shown = page.shown_cards();
    let _ = writeln!(out, "表示中: {}件", shown.len());
    for id in shown {
        let _ = writeln!(out, "  - {}", page.cards()[id].model.name);
    }

    let empty: Vec<&str> = page
        .lists()
        .iter()
        .filter(|list| list.section.and_then(|s| page.section(s)).map(|s| s.empty).unwrap_or(false))
        .map(|list| list.name.as_str())
        .collect();
    if !empty.is_empty() {
        let _ = writeln!(out, "空のセクション: {}", empty.join(", "));
    }
    out
}

/// おまかせの結果
pub fn format_surprise(page: &PageModel, pick: Option<&SurprisePick>) -> String {
    let Some(pick) = pick else {
        return "表示できるカードがありません\n".to_string();
    };
    let mut out = String::new();
    if pick.filter_reset.is_some() {
        let _ = writeln!(out, "表示中のカードが無いためフィルタを {} に戻しました", page.all_label());
    }
    let card = &page.cards()[pick.card];
    let section = page
        .lists()
        .get(card.list)
        .map(|l| l.name.as_str())
        .unwrap_or("-");
    let _ = writeln!(out, "🎲 {} [{}]", card.model.name, section);
    let _ = writeln!(out, "   {}", card.model.ingredients);
    out
}

/// フィルタ選択肢
pub fn options_for(items: &[MenuItem], config: &RendererConfig) -> Vec<String> {
    filter_options(items, &config.all_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_cards_common::CardMode;

    fn items() -> Vec<MenuItem> {
        parse_menu_document(
            r#"{"items":[
                {"name":"Margarita","ingredients":"tequila, lime, triple sec","section":"Classics","spirit":"Tequila"},
                {"name":"Daiquiri","ingredients":"rum, lime, sugar","section":"Classics","spirit":"Rum"},
                {"name":"Lemonade","ingredients":"lemon, sugar","section":"Zero Proof"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_layout_defaults_to_all_sections() {
        let layout = layout_for(&items(), &[]);
        let names: Vec<&str> = layout.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Classics", "Zero Proof"]);
    }

    #[test]
    fn test_format_page() {
        let items = items();
        let config = RendererConfig::default();
        let page = render_page(&items, &["Classics".to_string(), "Tiki".to_string()], &config);
        let text = format_page(&page, &options_for(&items, &config));

        assert!(text.contains("[Classics] 2件\n"));
        assert!(text.contains("1. Margarita  (Tequila)  下線 36%"));
        assert!(text.contains("2. Daiquiri  (Rum)  下線 28%"));
        assert!(text.contains("[Tiki] 0件（空）"));
        assert!(text.contains("フィルタ: All / Tequila / Rum"));
    }

    #[test]
    fn test_format_page_stagger_delay() {
        let config = RendererConfig {
            card_mode: CardMode::Stagger,
            ..Default::default()
        };
        let page = render_page(&items(), &[], &config);
        let text = format_page(&page, &[]);
        assert!(text.contains("遅延 0ms"));
        assert!(text.contains("遅延 60ms"));
        assert!(!text.contains("フィルタ:"));
    }

    #[test]
    fn test_format_filter_lists_empty_sections() {
        let mut page = render_page(&items(), &[], &RendererConfig::default());
        let change = page.apply_filter("Tequila");
        let text = format_filter(&page, &change);

        assert!(text.contains("フィルタ: Tequila（変更 2件）"));
        assert!(text.contains("表示中: 1件"));
        assert!(text.contains("  - Margarita"));
        assert!(text.contains("空のセクション: Zero Proof"));
    }

    #[test]
    fn test_format_surprise_none() {
        let page = render_page(&[], &[], &RendererConfig::default());
        assert_eq!(format_surprise(&page, None), "表示できるカードがありません\n");
    }

    #[test]
    fn test_format_markup() {
        let page = render_page(&items(), &[], &RendererConfig::default());
        let markup = format_markup(&page);
        assert!(markup.contains("<!-- Classics -->"));
        assert!(markup.contains(r#"data-card-id="2""#));
        assert_eq!(markup.matches("<li ").count(), 3);
    }
}

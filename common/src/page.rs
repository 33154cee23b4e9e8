//! ページモデル
//!
//! 描画済みページの状態をメモリ上に持つ。カードとセクションの
//! 表示/非表示・展開・reveal 状態はすべてここが正で、ブラウザ側は
//! 各操作が返す変更点をDOMへ反映するだけにする。
//!
//! - render: プレースホルダごとにバケットを引き、カードを生成
//! - apply_filter: スピリッツで表示/非表示を切り替え、空セクションを判定
//! - toggle_card / open_card: アコーディオン（同一リスト内で1枚だけ展開）
//! - surprise: 表示中のカードから1枚を選んで展開

use crate::card::{build_card, CardModel};
use crate::config::{CardMode, RendererConfig};
use crate::grouper::group_by_section;
use crate::reveal::RevealState;
use crate::types::MenuItem;

/// セクション要素（`.section`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionSlot {
    /// 要素の id（フラグメントフォーカス用）
    pub id: Option<String>,
}

impl SectionSlot {
    pub fn new(id: Option<&str>) -> Self {
        Self { id: id.map(str::to_string) }
    }
}

/// カードリストのプレースホルダ（`.cards[data-section]`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSlot {
    /// data-section の値
    pub name: String,
    /// 囲んでいるセクション（sections の添字）
    pub section: Option<usize>,
}

impl ListSlot {
    pub fn new(name: &str, section: Option<usize>) -> Self {
        Self { name: name.to_string(), section }
    }
}

/// ページのマークアップ構造（文書順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<SectionSlot>,
    pub lists: Vec<ListSlot>,
}

impl PageLayout {
    /// セクション名の並びから「1セクション1リスト」の構造を作る
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut layout = PageLayout::default();
        for name in names {
            layout.lists.push(ListSlot::new(name, Some(layout.sections.len())));
            layout.sections.push(SectionSlot::new(None));
        }
        layout
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Expanded,
}

/// 描画済みカード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub model: CardModel,
    pub list: usize,
    pub section: Option<usize>,
    pub visibility: Visibility,
    pub reveal: RevealState,
    /// Accordion のときだけ Some
    pub expansion: Option<Expansion>,
}

impl CardState {
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    pub fn is_expanded(&self) -> bool {
        self.expansion == Some(Expansion::Expanded)
    }
}

/// 描画済みセクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    pub id: Option<String>,
    /// 表示中のカードが0枚
    pub empty: bool,
    pub inview: RevealState,
}

/// apply_filter の変更点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChange {
    pub cards: Vec<usize>,
    pub sections: Vec<usize>,
}

impl FilterChange {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.sections.is_empty()
    }
}

/// surprise の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurprisePick {
    pub card: usize,
    /// 表示中カードが無かったためフィルタを全件に戻した
    pub filter_reset: Option<FilterChange>,
    /// 展開状態が変わったカード
    pub expansion_changed: Vec<usize>,
}

/// ページ全体の状態
#[derive(Debug, Clone)]
pub struct PageModel {
    lists: Vec<ListSlot>,
    sections: Vec<SectionState>,
    cards: Vec<CardState>,
    mode: CardMode,
    all_label: String,
    filter: String,
}

impl PageModel {
    /// プレースホルダにカードを割り当てる
    ///
    /// 一致するバケットが無いリストは空のまま。1ページ1回の想定。
    pub fn render(layout: &PageLayout, items: &[MenuItem], config: &RendererConfig) -> Self {
        let buckets = group_by_section(items);
        let mut cards = Vec::new();

        for (list_index, list) in layout.lists.iter().enumerate() {
            for (index, item) in buckets.get(&list.name).iter().enumerate() {
                let model = build_card(item, index, config);
                let expansion = match config.card_mode {
                    CardMode::Accordion => Some(Expansion::Collapsed),
                    CardMode::Stagger => None,
                };
                cards.push(CardState {
                    model,
                    list: list_index,
                    section: list.section.filter(|&s| s < layout.sections.len()),
                    visibility: Visibility::Shown,
                    reveal: RevealState::Pending,
                    expansion,
                });
            }
        }

        let sections = layout
            .sections
            .iter()
            .map(|slot| SectionState {
                id: slot.id.clone(),
                empty: false,
                inview: RevealState::Pending,
            })
            .collect();

        Self {
            lists: layout.lists.clone(),
            sections,
            cards,
            mode: config.card_mode,
            all_label: config.all_label.clone(),
            filter: config.all_label.clone(),
        }
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn lists(&self) -> &[ListSlot] {
        &self.lists
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, id: usize) -> Option<&CardState> {
        self.cards.get(id)
    }

    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    pub fn section(&self, id: usize) -> Option<&SectionState> {
        self.sections.get(id)
    }

    /// id 属性からセクションを探す
    pub fn section_by_id(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id.as_deref() == Some(id))
    }

    /// リストに属するカード（表示順）
    pub fn cards_in_list(&self, list: usize) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.list == list)
            .map(|(id, _)| id)
    }

    /// 現在のフィルタ値
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// 表示中のカード
    pub fn shown_cards(&self) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_shown())
            .map(|(id, _)| id)
            .collect()
    }

    /// スピリッツで絞り込む
    ///
    /// 全件ラベルならすべて表示、それ以外はタグが一致するカードだけ表示。
    /// 表示中カードが0枚になったセクションは empty。
    pub fn apply_filter(&mut self, value: &str) -> FilterChange {
        let mut change = FilterChange::default();
        let show_all = value == self.all_label;

        for (id, card) in self.cards.iter_mut().enumerate() {
            let show = show_all || card.model.spirit.as_deref() == Some(value);
            let visibility = if show { Visibility::Shown } else { Visibility::Hidden };
            if card.visibility != visibility {
                card.visibility = visibility;
                change.cards.push(id);
            }
        }

        for id in 0..self.sections.len() {
            let empty = !self
                .cards
                .iter()
                .any(|c| c.section == Some(id) && c.is_shown());
            if self.sections[id].empty != empty {
                self.sections[id].empty = empty;
                change.sections.push(id);
            }
        }

        self.filter = value.to_string();
        change
    }

    /// 見出しクリック：閉じていれば開き、開いていれば閉じる
    ///
    /// 展開状態が変わったカードを返す。
    pub fn toggle_card(&mut self, id: usize) -> Vec<usize> {
        match self.cards.get(id).and_then(|c| c.expansion) {
            Some(Expansion::Expanded) => {
                self.cards[id].expansion = Some(Expansion::Collapsed);
                vec![id]
            }
            Some(Expansion::Collapsed) => self.open_card(id),
            None => Vec::new(),
        }
    }

    /// カードを開き、同じリストで開いている他のカードを閉じる
    pub fn open_card(&mut self, id: usize) -> Vec<usize> {
        let Some(list) = self.cards.get(id).filter(|c| c.expansion.is_some()).map(|c| c.list) else {
            return Vec::new();
        };

        let mut changed = Vec::new();
        for (other, card) in self.cards.iter_mut().enumerate() {
            if other != id && card.list == list && card.is_expanded() {
                card.expansion = Some(Expansion::Collapsed);
                changed.push(other);
            }
        }

        if !self.cards[id].is_expanded() {
            self.cards[id].expansion = Some(Expansion::Expanded);
            changed.push(id);
        }
        changed
    }

    /// 表示中のカードから1枚選んで展開する
    ///
    /// `roll` は [0, 1) の乱数。表示中カードが無く `can_reset_filter` なら
    /// フィルタを全件に戻してから選び直す。それでも無ければ None。
    pub fn surprise(&mut self, roll: f64, can_reset_filter: bool) -> Option<SurprisePick> {
        let mut shown = self.shown_cards();
        let mut filter_reset = None;

        if shown.is_empty() && can_reset_filter {
            let all = self.all_label.clone();
            filter_reset = Some(self.apply_filter(&all));
            shown = self.shown_cards();
        }
        if shown.is_empty() {
            return None;
        }

        let card = shown[pick_index(roll, shown.len())];
        let expansion_changed = self.open_card(card);

        Some(SurprisePick { card, filter_reset, expansion_changed })
    }

    /// Pending → Revealed（遷移したら true）
    pub fn reveal_card(&mut self, id: usize) -> bool {
        match self.cards.get_mut(id) {
            Some(card) if card.reveal == RevealState::Pending => {
                card.reveal = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_section(&mut self, id: usize) -> bool {
        match self.sections.get_mut(id) {
            Some(section) if section.inview == RevealState::Pending => {
                section.inview = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.reveal = RevealState::Revealed;
        }
        for section in &mut self.sections {
            section.inview = RevealState::Revealed;
        }
    }
}

/// [0, 1) の値を 0..len の添字に写す
fn pick_index(roll: f64, len: usize) -> usize {
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    ((roll * len as f64).floor() as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_menu_document;

    const EXAMPLE: &str = r#"{"items":[
        {"name":"Margarita","ingredients":"tequila, lime, triple sec","section":"Classics","spirit":"Tequila"},
        {"name":"Daiquiri","ingredients":"rum, lime, sugar","section":"Classics","spirit":"Rum"}
    ]}"#;

    fn classics_page(config: &RendererConfig) -> PageModel {
        let items = parse_menu_document(EXAMPLE).unwrap();
        let layout = PageLayout {
            sections: vec![SectionSlot::new(Some("classics"))],
            lists: vec![ListSlot::new("Classics", Some(0))],
        };
        PageModel::render(&layout, &items, config)
    }

    fn bar_menu() -> Vec<MenuItem> {
        let entries = [
            ("Margarita", "Classics", Some("Tequila")),
            ("Negroni", "Classics", Some("Gin")),
            ("Martini", "Classics", Some("Gin")),
            ("Paloma", "Highballs", Some("Tequila")),
            ("Lemonade", "Zero Proof", None),
        ];
        entries
            .iter()
            .map(|(name, section, spirit)| MenuItem {
                name: name.to_string(),
                ingredients: String::new(),
                section: section.to_string(),
                spirit: spirit.map(str::to_string),
            })
            .collect()
    }

    fn bar_page() -> PageModel {
        let layout = PageLayout::from_names(["Classics", "Highballs", "Zero Proof"]);
        PageModel::render(&layout, &bar_menu(), &RendererConfig::default())
    }

    fn shown_names(page: &PageModel) -> Vec<&str> {
        page.shown_cards()
            .into_iter()
            .map(|id| page.cards()[id].model.name.as_str())
            .collect()
    }

    #[test]
    fn test_render_example_document() {
        let page = classics_page(&RendererConfig::default());

        assert_eq!(page.cards().len(), 2);
        assert_eq!(page.cards()[0].model.name, "Margarita");
        assert_eq!(page.cards()[1].model.name, "Daiquiri");
        assert_eq!(page.cards()[0].model.underline_width, 36);
        assert_eq!(page.cards()[1].model.underline_width, 28);
        assert!(page.cards().iter().all(|c| c.expansion == Some(Expansion::Collapsed)));
    }

    #[test]
    fn test_unmatched_placeholder_renders_empty() {
        let layout = PageLayout::from_names(["Classics", "Tiki"]);
        let page = PageModel::render(&layout, &bar_menu(), &RendererConfig::default());

        assert_eq!(page.cards_in_list(0).count(), 3);
        assert_eq!(page.cards_in_list(1).count(), 0);
    }

    #[test]
    fn test_underline_index_restarts_per_list() {
        let page = bar_page();
        let paloma = page.cards().iter().find(|c| c.model.name == "Paloma").unwrap();
        assert_eq!(paloma.model.index, 0);
        assert_eq!(paloma.model.underline_width, 36);
    }

    #[test]
    fn test_stagger_mode_has_no_expansion() {
        let config = RendererConfig {
            card_mode: CardMode::Stagger,
            ..Default::default()
        };
        let mut page = classics_page(&config);
        assert!(page.cards().iter().all(|c| c.expansion.is_none()));
        assert_eq!(page.cards()[1].model.stagger_delay_ms, Some(60));
        assert!(page.toggle_card(0).is_empty());
    }

    #[test]
    fn test_filter_hides_and_marks_empty() {
        let mut page = classics_page(&RendererConfig::default());

        let change = page.apply_filter("Tequila");
        assert_eq!(change.cards, vec![1]);
        assert!(change.sections.is_empty());
        assert_eq!(shown_names(&page), vec!["Margarita"]);
        assert!(!page.sections()[0].empty);

        // 同じ値の再適用は変更なし
        assert!(page.apply_filter("Tequila").is_empty());

        page.apply_filter("Gin");
        assert!(page.sections()[0].empty);

        let change = page.apply_filter("All");
        assert_eq!(change.sections, vec![0]);
        assert!(!page.sections()[0].empty);
        assert_eq!(shown_names(&page), vec!["Margarita", "Daiquiri"]);
    }

    #[test]
    fn test_filter_all_restores_initial_state() {
        let mut page = bar_page();
        let before = page.shown_cards();

        for spirit in ["Gin", "Tequila", "Mezcal"] {
            page.apply_filter(spirit);
            page.apply_filter("All");
            assert_eq!(page.shown_cards(), before);
        }
    }

    #[test]
    fn test_filter_marks_sections_without_matches() {
        let mut page = bar_page();
        page.apply_filter("Gin");

        let empty: Vec<bool> = page.sections().iter().map(|s| s.empty).collect();
        assert_eq!(empty, vec![false, true, true]);
        assert_eq!(page.filter(), "Gin");
    }

    #[test]
    fn test_single_expansion_per_list() {
        let mut page = bar_page();

        assert_eq!(page.toggle_card(0), vec![0]);
        let changed = page.toggle_card(1);
        assert_eq!(changed, vec![0, 1]);
        assert!(!page.cards()[0].is_expanded());
        assert!(page.cards()[1].is_expanded());

        // 別リストのカードは影響しない
        page.toggle_card(3);
        assert!(page.cards()[1].is_expanded());
        assert!(page.cards()[3].is_expanded());

        // 開いているカードのクリックは閉じるだけ
        assert_eq!(page.toggle_card(1), vec![1]);
        assert!(!page.cards()[1].is_expanded());
    }

    #[test]
    fn test_open_card_is_idempotent() {
        let mut page = bar_page();
        page.open_card(2);
        assert!(page.open_card(2).is_empty());
        assert!(page.open_card(42).is_empty());
    }

    #[test]
    fn test_surprise_picks_shown_card() {
        let mut page = bar_page();
        page.apply_filter("Gin");

        let pick = page.surprise(0.99, true).unwrap();
        assert_eq!(page.cards()[pick.card].model.name, "Martini");
        assert!(pick.filter_reset.is_none());
        assert!(page.cards()[pick.card].is_expanded());

        let pick = page.surprise(0.0, true).unwrap();
        assert_eq!(page.cards()[pick.card].model.name, "Negroni");
        // 同じリストの Martini は閉じる
        assert_eq!(pick.expansion_changed, vec![2, 1]);
    }

    #[test]
    fn test_surprise_resets_filter_when_nothing_shown() {
        let mut page = bar_page();
        page.apply_filter("Mezcal");
        assert!(page.shown_cards().is_empty());

        let pick = page.surprise(0.5, true).unwrap();
        let reset = pick.filter_reset.expect("フィルタが戻っていない");
        assert_eq!(reset.cards.len(), 5);
        assert_eq!(page.filter(), "All");
        assert_eq!(page.shown_cards().len(), 5);
    }

    #[test]
    fn test_surprise_without_filter_control_does_nothing() {
        let mut page = bar_page();
        page.apply_filter("Mezcal");
        assert!(page.surprise(0.5, false).is_none());
        assert_eq!(page.filter(), "Mezcal");
    }

    #[test]
    fn test_surprise_on_empty_menu() {
        let layout = PageLayout::from_names(["Classics"]);
        let mut page = PageModel::render(&layout, &[], &RendererConfig::default());
        assert!(page.surprise(0.3, true).is_none());
    }

    #[test]
    fn test_pick_index_bounds() {
        assert_eq!(pick_index(0.0, 4), 0);
        assert_eq!(pick_index(0.999, 4), 3);
        assert_eq!(pick_index(1.0, 4), 3);
        assert_eq!(pick_index(f64::NAN, 4), 0);
        assert_eq!(pick_index(-0.5, 4), 0);
    }

    #[test]
    fn test_section_by_id() {
        let page = classics_page(&RendererConfig::default());
        assert_eq!(page.section_by_id("classics"), Some(0));
        assert_eq!(page.section_by_id("tiki"), None);
    }
}

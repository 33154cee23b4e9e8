//! DOMと結びついたページ状態
//!
//! 状態の正は `PageModel`。ここでは各操作が返した変更点を
//! 対応する要素の class / 属性へ書き戻す。

use crate::dom::set_class;
use menu_cards_common::{FilterChange, PageModel, RevealState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDetailsElement, HtmlElement, HtmlSelectElement};

pub const HIDDEN_CLASS: &str = "is-hidden";
pub const EMPTY_CLASS: &str = "is-empty";
pub const REVEALED_CLASS: &str = "revealed";
pub const INVIEW_CLASS: &str = "inview";

pub type SharedPage = Rc<RefCell<DomPage>>;

pub struct DomPage {
    pub model: PageModel,
    /// カードID順の li 要素
    pub cards: Vec<Option<HtmlElement>>,
    /// `.section` 要素（文書順）
    pub sections: Vec<HtmlElement>,
    /// `#spirit-filter`（ある場合）
    pub filter: Option<HtmlSelectElement>,
}

impl DomPage {
    pub fn card_element(&self, id: usize) -> Option<&HtmlElement> {
        self.cards.get(id).and_then(Option::as_ref)
    }

    /// カード1枚の状態を要素へ反映
    pub fn sync_card(&self, id: usize) {
        let (Some(card), Some(element)) = (self.model.card(id), self.card_element(id)) else {
            return;
        };

        set_class(element, HIDDEN_CLASS, !card.is_shown());
        set_class(element, REVEALED_CLASS, card.reveal == RevealState::Revealed);

        if card.expansion.is_some() {
            if let Some(details) = details_of(element) {
                if details.open() != card.is_expanded() {
                    details.set_open(card.is_expanded());
                }
            }
        }
    }

    /// セクション1つの状態を要素へ反映
    pub fn sync_section(&self, id: usize) {
        let (Some(section), Some(element)) = (self.model.section(id), self.sections.get(id)) else {
            return;
        };
        set_class(element, EMPTY_CLASS, section.empty);
        set_class(element, INVIEW_CLASS, section.inview == RevealState::Revealed);
    }

    pub fn sync_filter_change(&self, change: &FilterChange) {
        if change.is_empty() {
            return;
        }
        for &id in &change.cards {
            self.sync_card(id);
        }
        for &id in &change.sections {
            self.sync_section(id);
        }
    }

    pub fn sync_all(&self) {
        for id in 0..self.cards.len() {
            self.sync_card(id);
        }
        for id in 0..self.sections.len() {
            self.sync_section(id);
        }
    }
}

fn details_of(card: &HtmlElement) -> Option<HtmlDetailsElement> {
    card.query_selector("details.card__exp")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlDetailsElement>().ok())
}

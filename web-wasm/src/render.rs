//! セクション描画
//!
//! ページ上のプレースホルダを走査して `PageLayout` を作り、
//! `PageModel` のカードを Leptos で各リストへ追加する。1ページ1回だけ呼ぶ。

use crate::components::menu_card::MenuCard;
use crate::dom::{self, position_of};
use crate::page::{DomPage, SharedPage};
use leptos::prelude::*;
use menu_cards_common::{CardModel, ListSlot, MenuItem, PageLayout, PageModel, RendererConfig, SectionSlot};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

const SECTION_SELECTOR: &str = ".section";
const LIST_SELECTOR: &str = ".cards[data-section]";

pub fn render_sections(
    document: &Document,
    items: &[MenuItem],
    config: &RendererConfig,
) -> Result<SharedPage, JsValue> {
    let sections = dom::query_all(document, SECTION_SELECTOR)?;
    let lists = dom::query_all(document, LIST_SELECTOR)?;

    let layout = PageLayout {
        sections: sections
            .iter()
            .map(|s| {
                let id = s.id();
                SectionSlot::new(Some(id.as_str()).filter(|id| !id.is_empty()))
            })
            .collect(),
        lists: lists
            .iter()
            .map(|ul| {
                let name = ul.get_attribute("data-section").unwrap_or_default();
                let section = ul
                    .closest(SECTION_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|s| position_of(&sections, &s));
                ListSlot::new(&name, section)
            })
            .collect(),
    };

    let model = PageModel::render(&layout, items, config);

    for (list_index, ul) in lists.iter().enumerate() {
        let cards: Vec<(usize, CardModel)> = model
            .cards_in_list(list_index)
            .map(|id| (id, model.cards()[id].model.clone()))
            .collect();
        if cards.is_empty() {
            continue;
        }
        mount_cards(ul, cards);
    }

    let cards = collect_card_elements(document, model.cards().len())?;

    Ok(Rc::new(RefCell::new(DomPage {
        model,
        cards,
        sections,
        filter: None,
    })))
}

/// リスト末尾にカードを追加する
fn mount_cards(list: &HtmlElement, cards: Vec<(usize, CardModel)>) {
    leptos::mount::mount_to(list.clone(), move || {
        cards
            .into_iter()
            .map(|(card_id, card)| view! { <MenuCard card_id=card_id card=card /> })
            .collect_view()
    })
    .forget();
}

/// data-card-id から カードID → 要素 の表を作る
fn collect_card_elements(document: &Document, count: usize) -> Result<Vec<Option<HtmlElement>>, JsValue> {
    let mut cards = vec![None; count];
    for element in dom::query_all(document, ".card[data-card-id]")? {
        let id = element
            .get_attribute("data-card-id")
            .and_then(|v| v.parse::<usize>().ok());
        if let Some(slot) = id.and_then(|id| cards.get_mut(id)) {
            *slot = Some(element);
        }
    }
    Ok(cards)
}

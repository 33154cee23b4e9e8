//! URLフラグメントの見出しフォーカス
//!
//! スクロールはブラウザのアンカー移動に任せ、フォーカスだけ移す。
//! tabindex は一定時間後に外し、通常のタブ順に残さない。

use crate::dom;
use crate::page::SharedPage;
use gloo::timers::callback::Timeout;
use menu_cards_common::fragment_id;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FocusOptions, HtmlElement};

const TITLE_SELECTOR: &str = ".section__title";

pub fn focus_fragment(document: &Document, shared: &SharedPage, release_ms: u32) {
    let hash = dom::window()
        .ok()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let Some(section_id) = fragment_id(&hash) else {
        return;
    };

    // 該当する見出しが無ければ何もしない
    let Some(heading) = fragment_target(document, shared, &section_id)
        .and_then(|section| section.query_selector(TITLE_SELECTOR).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    if heading.set_attribute("tabindex", "-1").is_err() {
        return;
    }
    let options = FocusOptions::new();
    options.set_prevent_scroll(true);
    let _ = heading.focus_with_options(&options);

    Timeout::new(release_ms, move || {
        let _ = heading.remove_attribute("tabindex");
    })
    .forget();
}

/// 描画済みセクションから探し、無ければ文書全体の id で探す
fn fragment_target(document: &Document, shared: &SharedPage, id: &str) -> Option<Element> {
    let page = shared.borrow();
    page.model
        .section_by_id(id)
        .and_then(|index| page.sections.get(index))
        .map(|section| Element::from(section.clone()))
        .or_else(|| document.get_element_by_id(id))
}

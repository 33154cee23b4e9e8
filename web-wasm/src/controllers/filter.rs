//! スピリッツフィルタ
//!
//! `#spirit-filter` があるときだけ有効。選択肢を描画し、変更時に
//! 描画済みカードの表示/非表示を切り替える（再取得・再グルーピングはしない）。

use crate::components::filter_options::FilterOptions;
use crate::page::SharedPage;
use gloo::console;
use gloo::events::EventListener;
use leptos::prelude::*;
use menu_cards_common::{filter_options, MenuItem};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlSelectElement};

pub const FILTER_ID: &str = "spirit-filter";

pub fn attach(document: &Document, shared: &SharedPage, items: &[MenuItem]) {
    let Some(select) = document
        .get_element_by_id(FILTER_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        console::debug!("#spirit-filter が無いためフィルタは無効");
        return;
    };

    let all_label = shared.borrow().model.all_label().to_string();
    let options = filter_options(items, &all_label);

    let parent: HtmlElement = select.clone().unchecked_into();
    leptos::mount::mount_to(parent, move || view! { <FilterOptions options=options /> }).forget();
    select.set_value(&all_label);

    {
        let shared = shared.clone();
        let target = select.clone();
        EventListener::new(&select, "change", move |_| {
            let value = target.value();
            let mut page = shared.borrow_mut();
            let change = page.model.apply_filter(&value);
            page.sync_filter_change(&change);
        })
        .forget();
    }

    shared.borrow_mut().filter = Some(select);
}

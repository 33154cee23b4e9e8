//! DOM操作の小物
//!
//! web-sys の Result / Option を扱いやすい形にまとめる。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("document がありません"))
}

/// NodeList を HtmlElement の Vec にする（HTML要素以外は捨てる）
pub fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(document.query_selector_all(selector)?))
}

/// class を付け外しする
pub fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// `elements` の中から `target` の位置を探す
pub fn position_of(elements: &[HtmlElement], target: &Element) -> Option<usize> {
    elements
        .iter()
        .position(|el| AsRef::<JsValue>::as_ref(el) == AsRef::<JsValue>::as_ref(target))
}

/// IntersectionObserver を作る
///
/// コールバックには交差エントリと observer 自身が渡される。
/// コールバックはページの寿命と同じなので forget する。
pub fn intersection_observer<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entries: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            on_entries(entries, &observer);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

//! 「おまかせ」ボタン
//!
//! 表示中のカードから1枚をランダムに選び、開いて画面中央へスクロールし、
//! 一時的にハイライトする。表示中カードが無ければフィルタを全件に戻す。

use crate::environment::prefers_reduced_motion;
use crate::page::SharedPage;
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const BUTTON_ID: &str = "surprise-btn";
pub const HIGHLIGHT_CLASS: &str = "surprise-highlight";

pub fn attach(document: &Document, shared: &SharedPage, highlight_ms: u32) {
    let Some(button) = document.get_element_by_id(BUTTON_ID) else {
        console::debug!("#surprise-btn が無いためおまかせは無効");
        return;
    };

    let shared = shared.clone();
    let document = document.clone();
    EventListener::new(&button, "click", move |_| {
        let Some(card) = pick_card(&shared) else {
            return;
        };
        scroll_to_center(&card, prefers_reduced_motion(&document));
        restart_highlight(card, highlight_ms);
    })
    .forget();
}

/// モデルで1枚選び、変更点をDOMへ反映して要素を返す
fn pick_card(shared: &SharedPage) -> Option<HtmlElement> {
    let mut page = shared.borrow_mut();
    let can_reset_filter = page.filter.is_some();
    let pick = page.model.surprise(js_sys::Math::random(), can_reset_filter)?;

    if let Some(reset) = &pick.filter_reset {
        if let Some(select) = &page.filter {
            select.set_value(page.model.all_label());
        }
        page.sync_filter_change(reset);
    }
    for &id in &pick.expansion_changed {
        page.sync_card(id);
    }

    let element = page.card_element(pick.card).cloned();
    element
}

fn scroll_to_center(card: &HtmlElement, reduced_motion: bool) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    options.set_block(ScrollLogicalPosition::Center);
    card.scroll_into_view_with_scroll_into_view_options(&options);
}

/// ハイライトを付け直す
///
/// 一度外してリフローさせ、連打でもアニメーションが頭から再生されるようにする。
/// 解除タイマーは取り消さない（解除は何度走っても同じ結果）。
fn restart_highlight(card: HtmlElement, highlight_ms: u32) {
    let classes = card.class_list();
    let _ = classes.remove_1(HIGHLIGHT_CLASS);
    let _ = card.offset_width();
    let _ = classes.add_1(HIGHLIGHT_CLASS);

    Timeout::new(highlight_ms, move || {
        let _ = card.class_list().remove_1(HIGHLIGHT_CLASS);
    })
    .forget();
}

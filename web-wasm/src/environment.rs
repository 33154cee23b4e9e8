//! ページ環境の読み取り
//!
//! ルート要素の data 属性による設定上書き、モーション抑制の判定、年表示。

use gloo::console;
use menu_cards_common::motion::{REDUCED_MOTION_QUERY, REDUCE_MOTION_ATTR};
use menu_cards_common::{resolve_reduced_motion, CardMode, RendererConfig};
use web_sys::Document;

const CARD_MODE_ATTR: &str = "data-card-mode";
const MENU_SRC_ATTR: &str = "data-menu-src";

/// ルート要素の属性値を設定に反映する
///
/// 不正なカードモードは既定値のまま（エラーメッセージを返す）。
pub fn apply_root_overrides(
    config: &mut RendererConfig,
    card_mode: Option<&str>,
    menu_src: Option<&str>,
) -> Option<String> {
    if let Some(src) = menu_src.map(str::trim).filter(|s| !s.is_empty()) {
        config.menu_url = src.to_string();
    }
    match card_mode.map(str::parse::<CardMode>) {
        Some(Ok(mode)) => {
            config.card_mode = mode;
            None
        }
        Some(Err(e)) => Some(e.to_string()),
        None => None,
    }
}

/// ルート要素から設定を組み立てる
pub fn config_from_root(document: &Document) -> RendererConfig {
    let mut config = RendererConfig::default();
    if let Some(root) = document.document_element() {
        let mode = root.get_attribute(CARD_MODE_ATTR);
        let src = root.get_attribute(MENU_SRC_ATTR);
        if let Some(message) = apply_root_overrides(&mut config, mode.as_deref(), src.as_deref()) {
            console::warn!(message);
        }
    }
    config
}

/// モーション抑制が有効か
///
/// 操作のたびに呼ぶ（途中で属性やOS設定が変わっても追従する）。
pub fn prefers_reduced_motion(document: &Document) -> bool {
    let override_attr = document
        .document_element()
        .and_then(|root| root.get_attribute(REDUCE_MOTION_ATTR));
    let platform = web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    resolve_reduced_motion(override_attr.as_deref(), platform)
}

/// `#year` に今年の西暦を入れる
pub fn show_current_year(document: &Document) {
    if let Some(year_el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        year_el.set_text_content(Some(&year.to_string()));
    }
}

//! 起動処理
//!
//! DOM準備完了 → menu.json 取得 → セクション描画 → 各挙動の取り付け。
//! 取得に失敗した場合はログだけ出し、ページは描画前のまま。

use crate::controllers::{accordion, anchor, filter, parallax, reveal, surprise};
use crate::environment::{config_from_root, prefers_reduced_motion, show_current_year};
use crate::{dom, loader, render};
use gloo::console;
use gloo::events::EventListener;
use menu_cards_common::{MenuItem, RendererConfig, RevealThresholds};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

/// DOMContentLoaded 後に起動する（既に読み込み済みなら即時）
pub fn start_when_ready() {
    let Ok(document) = dom::document() else {
        return;
    };

    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| spawn_local(run())).forget();
    } else {
        spawn_local(run());
    }
}

async fn run() {
    let Ok(document) = dom::document() else {
        return;
    };
    show_current_year(&document);

    let config = config_from_root(&document);
    let items = match loader::fetch_menu(&config.menu_url).await {
        Ok(items) => items,
        Err(err) => {
            console::error!("Failed to load menu.json", err.to_string());
            return;
        }
    };

    if let Err(err) = mount(&document, &items, &config) {
        console::error!("Failed to render menu", err);
    }
}

fn mount(document: &Document, items: &[MenuItem], config: &RendererConfig) -> Result<(), JsValue> {
    let shared = render::render_sections(document, items, config)?;
    console::log!(format!(
        "menu: {}件 / {}セクション",
        shared.borrow().model.cards().len(),
        shared.borrow().sections.len()
    ));

    accordion::attach(&shared);
    filter::attach(document, &shared, items);

    let reduced_motion = prefers_reduced_motion(document);
    reveal::attach(&shared, reduced_motion, RevealThresholds::from_config(config))?;
    let sections = shared.borrow().sections.clone();
    parallax::attach(sections, config, reduced_motion)?;

    surprise::attach(document, &shared, config.highlight_ms);
    anchor::focus_fragment(document, &shared, config.focus_release_ms);
    Ok(())
}

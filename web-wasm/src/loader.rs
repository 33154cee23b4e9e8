//! menu.json の取得
//!
//! 1回だけ fetch し、素の配列・`items` 包みのどちらでも受け付ける。リトライはしない。

use crate::dom;
use menu_cards_common::{Error, MenuDocument, MenuItem, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// menu.json を取得してメニュー項目を返す
pub async fn fetch_menu(url: &str) -> Result<Vec<MenuItem>> {
    let json = fetch_json(url)
        .await
        .map_err(|e| Error::Fetch(describe(&e)))?;

    let document: MenuDocument = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Parse(e.to_string()))?;
    Ok(document.into_items())
}

async fn fetch_json(url: &str) -> std::result::Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = dom::window()?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {} ({})", resp.status(), url)));
    }

    JsFuture::from(resp.json()?).await
}

/// JsValue のエラーを文字列にする
fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

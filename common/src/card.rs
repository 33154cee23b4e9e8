//! カード生成
//!
//! メニュー1品から、描画先に依存しないカードの表示データを作る。
//! ブラウザ側はこれを Leptos で描画し、CLI側はマークアップ文字列で確認する。

use crate::config::{CardMode, RendererConfig};
use crate::escape::escape_html;
use crate::types::MenuItem;

/// 1枚のカードの表示データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardModel {
    pub name: String,
    pub ingredients: String,
    /// フィルタ用タグ（data-spirit）
    pub spirit: Option<String>,
    /// リスト内での位置
    pub index: usize,
    /// 見出し下線の幅(%)
    pub underline_width: u32,
    /// 登場アニメーションの遅延(ms)。Stagger のときだけ Some
    pub stagger_delay_ms: Option<u32>,
    pub mode: CardMode,
}

/// 下線幅の循環パターンから `index mod n` 番目を取る
pub fn underline_width(widths: &[u32], index: usize) -> u32 {
    if widths.is_empty() {
        return 0;
    }
    widths[index % widths.len()]
}

/// `min(index * step, cap)`
pub fn stagger_delay_ms(index: usize, step_ms: u32, cap_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(cap_ms)
}

/// メニュー1品からカードを作る
pub fn build_card(item: &MenuItem, index: usize, config: &RendererConfig) -> CardModel {
    let stagger_delay_ms = match config.card_mode {
        CardMode::Accordion => None,
        CardMode::Stagger => Some(stagger_delay_ms(index, config.stagger_step_ms, config.stagger_cap_ms)),
    };

    CardModel {
        name: item.name.clone(),
        ingredients: item.ingredients.clone(),
        spirit: item.category().map(str::to_string),
        index,
        underline_width: underline_width(&config.underline_widths, index),
        stagger_delay_ms,
        mode: config.card_mode,
    }
}

impl CardModel {
    /// 見出しの style 属性値
    pub fn underline_style(&self) -> String {
        format!("--uW: {}%", self.underline_width)
    }

    /// li の style 属性値（Stagger のみ）
    pub fn delay_style(&self) -> Option<String> {
        self.stagger_delay_ms
            .map(|ms| format!("animation-delay: {}ms", ms))
    }

    /// ページに挿入される li 要素のマークアップ
    ///
    /// テキストと属性値はすべてエスケープ済み。
    pub fn to_markup(&self, card_id: usize) -> String {
        let spirit_attr = self
            .spirit
            .as_deref()
            .map(|s| format!(r#" data-spirit="{}""#, escape_html(s)))
            .unwrap_or_default();
        let heading = format!(
            r#"<h3 class="card__name" style="{}">{}</h3>"#,
            self.underline_style(),
            escape_html(&self.name)
        );
        let body = format!(
            r#"<div class="card__body"><p class="card__ing">{}</p></div>"#,
            escape_html(&self.ingredients)
        );

        match self.mode {
            CardMode::Accordion => format!(
                concat!(
                    r#"<li class="card will-reveal" data-card-id="{}"{}>"#,
                    r#"<details class="card__exp"><summary class="card__summary">{}"#,
                    r#"<span class="card__caret" aria-hidden="true"></span></summary>{}</details></li>"#,
                ),
                card_id, spirit_attr, heading, body
            ),
            CardMode::Stagger => format!(
                r#"<li class="card will-reveal" data-card-id="{}"{} style="{}">{}{}</li>"#,
                card_id,
                spirit_attr,
                self.delay_style().unwrap_or_default(),
                heading,
                body
            ),
        }
    }
}

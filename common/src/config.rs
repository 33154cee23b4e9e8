//! レンダラ設定
//!
//! ブラウザ側はルート要素の data 属性で、CLI側は設定ファイルで上書きできる。
//! 省略されたフィールドはすべて既定値になる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// カードの操作方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardMode {
    /// 本文は折りたたみ、同一リスト内で開けるのは1枚だけ
    #[default]
    Accordion,
    /// 本文は常時表示、登場アニメーションを段階的に遅延
    Stagger,
}

impl CardMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardMode::Accordion => "accordion",
            CardMode::Stagger => "stagger",
        }
    }
}

impl fmt::Display for CardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accordion" => Ok(CardMode::Accordion),
            "stagger" => Ok(CardMode::Stagger),
            other => Err(Error::Config(format!("未知のカードモード: {}", other))),
        }
    }
}

/// レンダラ全体の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// menu.json の取得先（ページからの相対パス）
    pub menu_url: String,
    pub card_mode: CardMode,
    /// カードが revealed になる可視率
    pub card_reveal_threshold: f64,
    /// セクションが inview になる可視率
    pub section_reveal_threshold: f64,
    /// フォーカス帯の rootMargin（上 -30% / 下 -60%）
    pub focus_band_margin: String,
    pub focus_band_threshold: f64,
    /// 背景モチーフの最大ずれ量(px)
    pub drift_max_px: f64,
    /// 横方向のずれ = 縦方向 × この比率
    pub drift_x_ratio: f64,
    pub highlight_ms: u32,
    pub focus_release_ms: u32,
    /// 下線幅(%)の循環パターン
    pub underline_widths: Vec<u32>,
    pub stagger_step_ms: u32,
    pub stagger_cap_ms: u32,
    /// フィルタの「全件」ラベル
    pub all_label: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            menu_url: "./data/menu.json".into(),
            card_mode: CardMode::Accordion,
            card_reveal_threshold: 0.15,
            section_reveal_threshold: 0.4,
            focus_band_margin: "-30% 0px -60% 0px".into(),
            focus_band_threshold: 0.01,
            drift_max_px: 14.0,
            drift_x_ratio: 0.6,
            highlight_ms: 1600,
            focus_release_ms: 500,
            underline_widths: vec![36, 28, 24, 32],
            stagger_step_ms: 60,
            stagger_cap_ms: 240,
            all_label: "All".into(),
        }
    }
}

impl RendererConfig {
    pub fn validate(&self) -> Result<()> {
        if self.underline_widths.is_empty() {
            return Err(Error::Config("underline_widths が空です".into()));
        }
        for (name, value) in [
            ("card_reveal_threshold", self.card_reveal_threshold),
            ("section_reveal_threshold", self.section_reveal_threshold),
            ("focus_band_threshold", self.focus_band_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!("{} は 0〜1 で指定してください: {}", name, value)));
            }
        }
        Ok(())
    }
}

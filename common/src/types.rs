//! メニューデータの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - MenuItem: メニュー1品
//! - MenuDocument: menu.json 全体（配列 or `{ "items": [...] }`）

use serde::{Deserialize, Serialize};

/// メニュー1品
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,

    pub ingredients: String,

    /// 表示先セクション名（プレースホルダの data-section と一致）
    pub section: String,

    /// ベーススピリッツ（フィルタ用、任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spirit: Option<String>,
}

impl MenuItem {
    /// フィルタ・タグ付けに使うスピリッツ（空文字は無し扱い）
    pub fn category(&self) -> Option<&str> {
        self.spirit.as_deref().filter(|s| !s.is_empty())
    }
}

/// menu.json のトップレベル
///
/// 旧形式は素の配列、現行形式は `items` キーで包んだオブジェクト。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuDocument {
    Items(Vec<MenuItem>),
    Wrapped { items: Vec<MenuItem> },
}

impl MenuDocument {
    pub fn into_items(self) -> Vec<MenuItem> {
        match self {
            MenuDocument::Items(items) => items,
            MenuDocument::Wrapped { items } => items,
        }
    }
}

use crate::error::{MenuCardsError, Result};
use menu_cards_common::{CardMode, RendererConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// 引数省略時に読むメニューファイル
    pub default_menu: Option<PathBuf>,
    pub renderer: RendererConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.renderer.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MenuCardsError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("menu-cards").join("config.json"))
    }

    pub fn set_card_mode(&mut self, mode: CardMode) -> Result<()> {
        self.renderer.card_mode = mode;
        self.save()
    }

    /// 引数 → 設定ファイルの順でメニューファイルを決める
    pub fn resolve_menu(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        arg.or_else(|| self.default_menu.clone())
            .ok_or_else(|| MenuCardsError::Config("メニューファイルを指定してください".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/menu-cards/config.json")).unwrap();
        assert!(config.default_menu.is_none());
        assert_eq!(config.renderer, RendererConfig::default());
    }

    #[test]
    fn test_resolve_menu_prefers_argument() {
        let config = Config {
            default_menu: Some(PathBuf::from("default.json")),
            ..Default::default()
        };
        let path = config.resolve_menu(Some(PathBuf::from("arg.json"))).unwrap();
        assert_eq!(path, PathBuf::from("arg.json"));
        assert_eq!(config.resolve_menu(None).unwrap(), PathBuf::from("default.json"));
    }

    #[test]
    fn test_resolve_menu_without_any() {
        let result = Config::default().resolve_menu(None);
        assert!(matches!(result, Err(MenuCardsError::Config(_))));
    }
}

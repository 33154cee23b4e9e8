//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_display_fetch() {
        let error = Error::Fetch("HTTP 404".to_string());
        assert_eq!(format!("{}", error), "Fetch error: HTTP 404");
    }

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("card_mode が不正です".to_string());
        assert_eq!(format!("{}", error), "Config error: card_mode が不正です");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuCardsError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("メニューファイルが不正: {0}")]
    InvalidMenu(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<menu_cards_common::Error> for MenuCardsError {
    fn from(err: menu_cards_common::Error) -> Self {
        match err {
            menu_cards_common::Error::Json(e) => MenuCardsError::InvalidMenu(e.to_string()),
            menu_cards_common::Error::Parse(msg) => MenuCardsError::InvalidMenu(msg),
            menu_cards_common::Error::Fetch(msg) => MenuCardsError::FileNotFound(msg),
            menu_cards_common::Error::Config(msg) => MenuCardsError::Config(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuCardsError>;

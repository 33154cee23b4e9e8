//! menu.json パーサー
//!
//! 素の配列形式と `{ "items": [...] }` 形式の両方を受け付け、
//! メニュー項目の並びを返す。スキーマ検証は行わない。

use crate::error::Result;
use crate::types::{MenuDocument, MenuItem};

/// menu.json の文字列をパース
///
/// # Arguments
/// * `text` - レスポンス本文またはファイル内容
///
/// # Returns
/// * `Ok(Vec<MenuItem>)` - 文書中の順序を保ったメニュー項目
/// * `Err(Error::Json)` - JSONとして解釈できない場合
///
/// # Examples
/// ```
/// use menu_cards_common::parse_menu_document;
///
/// let items = parse_menu_document(r#"{"items": [
///     {"name": "Negroni", "ingredients": "gin, campari, vermouth", "section": "Classics"}
/// ]}"#).unwrap();
/// assert_eq!(items[0].name, "Negroni");
/// ```
pub fn parse_menu_document(text: &str) -> Result<Vec<MenuItem>> {
    let document: MenuDocument = serde_json::from_str(text.trim_start_matches('\u{feff}'))?;
    Ok(document.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_wrapped_document() {
        let text = r#"{"items":[
            {"name":"Margarita","ingredients":"tequila, lime, triple sec","section":"Classics","spirit":"Tequila"},
            {"name":"Daiquiri","ingredients":"rum, lime, sugar","section":"Classics","spirit":"Rum"}
        ]}"#;

        let items = parse_menu_document(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Margarita");
        assert_eq!(items[1].spirit.as_deref(), Some("Rum"));
    }

    #[test]
    fn test_parse_bare_array() {
        let text = r#"[{"name":"Paloma","ingredients":"tequila, grapefruit","section":"Highballs"}]"#;
        let items = parse_menu_document(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].section, "Highballs");
    }

    #[test]
    fn test_parse_with_bom() {
        let text = "\u{feff}[]";
        assert!(parse_menu_document(text).unwrap().is_empty());
    }

    #[test]
    fn test_parse_error() {
        let result = parse_menu_document("<html>404</html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_parse_wrong_field_name_is_error() {
        let result = parse_menu_document(r#"{"drinks": []}"#);
        assert!(result.is_err());
    }
}

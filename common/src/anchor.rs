//! URLフラグメントによる見出しフォーカス

/// `location.hash` からセクション id を取り出す
///
/// 先頭の `#` を外し、パーセントエンコードを戻す。空なら None。
pub fn fragment_id(hash: &str) -> Option<String> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    if raw.is_empty() {
        return None;
    }
    let decoded = percent_decode(raw);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// `%XX` を戻す。不正な並びやUTF-8にならない場合は元の文字列を返す
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let decoded = raw
                .get(i + 1..i + 3)
                .filter(|hex| hex.bytes().all(|c| c.is_ascii_hexdigit()))
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            let Some(b) = decoded else {
                return raw.to_string();
            };
            out.push(b);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).unwrap_or_else(|_| raw.to_string())
}

//! モーション抑制の判定

/// ルート要素の上書き属性名
pub const REDUCE_MOTION_ATTR: &str = "data-reduce-motion";

/// OS設定を問い合わせるメディアクエリ
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// 上書き属性（"on" / "off"）を優先し、無ければOS設定に従う
pub fn resolve_reduced_motion(override_attr: Option<&str>, platform_reduced: bool) -> bool {
    match override_attr {
        Some("on") => true,
        Some("off") => false,
        _ => platform_reduced,
    }
}

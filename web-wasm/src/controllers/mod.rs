//! 描画後に張るページ挙動

pub mod accordion;
pub mod filter;
pub mod reveal;
pub mod parallax;
pub mod surprise;
pub mod anchor;

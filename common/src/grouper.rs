//! セクション単位のグルーピング
//!
//! フラットなメニュー項目列を `section` ごとのバケットに分ける。
//! バケット内の順序、バケット自体の順序ともに入力での初出順。

use crate::types::MenuItem;
use std::collections::HashMap;

/// セクション名 → メニュー項目列
#[derive(Debug, Clone, Default)]
pub struct SectionBuckets<'a> {
    index: HashMap<&'a str, usize>,
    buckets: Vec<(&'a str, Vec<&'a MenuItem>)>,
}

impl<'a> SectionBuckets<'a> {
    /// 指定セクションのバケット（無ければ空）
    pub fn get(&self, section: &str) -> &[&'a MenuItem] {
        self.index
            .get(section)
            .map(|&i| self.buckets[i].1.as_slice())
            .unwrap_or(&[])
    }

    /// セクション名（初出順）
    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.buckets.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// メニュー項目を `section` でグルーピング（安定・1パス）
pub fn group_by_section(items: &[MenuItem]) -> SectionBuckets<'_> {
    let mut grouped = SectionBuckets::default();

    for item in items {
        let key = item.section.as_str();
        let slot = match grouped.index.get(key) {
            Some(&i) => i,
            None => {
                grouped.buckets.push((key, Vec::new()));
                grouped.index.insert(key, grouped.buckets.len() - 1);
                grouped.buckets.len() - 1
            }
        };
        grouped.buckets[slot].1.push(item);
    }

    grouped
}

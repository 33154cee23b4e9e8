//! 表示アニメーション（reveal / inview）
//!
//! 各要素は `Pending → Revealed` の一方向にだけ遷移する。
//! 監視はカードとセクションの2系統で、しきい値が異なる。
//! モーション抑制時は監視を張らず、セットアップ時点で全要素を Revealed にする。

use crate::config::RendererConfig;
use crate::page::PageModel;

/// 要素ごとの表示状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// 監視対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    Card(usize),
    Section(usize),
}

/// 可視判定の監視窓口
///
/// ブラウザでは IntersectionObserver、テストでは記録用の実装を渡す。
pub trait VisibilityWatch {
    fn watch(&mut self, target: RevealTarget);
    fn unwatch(&mut self, target: RevealTarget);
}

/// 監視のしきい値（要素面積に対する可視率）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealThresholds {
    pub card: f64,
    pub section: f64,
}

impl RevealThresholds {
    pub fn from_config(config: &RendererConfig) -> Self {
        Self {
            card: config.card_reveal_threshold,
            section: config.section_reveal_threshold,
        }
    }
}

/// セットアップ結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSetup {
    /// モーション抑制：全要素を即時 Revealed にした
    Immediate,
    /// 監視を開始した（登録数）
    Observing { cards: usize, sections: usize },
}

#[derive(Debug, Clone, Copy)]
pub struct RevealController {
    reduced_motion: bool,
}

impl RevealController {
    pub fn new(reduced_motion: bool) -> Self {
        Self { reduced_motion }
    }

    /// 監視を張る。既に Revealed の要素は登録しない
    pub fn setup<W: VisibilityWatch>(&self, page: &mut PageModel, watch: &mut W) -> RevealSetup {
        if self.reduced_motion {
            page.reveal_all();
            return RevealSetup::Immediate;
        }

        let mut cards = 0;
        for id in 0..page.cards().len() {
            if page.card(id).map(|c| c.reveal) == Some(RevealState::Pending) {
                watch.watch(RevealTarget::Card(id));
                cards += 1;
            }
        }

        let mut sections = 0;
        for id in 0..page.sections().len() {
            if page.section(id).map(|s| s.inview) == Some(RevealState::Pending) {
                watch.watch(RevealTarget::Section(id));
                sections += 1;
            }
        }

        RevealSetup::Observing { cards, sections }
    }

    /// しきい値を超えて見えた要素を Revealed にし、監視を外す
    ///
    /// 遷移が起きたときだけ true。
    pub fn on_visible<W: VisibilityWatch>(
        &self,
        page: &mut PageModel,
        watch: &mut W,
        target: RevealTarget,
    ) -> bool {
        let changed = match target {
            RevealTarget::Card(id) => page.reveal_card(id),
            RevealTarget::Section(id) => page.reveal_section(id),
        };
        if changed {
            watch.unwatch(target);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RendererConfig;
    use crate::page::{ListSlot, PageLayout, SectionSlot};
    use crate::types::MenuItem;
    use std::collections::HashSet;

    #[derive(Default)]
    struct RecordingWatch {
        watching: HashSet<RevealTarget>,
        registrations: usize,
    }

    impl VisibilityWatch for RecordingWatch {
        fn watch(&mut self, target: RevealTarget) {
            self.registrations += 1;
            self.watching.insert(target);
        }

        fn unwatch(&mut self, target: RevealTarget) {
            self.watching.remove(&target);
        }
    }

    fn page() -> PageModel {
        let items: Vec<MenuItem> = ["Negroni", "Martini", "Sazerac"]
            .iter()
            .map(|name| MenuItem {
                name: name.to_string(),
                ingredients: String::new(),
                section: "Classics".to_string(),
                spirit: None,
            })
            .collect();
        let layout = PageLayout {
            sections: vec![SectionSlot::new(Some("classics"))],
            lists: vec![ListSlot::new("Classics", Some(0))],
        };
        PageModel::render(&layout, &items, &RendererConfig::default())
    }

    #[test]
    fn test_reduced_motion_reveals_everything_without_watching() {
        let mut page = page();
        let mut watch = RecordingWatch::default();

        let setup = RevealController::new(true).setup(&mut page, &mut watch);

        assert_eq!(setup, RevealSetup::Immediate);
        assert_eq!(watch.registrations, 0);
        assert!(page.cards().iter().all(|c| c.reveal == RevealState::Revealed));
        assert!(page.sections().iter().all(|s| s.inview == RevealState::Revealed));
    }

    #[test]
    fn test_watch_all_pending() {
        let mut page = page();
        let mut watch = RecordingWatch::default();

        let setup = RevealController::new(false).setup(&mut page, &mut watch);

        assert_eq!(setup, RevealSetup::Observing { cards: 3, sections: 1 });
        assert_eq!(watch.watching.len(), 4);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut page = page();
        let mut watch = RecordingWatch::default();
        let controller = RevealController::new(false);
        controller.setup(&mut page, &mut watch);

        assert!(controller.on_visible(&mut page, &mut watch, RevealTarget::Card(1)));
        assert!(!watch.watching.contains(&RevealTarget::Card(1)));
        assert_eq!(page.card(1).unwrap().reveal, RevealState::Revealed);

        // 2回目は何も起きない
        assert!(!controller.on_visible(&mut page, &mut watch, RevealTarget::Card(1)));
        assert_eq!(page.card(1).unwrap().reveal, RevealState::Revealed);
        assert_eq!(page.card(0).unwrap().reveal, RevealState::Pending);
    }

    #[test]
    fn test_section_inview_releases_watch() {
        let mut page = page();
        let mut watch = RecordingWatch::default();
        let controller = RevealController::new(false);
        controller.setup(&mut page, &mut watch);

        assert!(controller.on_visible(&mut page, &mut watch, RevealTarget::Section(0)));
        assert!(!watch.watching.contains(&RevealTarget::Section(0)));
        assert_eq!(page.section(0).unwrap().inview, RevealState::Revealed);
    }

    #[test]
    fn test_thresholds_from_config() {
        let thresholds = RevealThresholds::from_config(&RendererConfig::default());
        assert_eq!(thresholds, RevealThresholds { card: 0.15, section: 0.4 });
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut page = page();
        let mut watch = RecordingWatch::default();
        let controller = RevealController::new(false);
        assert!(!controller.on_visible(&mut page, &mut watch, RevealTarget::Card(99)));
    }
}

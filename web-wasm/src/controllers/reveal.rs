//! 表示アニメーション
//!
//! カード（15%）とセクション（40%）をそれぞれ IntersectionObserver で監視し、
//! 初めてしきい値を超えた要素に revealed / inview を付けて監視を外す。
//! モーション抑制時は observer を作らず全要素を即時反映する。

use crate::dom::{self, position_of};
use crate::page::{DomPage, SharedPage};
use menu_cards_common::{RevealController, RevealTarget, RevealThresholds, VisibilityWatch};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry};

/// IntersectionObserver による監視窓口
struct ObserverWatch<'a> {
    cards: &'a [Option<HtmlElement>],
    sections: &'a [HtmlElement],
    card_observer: Option<&'a IntersectionObserver>,
    section_observer: Option<&'a IntersectionObserver>,
}

impl VisibilityWatch for ObserverWatch<'_> {
    fn watch(&mut self, target: RevealTarget) {
        match target {
            RevealTarget::Card(id) => {
                if let (Some(observer), Some(Some(el))) = (self.card_observer, self.cards.get(id)) {
                    observer.observe(el);
                }
            }
            RevealTarget::Section(id) => {
                if let (Some(observer), Some(el)) = (self.section_observer, self.sections.get(id)) {
                    observer.observe(el);
                }
            }
        }
    }

    fn unwatch(&mut self, target: RevealTarget) {
        match target {
            RevealTarget::Card(id) => {
                if let (Some(observer), Some(Some(el))) = (self.card_observer, self.cards.get(id)) {
                    observer.unobserve(el);
                }
            }
            RevealTarget::Section(id) => {
                if let (Some(observer), Some(el)) = (self.section_observer, self.sections.get(id)) {
                    observer.unobserve(el);
                }
            }
        }
    }
}

pub fn attach(shared: &SharedPage, reduced_motion: bool, thresholds: RevealThresholds) -> Result<(), JsValue> {
    let controller = RevealController::new(reduced_motion);

    if reduced_motion {
        let page = &mut *shared.borrow_mut();
        let DomPage { model, cards, sections, .. } = &mut *page;
        let mut watch = ObserverWatch {
            cards,
            sections,
            card_observer: None,
            section_observer: None,
        };
        controller.setup(model, &mut watch);
        page.sync_all();
        return Ok(());
    }

    let card_observer = dom::intersection_observer(thresholds.card, None, {
        let shared = shared.clone();
        move |entries, observer| on_entries(&shared, controller, &entries, observer, true)
    })?;
    let section_observer = dom::intersection_observer(thresholds.section, None, {
        let shared = shared.clone();
        move |entries, observer| on_entries(&shared, controller, &entries, observer, false)
    })?;

    let page = &mut *shared.borrow_mut();
    let DomPage { model, cards, sections, .. } = &mut *page;
    let mut watch = ObserverWatch {
        cards,
        sections,
        card_observer: Some(&card_observer),
        section_observer: Some(&section_observer),
    };
    controller.setup(model, &mut watch);
    Ok(())
}

fn on_entries(
    shared: &SharedPage,
    controller: RevealController,
    entries: &[IntersectionObserverEntry],
    observer: &IntersectionObserver,
    for_cards: bool,
) {
    let page = &mut *shared.borrow_mut();

    for entry in entries.iter().filter(|e| e.is_intersecting()) {
        let element = entry.target();
        let target = if for_cards {
            element
                .get_attribute("data-card-id")
                .and_then(|v| v.parse::<usize>().ok())
                .map(RevealTarget::Card)
        } else {
            position_of(&page.sections, &element).map(RevealTarget::Section)
        };
        let Some(target) = target else {
            observer.unobserve(&element);
            continue;
        };

        let DomPage { model, cards, sections, .. } = &mut *page;
        let mut watch = ObserverWatch {
            cards,
            sections,
            card_observer: for_cards.then_some(observer),
            section_observer: (!for_cards).then_some(observer),
        };
        if controller.on_visible(model, &mut watch, target) {
            match target {
                RevealTarget::Card(id) => page.sync_card(id),
                RevealTarget::Section(id) => page.sync_section(id),
            }
        }
    }
}

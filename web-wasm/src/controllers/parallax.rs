//! セクション背景のパララックス
//!
//! フォーカス帯（rootMargin -30% / -60%）に入ったセクションを追い、
//! スクロールごとに1フレームだけ再計算して `--bg-shift-x/y` を書き込む。

use crate::dom::{self, position_of};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use menu_cards_common::{DriftOffset, DriftSettings, ParallaxController, RendererConfig, SectionRect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

type SharedParallax = Rc<RefCell<ParallaxController>>;

pub fn attach(sections: Vec<HtmlElement>, config: &RendererConfig, reduced_motion: bool) -> Result<(), JsValue> {
    if reduced_motion {
        return Ok(());
    }

    let controller: SharedParallax = Rc::new(RefCell::new(ParallaxController::new(
        DriftSettings::from_config(config),
        false,
    )));
    let sections = Rc::new(sections);

    let watcher = dom::intersection_observer(config.focus_band_threshold, Some(config.focus_band_margin.as_str()), {
        let controller = controller.clone();
        let sections = sections.clone();
        move |entries, _| {
            let updates: Vec<(usize, bool)> = entries
                .iter()
                .filter_map(|e| position_of(&sections, &e.target()).map(|i| (i, e.is_intersecting())))
                .collect();
            controller.borrow_mut().on_band_entries(updates);
        }
    })?;
    for section in sections.iter() {
        watcher.observe(section);
    }

    let on_scroll = {
        let controller = controller.clone();
        let sections = sections.clone();
        move || {
            if controller.borrow_mut().on_scroll() {
                schedule_frame(controller.clone(), sections.clone());
            }
        }
    };

    let window = dom::window()?;
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    };
    let listener_scroll = on_scroll.clone();
    EventListener::new_with_options(&window, "scroll", options, move |_| listener_scroll()).forget();
    on_scroll();

    Ok(())
}

/// 次のアニメーションフレームでずれ量を反映する
fn schedule_frame(controller: SharedParallax, sections: Rc<Vec<HtmlElement>>) {
    let frame_controller = controller.clone();
    let callback = Closure::once_into_js(move || {
        let viewport_height = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);

        let result = frame_controller.borrow_mut().on_frame(viewport_height, |i| {
            sections.get(i).map(|el| {
                let rect = el.get_bounding_client_rect();
                SectionRect { top: rect.top(), bottom: rect.bottom() }
            })
        });

        if let Some((i, offset)) = result {
            if let Some(section) = sections.get(i) {
                apply_offset(section, offset);
            }
        }
    });

    let requested = web_sys::window()
        .map(|w| w.request_animation_frame(callback.unchecked_ref()).is_ok())
        .unwrap_or(false);
    if !requested {
        // 予約できなければフラグだけ戻す
        controller.borrow_mut().on_frame(0.0, |_| None);
    }
}

fn apply_offset(section: &HtmlElement, offset: DriftOffset) {
    let style = section.style();
    let _ = style.set_property(DriftOffset::Y_PROPERTY, &offset.css_y());
    let _ = style.set_property(DriftOffset::X_PROPERTY, &offset.css_x());
}

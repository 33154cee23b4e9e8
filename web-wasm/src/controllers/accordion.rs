//! アコーディオン
//!
//! summary のクリックを横取りし、開閉は `PageModel` に決めさせる
//! （同じリストで開いているカードは閉じる）。

use crate::page::SharedPage;
use gloo::events::{EventListener, EventListenerOptions};
use menu_cards_common::CardMode;

pub fn attach(shared: &SharedPage) {
    let page = shared.borrow();
    if page.model.mode() != CardMode::Accordion {
        return;
    }

    for (id, card) in page.cards.iter().enumerate() {
        let Some(summary) = card
            .as_ref()
            .and_then(|el| el.query_selector("summary.card__summary").ok().flatten())
        else {
            continue;
        };

        let shared = shared.clone();
        EventListener::new_with_options(
            &summary,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let mut page = shared.borrow_mut();
                let changed = page.model.toggle_card(id);
                for card in changed {
                    page.sync_card(card);
                }
            },
        )
        .forget();
    }
}

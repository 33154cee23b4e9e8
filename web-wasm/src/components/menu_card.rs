//! メニューカードコンポーネント

use leptos::prelude::*;
use menu_cards_common::{CardMode, CardModel};

/// 1枚のカード
///
/// 状態クラス（is-hidden / revealed など）は描画後にDOM側で付け外しする。
#[component]
pub fn MenuCard(card_id: usize, card: CardModel) -> impl IntoView {
    let heading_style = card.underline_style();
    let delay_style = card.delay_style().unwrap_or_default();
    let CardModel { name, ingredients, spirit, mode, .. } = card;

    match mode {
        CardMode::Accordion => view! {
            <li class="card will-reveal" data-card-id=card_id.to_string() data-spirit=spirit>
                <details class="card__exp">
                    <summary class="card__summary">
                        <h3 class="card__name" style=heading_style>{name}</h3>
                        <span class="card__caret" aria-hidden="true"></span>
                    </summary>
                    <div class="card__body">
                        <p class="card__ing">{ingredients}</p>
                    </div>
                </details>
            </li>
        }
        .into_any(),

        CardMode::Stagger => view! {
            <li
                class="card will-reveal"
                data-card-id=card_id.to_string()
                data-spirit=spirit
                style=delay_style
            >
                <h3 class="card__name" style=heading_style>{name}</h3>
                <div class="card__body">
                    <p class="card__ing">{ingredients}</p>
                </div>
            </li>
        }
        .into_any(),
    }
}

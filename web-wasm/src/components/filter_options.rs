//! フィルタ選択肢コンポーネント

use leptos::prelude::*;

#[component]
pub fn FilterOptions(options: Vec<String>) -> impl IntoView {
    options
        .into_iter()
        .map(|value| {
            let label = value.clone();
            view! { <option value=value>{label}</option> }
        })
        .collect_view()
}

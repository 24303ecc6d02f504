//! Load Status Lines

use leptos::prelude::*;

#[component]
pub fn LoadingLine() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}

/// The single error line a failed page shows in place of its data
#[component]
pub fn ErrorLine(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="error">{message}</p> }
}

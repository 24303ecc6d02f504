//! Not Found Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <A href="/" attr:class="btn-primary">"Back to home"</A>
        </div>
    }
}

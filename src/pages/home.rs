//! Home Page
//!
//! Hero with entry links and the top-rated businesses panel.

use leptos::prelude::*;
use leptos_router::components::A;
use bookable_client::{load_home, AppRoute, LoadState};

use crate::components::{BusinessCard, ErrorLine, LoadingLine};
use crate::context::use_app_context;
use crate::hooks::use_page_load;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let api = ctx.api;
    let limit = ctx.top_rated_limit;

    let top_rated = use_page_load(|| (), move |_| {
        let api = api.clone();
        async move { load_home(&api, limit).await }
    });

    view! {
        <div class="page">
            <section class="hero">
                <div class="hero-text">
                    <h1>"Book services you love, effortlessly."</h1>
                    <p>
                        "Discover businesses, explore services, and manage your bookings in one place."
                    </p>
                    <div class="hero-actions">
                        <A href=AppRoute::Businesses.href() attr:class="btn-primary">"Browse businesses"</A>
                        <A href=AppRoute::Categories.href() attr:class="btn-secondary">"Explore categories"</A>
                    </div>
                </div>
                <div class="hero-panel">
                    <h2>"Top rated businesses"</h2>
                    {move || match top_rated.get() {
                        LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                        LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                        LoadState::Loaded(list) if list.is_empty() => {
                            view! { <p>"No businesses yet."</p> }.into_any()
                        }
                        LoadState::Loaded(list) => view! {
                            <div class="grid">
                                {list.into_iter().map(|b| view! { <BusinessCard business=b /> }).collect_view()}
                            </div>
                        }.into_any(),
                    }}
                </div>
            </section>
        </div>
    }
}

//! Businesses Page

use leptos::prelude::*;
use bookable_client::{load_businesses, LoadState};

use crate::components::{BusinessCard, ErrorLine, LoadingLine};
use crate::context::use_app_context;
use crate::hooks::use_page_load;

#[component]
pub fn BusinessesPage() -> impl IntoView {
    let api = use_app_context().api;

    let businesses = use_page_load(|| (), move |_| {
        let api = api.clone();
        async move { load_businesses(&api).await }
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Businesses"</h1>
                <p>"Browse all businesses available in the platform."</p>
            </header>

            {move || match businesses.get() {
                LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                LoadState::Loaded(list) => view! {
                    <div class="grid">
                        {list
                            .into_iter()
                            .map(|b| view! { <BusinessCard business=b /> })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

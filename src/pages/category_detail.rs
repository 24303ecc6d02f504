//! Category Detail Page

use leptos::prelude::*;
use bookable_client::{load_category_detail, CategoryDetailData, LoadState};

use crate::components::{ErrorLine, LoadingLine, ServiceCard};
use crate::context::use_app_context;
use crate::hooks::{use_page_load, use_route_param};

#[component]
pub fn CategoryDetailPage() -> impl IntoView {
    let api = use_app_context().api;
    let category_id = use_route_param("category_id");

    let detail = use_page_load(category_id, move |id: String| {
        let api = api.clone();
        async move { load_category_detail(&api, &id).await }
    });

    view! {
        <div class="page">
            {move || match detail.get() {
                LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                LoadState::Loaded(CategoryDetailData { category: Some(category), services }) => view! {
                    <header class="page-header">
                        <h1>{category.name}</h1>
                        <p>{category.description.unwrap_or_default()}</p>
                    </header>

                    <section class="section">
                        <h2>"Services in this category"</h2>
                        {services.is_empty().then(|| view! { <p>"No services."</p> })}
                        <div class="grid">
                            {services.into_iter().map(|s| view! { <ServiceCard service=s /> }).collect_view()}
                        </div>
                    </section>
                }.into_any(),
                LoadState::Loaded(_) => view! { <p>"Category not found"</p> }.into_any(),
            }}
        </div>
    }
}

//! Categories Page

use leptos::prelude::*;
use bookable_client::{load_categories, CategoriesData, LoadState};

use crate::components::{CategoryTree, ErrorLine, LoadingLine};
use crate::context::use_app_context;
use crate::hooks::use_page_load;

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let api = use_app_context().api;

    let categories = use_page_load(|| (), move |_| {
        let api = api.clone();
        async move { load_categories(&api).await }
    });

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Categories"</h1>
                <p>"Browse services through categories."</p>
            </header>

            {move || match categories.get() {
                LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                LoadState::Loaded(CategoriesData { categories, tree }) => view! {
                    <section class="section">
                        <h2>"Category tree"</h2>
                        <p class="card-meta">{format!("{} categories", categories.len())}</p>
                        {if tree.is_empty() {
                            view! { <p>"No categories yet."</p> }.into_any()
                        } else {
                            view! { <CategoryTree branches=tree /> }.into_any()
                        }}
                    </section>
                }.into_any(),
            }}
        </div>
    }
}

//! Bookable Storefront App
//!
//! Root component: provides context, sets up the route table inside the
//! layout chrome.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Layout;
use crate::config::CONFIG;
use crate::context::AppContext;
use crate::pages::{
    BookingsPage, BusinessDetailPage, BusinessesPage, CategoriesPage, CategoryDetailPage, HomePage, NotFoundPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all pages
    provide_context(AppContext::new(&CONFIG));

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/businesses") view=BusinessesPage />
                    <Route path=path!("/businesses/:business_id") view=BusinessDetailPage />
                    <Route path=path!("/categories") view=CategoriesPage />
                    <Route path=path!("/categories/:category_id") view=CategoryDetailPage />
                    // Customer id is a literal path segment; see Session for the link
                    <Route path=path!("/customers/:customer_id/bookings") view=BookingsPage />
                </Routes>
            </Layout>
        </Router>
    }
}

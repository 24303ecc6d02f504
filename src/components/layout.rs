//! Layout Chrome
//!
//! Navbar, main column and footer around every page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::format::current_year;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Navbar />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let session = use_app_context().session;

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <A href="/" attr:class="brand">
                    <span class="brand-mark">"B"</span>
                    <span class="brand-text">"Bookable"</span>
                </A>

                <nav class="nav-links">
                    <A href="/businesses">"Businesses"</A>
                    <A href="/categories">"Categories"</A>
                    {session.bookings_href().map(|href| view! { <A href=href>"My bookings"</A> })}
                </nav>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>{format!("© {} Bookable Platform", current_year())}</span>
            <span class="footer-secondary">"Built with Rust & Leptos"</span>
        </footer>
    }
}

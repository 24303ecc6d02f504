//! Bookings Page
//!
//! Upcoming and past bookings for the customer in the route.

use leptos::prelude::*;
use bookable_client::{load_bookings, Booking, BookingsData, LoadState};

use crate::components::{ErrorLine, LoadingLine};
use crate::context::use_app_context;
use crate::format::local_datetime;
use crate::hooks::{use_page_load, use_route_param};

#[component]
pub fn BookingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let api = ctx.api;
    let session = ctx.session;
    let customer_id = use_route_param("customer_id");

    let bookings = use_page_load(customer_id, move |id: String| {
        let api = api.clone();
        async move { load_bookings(&api, &id).await }
    });

    let title = move || {
        if session.customer_id() == Some(customer_id().as_str()) {
            "My bookings"
        } else {
            "Bookings"
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>{title}</h1>
                <p>{move || format!("Customer #{}", customer_id())}</p>
            </header>

            {move || match bookings.get() {
                LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                LoadState::Loaded(BookingsData { upcoming, past }) => view! {
                    <BookingSection title="Upcoming" empty="No upcoming bookings." bookings=upcoming />
                    <BookingSection title="Past" empty="No previous bookings." bookings=past />
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BookingSection(title: &'static str, empty: &'static str, bookings: Vec<Booking>) -> impl IntoView {
    view! {
        <section class="section">
            <h2>{title}</h2>
            {bookings.is_empty().then(|| view! { <p>{empty}</p> })}
            <div class="grid">
                {bookings.into_iter().map(|b| view! { <BookingCard booking=b /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn BookingCard(booking: Booking) -> impl IntoView {
    let when = format!("{} – {}", local_datetime(&booking.starttime), local_datetime(&booking.endtime));
    let refs = format!(
        "Business ID: {} · Service ID: {}",
        booking.business_id.map(|id| id.to_string()).unwrap_or_default(),
        booking.service_id.map(|id| id.to_string()).unwrap_or_default(),
    );

    view! {
        <article class="card">
            <h3>{format!("Booking #{}", booking.id)}</h3>
            <p class="card-meta">{when}</p>
            <p>{format!("Status: {}", booking.status.unwrap_or_default())}</p>
            <p>{refs}</p>
        </article>
    }
}

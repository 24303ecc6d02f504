//! Business Card Component

use leptos::prelude::*;
use leptos_router::components::A;
use bookable_client::{Business, BusinessCardModel};

use super::RatingStars;

#[component]
pub fn BusinessCard(business: Business) -> impl IntoView {
    let card = BusinessCardModel::from(&business);

    view! {
        <article class="card">
            <div class="card-header">
                <h3>{card.title}</h3>
                <RatingStars rating=card.rating count=card.review_count />
            </div>
            <p class="card-subtitle">{card.description}</p>
            <p class="card-meta">{card.meta}</p>
            <div class="card-actions">
                <A href=card.href attr:class="btn-primary">"View details"</A>
            </div>
        </article>
    }
}

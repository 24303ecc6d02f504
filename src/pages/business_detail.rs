//! Business Detail Page
//!
//! Business header, services, opening hours and reviews. All five calls must
//! succeed for anything but the error line to show.

use leptos::prelude::*;
use bookable_client::{
    load_business_detail, opening_hours_label, review_author, Business, BusinessDetailData, LoadState,
    OpeningHours, RatingSummary, Review, Service,
};

use crate::components::{ErrorLine, LoadingLine, RatingStars, ServiceCard};
use crate::context::use_app_context;
use crate::format::local_date;
use crate::hooks::{use_page_load, use_route_param};

#[component]
pub fn BusinessDetailPage() -> impl IntoView {
    let api = use_app_context().api;
    let business_id = use_route_param("business_id");

    let detail = use_page_load(business_id, move |id: String| {
        let api = api.clone();
        async move { load_business_detail(&api, &id).await }
    });

    view! {
        <div class="page">
            {move || match detail.get() {
                LoadState::Loading => view! { <LoadingLine /> }.into_any(),
                LoadState::Failed(message) => view! { <ErrorLine message=message /> }.into_any(),
                LoadState::Loaded(BusinessDetailData {
                    business: Some(business),
                    services,
                    reviews,
                    opening_hours,
                    rating,
                }) => view! {
                    <BusinessHeader business=business rating=rating />
                    <ServicesSection services=services />
                    <OpeningHoursSection hours=opening_hours />
                    <ReviewsSection reviews=reviews />
                }.into_any(),
                // The business call succeeded but came back empty
                LoadState::Loaded(_) => view! { <p>"Business not found"</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn BusinessHeader(business: Business, rating: Option<RatingSummary>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{business.name}</h1>
            <p>{business.description.unwrap_or_default()}</p>
            <div class="page-header-meta">
                <span>{business.city.unwrap_or_default()}</span>
                {rating.map(|r| view! { <RatingStars rating=r.average_rating count=r.review_count /> })}
            </div>
        </header>
    }
}

#[component]
fn ServicesSection(services: Vec<Service>) -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Services"</h2>
            {services.is_empty().then(|| view! { <p>"No services yet."</p> })}
            <div class="grid">
                {services.into_iter().map(|s| view! { <ServiceCard service=s /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn OpeningHoursSection(hours: Vec<OpeningHours>) -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Opening hours"</h2>
            {hours.is_empty().then(|| view! { <p>"No opening hours configured."</p> })}
            <ul class="list">
                {hours
                    .into_iter()
                    .map(|oh| {
                        let label = opening_hours_label(&oh);
                        let span = format!(
                            "{} – {}",
                            oh.open_time.unwrap_or_default(),
                            oh.close_time.unwrap_or_default(),
                        );
                        view! {
                            <li>
                                <strong>{label}</strong>": "{span}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn ReviewsSection(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <section class="section">
            <h2>"Reviews"</h2>
            {reviews.is_empty().then(|| view! { <p>"No reviews yet."</p> })}
            <div class="list">
                {reviews
                    .into_iter()
                    .map(|review| {
                        let author = review_author(&review).to_string();
                        let posted = review.created_at.as_deref().map(local_date).unwrap_or_default();
                        view! {
                            <article class="card review-card">
                                <header class="review-header">
                                    <strong>{author}</strong>
                                    <RatingStars rating=review.rating />
                                </header>
                                <p>{review.comment.unwrap_or_default()}</p>
                                <small class="card-meta">{posted}</small>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

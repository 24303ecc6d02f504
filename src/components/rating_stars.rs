//! Rating Stars Component

use leptos::prelude::*;
use bookable_client::format_rating;

/// Rounded rating with a star; renders nothing for zero or missing ratings
#[component]
pub fn RatingStars(
    rating: Option<f64>,
    #[prop(default = None)] count: Option<i64>,
) -> impl IntoView {
    format_rating(rating).map(|label| {
        view! {
            <div class="rating">
                <span class="rating-value">{label}</span>
                <span class="rating-stars">"★"</span>
                {count.map(|n| view! { <span class="rating-count">{format!("({})", n)}</span> })}
            </div>
        }
    })
}

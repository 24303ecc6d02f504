//! Service Card Component

use leptos::prelude::*;
use bookable_client::{service_meta, Service};

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let meta = service_meta(&service);

    view! {
        <article class="card">
            <h4>{service.name}</h4>
            <p class="card-subtitle">{service.description.unwrap_or_default()}</p>
            <p class="card-meta">{meta}</p>
        </article>
    }
}

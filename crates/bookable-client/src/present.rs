//! Presenters
//!
//! Pure formatting the card and list components render from.

use crate::models::{Business, OpeningHours, Review, Service};
use crate::routes::AppRoute;

/// One-decimal rating label, or `None` when there is nothing to show.
///
/// Zero and absent both hide the rating: the backend reports unrated
/// businesses as 0.
pub fn format_rating(rating: Option<f64>) -> Option<String> {
    let rating = rating.filter(|r| r.is_finite() && *r != 0.0)?;
    let rounded = (rating * 10.0).round() / 10.0;
    Some(rounded.to_string())
}

/// City and phone joined with a middle dot, skipping blanks
pub fn business_meta(city: Option<&str>, phone: Option<&str>) -> String {
    [city, phone]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

pub fn service_meta(service: &Service) -> String {
    let mut parts = Vec::new();
    if let Some(minutes) = service.duration_minutes {
        parts.push(format!("Duration: {} min", minutes));
    }
    if let Some(price) = service.price {
        parts.push(format!("Price: {} kr", price));
    }
    parts.join(" · ")
}

/// Weekday name when the backend sends one, else the weekday number
pub fn opening_hours_label(hours: &OpeningHours) -> String {
    match (&hours.weekday_name, hours.weekday) {
        (Some(name), _) if !name.is_empty() => name.clone(),
        (_, Some(day)) => day.to_string(),
        _ => String::new(),
    }
}

pub fn review_author(review: &Review) -> &str {
    review
        .author_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or("Anonymous")
}

/// Everything a business card shows
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessCardModel {
    pub title: String,
    pub description: String,
    pub city: Option<String>,
    pub meta: String,
    pub rating: Option<f64>,
    pub review_count: Option<i64>,
    pub href: String,
}

impl From<&Business> for BusinessCardModel {
    fn from(business: &Business) -> Self {
        Self {
            title: business.name.clone(),
            description: business.description.clone().unwrap_or_default(),
            city: business.city.clone(),
            meta: business_meta(business.city.as_deref(), business.phone.as_deref()),
            rating: business.rating,
            review_count: business.review_count,
            href: AppRoute::BusinessDetail(business.id.to_string()).href(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        assert_eq!(format_rating(Some(4.26)), Some("4.3".to_string()));
        assert_eq!(format_rating(Some(4.0)), Some("4".to_string()));
        assert_eq!(format_rating(Some(3.333)), Some("3.3".to_string()));
    }

    #[test]
    fn test_rating_zero_or_absent_renders_nothing() {
        assert_eq!(format_rating(Some(0.0)), None);
        assert_eq!(format_rating(None), None);
        assert_eq!(format_rating(Some(f64::NAN)), None);
    }

    #[test]
    fn test_business_card_scenario() {
        let business: Business = serde_json::from_str(r#"{"id":1,"name":"Ace","city":"Oslo"}"#).unwrap();
        let card = BusinessCardModel::from(&business);
        assert_eq!(card.title, "Ace");
        assert_eq!(card.city.as_deref(), Some("Oslo"));
        assert_eq!(card.meta, "Oslo");
        assert_eq!(card.href, "/businesses/1");
        assert_eq!(card.rating, None);
    }

    #[test]
    fn test_business_meta_joins_parts() {
        assert_eq!(business_meta(Some("Oslo"), Some("555 1234")), "Oslo · 555 1234");
        assert_eq!(business_meta(None, Some("555 1234")), "555 1234");
        assert_eq!(business_meta(Some(""), None), "");
    }

    #[test]
    fn test_service_meta() {
        let service: Service =
            serde_json::from_str(r#"{"id":1,"name":"Cut","duration_minutes":45,"price":350}"#).unwrap();
        assert_eq!(service_meta(&service), "Duration: 45 min · Price: 350 kr");
    }

    #[test]
    fn test_opening_hours_prefers_name() {
        let named: OpeningHours =
            serde_json::from_str(r#"{"id":1,"weekday":1,"weekday_name":"Monday","open_time":"09:00","close_time":"17:00"}"#)
                .unwrap();
        let numbered: OpeningHours = serde_json::from_str(r#"{"id":2,"weekday":3}"#).unwrap();
        assert_eq!(opening_hours_label(&named), "Monday");
        assert_eq!(opening_hours_label(&numbered), "3");
    }

    #[test]
    fn test_review_author_fallback() {
        let anonymous: Review = serde_json::from_str(r#"{"id":1,"rating":4}"#).unwrap();
        let named: Review = serde_json::from_str(r#"{"id":2,"author_name":"Kari","rating":5}"#).unwrap();
        assert_eq!(review_author(&anonymous), "Anonymous");
        assert_eq!(review_author(&named), "Kari");
    }
}

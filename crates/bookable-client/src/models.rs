//! Storefront Models
//!
//! Data structures matching backend responses. Only the fields the pages
//! render are declared; anything else in the payload is ignored.

use serde::{Deserialize, Deserializer, Serialize};

/// Business data structure (matches `/businesses/*`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Top-rated rows are keyed `business_id`
    #[serde(alias = "business_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "average_rating", deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub id: i64,
    #[serde(default)]
    pub weekday: Option<i64>,
    #[serde(default)]
    pub weekday_name: Option<String>,
    #[serde(default)]
    pub open_time: Option<String>,
    #[serde(default)]
    pub close_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Business review rows name the reviewer `customer_name`
    #[serde(default, alias = "customer_name")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    /// ISO timestamp
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Category node. The flat list leaves `children` empty; the tree nests it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// ISO timestamp
    pub starttime: String,
    /// ISO timestamp
    pub endtime: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub business_id: Option<i64>,
    #[serde(default)]
    pub service_id: Option<i64>,
}

/// Response of `/businesses/{id}/rating`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    #[serde(default, deserialize_with = "lenient_number")]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
}

/// Numbers may arrive as JSON numbers or numeric strings (SQL decimals)
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_minimal_payload() {
        let b: Business = serde_json::from_str(r#"{"id":1,"name":"Ace","city":"Oslo"}"#).unwrap();
        assert_eq!(b.id, 1);
        assert_eq!(b.city.as_deref(), Some("Oslo"));
        assert!(b.rating.is_none());
        assert!(b.phone.is_none());
    }

    #[test]
    fn test_top_rated_row_aliases() {
        let json = r#"{"business_id":4,"name":"Barber","average_rating":"4.50","review_count":2}"#;
        let b: Business = serde_json::from_str(json).unwrap();
        assert_eq!(b.id, 4);
        assert_eq!(b.rating, Some(4.5));
        assert_eq!(b.review_count, Some(2));
    }

    #[test]
    fn test_category_children_null_or_missing() {
        let json = r#"[{"id":1,"name":"Hair","children":null},{"id":2,"name":"Nails"}]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert!(cats[0].children.is_empty());
        assert!(cats[1].children.is_empty());
    }

    #[test]
    fn test_service_price_as_string() {
        let json = r#"{"id":3,"name":"Cut","duration_minutes":30,"price":"299.00"}"#;
        let s: Service = serde_json::from_str(json).unwrap();
        assert_eq!(s.price, Some(299.0));
        assert_eq!(s.duration_minutes, Some(30));
    }

    #[test]
    fn test_review_author_from_customer_name() {
        let json = r#"{"id":4,"rating":5,"comment":"Great cut","customer_id":1,
            "service_name":"Cut","business_name":"Ace","customer_name":"Kari Nordmann"}"#;
        let r: Review = serde_json::from_str(json).unwrap();
        assert_eq!(r.author_name.as_deref(), Some("Kari Nordmann"));
        assert_eq!(r.rating, Some(5.0));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"id":9,"starttime":"2025-01-02T10:00:00","endtime":"2025-01-02T11:00:00",
            "status":"confirmed","business_id":1,"service_id":2,"staff_id":5,"customer_id":1}"#;
        let b: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(b.status.as_deref(), Some("confirmed"));
        assert_eq!(b.service_id, Some(2));
    }
}

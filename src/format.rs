//! Locale Formatting
//!
//! Date output goes through the browser's `Date` so it follows the user's
//! locale and timezone.

use wasm_bindgen::JsValue;

/// "12/24/2025, 10:00:00 AM" style, per browser locale
pub fn local_datetime(iso: &str) -> String {
    js_sys::Date::new(&JsValue::from_str(iso))
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

/// Date part only
pub fn local_date(iso: &str) -> String {
    js_sys::Date::new(&JsValue::from_str(iso))
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

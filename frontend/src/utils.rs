use js_sys::Date;
use postview_shared::presentation::{fallback_date, INVALID_DATE};
use wasm_bindgen::JsValue;

/// Locale of the browser, `en-US` when it cannot be read.
fn browser_locale() -> String {
    web_sys::window()
        .and_then(|win| win.navigator().language())
        .filter(|lang| !lang.trim().is_empty())
        .unwrap_or_else(|| "en-US".to_string())
}

/// `new Date(raw).toLocaleDateString()` in the user's locale.
///
/// The browser parses `raw` itself, so zone-less timestamps are local time
/// and every shape `Date` accepts is shown; anything it rejects reads
/// `Invalid Date`.
pub fn locale_date(raw: &str) -> String {
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return INVALID_DATE.to_string();
    }

    let formatted: String = date
        .to_locale_date_string(&browser_locale(), &JsValue::UNDEFINED)
        .into();

    if formatted.trim().is_empty() {
        fallback_date(raw)
    } else {
        formatted
    }
}

use common::format::{offset_from_js_minutes, DateTime, FixedOffset, Utc};
use wasm_bindgen::JsValue;

/// The browser's UTC offset at `at`, so each creation date is shown with the
/// daylight saving rule in force on that day.
pub fn browser_offset_at(at: DateTime<Utc>) -> FixedOffset {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    offset_from_js_minutes(date.get_timezone_offset())
}

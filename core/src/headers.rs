//! Fixed request headers and the header merge policy.
//!
//! Every request carries `X-Requested-With: XMLHttpRequest`, the client's UTC
//! offset and `Accept: application/json`; POSTs add a JSON content type.
//! Caller headers are merged into a fresh list and the fixed headers always
//! win, compared case-insensitively. The caller's slice is never modified.

use chrono::Local;

pub const X_REQUESTED_WITH: &str = "X-Requested-With";
pub const X_TIMEZONE_OFFSET: &str = "X-Timezone-Offset";
pub const ACCEPT: &str = "Accept";
pub const CONTENT_TYPE: &str = "Content-Type";

pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";
pub const APPLICATION_JSON: &str = "application/json";

/// Local UTC offset in minutes, signed like `Date.getTimezoneOffset()`:
/// UTC minus local time, so UTC+2 gives `-120` and UTC-5 gives `300`.
pub fn timezone_offset_minutes() -> i32 {
    -Local::now().offset().local_minus_utc() / 60
}

/// Overlay `fixed` on top of `caller`.
///
/// Caller entries whose name matches any fixed header (ignoring ASCII case)
/// are dropped. Remaining caller entries keep their order and come first.
pub fn merge(caller: &[(String, String)], fixed: &[(&str, String)]) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = caller
        .iter()
        .filter(|(name, _)| !fixed.iter().any(|(f, _)| f.eq_ignore_ascii_case(name)))
        .cloned()
        .collect();
    merged.extend(fixed.iter().map(|(name, value)| (name.to_string(), value.clone())));
    merged
}

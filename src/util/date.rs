//! Short human-readable timestamps for cards and chat bubbles.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Format a provider timestamp as `"Mar 7, 3:05 PM"`.
///
/// Accepts RFC 3339 and offset-less `YYYY-MM-DDTHH:MM:SS` (read as UTC), and
/// keeps the timestamp's own offset. Anything else is returned unchanged.
pub fn shorten_time_and_date(raw: &str) -> String {
    let Some(at) = parse_timestamp(raw.trim()) else {
        return raw.to_owned();
    };
    let short = format_description!("[month repr:short] [day padding:none], [hour repr:12 padding:none]:[minute] [period]");
    match at.format(short) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::warn!("could not format timestamp {raw:?}: {err}");
            raw.to_owned()
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    match PrimitiveDateTime::parse(raw, naive) {
        Ok(at) => Some(at.assume_utc()),
        Err(_) => None,
    }
}

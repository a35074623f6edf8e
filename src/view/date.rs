use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

pub const NOT_AVAILABLE: &str = "N/A";

const DISPLAY: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:long] [day padding:none], [year], [hour repr:12 padding:none]:[minute]:[second] [period]"
);

// What the backend emits for naive UTC datetimes.
const NAIVE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

fn parse(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, NAIVE) {
        return Some(dt);
    }
    Date::parse(raw, DATE_ONLY)
        .ok()
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

/// Long-form display of an ISO-8601 timestamp, e.g.
/// `March 5, 2024, 2:07:09 PM`.
///
/// Missing input yields `N/A`; input that does not parse is shown as given.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };
    parse(raw)
        .and_then(|dt| dt.format(DISPLAY).ok())
        .unwrap_or_else(|| raw.to_string())
}

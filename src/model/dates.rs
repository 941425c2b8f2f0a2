//! pt-BR date rendering for creation timestamps.

use chrono::{DateTime, Datelike, NaiveDate};

use super::MISSING_LABEL;

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Render a backend timestamp as `"01 de ago, 2025"`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates. Timestamps keep the
/// calendar date they carry (no timezone shift). Anything else that isn't blank
/// is shown verbatim.
pub fn format_created_at(raw: Option<&str>) -> String {
    let Some(raw) = super::non_blank(raw) else {
        return MISSING_LABEL.to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => format_pt_br(date),
        Err(_) => raw.to_string(),
    }
}

fn format_pt_br(date: NaiveDate) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{:02} de {}, {}", date.day(), month, date.year())
}

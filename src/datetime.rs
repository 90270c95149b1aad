//! Date and time formatting for booking pages.
//!
//! Values arrive either as JS `Date` objects or as strings. Strings in the
//! plain local stamp shape the server templates emit are parsed here; other
//! shapes are handed to the runtime's own date parser. All output uses local
//! time fields as the runtime reports them.

use once_cell::sync::Lazy;
use regex::Regex;

// Local "YYYY-MM-DD HH:MM" or "YYYY-MM-DDTHH:MM" stamps, optional seconds
static LOCAL_STAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})[T ](\d{2}):(\d{2})(?::\d{2}(?:\.\d+)?)?$").unwrap()
});

/// Output shape selector for the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    Date,
    Time,
    #[default]
    DateTime,
}

impl DateStyle {
    /// Map a selector string to a style.
    ///
    /// Unrecognized selectors fall back to the combined date-and-time form.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "date" => DateStyle::Date,
            "time" => DateStyle::Time,
            _ => DateStyle::DateTime,
        }
    }
}

/// Local calendar and wall-clock fields of a single moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Parse a plain local timestamp string into its fields.
pub fn parse_date_parts(input: &str) -> Option<DateParts> {
    let captures = LOCAL_STAMP_REGEX.captures(input.trim())?;
    Some(DateParts {
        year: captures[1].parse().ok()?,
        month: captures[2].parse().ok()?,
        day: captures[3].parse().ok()?,
        hour: captures[4].parse().ok()?,
        minute: captures[5].parse().ok()?,
    })
}

/// Render fields in the requested style, zero padded.
pub fn compose(parts: DateParts, style: DateStyle) -> String {
    match style {
        DateStyle::Date => format!("{:04}-{:02}-{:02}", parts.year, parts.month, parts.day),
        DateStyle::Time => format!("{:02}:{:02}", parts.hour, parts.minute),
        DateStyle::DateTime => format!(
            "{:04}-{:02}-{:02} {:02}:{:02}",
            parts.year, parts.month, parts.day, parts.hour, parts.minute
        ),
    }
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::{compose, parse_date_parts, DateParts, DateStyle};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    fn parts_of(date: &js_sys::Date) -> DateParts {
        DateParts {
            year: date.get_full_year() as u32,
            month: date.get_month() as u32 + 1,
            day: date.get_date() as u32,
            hour: date.get_hours() as u32,
            minute: date.get_minutes() as u32,
        }
    }

    /// Format a date value (a JS `Date` object or a string parseable as one).
    pub fn format_date_time(value: &JsValue, style: DateStyle) -> String {
        if let Some(text) = value.as_string() {
            if let Some(parts) = parse_date_parts(&text) {
                return compose(parts, style);
            }
            let parsed = js_sys::Date::new(&JsValue::from_str(&text));
            return compose(parts_of(&parsed), style);
        }
        match value.dyn_ref::<js_sys::Date>() {
            Some(date) => compose(parts_of(date), style),
            None => compose(parts_of(&js_sys::Date::new(value)), style),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use js::format_date_time;

#[cfg(test)]
mod tests {
    use super::*;

    fn march_fifth() -> DateParts {
        DateParts {
            year: 2024,
            month: 3,
            day: 5,
            hour: 9,
            minute: 7,
        }
    }

    #[test]
    fn composes_date_only() {
        assert_eq!(compose(march_fifth(), DateStyle::Date), "2024-03-05");
    }

    #[test]
    fn composes_time_only() {
        assert_eq!(compose(march_fifth(), DateStyle::Time), "09:07");
    }

    #[test]
    fn composes_date_and_time() {
        assert_eq!(compose(march_fifth(), DateStyle::DateTime), "2024-03-05 09:07");
    }

    #[test]
    fn unknown_selectors_fall_back_to_datetime() {
        assert_eq!(DateStyle::from_selector("date"), DateStyle::Date);
        assert_eq!(DateStyle::from_selector("time"), DateStyle::Time);
        assert_eq!(DateStyle::from_selector("datetime"), DateStyle::DateTime);
        assert_eq!(DateStyle::from_selector("full"), DateStyle::DateTime);
        assert_eq!(DateStyle::from_selector(""), DateStyle::DateTime);
    }

    #[test]
    fn parses_local_stamps() {
        let expected = march_fifth();
        assert_eq!(parse_date_parts("2024-03-05T09:07"), Some(expected));
        assert_eq!(parse_date_parts("2024-03-05 09:07"), Some(expected));
        assert_eq!(parse_date_parts("2024-03-05 09:07:31"), Some(expected));
        assert_eq!(parse_date_parts("  2024-03-05T09:07:31.250  "), Some(expected));
    }

    #[test]
    fn leaves_other_shapes_to_the_runtime() {
        assert_eq!(parse_date_parts("March 5, 2024"), None);
        assert_eq!(parse_date_parts("2024-3-5 9:07"), None);
        assert_eq!(parse_date_parts("2024-03-05"), None);
        assert_eq!(parse_date_parts(""), None);
    }
}

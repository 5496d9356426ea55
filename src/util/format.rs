//! Small display-formatting helpers shared by tables and forms.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Calendar-date portion of an ISO-8601 string.
///
/// Backend dates arrive either as bare dates or full timestamps; tables only
/// show the date part.
pub fn date_part(value: &str) -> &str {
    match value.find('T') {
        Some(index) => &value[..index],
        None => value,
    }
}

/// Strip the wire `ROLE_` prefix for display.
pub fn role_display(role: &str) -> &str {
    role.strip_prefix("ROLE_").unwrap_or(role)
}

/// Today's date as `YYYY-MM-DD` for date-input `min` attributes.
///
/// Empty outside the browser; the inputs then simply have no lower bound.
pub fn today_iso_date() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        date_part(&iso).to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

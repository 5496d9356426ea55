use super::*;

// =============================================================
// date_part
// =============================================================

#[test]
fn date_part_strips_time_component() {
    assert_eq!(date_part("2026-08-07T09:30:00Z"), "2026-08-07");
}

#[test]
fn date_part_keeps_bare_dates() {
    assert_eq!(date_part("2026-08-07"), "2026-08-07");
}

#[test]
fn date_part_of_empty_string_is_empty() {
    assert_eq!(date_part(""), "");
}

// =============================================================
// role_display
// =============================================================

#[test]
fn role_display_strips_wire_prefix() {
    assert_eq!(role_display("ROLE_ADMIN"), "ADMIN");
    assert_eq!(role_display("ROLE_USER"), "USER");
}

#[test]
fn role_display_passes_through_unprefixed_labels() {
    assert_eq!(role_display("MANAGER"), "MANAGER");
}

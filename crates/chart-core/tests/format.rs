// File: crates/chart-core/tests/format.rs
// Purpose: Pin the tooltip/tick label format the page shows to users.

use chart_core::format_kes;

#[test]
fn millions_group_with_commas() {
    assert_eq!(format_kes(1_234_567.0), "KES 1,234,567");
}

#[test]
fn tooltip_line_matches_page_format() {
    // Exactly what the tooltip callback produces for a "Sales" point.
    let line = format!("{}: {}", "Sales", format_kes(61_800.0));
    assert_eq!(line, "Sales: KES 61,800");
}

#[test]
fn boundary_grouping() {
    assert_eq!(format_kes(999.0), "KES 999");
    assert_eq!(format_kes(1_000.0), "KES 1,000");
    assert_eq!(format_kes(10_000_000.0), "KES 10,000,000");
}

#[test]
fn cents_render_with_two_decimals() {
    assert_eq!(format_kes(30_125.75), "KES 30,125.75");
}

// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pnltrack::format::{compact_decimal, format_display, indian_comma, indian_comma_decimal};
use rust_decimal::Decimal;

#[test]
fn indian_comma_groups_pairs_after_last_three() {
    assert_eq!(indian_comma(1234567), "12,34,567");
    assert_eq!(indian_comma(123456), "1,23,456");
    assert_eq!(indian_comma(1000), "1,000");
    assert_eq!(indian_comma(10_00_000), "10,00,000");
    assert_eq!(indian_comma(1_00_00_000), "1,00,00,000");
}

#[test]
fn indian_comma_short_values_unchanged() {
    assert_eq!(indian_comma(-500), "-500");
    assert_eq!(indian_comma(0), "0");
    assert_eq!(indian_comma(999), "999");
}

#[test]
fn indian_comma_preserves_sign() {
    assert_eq!(indian_comma(-1234567), "-12,34,567");
    assert_eq!(indian_comma(-1000), "-1,000");
}

#[test]
fn format_display_crore_example() {
    assert_eq!(format_display(1234567), "0.12 Cr");
    assert_eq!(format_display(2_50_00_000), "2.50 Cr");
    assert_eq!(format_display(-1234567), "-0.12 Cr");
}

#[test]
fn format_display_lakh_and_thousand() {
    assert_eq!(format_display(2_50_000), "2.50 L");
    assert_eq!(format_display(1500), "1.50 K");
    assert_eq!(format_display(-1500), "-1.50 K");
}

#[test]
fn format_display_small_values_use_comma_form() {
    assert_eq!(format_display(999), "999");
    assert_eq!(format_display(-500), "-500");
    assert_eq!(format_display(0), "0");
}

#[test]
fn decimal_helpers_round_to_whole_units() {
    assert_eq!(indian_comma_decimal("2500.4".parse::<Decimal>().unwrap()), "2,500");
    assert_eq!(indian_comma_decimal("-2500.6".parse::<Decimal>().unwrap()), "-2,501");
    assert_eq!(compact_decimal(Decimal::from(1234567)), "0.12 Cr");
}

// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Indian digit grouping: the last three digits stand alone, everything
/// to their left is grouped in pairs. 1234567 -> "12,34,567".
pub fn indian_comma(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    if digits.len() <= 3 {
        return n.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    out.push_str(&groups.join(","));
    out.push(',');
    out.push_str(tail);
    out
}

/// Compact metric form with crore/lakh/thousand suffixes.
/// 1234567 -> "0.12 Cr"; values under a thousand fall back to plain
/// comma grouping.
pub fn format_display(n: i64) -> String {
    let abs = n.unsigned_abs();
    if abs >= 10_00_000 {
        format!("{:.2} Cr", n as f64 / 1_00_00_000.0)
    } else if abs >= 1_00_000 {
        format!("{:.2} L", n as f64 / 1_00_000.0)
    } else if abs >= 1_000 {
        format!("{:.2} K", n as f64 / 1_000.0)
    } else {
        indian_comma(n)
    }
}

/// Indian comma form of a decimal rounded to the nearest whole unit.
pub fn indian_comma_decimal(d: Decimal) -> String {
    match d.round().to_i64() {
        Some(n) => indian_comma(n),
        None => d.round().to_string(),
    }
}

/// Compact form of a decimal rounded to the nearest whole unit.
pub fn compact_decimal(d: Decimal) -> String {
    match d.round().to_i64() {
        Some(n) => format_display(n),
        None => d.round().to_string(),
    }
}

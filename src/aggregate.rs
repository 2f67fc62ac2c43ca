// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a loaded entry snapshot. No I/O, no caching:
//! every report recomputes from the slice it is given.

use crate::error::AggregateError;
use crate::models::{
    Classification, CumulativePoint, Entry, MonthlyPivot, PivotRow, YearlySummary,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sum of all P/L values.
pub fn net_total(entries: &[Entry]) -> Decimal {
    entries.iter().map(|e| e.pl).sum()
}

/// Per-year totals in ascending year order, classified by sign.
pub fn yearly_totals(entries: &[Entry]) -> Vec<YearlySummary> {
    let mut by_year: BTreeMap<i32, Decimal> = BTreeMap::new();
    for e in entries {
        *by_year.entry(e.year).or_insert(Decimal::ZERO) += e.pl;
    }
    by_year
        .into_iter()
        .map(|(year, total_pl)| YearlySummary {
            year,
            total_pl,
            classification: Classification::of(total_pl),
        })
        .collect()
}

/// Year with the highest total. Ties go to the earliest year.
pub fn best_year(entries: &[Entry]) -> Result<YearlySummary, AggregateError> {
    extreme_year(entries, |candidate, current| candidate > current)
}

/// Year with the lowest total. Ties go to the earliest year.
pub fn worst_year(entries: &[Entry]) -> Result<YearlySummary, AggregateError> {
    extreme_year(entries, |candidate, current| candidate < current)
}

fn extreme_year(
    entries: &[Entry],
    replace: impl Fn(Decimal, Decimal) -> bool,
) -> Result<YearlySummary, AggregateError> {
    let mut pick: Option<YearlySummary> = None;
    for summary in yearly_totals(entries) {
        match &pick {
            Some(current) if !replace(summary.total_pl, current.total_pl) => {}
            _ => pick = Some(summary),
        }
    }
    pick.ok_or(AggregateError::EmptyInput)
}

/// Year-by-month grid with columns in calendar order, regardless of the
/// order entries were recorded in. Periods with several daily entries
/// collapse into one summed cell.
pub fn monthly_pivot(entries: &[Entry]) -> MonthlyPivot {
    let mut by_year: BTreeMap<i32, [Option<Decimal>; 12]> = BTreeMap::new();
    for e in entries {
        let cells = by_year.entry(e.year).or_insert([None; 12]);
        let cell = &mut cells[e.month as usize];
        *cell = Some(cell.unwrap_or(Decimal::ZERO) + e.pl);
    }
    MonthlyPivot {
        rows: by_year
            .into_iter()
            .map(|(year, cells)| PivotRow { year, cells })
            .collect(),
    }
}

/// Running total in chronological order: (year, month, day) with an
/// absent day treated as the 1st. The curve's shape depends on this
/// sort, not on insertion order.
pub fn cumulative_series(entries: &[Entry]) -> Vec<CumulativePoint> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.sort_key());
    let mut running = Decimal::ZERO;
    sorted
        .into_iter()
        .map(|e| {
            running += e.pl;
            CumulativePoint {
                year: e.year,
                month: e.month,
                day: e.day,
                pl: e.pl,
                cumulative: running,
            }
        })
        .collect()
}

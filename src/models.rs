// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ParseMonthError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Calendar month, in the fixed Jan..Dec order used by every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Calendar index, 1..=12.
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Whether `day` exists in this month of `year` (leap years included).
    pub fn valid_day(self, year: i32, day: u32) -> bool {
        chrono::NaiveDate::from_ymd_opt(year, self.index(), day).is_some()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let m = match s.trim().to_ascii_lowercase().as_str() {
            "jan" | "january" => Month::Jan,
            "feb" | "february" => Month::Feb,
            "mar" | "march" => Month::Mar,
            "apr" | "april" => Month::Apr,
            "may" => Month::May,
            "jun" | "june" => Month::Jun,
            "jul" | "july" => Month::Jul,
            "aug" | "august" => Month::Aug,
            "sep" | "september" => Month::Sep,
            "oct" | "october" => Month::Oct,
            "nov" | "november" => Month::Nov,
            "dec" | "december" => Month::Dec,
            _ => return Err(ParseMonthError(s.trim().to_string())),
        };
        Ok(m)
    }
}

/// One journal row. `day` is None for monthly-granularity data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub year: i32,
    pub month: Month,
    pub day: Option<u32>,
    pub pl: Decimal,
}

impl Entry {
    pub fn new(year: i32, month: Month, day: Option<u32>, pl: Decimal) -> Self {
        Entry {
            year,
            month,
            day,
            pl,
        }
    }

    /// Merge key. A monthly entry (`day: None`) never merges with a daily one.
    pub fn key(&self) -> (i32, Month, Option<u32>) {
        (self.year, self.month, self.day)
    }

    /// Chronological order; an absent day sorts as the 1st of the month.
    pub fn sort_key(&self) -> (i32, u32, u32) {
        (self.year, self.month.index(), self.day.unwrap_or(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Profit,
    Loss,
}

impl Classification {
    /// Strictly positive is Profit; zero counts as Loss.
    pub fn of(total: Decimal) -> Self {
        if total > Decimal::ZERO {
            Classification::Profit
        } else {
            Classification::Loss
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Classification::Profit => "Profit",
            Classification::Loss => "Loss",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlySummary {
    pub year: i32,
    pub total_pl: Decimal,
    pub classification: Classification,
}

#[derive(Debug, Clone, Serialize)]
pub struct PivotRow {
    pub year: i32,
    /// One cell per calendar month; None means no entry for that period.
    pub cells: [Option<Decimal>; 12],
}

/// Year-by-month grid, rows ascending by year, columns fixed Jan..Dec.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyPivot {
    pub rows: Vec<PivotRow>,
}

impl MonthlyPivot {
    pub fn get(&self, year: i32, month: Month) -> Option<Decimal> {
        self.rows
            .iter()
            .find(|r| r.year == year)
            .and_then(|r| r.cells[month as usize])
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One step of the equity curve: the entry plus the running total so far.
#[derive(Debug, Clone, Serialize)]
pub struct CumulativePoint {
    pub year: i32,
    pub month: Month,
    pub day: Option<u32>,
    pub pl: Decimal,
    pub cumulative: Decimal,
}

// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate;
use crate::error::AggregateError;
use crate::format::{compact_decimal, indian_comma_decimal};
use crate::models::Month;
use crate::store::EntryStore;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

pub fn handle(store: &dyn EntryStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("yearly", sub)) => yearly(store, sub)?,
        Some(("pivot", sub)) => pivot(store, sub)?,
        Some(("curve", sub)) => curve(store, sub)?,
        Some(("table", sub)) => table(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store.load()?;

    let (best, worst) = match (
        aggregate::best_year(&entries),
        aggregate::worst_year(&entries),
    ) {
        (Ok(b), Ok(w)) => (b, w),
        (Err(AggregateError::EmptyInput), _) | (_, Err(AggregateError::EmptyInput)) => {
            println!("No entries recorded yet.");
            return Ok(());
        }
    };
    let net = aggregate::net_total(&entries);

    if json_flag || jsonl_flag {
        let payload = json!({
            "net_pl": net,
            "best_year": best,
            "worst_year": worst,
        });
        maybe_print_json(json_flag, jsonl_flag, &payload)?;
        return Ok(());
    }
    let rows = vec![
        vec![
            "Net P/L".to_string(),
            indian_comma_decimal(net),
            compact_decimal(net),
        ],
        vec![
            format!("Best Year ({})", best.year),
            indian_comma_decimal(best.total_pl),
            compact_decimal(best.total_pl),
        ],
        vec![
            format!("Worst Year ({})", worst.year),
            indian_comma_decimal(worst.total_pl),
            compact_decimal(worst.total_pl),
        ],
    ];
    println!("{}", pretty_table(&["Metric", "Amount", "Compact"], rows));
    Ok(())
}

fn yearly(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store.load()?;
    let summaries = aggregate::yearly_totals(&entries);
    if !maybe_print_json(json_flag, jsonl_flag, &summaries)? {
        let rows = summaries
            .iter()
            .map(|s| {
                vec![
                    s.year.to_string(),
                    s.total_pl.to_string(),
                    s.classification.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Year", "P/L", "Type"], rows));
    }
    Ok(())
}

fn pivot(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store.load()?;
    let pivot = aggregate::monthly_pivot(&entries);
    if maybe_print_json(json_flag, jsonl_flag, &pivot)? {
        return Ok(());
    }
    let mut headers = vec!["Year"];
    headers.extend(Month::ALL.iter().map(|m| m.name()));
    let rows = pivot
        .rows
        .iter()
        .map(|r| {
            let mut row = vec![r.year.to_string()];
            row.extend(
                r.cells
                    .iter()
                    .map(|c| c.map(|d| d.to_string()).unwrap_or_default()),
            );
            row
        })
        .collect();
    println!("{}", pretty_table(&headers, rows));
    Ok(())
}

fn curve(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store.load()?;
    let series = aggregate::cumulative_series(&entries);
    if !maybe_print_json(json_flag, jsonl_flag, &series)? {
        let rows = series
            .iter()
            .map(|p| {
                vec![
                    p.year.to_string(),
                    p.month.to_string(),
                    p.day.map(|d| d.to_string()).unwrap_or_default(),
                    p.pl.to_string(),
                    p.cumulative.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Year", "Month", "Day", "P/L", "Cumulative"], rows)
        );
    }
    Ok(())
}

// Presentation-only view: amounts are display strings, not numbers.
fn table(store: &dyn EntryStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let entries = store.load()?;
    let rows: Vec<Vec<String>> = aggregate::cumulative_series(&entries)
        .iter()
        .map(|p| {
            vec![
                p.year.to_string(),
                p.month.to_string(),
                p.day.map(|d| d.to_string()).unwrap_or_default(),
                indian_comma_decimal(p.pl),
                indian_comma_decimal(p.cumulative),
            ]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!(
            "{}",
            pretty_table(&["Year", "Month", "Day", "P/L", "Cumulative"], rows)
        );
    }
    Ok(())
}

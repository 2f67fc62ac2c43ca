// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Entry, Month};
use crate::store::EntryStore;
use crate::utils::parse_decimal;
use anyhow::{Context, Result, anyhow};

pub fn handle(store: &dyn EntryStore, m: &clap::ArgMatches) -> Result<()> {
    let year = *m.get_one::<i32>("year").unwrap();
    let month: Month = m
        .get_one::<String>("month")
        .unwrap()
        .parse()
        .map_err(anyhow::Error::from)?;
    let day = m.get_one::<u32>("day").copied();
    if let Some(d) = day {
        if !month.valid_day(year, d) {
            return Err(anyhow!("day {} does not exist in {} {}", d, month, year));
        }
    }
    let pl = parse_decimal(m.get_one::<String>("pl").unwrap())
        .context("Invalid --pl amount")?;

    let entry = Entry::new(year, month, day, pl);
    if let Err(err) = store.upsert(entry.clone()) {
        // The input is echoed back so a failed save can be retried as-is.
        return Err(anyhow::Error::from(err).context(format!(
            "entry not saved (year {}, month {}, P/L {}); re-run add to retry",
            entry.year, entry.month, entry.pl
        )));
    }
    match day {
        Some(d) => println!("Recorded {} {} {} P/L {}", d, month, year, pl),
        None => println!("Recorded {} {} P/L {}", month, year, pl),
    }
    Ok(())
}

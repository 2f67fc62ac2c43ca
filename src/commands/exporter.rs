// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, EntryStore};
use anyhow::Result;
use std::path::Path;

pub fn handle(store: &dyn EntryStore, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();
    let entries = store.load()?;

    match fmt.as_str() {
        "csv" => store::write_csv(Path::new(out), &entries)?,
        "json" => {
            std::fs::write(Path::new(out), serde_json::to_string_pretty(&entries)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} entries to {}", entries.len(), out);
    Ok(())
}

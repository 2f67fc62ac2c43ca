// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, EntryStore};
use anyhow::{Result, anyhow};
use std::path::Path;

pub fn handle(store: &dyn EntryStore, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap().trim();
    let path = Path::new(path);
    if !path.exists() {
        return Err(anyhow!("import file {} not found", path.display()));
    }
    // Unlike load(), an import of a missing or unreadable file is an
    // explicit user action and fails loudly above; row-level problems
    // still degrade to warnings.
    let (incoming, skipped) = store::read_csv(path)?;
    let imported = incoming.len();
    store.upsert_all(incoming)?;
    if skipped > 0 {
        println!(
            "Imported {} entries from {} ({} malformed rows skipped)",
            imported,
            path.display(),
            skipped
        );
    } else {
        println!("Imported {} entries from {}", imported, path.display());
    }
    Ok(())
}

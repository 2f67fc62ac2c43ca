// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use pnltrack::store::CsvStore;
use pnltrack::{cli, commands};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let store = match matches.get_one::<String>("file") {
        Some(path) => CsvStore::new(path),
        None => CsvStore::open_default()?,
    };

    match matches.subcommand() {
        Some(("init", _)) => {
            store.init()?;
            println!("Data file initialized at {}", store.path().display());
        }
        Some(("add", sub)) => commands::entries::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

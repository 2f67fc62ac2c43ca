// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Emit pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Emit one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pnltrack")
        .about("Trading P/L journal and dashboard-data CLI")
        .version(clap::crate_version!())
        .arg(
            Arg::new("file")
                .long("file")
                .global(true)
                .value_name("PATH")
                .help("Data file to use instead of the platform default"),
        )
        .subcommand(Command::new("init").about("Create the data file with its header"))
        .subcommand(
            Command::new("add")
                .about("Record a P/L entry; an existing period is merged, not duplicated")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .required(true)
                        .value_parser(value_parser!(i32)),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .required(true)
                        .help("Three-letter or full month name"),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .value_parser(value_parser!(u32))
                        .help("Day of month, for daily-granularity journals"),
                )
                .arg(
                    Arg::new("pl")
                        .long("pl")
                        .required(true)
                        .allow_hyphen_values(true)
                        .help("Profit (positive) or loss (negative) amount"),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the journal")
                .subcommand(json_flags(
                    Command::new("summary").about("Net P/L with best and worst year"),
                ))
                .subcommand(json_flags(
                    Command::new("yearly").about("Per-year totals, classified Profit/Loss"),
                ))
                .subcommand(json_flags(
                    Command::new("pivot").about("Year-by-month grid in calendar order"),
                ))
                .subcommand(json_flags(
                    Command::new("curve").about("Chronological cumulative P/L series"),
                ))
                .subcommand(json_flags(
                    Command::new("table").about("Raw entries with display-formatted amounts"),
                )),
        )
        .subcommand(
            Command::new("import")
                .about("Merge entries from another journal CSV")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Dump the journal as CSV or JSON")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .value_parser(["csv", "json"]),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
}

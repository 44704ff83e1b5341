// Copyright (c) 2025 Soumyadip Sarkar.
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
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("range")
            .long("range")
            .value_parser(["daily", "weekly", "monthly"])
            .help("Only include the day, week or month containing --on"),
    )
    .arg(
        Arg::new("on")
            .long("on")
            .requires("range")
            .help("Anchor date YYYY-MM-DD for --range (default: today)"),
    )
}

fn entry_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("date")
            .long("date")
            .help("Date YYYY-MM-DD (default: today)"),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .required(required)
            .value_parser(["income", "expense"]),
    )
    .arg(Arg::new("category").long("category").required(required))
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(required)
            .allow_hyphen_values(true)
            .help("Positive amount, e.g. 12.50"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .short('d')
            .required(required),
    )
    .arg(
        Arg::new("allow-custom")
            .long("allow-custom")
            .action(ArgAction::SetTrue)
            .help("Accept a category outside the recommended set"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Local-first income and expense tracker")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env("POCKETLEDGER_DATA_DIR")
                .help("Directory holding the ledger data"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .global(true)
                .env("POCKETLEDGER_BACKEND")
                .help("Storage backend: sqlite|file"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .global(true)
                .help("Storage key the collection is kept under"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Fail when editing or removing an unknown id"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(Command::new("init").about("Create the data store"))
        .subcommand(
            Command::new("tx")
                .about("Record, list, edit and remove transactions")
                .subcommand(
                    entry_args(Command::new("add"), true)
                        .arg(Arg::new("id").long("id").help("Explicit id (default: random UUID)")),
                )
                .subcommand(json_flags(range_args(
                    Command::new("list")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("match")
                                .long("match")
                                .help("Regex matched against the description"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )))
                .subcommand(entry_args(
                    Command::new("edit").arg(Arg::new("id").required(true)),
                    false,
                ))
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("report")
                .about("Totals and breakdowns")
                .subcommand(json_flags(range_args(Command::new("summary"))))
                .subcommand(json_flags(range_args(
                    Command::new("by-category").arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("expense")
                            .value_parser(["income", "expense"]),
                    ),
                )))
                .subcommand(json_flags(
                    Command::new("periods")
                        .arg(
                            Arg::new("range")
                                .long("range")
                                .default_value("monthly")
                                .value_parser(["daily", "weekly", "monthly"]),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .default_value("12")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .help("Output path (default: finance-export-<date>.csv)"),
                    ),
            ),
        )
        .subcommand(
            Command::new("import").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("category").subcommand(
                Command::new("list").arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["income", "expense"]),
                ),
            ),
        )
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}

//! revtail - Reverse-Chronological Log Retrieval
//!
//! Command-line front end over the retrieval engine: tail, paginate, and
//! search a log file, printing the most recent line first.

use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use revtail::LogEngine;
use std::path::PathBuf;

fn file_arg() -> Arg {
    Arg::new("file")
        .help("Path to the log file")
        .required(true)
        .index(1)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let matches = Command::new("revtail")
        .version(revtail::VERSION)
        .about("View log files most-recent-first: tail, paginate, search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tail")
                .about("Print the entire file, last line first")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("page")
                .about("Print one fixed-size page counted back from the end")
                .arg(file_arg())
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .help("1-based page number")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("size")
                        .short('s')
                        .long("size")
                        .help("Lines per page")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("25"),
                ),
        )
        .subcommand(
            Command::new("search")
                .about("Case-insensitive substring search, most recent match first")
                .arg(file_arg())
                .arg(
                    Arg::new("token")
                        .help("Substring to search for")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .help("Return at most this many matches")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    let engine = LogEngine::new();

    let lines = match matches.subcommand() {
        Some(("tail", sub)) => engine.retrieve_tail(&file_path(sub)).await?,
        Some(("page", sub)) => {
            let page = *sub.get_one::<u64>("page").unwrap_or(&1);
            let size = *sub.get_one::<u64>("size").unwrap_or(&25);
            engine.retrieve_page(&file_path(sub), page, size).await?
        }
        Some(("search", sub)) => {
            let token = sub
                .get_one::<String>("token")
                .map(String::as_str)
                .unwrap_or_default();
            let limit = sub.get_one::<u64>("limit").copied();
            engine.search_file(&file_path(sub), token, limit).await?
        }
        _ => unreachable!("subcommand is required"),
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}

fn file_path(matches: &ArgMatches) -> PathBuf {
    PathBuf::from(
        matches
            .get_one::<String>("file")
            .map(String::as_str)
            .unwrap_or_default(),
    )
}

// src/cli.rs
use clap::{command, value_parser, Arg};
use std::path::PathBuf;

/// Flags override the matching config values only when given on the command
/// line; defaults live in `Config::default()`.
#[derive(Debug)]
pub struct CliArgs {
    pub limit_per_query: Option<usize>,
    pub pause_seconds: Option<f64>,
    pub output: Option<PathBuf>,
}

pub fn get_args() -> CliArgs {
    let matches = command!()
        .about("Scrape Danish emergency-service businesses and export them to xlsx")
        .arg(
            Arg::new("limit_per_query")
                .long("limit-per-query")
                .value_name("N")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .help("Maximum search results taken per query [default: 5]"),
        )
        .arg(
            Arg::new("pause")
                .long("pause")
                .value_name("SECONDS")
                .num_args(1)
                .value_parser(value_parser!(f64))
                .help("Courtesy pause after each remote call [default: 0.6]"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("PATH")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Destination xlsx path [default: output/akut_virksomheder.xlsx]"),
        )
        .get_matches();

    CliArgs {
        limit_per_query: matches.get_one::<usize>("limit_per_query").copied(),
        pause_seconds: matches.get_one::<f64>("pause").copied(),
        output: matches.get_one::<PathBuf>("output").cloned(),
    }
}

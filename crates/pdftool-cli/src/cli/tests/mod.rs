//! CLI tests, split by concern.

use super::{normalize_args, Cli};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> Cli {
    let args = normalize_args(args.iter().map(std::ffi::OsString::from));
    Cli::try_parse_from(args).unwrap()
}

mod config;

use std::process::ExitCode;

use clap::{Arg, Command};
use colored::Colorize;
use env_logger::Env;

pub mod parse_and_run;

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default());

    let command = Command::new("restic-anchor")
        .version(libanchor::constants::ANCHOR_VERSION)
        .about("⚓ Find out why a restic backup grew: every file added or modified between two snapshots, sized and sorted")
        .arg(
            Arg::new("SNAPSHOT_ID_1")
                .help("ID of the older snapshot, as shown by `restic snapshots`")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("SNAPSHOT_ID_2")
                .help("ID of the newer snapshot. Give both IDs or neither, with neither the two most recent snapshots are compared")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("human-readable")
                .long("human-readable")
                .help("Print sizes like 1.500 KiB instead of raw byte counts")
                .action(clap::ArgAction::SetTrue),
        );

    // Parse the command line args and run the report
    let matches = command.get_matches();
    match parse_and_run::report(&matches) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("Error: {err}").red());
            ExitCode::FAILURE
        }
    }
}

use clap::ArgMatches;
use colored::Colorize;

use libanchor::command;
use libanchor::error::AnchorError;
use libanchor::opts::ReportOpts;

/// Collect the command line into [`ReportOpts`], run the pipeline, and print
/// the report to stdout.
pub fn report(args: &ArgMatches) -> Result<(), AnchorError> {
    let opts = ReportOpts {
        snapshot_id_1: args.get_one::<String>("SNAPSHOT_ID_1").cloned(),
        snapshot_id_2: args.get_one::<String>("SNAPSHOT_ID_2").cloned(),
        human_readable: args.get_flag("human-readable"),
    };
    log::debug!("running report with {opts:?}");

    let report = command::report(&opts)?;

    println!("{}", report.to_table_string(opts.human_readable));
    println!(
        "Total: {}",
        report.total_display(opts.human_readable).bold()
    );
    Ok(())
}

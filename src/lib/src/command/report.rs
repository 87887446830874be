//! Produce the full report of what grew the backup
//!

use indicatif::ProgressBar;

use crate::core;
use crate::error::AnchorError;
use crate::model::Report;
use crate::opts::ReportOpts;
use crate::restic;
use crate::util::progress_bar::anchor_progress_bar;

/// Run the whole pipeline: settle on a snapshot window, diff it, size every
/// added or modified path in the newer snapshot, and fold the result into a
/// sorted report.
///
/// Nothing is spawned until the invocation and the environment both check
/// out.
pub fn report(opts: &ReportOpts) -> Result<Report, AnchorError> {
    let window = core::resolve::explicit_window(
        opts.snapshot_id_1.as_deref(),
        opts.snapshot_id_2.as_deref(),
    )?;
    restic::env::check()?;

    let bar = anchor_progress_bar(total_steps(window.is_some()));
    let report = run_stages(&bar, window);
    bar.finish_and_clear();
    report
}

/// Two extra steps when the window has to be resolved from the snapshot
/// list first.
fn total_steps(explicit_window: bool) -> u64 {
    if explicit_window {
        7
    } else {
        9
    }
}

fn run_stages(
    bar: &ProgressBar,
    window: Option<(String, String)>,
) -> Result<Report, AnchorError> {
    let (from, to) = match window {
        Some(window) => window,
        None => {
            bar.set_message("Getting the list of snapshots...");
            let payload = restic::snapshots::query()?;
            bar.inc(1);

            bar.set_message("Loading snapshots list JSON...");
            let snapshots = restic::snapshots::parse_snapshot_list(&payload)?;
            let (from, to) = core::resolve::latest_window(&snapshots)?;
            log::debug!("comparing snapshot {from} to snapshot {to}");
            bar.inc(1);

            (from.id.clone(), to.id.clone())
        }
    };

    bar.set_message("Getting the difference between the snapshots...");
    let diff_stream = restic::diff::query(&from, &to)?;
    bar.inc(1);

    bar.set_message("Getting the paths of all new and modified files and folders...");
    let changed_paths = core::changes::extract_changed_paths(&diff_stream)?;
    bar.inc(1);

    bar.set_message("Getting the snapshot's files and folders...");
    let ls_stream = restic::ls::query(&to)?;
    bar.inc(1);

    bar.set_message("Getting the size of each file in the snapshot...");
    let index = core::listing::build_size_index(&ls_stream)?;
    bar.inc(1);

    bar.set_message("Getting the size of each file in the diff...");
    let records = core::correlate::correlate(changed_paths, &index)?;
    bar.inc(1);

    bar.set_message("Sorting the files by size...");
    let report = Report::from_records(records);
    bar.inc(1);

    log::debug!(
        "report covers {} paths, {} bytes total",
        report.len(),
        report.total_byte_count
    );
    Ok(report)
}

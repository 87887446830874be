use indicatif::{ProgressBar, ProgressStyle};

/// Step counter for the report pipeline, drawn to stderr so stdout stays
/// clean for the report itself. The number of steps is fixed up front by
/// how the snapshot window gets resolved.
pub fn anchor_progress_bar(total_steps: u64) -> ProgressBar {
    let bar = ProgressBar::new(total_steps);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} ({pos}/{len}) {msg}")
            .unwrap(),
    );
    bar
}

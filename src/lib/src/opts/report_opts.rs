/// Which snapshots to compare and how to print the result.
///
/// Both IDs must be supplied together. With neither, the two most recent
/// snapshots in the repository are compared.
#[derive(Clone, Debug, Default)]
pub struct ReportOpts {
    pub snapshot_id_1: Option<String>,
    pub snapshot_id_2: Option<String>,
    pub human_readable: bool,
}

use crate::model::FileRecord;
use crate::util;

/// Every added or modified file with its size, smallest first, plus the
/// exact total.
///
/// The total is widened to `u128` so it stays exact even when the sizes sum
/// past `u64`.
#[derive(Debug, Clone)]
pub struct Report {
    pub files: Vec<FileRecord>,
    pub total_byte_count: u128,
}

impl Report {
    /// Sorting is stable, records with equal sizes keep the order restic
    /// reported them in.
    pub fn from_records(mut records: Vec<FileRecord>) -> Report {
        records.sort_by_key(|record| record.byte_count);
        let total_byte_count = records
            .iter()
            .map(|record| u128::from(record.byte_count))
            .sum();
        Report {
            files: records,
            total_byte_count,
        }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn to_table_string(&self, human_readable: bool) -> String {
        let mut table = comfy_table::Table::new();
        table.set_header(vec!["bytes", "file"]);
        if let Some(column) = table.column_mut(0) {
            column.set_cell_alignment(comfy_table::CellAlignment::Right);
        }

        for record in self.files.iter() {
            let byte_count = if human_readable {
                util::bytes::humanize(u128::from(record.byte_count))
            } else {
                record.byte_count.to_string()
            };
            table.add_row(vec![byte_count, record.path.display().to_string()]);
        }
        table.to_string()
    }

    pub fn total_display(&self, human_readable: bool) -> String {
        if human_readable {
            util::bytes::humanize(self.total_byte_count)
        } else {
            format!("{} bytes", self.total_byte_count)
        }
    }
}

//! Tab-separated report of the mined state changes.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::delta::DeltaTable;

pub const HEADER: &str = "Source\tType\tTarget\tSource-modifs\tSource-locs\tGained-modifs\tLost-modifs\tGained-locs\tLost-locs\tMediators";

/// Relation written in the type column of every row.
pub const TYPE_TAG: &str = "controls-state-change-of";

/// Write the header and one row per pair that gained or lost a
/// modification. Location changes are reported only on those rows.
///
/// Rows follow source, then target order; set-valued cells are
/// space-separated in sorted order.
pub fn write_report<W: Write>(table: &DeltaTable, writer: &mut W) -> io::Result<usize> {
    writeln!(writer, "{HEADER}")?;

    let mut rows = 0;
    for (source, target, record) in table.iter().filter(|(_, _, r)| r.has_modification_change()) {
        writeln!(
            writer,
            "{source}\t{TYPE_TAG}\t{target}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            cell(&record.source_modifications),
            cell(&record.source_locations),
            cell(&record.gained_modifications),
            cell(&record.lost_modifications),
            cell(&record.gained_locations),
            cell(&record.lost_locations),
            cell(&record.mediators),
        )?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

fn cell(values: &BTreeSet<String>) -> String {
    values.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &DeltaTable) -> (usize, String) {
        let mut out = Vec::new();
        #[expect(clippy::expect_used, reason = "test: writing to a Vec cannot fail")]
        let rows = write_report(table, &mut out).expect("writing to a Vec cannot fail");
        (rows, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn empty_table_writes_header_only() {
        let (rows, text) = render(&DeltaTable::new());
        assert_eq!(rows, 0);
        assert_eq!(text, format!("{HEADER}\n"));
    }

    #[test]
    fn rows_without_change_are_omitted() {
        let mut table = DeltaTable::new();
        let record = table.record_mut("Uniprot:MP2K1_HUMAN", "Uniprot:MK01_HUMAN");
        record.gained_modifications.insert("phospho@185".to_string());
        record.gained_modifications.insert("phospho@187".to_string());
        record.mediators.insert("ctrl1".to_string());
        record.mediators.insert("conv1".to_string());
        table
            .record_mut("Uniprot:A_HUMAN", "Uniprot:B_HUMAN")
            .source_locations
            .insert("cytosol".to_string());

        let (rows, text) = render(&table);
        assert_eq!(rows, 1);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Uniprot:MP2K1_HUMAN\tcontrols-state-change-of\tUniprot:MK01_HUMAN\t\t\tphospho@185 phospho@187\t\t\t\tconv1 ctrl1"
        );
    }

    #[test]
    fn location_only_change_writes_no_row() {
        let mut table = DeltaTable::new();
        let record = table.record_mut("Uniprot:A_HUMAN", "Uniprot:B_HUMAN");
        record.gained_locations.insert("nucleus".to_string());
        record.lost_locations.insert("cytosol".to_string());
        record.mediators.insert("c".to_string());

        let (rows, text) = render(&table);
        assert_eq!(rows, 0);
        assert_eq!(text, format!("{HEADER}\n"));
    }
}

// This is the consolidation module - it merges the raw cell grids fetched
// from individual monthly spreadsheets into one table the AI can reason over.
// Notice how this module has NO HTTP or Google-specific code: it works with
// plain `Vec<Vec<String>>` grids so it can be tested without any network.

/// Fixed header for the consolidated table. The ninth column is always the
/// name of the spreadsheet a row came from, never a value from the sheet.
pub const TABLE_HEADER: &str =
    "date,transaction_id,product,category,region,quantity,unit_price,total_revenue,source_month";

/// How many cells a source row must have to be kept.
pub const SOURCE_COLUMNS: usize = 8;

/// Per-sheet result of an append, so the caller can log what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendStats {
    pub appended: usize,
    pub dropped: usize,
}

/// The consolidated sales table, accumulated across spreadsheets.
///
/// Values are passed through as raw text - no type coercion or validation
/// happens here. The AI gets exactly what the sheets contained.
#[derive(Debug, Default)]
pub struct SalesTable {
    rows: Vec<Vec<String>>,
}

impl SalesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the data rows of one spreadsheet's cell grid.
    ///
    /// The first row of `values` is the sheet's own header and is always
    /// skipped. Rows with fewer than [`SOURCE_COLUMNS`] cells are dropped;
    /// kept rows carry their first eight cells plus `source_name` as the
    /// ninth column (anything past column H was never fetched).
    pub fn append_sheet(&mut self, values: &[Vec<String>], source_name: &str) -> AppendStats {
        let mut stats = AppendStats {
            appended: 0,
            dropped: 0,
        };

        for row in values.iter().skip(1) {
            if row.len() < SOURCE_COLUMNS {
                stats.dropped += 1;
                continue;
            }

            let mut out: Vec<String> = row[..SOURCE_COLUMNS].to_vec();
            out.push(source_name.to_string());
            self.rows.push(out);
            stats.appended += 1;
        }

        stats
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table as text: the fixed header line first, then one
    /// comma-joined line per row, in insertion order.
    pub fn serialize(&self) -> String {
        let mut out = String::from(TABLE_HEADER);
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.join(","));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    const HEADER_ROW: &[&str] = &[
        "Date", "ID", "Product", "Category", "Region", "Qty", "Price", "Total",
    ];

    #[test]
    fn skips_header_and_tags_source() {
        let mut table = SalesTable::new();
        let stats = table.append_sheet(
            &grid(&[
                HEADER_ROW,
                &["2024-01-02", "T1", "Widget", "Tools", "South", "2", "10", "20"],
            ]),
            "Jan",
        );

        assert_eq!(stats, AppendStats { appended: 1, dropped: 0 });
        assert_eq!(table.row_count(), 1);

        let text = table.serialize();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(TABLE_HEADER));
        assert_eq!(
            lines.next(),
            Some("2024-01-02,T1,Widget,Tools,South,2,10,20,Jan")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn drops_rows_with_fewer_than_eight_cells() {
        let mut table = SalesTable::new();
        let stats = table.append_sheet(
            &grid(&[
                HEADER_ROW,
                &["2024-02-01", "T2", "Gadget", "Tools", "North", "1", "5", "5"],
                &["2024-02-02", "T3", "Gadget", "Tools", "North", "3"],
            ]),
            "Feb",
        );

        assert_eq!(stats, AppendStats { appended: 1, dropped: 1 });
        assert_eq!(table.row_count(), 1);
        assert!(!table.serialize().contains("T3"));
    }

    #[test]
    fn ninth_source_cell_is_replaced_by_sheet_name() {
        let mut table = SalesTable::new();
        table.append_sheet(
            &grid(&[
                HEADER_ROW,
                &["2024-03-01", "T4", "Bolt", "Parts", "East", "7", "2", "14", "march-raw"],
            ]),
            "Mar",
        );

        let text = table.serialize();
        assert!(text.ends_with(",Mar"));
        assert!(!text.contains("march-raw"));
    }

    #[test]
    fn empty_or_header_only_sheets_contribute_nothing() {
        let mut table = SalesTable::new();
        let empty = table.append_sheet(&[], "Jan");
        let header_only = table.append_sheet(&grid(&[HEADER_ROW]), "Feb");

        assert_eq!(empty, AppendStats { appended: 0, dropped: 0 });
        assert_eq!(header_only, AppendStats { appended: 0, dropped: 0 });
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.serialize(), TABLE_HEADER);
    }

    #[test]
    fn accumulates_across_sheets_in_order() {
        let mut table = SalesTable::new();
        table.append_sheet(
            &grid(&[
                HEADER_ROW,
                &["a", "1", "p", "c", "r", "1", "1", "1"],
                &["b", "2", "p", "c", "r", "1", "1", "1"],
            ]),
            "Jan",
        );
        table.append_sheet(
            &grid(&[HEADER_ROW, &["c", "3", "p", "c", "r", "1", "1", "1"]]),
            "Feb",
        );

        let serialized = table.serialize();
        let lines: Vec<&str> = serialized.lines().skip(1).collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(",Jan"));
        assert!(lines[1].ends_with(",Jan"));
        assert!(lines[2].ends_with(",Feb"));
    }
}

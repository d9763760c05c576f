//! Table sources
//!
//! Adapters that turn differently shaped inputs into [`TableData`].
//! None of them fail: malformed input degrades to an empty or partially
//! populated table.

use super::table::{Row, TableData};

/// Separator between cells in the preview format
pub const PREVIEW_SEPARATOR: &str = " | ";

/// A preview line consisting solely of this marks truncated data
pub const TRUNCATION_MARKER: &str = "...";

/// Column metadata as reported by the database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    pub default: Option<String>,
    /// Key kind, e.g. `PRI` or `UNI`
    pub key: Option<String>,
}

/// Table constraint metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    /// e.g. `PRIMARY KEY`, `FOREIGN KEY`, `UNIQUE`
    pub kind: String,
    pub columns: Vec<String>,
    /// Referenced `table(column)` for foreign keys
    pub references: Option<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Build a table from a query result
pub fn from_query_result(columns: &[String], rows: &[Vec<String>]) -> TableData {
    TableData::new(
        columns.to_vec(),
        rows.iter().cloned().map(Row::Cells).collect(),
    )
}

/// Build a `Column | Type | Nullable | Default | Key` table
pub fn from_column_info(columns: &[ColumnInfo]) -> TableData {
    let rows = columns
        .iter()
        .map(|c| {
            Row::Cells(vec![
                c.name.clone(),
                c.data_type.clone(),
                if c.nullable { "YES" } else { "NO" }.to_string(),
                c.default.clone().unwrap_or_else(|| "NULL".to_string()),
                c.key.clone().unwrap_or_default(),
            ])
        })
        .collect();

    TableData::new(
        strings(&["Column", "Type", "Nullable", "Default", "Key"]),
        rows,
    )
}

/// Build a `Name | Type | Columns | References` table
pub fn from_constraints(constraints: &[Constraint]) -> TableData {
    let rows = constraints
        .iter()
        .map(|c| {
            Row::Cells(vec![
                c.name.clone(),
                c.kind.clone(),
                c.columns.join(", "),
                c.references.clone().unwrap_or_default(),
            ])
        })
        .collect();

    TableData::new(strings(&["Name", "Type", "Columns", "References"]), rows)
}

/// Parse the plain-text preview format
///
/// ```text
/// id | name
/// 1 | Alice
/// ...
/// ```
///
/// The first line holds the headers. Blank lines are skipped and a line
/// that is exactly `...` becomes a truncation marker. Cells past the header
/// count are dropped; short rows are padded.
pub fn from_preview(text: &str) -> TableData {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return TableData::empty();
    }

    let headers: Vec<String> = lines[0]
        .split(PREVIEW_SEPARATOR)
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for line in &lines[1..] {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed == TRUNCATION_MARKER {
            rows.push(Row::Truncated);
            continue;
        }

        let cells: Vec<String> = line
            .split(PREVIEW_SEPARATOR)
            .map(|c| c.trim().to_string())
            .collect();

        if cells.len() > headers.len() {
            tracing::debug!(
                headers = headers.len(),
                cells = cells.len(),
                "preview row wider than header, extra cells dropped"
            );
        }

        rows.push(Row::Cells(cells));
    }

    TableData::new(headers, rows)
}

/// Parse CSV text with a header record
///
/// Records that fail to parse are skipped.
pub fn from_csv(text: &str) -> TableData {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(record) => record.iter().map(|h| h.to_string()).collect(),
        Err(e) => {
            tracing::debug!(error = %e, "csv header unreadable");
            return TableData::empty();
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        match record {
            Ok(record) => rows.push(Row::Cells(record.iter().map(|c| c.to_string()).collect())),
            Err(e) => tracing::debug!(error = %e, "skipping unreadable csv record"),
        }
    }

    TableData::new(headers, rows)
}

/// Transpose one row into a `Column | Value` table
///
/// Out-of-range rows and truncation markers give an empty two-column table.
pub fn from_record(table: &TableData, row: usize) -> TableData {
    let cells = table.rows.get(row).map(|r| r.cells()).unwrap_or(&[]);

    let rows = table
        .columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| Row::Cells(vec![column.name.clone(), cell.clone()]))
        .collect();

    TableData::new(strings(&["Column", "Value"]), rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> {
        strings(v)
    }

    #[test]
    fn test_preview_round_trip() {
        let table = from_preview("a | b\n1 | 2\n3 | 4");
        assert_eq!(table.headers(), s(&["a", "b"]));
        assert_eq!(
            table.rows,
            vec![Row::Cells(s(&["1", "2"])), Row::Cells(s(&["3", "4"]))]
        );
    }

    #[test]
    fn test_preview_truncation_marker() {
        let table = from_preview("a | b\n...");
        assert_eq!(table.headers(), s(&["a", "b"]));
        assert_eq!(table.rows, vec![Row::Truncated]);
    }

    #[test]
    fn test_preview_too_short() {
        assert!(from_preview("").is_empty());
        assert!(from_preview("a | b").is_empty());
    }

    #[test]
    fn test_preview_skips_blank_lines_and_drops_extra_cells() {
        let table = from_preview("a | b\n\n1 | 2 | 3\n   \n4");
        assert_eq!(
            table.rows,
            vec![Row::Cells(s(&["1", "2"])), Row::Cells(s(&["4", ""]))]
        );
    }

    #[test]
    fn test_query_result() {
        let table = from_query_result(&s(&["id", "name"]), &[s(&["1", "Alice"])]);
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_column_info() {
        let table = from_column_info(&[ColumnInfo {
            name: "id".to_string(),
            data_type: "integer".to_string(),
            nullable: false,
            default: None,
            key: Some("PRI".to_string()),
        }]);
        assert_eq!(
            table.headers(),
            s(&["Column", "Type", "Nullable", "Default", "Key"])
        );
        assert_eq!(
            table.rows[0].cells(),
            s(&["id", "integer", "NO", "NULL", "PRI"]).as_slice()
        );
    }

    #[test]
    fn test_constraints() {
        let table = from_constraints(&[Constraint {
            name: "orders_customer_fk".to_string(),
            kind: "FOREIGN KEY".to_string(),
            columns: s(&["customer_id", "region"]),
            references: Some("customers(id, region)".to_string()),
        }]);
        assert_eq!(table.rows[0].cells()[2], "customer_id, region");
        assert_eq!(table.rows[0].cells()[3], "customers(id, region)");
    }

    #[test]
    fn test_csv() {
        let table = from_csv("id,name\n1,Alice\n2,\"Smith, Bob\"\n");
        assert_eq!(table.headers(), s(&["id", "name"]));
        assert_eq!(table.rows[1].cells(), s(&["2", "Smith, Bob"]).as_slice());
    }

    #[test]
    fn test_csv_empty() {
        assert!(from_csv("").is_empty());
    }

    #[test]
    fn test_record() {
        let table = from_preview("id | name\n7 | Ada");
        let record = from_record(&table, 0);
        assert_eq!(record.headers(), s(&["Column", "Value"]));
        assert_eq!(
            record.rows,
            vec![Row::Cells(s(&["id", "7"])), Row::Cells(s(&["name", "Ada"]))]
        );
        assert!(from_record(&table, 5).rows.is_empty());
    }
}

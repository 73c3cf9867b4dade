use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Result;

/// Column order of the fixed-layout response.
pub const FIXED_COLUMNS: &[&str] = &[
    "Workstream name",
    "Status",
    "Current Week achievements",
    "Next steps",
];

const STATUS_COLUMN: &str = "Status";

type Record = Map<String, Value>;

/// Shape of the JSON body returned for a submission. A handler decodes
/// exactly one of these.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// `{"columns": [..], "data": [{..}, ..]}`
    #[default]
    Columnar,
    /// `[{..}, ..]` keyed by [`FIXED_COLUMNS`].
    Fixed,
}

#[derive(Debug, Deserialize)]
struct ColumnarBody {
    columns: Vec<String>,
    data: Vec<Record>,
}

impl TableLayout {
    pub fn decode(&self, body: &str) -> Result<Table> {
        match self {
            TableLayout::Columnar => {
                let body: ColumnarBody = serde_json::from_str(body)?;
                Ok(Table::from_records(body.columns, &body.data))
            }
            TableLayout::Fixed => {
                let records: Vec<Record> = serde_json::from_str(body)?;
                let columns = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
                Ok(Table::from_records(columns, &records))
            }
        }
    }
}

/// A decoded report table. Every row holds one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn from_records(columns: Vec<String>, records: &[Record]) -> Table {
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell_text(record.get(column)))
                    .collect()
            })
            .collect();

        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns[..]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.rows.iter().map(|r| &r[..])
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn status_column(&self) -> Option<usize> {
        self.columns.iter().position(|c| c == STATUS_COLUMN)
    }
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Workstream status as written by the report generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Done,
    OnTime,
    AtRisk,
    Late,
    Cancelled,
}

impl StatusLevel {
    pub fn from_cell(cell: &str) -> Option<StatusLevel> {
        match cell.trim().to_lowercase().as_ref() {
            "done" => Some(StatusLevel::Done),
            "on time" => Some(StatusLevel::OnTime),
            "at risk" => Some(StatusLevel::AtRisk),
            "late" => Some(StatusLevel::Late),
            "cancelled" => Some(StatusLevel::Cancelled),
            _ => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StatusLevel::Done => "status-done",
            StatusLevel::OnTime => "status-on-time",
            StatusLevel::AtRisk => "status-at-risk",
            StatusLevel::Late => "status-late",
            StatusLevel::Cancelled => "status-cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn rows(table: &Table) -> Vec<Vec<&str>> {
        table
            .rows()
            .map(|r| r.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn columnar_keeps_column_order() {
        let table = TableLayout::Columnar
            .decode(
                r#"{"columns":["Status","Workstream name"],
                    "data":[{"Workstream name":"Infra","Status":"Done"},
                            {"Status":"Late","Workstream name":"Billing"}]}"#,
            )
            .unwrap();

        assert_eq!(table.columns(), ["Status", "Workstream name"]);
        assert_eq!(rows(&table), [["Done", "Infra"], ["Late", "Billing"]]);
        assert_eq!(table.status_column(), Some(0));
    }

    #[test]
    fn columnar_missing_values_render_empty() {
        let table = TableLayout::Columnar
            .decode(
                r#"{"columns":["Workstream name","Status","Next steps"],
                    "data":[{"Workstream name":"Infra","Next steps":null}]}"#,
            )
            .unwrap();

        assert_eq!(rows(&table), [["Infra", "", ""]]);
    }

    #[test]
    fn non_string_values_render_as_json_text() {
        let table = TableLayout::Columnar
            .decode(r#"{"columns":["Count","Flag"],"data":[{"Count":3,"Flag":true}]}"#)
            .unwrap();

        assert_eq!(rows(&table), [["3", "true"]]);
    }

    #[test]
    fn fixed_layout_uses_fixed_header() {
        let table = TableLayout::Fixed
            .decode(
                r#"[{"Workstream name":"Infra","Status":"On Time",
                     "Current Week achievements":"Cut over DNS",
                     "Next steps":"Retire old hosts","Extra":"ignored"}]"#,
            )
            .unwrap();

        assert_eq!(table.columns(), FIXED_COLUMNS);
        assert_eq!(
            rows(&table),
            [["Infra", "On Time", "Cut over DNS", "Retire old hosts"]]
        );
    }

    #[test]
    fn empty_data_still_has_header() {
        let table = TableLayout::Columnar
            .decode(r#"{"columns":["Workstream name"],"data":[]}"#)
            .unwrap();

        assert_eq!(table.columns(), ["Workstream name"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn layouts_are_not_interchangeable() {
        let columnar = r#"{"columns":["Status"],"data":[{"Status":"Done"}]}"#;
        let fixed = r#"[{"Status":"Done"}]"#;

        assert!(matches!(
            TableLayout::Fixed.decode(columnar),
            Err(ReportError::Parse(_))
        ));
        assert!(matches!(
            TableLayout::Columnar.decode(fixed),
            Err(ReportError::Parse(_))
        ));
        assert!(matches!(
            TableLayout::Columnar.decode("<html>"),
            Err(ReportError::Parse(_))
        ));
    }

    #[test]
    fn status_levels_match_report_colours() {
        assert_eq!(StatusLevel::from_cell("On Time"), Some(StatusLevel::OnTime));
        assert_eq!(StatusLevel::from_cell(" at risk "), Some(StatusLevel::AtRisk));
        assert_eq!(StatusLevel::from_cell("Blocked"), None);
        assert_eq!(StatusLevel::Cancelled.css_class(), "status-cancelled");
    }
}

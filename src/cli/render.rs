use clap::ValueEnum;
use comfy_table::presets::UTF8_FULL;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Cell, RowSource, Table};
use crate::error::Result;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Output {
    Table,
    Json,
}

/// Produce a command's rows and format them
pub fn render<S: RowSource + ?Sized>(source: &S, output: Output) -> Result<String> {
    let table = source.produce_rows()?;
    format_table(&table, output)
}

pub fn format_table(table: &Table, output: Output) -> Result<String> {
    match output {
        Output::Table => Ok(to_text_table(table)),
        Output::Json => Ok(serde_json::to_string_pretty(&JsonRows(table))?),
    }
}

fn to_text_table(table: &Table) -> String {
    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL).set_header(table.columns.clone());

    for row in &table.rows {
        out.add_row(row.iter().map(Cell::to_string).collect::<Vec<_>>());
    }

    out.to_string()
}

/// Rows as a list of objects, keys in column order
struct JsonRows<'a>(&'a Table);

struct JsonRow<'a> {
    columns: &'a [String],
    cells: &'a [Cell],
}

impl Serialize for JsonRows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.rows.len()))?;
        for cells in &self.0.rows {
            seq.serialize_element(&JsonRow {
                columns: &self.0.columns,
                cells,
            })?;
        }
        seq.end()
    }
}

impl Serialize for JsonRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

//! Blank sample table for data entry.
//!
//! The template is a header row of metadata columns and every registry
//! symbol, an optional row describing each column, and one example row.
//! It is written as CSV, or as a workbook when the target ends in `.xlsx`.

use std::io::Write;
use std::path::Path;

use csv::Writer;
use rust_xlsxwriter::Workbook;

use super::input::{InputFormat, METADATA_COLUMNS, METADATA_DESCRIPTIONS};
use crate::errors::Result;
use crate::standards::StandardsRegistry;

const EXAMPLE_SITE: [&str; 7] = [
    "1",
    "Tamil Nadu",
    "Chennai",
    "Sample Site 1",
    "80.2707",
    "13.0827",
    "2024",
];

/// Plausible µg/L readings for the example row
const EXAMPLE_VALUES: &[(&str, f64)] = &[
    ("Hg", 0.5),
    ("Cd", 1.0),
    ("As", 5.0),
    ("Pb", 3.0),
    ("Se", 2.0),
    ("Ni", 5.0),
    ("Cr", 10.0),
    ("Fe", 200.0),
    ("Cu", 50.0),
    ("Zn", 1000.0),
];

const TEMPLATE_UNIT: &str = "µg/L";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateOptions {
    /// Add a row naming each column and its unit below the header
    pub with_info: bool,
}

fn example_value(symbol: &str) -> String {
    EXAMPLE_VALUES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, value)| value.to_string())
        .unwrap_or_default()
}

/// Header, optional description row, and example row
pub fn template_rows(registry: &StandardsRegistry, options: TemplateOptions) -> Vec<Vec<String>> {
    let header = METADATA_COLUMNS
        .iter()
        .map(|column| column.to_string())
        .chain(registry.symbols().map(str::to_string))
        .collect();

    let example = EXAMPLE_SITE
        .iter()
        .map(|cell| cell.to_string())
        .chain(registry.symbols().map(example_value))
        .collect();

    if !options.with_info {
        return vec![header, example];
    }

    let info = METADATA_DESCRIPTIONS
        .iter()
        .map(|description| description.to_string())
        .chain(
            registry
                .entries()
                .map(|entry| format!("{} ({})", entry.name, TEMPLATE_UNIT)),
        )
        .collect();
    vec![header, info, example]
}

pub fn write_template<W: Write>(
    writer: W,
    registry: &StandardsRegistry,
    options: TemplateOptions,
) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    for row in template_rows(registry, options) {
        csv.write_record(&row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Single-sheet workbook; numeric cells are stored as numbers
pub fn write_template_workbook(
    path: &Path,
    registry: &StandardsRegistry,
    options: TemplateOptions,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Samples")?;

    for (row, cells) in template_rows(registry, options).iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            let (row, col) = (row as u32, col as u16);
            match cell.parse::<f64>() {
                Ok(number) => sheet.write_number(row, col, number)?,
                Err(_) if cell.is_empty() => continue,
                Err(_) => sheet.write_string(row, col, cell)?,
            };
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Write a workbook for spreadsheet extensions, CSV otherwise
pub fn write_template_to_path(
    path: &Path,
    registry: &StandardsRegistry,
    options: TemplateOptions,
) -> Result<()> {
    match InputFormat::from_path(path) {
        InputFormat::Spreadsheet => write_template_workbook(path, registry, options)?,
        InputFormat::Csv => {
            let file = std::fs::File::create(path)?;
            write_template(file, registry, options)?;
        }
    }
    log::info!("Template written to {}", path.display());
    Ok(())
}

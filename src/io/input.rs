//! Sample tables in CSV or spreadsheet form.
//!
//! One row per station. The metadata columns describe the site; every other
//! header is a parameter symbol whose cells are concentrations in the
//! table's unit. Spreadsheets are read from their first worksheet.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::errors::{Error, Result};
use crate::indices::Concentrations;
use crate::sample::{StationMetadata, StationSample};
use crate::units::{convert_row, Unit};

pub const METADATA_COLUMNS: [&str; 7] = [
    "S.No",
    "State",
    "District",
    "Location",
    "Longitude",
    "Latitude",
    "Year",
];

/// Descriptions written under the metadata headers by an annotated template
pub const METADATA_DESCRIPTIONS: [&str; 7] = [
    "Sample number",
    "State name",
    "District name",
    "Location/Site name",
    "Longitude coordinate",
    "Latitude coordinate",
    "Year of sampling",
];

/// Extensions read as spreadsheets instead of CSV
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Spreadsheet,
}

impl InputFormat {
    /// Spreadsheet for known workbook extensions, CSV otherwise
    pub fn from_path(path: &Path) -> Self {
        let is_spreadsheet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                SPREADSHEET_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            });
        if is_spreadsheet {
            Self::Spreadsheet
        } else {
            Self::Csv
        }
    }
}

/// True when the header names a site column rather than a parameter
pub fn is_metadata_column(header: &str) -> bool {
    METADATA_COLUMNS
        .iter()
        .any(|column| column.eq_ignore_ascii_case(header))
}

/// Metadata columns absent from `headers`
pub fn validate_columns<'a>(headers: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
    let present: Vec<&str> = headers.into_iter().collect();
    METADATA_COLUMNS
        .iter()
        .copied()
        .filter(|column| !present.iter().any(|h| h.eq_ignore_ascii_case(column)))
        .collect()
}

struct RowLayout {
    metadata: BTreeMap<&'static str, usize>,
    parameters: Vec<(usize, String)>,
    /// Repeated headers, ignored after their first column
    duplicates: Vec<String>,
}

impl RowLayout {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut metadata = BTreeMap::new();
        let mut parameters: Vec<(usize, String)> = Vec::new();
        let mut duplicates = Vec::new();
        for (position, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let repeated = match METADATA_COLUMNS
                .iter()
                .find(|column| column.eq_ignore_ascii_case(header))
            {
                Some(column) if metadata.contains_key(column) => true,
                Some(column) => {
                    metadata.insert(*column, position);
                    false
                }
                None if parameters.iter().any(|(_, symbol)| symbol == header) => true,
                None => {
                    parameters.push((position, header.to_string()));
                    false
                }
            };
            if repeated {
                duplicates.push(header.to_string());
            }
        }
        Self {
            metadata,
            parameters,
            duplicates,
        }
    }

    /// Row of column descriptions from an annotated template
    fn is_description_row(&self, record: &StringRecord) -> bool {
        self.text(record, "S.No")
            .is_some_and(|serial| serial.eq_ignore_ascii_case(METADATA_DESCRIPTIONS[0]))
    }

    fn text(&self, record: &StringRecord, column: &str) -> Option<String> {
        self.metadata
            .get(column)
            .and_then(|&position| record.get(position))
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
    }

    fn number(&self, record: &StringRecord, column: &str) -> Option<f64> {
        let cell = self.text(record, column)?;
        match cell.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring non-numeric {} value '{}'", column, cell);
                None
            }
        }
    }

    fn metadata(&self, record: &StringRecord) -> StationMetadata {
        StationMetadata {
            serial: self.text(record, "S.No"),
            state: self.text(record, "State"),
            district: self.text(record, "District"),
            location: self.text(record, "Location"),
            longitude: self.number(record, "Longitude"),
            latitude: self.number(record, "Latitude"),
            year: self
                .number(record, "Year")
                .filter(|year| year.fract() == 0.0)
                .map(|year| year as i32),
        }
    }

    fn concentrations(&self, record: &StringRecord, row: usize) -> Concentrations {
        self.parameters
            .iter()
            .filter_map(|(position, symbol)| {
                let cell = record.get(*position).filter(|cell| !cell.is_empty())?;
                match cell.parse::<f64>() {
                    Ok(value) => Some((symbol.clone(), value)),
                    Err(_) => {
                        log::warn!("Row {}: skipping non-numeric {} value '{}'", row, symbol, cell);
                        None
                    }
                }
            })
            .collect()
    }
}

fn station_name(metadata: &StationMetadata, row: usize) -> String {
    metadata
        .location
        .clone()
        .or_else(|| metadata.serial.as_ref().map(|serial| format!("Station {}", serial)))
        .unwrap_or_else(|| format!("Row {}", row))
}

/// Read station samples, converting concentrations from `unit` to ppb
pub fn read_samples<R: Read>(reader: R, unit: Unit) -> Result<Vec<StationSample>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let records = reader.into_records().map(|record| record.map_err(Error::from));
    samples_from_records(&headers, records, unit)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

/// Read station samples from the first worksheet of a workbook
pub fn read_spreadsheet(path: &Path, unit: Unit) -> Result<Vec<StationSample>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::input("workbook has no worksheets"))??;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<StringRecord>());
    let headers = rows.next().unwrap_or_default();
    samples_from_records(&headers, rows.map(Ok), unit)
}

fn samples_from_records(
    headers: &StringRecord,
    records: impl Iterator<Item = Result<StringRecord>>,
    unit: Unit,
) -> Result<Vec<StationSample>> {
    if headers.iter().all(str::is_empty) {
        return Err(Error::input("sample table is empty"));
    }
    let missing = validate_columns(headers.iter());
    if !missing.is_empty() {
        log::debug!("Sample table has no {} columns", missing.join(", "));
    }

    let layout = RowLayout::from_headers(headers);
    if !layout.duplicates.is_empty() {
        log::warn!(
            "Repeated columns {} are ignored; the first column with each header is used",
            layout.duplicates.join(", ")
        );
    }
    if layout.parameters.is_empty() {
        log::warn!("Sample table has no parameter columns");
    }

    let mut samples = Vec::new();
    let mut row = 0;
    for record in records {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        if samples.is_empty() && layout.is_description_row(&record) {
            log::debug!("Skipping column description row");
            continue;
        }
        row += 1;
        let metadata = layout.metadata(&record);
        let raw = layout.concentrations(&record, row);
        samples.push(StationSample {
            station: station_name(&metadata, row),
            metadata,
            concentrations: convert_row(&raw, unit, &METADATA_COLUMNS),
        });
    }

    if samples.is_empty() {
        return Err(Error::input("sample table has a header but no rows"));
    }
    log::info!("Read {} station samples ({})", samples.len(), unit);
    Ok(samples)
}

/// Read a CSV file or spreadsheet, chosen by extension
pub fn read_samples_from_path(path: &Path, unit: Unit) -> Result<Vec<StationSample>> {
    let samples = match InputFormat::from_path(path) {
        InputFormat::Csv => {
            let file = File::open(path).map_err(|e| {
                Error::input_with_path(format!("cannot open {}: {}", path.display(), e), path)
            })?;
            read_samples(file, unit)
        }
        InputFormat::Spreadsheet => read_spreadsheet(path, unit),
    };
    samples.map_err(|e| match e {
        Error::Input { message, .. } => Error::input_with_path(message, path),
        Error::Spreadsheet(source) => Error::input_with_path(source.to_string(), path),
        other => other,
    })
}

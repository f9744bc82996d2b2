//! Parser for VCDS measuring-block CSV exports.
//!
//! Layout of an export:
//! - row 0: `Weekday,Day,Month,Year,,<VIN>-VCID-...`
//! - row 1: version info, motor type in column 2
//! - row 3: group headers (`Group A:` marks the start column of a block)
//! - row 4: sensor names, row 5: units
//! - row 7 onward: samples, timestamp in column 1

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::log::model::{SensorSample, SensorSeries};

const DATE_FORMAT: &str = "%A %d %B %Y";
const FIRST_DATA_ROW: usize = 7;

#[derive(Debug, Error)]
pub enum VcdsParseError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing cell at row {row}, column {col}")]
    MissingCell { row: usize, col: usize },

    #[error("invalid log date '{0}'")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorHeader {
    pub name: String,
    pub unit: Option<String>,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedGroup {
    pub name: String,
    pub sensors: Vec<SensorHeader>,
    pub values: SensorSeries,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVcdsLog {
    pub created_at: NaiveDateTime,
    pub vin: String,
    pub motor_type: String,
    pub groups: Vec<ParsedGroup>,
}

/// UTF-8 first, Windows-1252 otherwise (VCDS runs on Windows, and the
/// printable Latin-1 range decodes the same).
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// One entry per physical line. Blank lines stay as empty rows so the fixed
/// header and data row indices hold.
fn read_rows(text: &str) -> Result<Vec<Vec<String>>, VcdsParseError> {
    let mut builder = csv::ReaderBuilder::new();
    builder.flexible(true).has_headers(false);

    let mut rows = Vec::new();
    for line in text.lines() {
        if line.is_empty() {
            rows.push(Vec::new());
            continue;
        }
        let mut reader = builder.from_reader(line.as_bytes());
        let row: Vec<String> = match reader.records().next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => Vec::new(),
        };
        rows.push(row);
    }
    Ok(rows)
}

fn cell(rows: &[Vec<String>], row: usize, col: usize) -> Result<&str, VcdsParseError> {
    rows.get(row)
        .and_then(|r| r.get(col))
        .map(String::as_str)
        .ok_or(VcdsParseError::MissingCell { row, col })
}

pub fn parse_csv(bytes: &[u8]) -> Result<ParsedVcdsLog, VcdsParseError> {
    let text = decode(bytes);
    let rows = read_rows(&text)?;

    let date_parts = (0..4)
        .map(|col| cell(&rows, 0, col).map(str::trim))
        .collect::<Result<Vec<_>, _>>()?;
    let log_date = date_parts.join(" ");
    let created_at = NaiveDate::parse_from_str(&log_date, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| VcdsParseError::InvalidDate(log_date.clone()))?;

    let vin = cell(&rows, 0, 5)?
        .split("-VCID")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    let motor_type = cell(&rows, 1, 2)?.trim().to_string();

    let group_headers = rows.get(3).map(Vec::as_slice).unwrap_or_default();
    let sensor_headers = rows.get(4).map(Vec::as_slice).unwrap_or_default();
    let unit_headers = rows.get(5).map(Vec::as_slice).unwrap_or_default();

    let starts: Vec<(String, usize)> = group_headers
        .iter()
        .enumerate()
        .filter(|(_, header)| header.starts_with("Group"))
        .map(|(idx, header)| (header.trim_matches(':').to_string(), idx))
        .collect();

    let mut groups: Vec<ParsedGroup> = Vec::with_capacity(starts.len());
    for (pos, (name, start)) in starts.iter().enumerate() {
        // a block ends where the next one begins
        let end = starts
            .get(pos + 1)
            .map(|(_, next)| *next)
            .unwrap_or(sensor_headers.len())
            .min(sensor_headers.len());

        let sensors = ((start + 1)..end)
            .filter(|&col| !sensor_headers[col].is_empty())
            .map(|col| SensorHeader {
                name: sensor_headers[col].trim().to_string(),
                unit: unit_headers
                    .get(col)
                    .map(|u| u.trim().to_string())
                    .filter(|u| !u.is_empty()),
                column: col,
            })
            .collect();

        let group = ParsedGroup {
            name: name.clone(),
            sensors,
            values: SensorSeries::new(),
        };

        match groups.iter_mut().find(|g| g.name == *name) {
            Some(existing) => *existing = group,
            None => groups.push(group),
        }
    }

    for row in rows.iter().skip(FIRST_DATA_ROW) {
        let Some(raw_ts) = row.get(1).filter(|v| !v.is_empty()) else {
            continue;
        };
        let Ok(timestamp) = raw_ts.trim().parse::<f64>() else {
            continue;
        };

        for group in groups.iter_mut() {
            for sensor in &group.sensors {
                let Some(raw) = row.get(sensor.column) else {
                    continue;
                };
                let value = raw.trim().parse::<f64>().ok();
                group
                    .values
                    .entry(sensor.name.clone())
                    .or_default()
                    .push(SensorSample { timestamp, value });
            }
        }
    }

    Ok(ParsedVcdsLog {
        created_at,
        vin,
        motor_type,
        groups,
    })
}

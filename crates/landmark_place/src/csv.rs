//! Landmark line CSV parser.
//!
//! The first non-blank record is a header naming the columns. Recognized
//! names are `length`, `bearing`, `xa`, `ya`, `xb`, `yb`, `xc`, `yc` (x is
//! longitude, y is latitude). A header cell overrides the default position
//! of its column; columns the header does not name keep their default
//! position, so a header of unrelated names still reads the standard layout.
//!
//! Records are read with the `csv` crate: quoted fields are accepted, cells
//! are trimmed, and a leading UTF-8 byte-order mark is ignored.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::PlaceError;
use crate::geo::GeoPoint;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// One surveyed landmark line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkLine {
    /// Surveyed length, in model units.
    pub length: f64,
    /// Survey bearing in degrees.
    pub bearing: f64,
    /// Map polyline start (`ya`, `xa`).
    pub start: GeoPoint,
    /// Map polyline end (`yb`, `xb`).
    pub end: GeoPoint,
    /// Anchor position (`yc`, `xc`).
    pub anchor: GeoPoint,
}

/// Column positions for each recognized field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    length: usize,
    bearing: usize,
    xa: usize,
    ya: usize,
    xb: usize,
    yb: usize,
    xc: usize,
    yc: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            length: 0,
            bearing: 1,
            xa: 2,
            ya: 3,
            xb: 4,
            yb: 5,
            xc: 6,
            yc: 7,
        }
    }
}

impl ColumnMap {
    fn from_header(header: &StringRecord) -> Self {
        let mut map = Self::default();
        for (index, name) in header.iter().enumerate() {
            match name.trim_start_matches(BYTE_ORDER_MARK).trim() {
                "length" => map.length = index,
                "bearing" => map.bearing = index,
                "xa" => map.xa = index,
                "ya" => map.ya = index,
                "xb" => map.xb = index,
                "yb" => map.yb = index,
                "xc" => map.xc = index,
                "yc" => map.yc = index,
                _ => {}
            }
        }
        map
    }
}

/// Parse landmark lines from CSV text.
///
/// Returns an empty list for input without a header. Any malformed row
/// fails the whole parse.
pub fn parse_landmark_csv(content: &str) -> Result<Vec<LandmarkLine>, PlaceError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut columns: Option<ColumnMap> = None;
    let mut lines = Vec::new();

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record_line(&record);
        let Some(map) = columns else {
            let map = ColumnMap::from_header(&record);
            debug!(?map, "landmark CSV header");
            columns = Some(map);
            continue;
        };

        let line = parse_row(&record, &map, line_no)?;
        debug!(line = line_no, bearing = line.bearing, length = line.length, "landmark row");
        lines.push(line);
    }

    Ok(lines)
}

/// Read and parse a landmark CSV file.
pub fn load_landmark_csv(path: &Path) -> Result<Vec<LandmarkLine>, PlaceError> {
    let content = std::fs::read_to_string(path)?;
    parse_landmark_csv(&content)
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// 1-based line on which `record` starts.
fn record_line(record: &StringRecord) -> usize {
    record.position().map_or(0, |p| p.line() as usize)
}

fn csv_error(err: csv::Error) -> PlaceError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    PlaceError::Csv {
        line,
        reason: err.to_string(),
    }
}

fn parse_row(
    record: &StringRecord,
    map: &ColumnMap,
    line: usize,
) -> Result<LandmarkLine, PlaceError> {
    let cell = |index: usize, name: &str| -> Result<f64, PlaceError> {
        let text = record.get(index).ok_or_else(|| PlaceError::Csv {
            line,
            reason: format!("missing column `{name}` (index {index})"),
        })?;
        text.parse::<f64>().map_err(|_| PlaceError::Csv {
            line,
            reason: format!("invalid number `{text}` in column `{name}`"),
        })
    };

    Ok(LandmarkLine {
        length: cell(map.length, "length")?,
        bearing: cell(map.bearing, "bearing")?,
        start: GeoPoint::new(cell(map.ya, "ya")?, cell(map.xa, "xa")?),
        end: GeoPoint::new(cell(map.yb, "yb")?, cell(map.xb, "xb")?),
        anchor: GeoPoint::new(cell(map.yc, "yc")?, cell(map.xc, "xc")?),
    })
}

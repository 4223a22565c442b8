//! Reading flight-route CSV files.
//!
//! The default [`RouteColumns`] layout matches the flight-routes export the
//! tool was written for: one row per route with airport codes, names and
//! coordinates for both ends, optionally followed by a precomputed distance.
//! Other layouts can be described by adjusting the column indices.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geo::{haversine_km, Coordinates};
use crate::graph::{EdgeRecord, Graph, GraphBuildOptions, GraphBuilder};

/// Header appended by [`annotate_distances`].
pub const DISTANCE_HEADER: &str = "distance_km";

/// Zero-based column positions within a route CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteColumns {
    /// Whether the first row is a header and should be skipped.
    pub has_headers: bool,
    /// Short code of the source airport (used for direction analysis).
    pub source_code: usize,
    /// Label used as the source node id.
    pub source: usize,
    /// Latitude and longitude columns of the source.
    pub source_coordinates: Option<(usize, usize)>,
    /// Short code of the destination airport.
    pub destination_code: usize,
    /// Label used as the destination node id.
    pub destination: usize,
    /// Latitude and longitude columns of the destination.
    pub destination_coordinates: Option<(usize, usize)>,
    /// Precomputed distance in kilometres.
    pub distance: Option<usize>,
}

impl Default for RouteColumns {
    fn default() -> Self {
        Self {
            has_headers: true,
            source_code: 0,
            source: 4,
            source_coordinates: Some((5, 6)),
            destination_code: 9,
            destination: 13,
            destination_coordinates: Some((14, 15)),
            distance: Some(18),
        }
    }
}

impl RouteColumns {
    /// Three-column `source,destination,distance` layout with a header row.
    pub fn simple() -> Self {
        Self {
            has_headers: true,
            source_code: 0,
            source: 0,
            source_coordinates: None,
            destination_code: 1,
            destination: 1,
            destination_coordinates: None,
            distance: Some(2),
        }
    }

    fn coordinates(&self) -> Option<((usize, usize), (usize, usize))> {
        self.source_coordinates.zip(self.destination_coordinates)
    }
}

/// Read edge records from CSV data.
///
/// The weight is taken from the distance column when it holds a value and is
/// otherwise computed from the coordinate columns. Rows that yield neither, or
/// whose fields cannot be parsed, come back as [`Error::MalformedRecord`] so
/// the caller can decide whether to skip them. Only I/O failures are reported
/// as [`Error::Csv`].
pub fn read_edge_records<R: Read>(
    reader: R,
    columns: &RouteColumns,
) -> impl Iterator<Item = Result<EdgeRecord>> {
    let columns = columns.clone();
    csv_reader(reader, columns.has_headers)
        .into_records()
        .map(move |row| {
            let row = row.map_err(row_error)?;
            parse_edge(&row, &columns)
        })
}

/// Build a graph from CSV data, applying the malformed-record policy of
/// `options` to rows that cannot be parsed.
pub fn build_graph_from_csv<R: Read>(
    reader: R,
    columns: &RouteColumns,
    options: &GraphBuildOptions,
) -> Result<Graph> {
    let mut builder = GraphBuilder::new(*options);
    for record in read_edge_records(reader, columns) {
        match record {
            Ok(record) => builder.insert(record)?,
            Err(error @ Error::MalformedRecord { .. }) => builder.reject(error)?,
            Err(error) => return Err(error),
        }
    }
    Ok(builder.finish())
}

/// Load a route CSV file into a graph.
pub fn load_graph(
    path: &Path,
    columns: &RouteColumns,
    options: &GraphBuildOptions,
) -> Result<Graph> {
    info!(path = %path.display(), mode = ?options.mode, "loading routes");
    let file = fs::File::open(path)?;
    build_graph_from_csv(file, columns, options)
}

/// Copy CSV rows from `reader` to `writer`, appending the great-circle
/// distance between the two endpoints to every data row.
///
/// The header row, when present, gains a [`DISTANCE_HEADER`] column. Returns
/// the number of data rows written. Any row without usable coordinates stops
/// the copy with [`Error::MalformedRecord`].
pub fn annotate_distances<R: Read, W: Write>(
    reader: R,
    writer: W,
    columns: &RouteColumns,
) -> Result<usize> {
    let Some(coordinates) = columns.coordinates() else {
        return Err(Error::MalformedRecord {
            line: None,
            message: "column layout has no coordinate columns to measure".to_string(),
        });
    };

    let mut reader = csv_reader(reader, columns.has_headers);
    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);

    if columns.has_headers {
        let mut header = reader.headers()?.clone();
        header.push_field(DISTANCE_HEADER);
        writer.write_record(&header)?;
    }

    let mut written = 0;
    for row in reader.records() {
        let mut row = row.map_err(row_error)?;
        let line = row_line(&row);
        let from = parse_coordinates(&row, coordinates.0, line)?;
        let to = parse_coordinates(&row, coordinates.1, line)?;
        row.push_field(&haversine_km(from, to).to_string());
        writer.write_record(&row)?;
        written += 1;
    }
    writer.flush()?;

    debug!(rows = written, "annotated routes with distances");
    Ok(written)
}

/// Extract `(source code, destination code)` pairs for direction analysis.
pub fn read_connections<R: Read>(
    reader: R,
    columns: &RouteColumns,
) -> Result<Vec<(String, String)>> {
    let mut reader = csv_reader(reader, columns.has_headers);
    let mut pairs = Vec::new();
    for row in reader.records() {
        let row = row.map_err(row_error)?;
        let line = row_line(&row);
        let from = required_field(&row, columns.source_code, "source code", line)?;
        let to = required_field(&row, columns.destination_code, "destination code", line)?;
        pairs.push((from.to_string(), to.to_string()));
    }
    Ok(pairs)
}

fn csv_reader<R: Read>(reader: R, has_headers: bool) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(Trim::Fields)
        .flexible(true)
        .from_reader(reader)
}

fn parse_edge(row: &StringRecord, columns: &RouteColumns) -> Result<EdgeRecord> {
    let line = row_line(row);
    let source = required_field(row, columns.source, "source", line)?;
    let destination = required_field(row, columns.destination, "destination", line)?;

    let listed = columns
        .distance
        .and_then(|index| row.get(index))
        .filter(|value| !value.is_empty());

    let weight = match (listed, columns.coordinates()) {
        (Some(value), _) => parse_number(value, "distance", line)?,
        (None, Some((from, to))) => haversine_km(
            parse_coordinates(row, from, line)?,
            parse_coordinates(row, to, line)?,
        ),
        (None, None) => {
            return Err(Error::MalformedRecord {
                line,
                message: format!("no distance for {source} -> {destination}"),
            })
        }
    };

    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::MalformedRecord {
            line,
            message: format!(
                "distance {weight} for {source} -> {destination} is not a non-negative finite number"
            ),
        });
    }

    Ok(EdgeRecord::new(source, destination, weight))
}

fn parse_coordinates(
    row: &StringRecord,
    (latitude, longitude): (usize, usize),
    line: Option<u64>,
) -> Result<Coordinates> {
    let latitude = parse_number(
        required_field(row, latitude, "latitude", line)?,
        "latitude",
        line,
    )?;
    let longitude = parse_number(
        required_field(row, longitude, "longitude", line)?,
        "longitude",
        line,
    )?;
    Ok(Coordinates::new(latitude, longitude))
}

fn required_field<'r>(
    row: &'r StringRecord,
    index: usize,
    name: &str,
    line: Option<u64>,
) -> Result<&'r str> {
    match row.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MalformedRecord {
            line,
            message: format!("missing {name} in column {index}"),
        }),
    }
}

fn parse_number(value: &str, name: &str, line: Option<u64>) -> Result<f64> {
    value.parse::<f64>().map_err(|err| Error::MalformedRecord {
        line,
        message: format!("invalid {name} '{value}': {err}"),
    })
}

fn row_line(row: &StringRecord) -> Option<u64> {
    row.position().map(|position| position.line())
}

/// Per-row CSV failures become malformed records; I/O failures stay fatal.
fn row_error(err: csv::Error) -> Error {
    if err.is_io_error() {
        return Error::Csv(err);
    }
    Error::MalformedRecord {
        line: err.position().map(|position| position.line()),
        message: err.to_string(),
    }
}

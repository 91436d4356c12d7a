use csv::{ReaderBuilder, StringRecord, Trim};
use grid_planning::{Grid, GridError, StatusCode};
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Why a map could not be loaded. Every variant maps onto the loader part of the status taxonomy.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("map source not found: {0}")]
    NotFound(#[source] io::Error),

    #[error("could not read map: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse map: {0}")]
    Csv(#[from] csv::Error),

    #[error("cell {value:?} at row {row}, column {col} is not an integer")]
    MalformedCell { row: usize, col: usize, value: String },

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl LoadError {
    pub fn status(&self) -> StatusCode {
        match self {
            LoadError::NotFound(_) => StatusCode::SourceNotFound,
            LoadError::Io(_) | LoadError::Csv(_) => StatusCode::ReadFailure,
            LoadError::MalformedCell { .. } => StatusCode::MalformedCell,
            LoadError::Grid(err) => err.status(),
        }
    }
}

/// Reads a grid from comma-separated rows of cell codes without a header line. Whitespace around
/// cells is ignored. Every record is read, and so length-checked, before any cell is parsed.
pub fn read_grid<R: Read>(reader: R) -> Result<Grid, LoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(reader);
    let records = csv_reader
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
    let mut rows: Vec<Vec<i32>> = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, value)| {
                value.parse::<i32>().map_err(|_| LoadError::MalformedCell {
                    row,
                    col,
                    value: value.to_owned(),
                })
            })
            .collect::<Result<Vec<i32>, LoadError>>()?;
        rows.push(cells);
    }
    debug!("Read {} rows", rows.len());
    Ok(Grid::from_rows(&rows)?)
}

/// Opens `path` and reads a grid from it with [read_grid].
pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(err),
        _ => LoadError::Io(err),
    })?;
    let grid = read_grid(io::BufReader::new(file))?;
    info!(
        "Loaded {}x{} map from {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(grid)
}

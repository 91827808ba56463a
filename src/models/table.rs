use super::grid::SweepGrid;
use crate::constants::{RATIO_COLUMN, TABLE_PREFIX};
use crate::errors::TableError;
use csv::{ReaderBuilder, Writer};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Header of the column holding the lifetimes for one altitude.
pub fn altitude_column(altitude_km: f64) -> String {
    format!("h = {} km", altitude_km)
}

/// Table file name for a sweep started at `start_year`.
pub fn table_file_name(start_year: i32) -> String {
    format!("{}{}.csv", TABLE_PREFIX, start_year)
}

/// Orbit lifetimes [years] indexed by (altitude, ratio), filled cell by cell
/// during a sweep. Cells that could not be obtained stay empty and are
/// exported as `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    altitudes_km: Vec<f64>,
    ratios: Vec<f64>,
    cells: Vec<Vec<Option<f64>>>, // [altitude][ratio]
}

impl ResultTable {
    pub fn new(grid: &SweepGrid) -> Self {
        Self {
            altitudes_km: grid.altitudes_km().to_vec(),
            ratios: grid.ratios().to_vec(),
            cells: vec![vec![None; grid.ratios().len()]; grid.altitudes_km().len()],
        }
    }

    pub fn set(&mut self, altitude_idx: usize, ratio_idx: usize, years: f64) {
        self.cells[altitude_idx][ratio_idx] = Some(years);
    }

    pub fn get(&self, altitude_idx: usize, ratio_idx: usize) -> Option<f64> {
        self.cells[altitude_idx][ratio_idx]
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    pub fn header(&self) -> Vec<String> {
        std::iter::once(RATIO_COLUMN.to_string())
            .chain(self.altitudes_km.iter().map(|&h| altitude_column(h)))
            .collect()
    }

    /// One row per ratio: the ratio itself, then one lifetime per altitude.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = Writer::from_writer(writer);
        writer.write_record(self.header())?;

        for (i, ratio) in self.ratios.iter().enumerate() {
            let mut record = Vec::with_capacity(self.altitudes_km.len() + 1);
            record.push(ratio.to_string());
            for row in &self.cells {
                record.push(row[i].unwrap_or(f64::NAN).to_string());
            }
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes `start_year_<year>.csv` into `dir` and returns its path.
    pub fn export(&self, dir: &Path, start_year: i32) -> Result<PathBuf, TableError> {
        let path = dir.join(table_file_name(start_year));
        let file = File::create(&path).map_err(|source| TableError::IoError {
            path: path.clone(),
            source,
        })?;
        self.write_csv(file).map_err(|source| TableError::CsvError {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// An exported table read back from disk, for consumers that select series
/// by altitude column or compare start years.
#[derive(Debug, Clone)]
pub struct TableFile {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TableFile {
    pub fn read(path: &Path) -> Result<Self, TableError> {
        if !path.is_file() {
            return Err(TableError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        let data = fs::read(path).map_err(|source| TableError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, &data)
    }

    fn from_bytes(path: &Path, data: &[u8]) -> Result<Self, TableError> {
        let csv_error = |source: csv::Error| TableError::CsvError {
            path: path.to_path_buf(),
            source,
        };
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(data);
        let headers: Vec<String> = rdr
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(csv_error)?;
            let values = record
                .iter()
                .zip(&headers)
                .map(|(raw, column)| {
                    raw.trim()
                        .parse::<f64>()
                        .map_err(|_| TableError::ParseFloatError {
                            path: path.to_path_buf(),
                            row,
                            column: column.clone(),
                            raw: raw.to_string(),
                        })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            rows.push(values);
        }

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    /// Reads the table of the sweep started at `start_year` from `dir`.
    pub fn read_for_year(dir: &Path, start_year: i32) -> Result<Self, TableError> {
        Self::read(&dir.join(table_file_name(start_year)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, name: &str) -> Result<Vec<f64>, TableError> {
        let idx = self
            .headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    pub fn ratios(&self) -> Result<Vec<f64>, TableError> {
        self.column(RATIO_COLUMN)
    }

    pub fn altitude_series(&self, altitude_km: f64) -> Result<Vec<f64>, TableError> {
        self.column(&altitude_column(altitude_km))
    }

    /// Altitude labels (the `<h>` of `h = <h> km`) of every lifetime column.
    pub fn altitude_labels(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter_map(|h| h.strip_prefix("h = ")?.strip_suffix(" km"))
            .collect()
    }
}

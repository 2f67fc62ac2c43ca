// Copyright (c) 2025 Pnltrack.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::StoreError;
use crate::models::{Entry, Month};
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.pnltrack", "Pnltrack", "pnltrack"));

pub const DATA_FILE: &str = "pnl_data.csv";

pub fn default_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(DATA_FILE))
}

/// Persistence seam for the journal. The contract is merge-by-key:
/// `upsert` adds the incoming P/L onto an existing row with the same
/// (year, month, day) key instead of appending a duplicate period.
pub trait EntryStore {
    /// Read the whole journal. A missing file is an empty journal;
    /// malformed rows are dropped with a warning, never an error.
    fn load(&self) -> Result<Vec<Entry>, StoreError>;

    /// Rewrite the whole journal. The only operation that can fail
    /// in a way callers must surface.
    fn save(&self, entries: &[Entry]) -> Result<(), StoreError>;

    fn upsert(&self, entry: Entry) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        merge(&mut entries, entry);
        self.save(&entries)
    }

    /// Bulk upsert with a single load and save.
    fn upsert_all(&self, incoming: Vec<Entry>) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        for entry in incoming {
            merge(&mut entries, entry);
        }
        self.save(&entries)
    }
}

/// Add `incoming` onto the row with the same period key, or append it.
pub fn merge(entries: &mut Vec<Entry>, incoming: Entry) {
    match entries.iter_mut().find(|e| e.key() == incoming.key()) {
        Some(existing) => existing.pl += incoming.pl,
        None => entries.push(incoming),
    }
}

/// Flat-file store: `Year,Month,Day,PL` with a header row. The `Day`
/// column is optional on read (monthly files omit it) and written only
/// when some entry carries a day.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }

    pub fn open_default() -> Result<Self> {
        Ok(CsvStore::new(default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with the canonical header if it does not exist.
    pub fn init(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            self.save(&[])?;
        }
        Ok(())
    }
}

impl EntryStore for CsvStore {
    fn load(&self) -> Result<Vec<Entry>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let (entries, skipped) = read_csv(&self.path)?;
        if skipped > 0 {
            eprintln!(
                "warning: {} malformed row(s) in {} were ignored",
                skipped,
                self.path.display()
            );
        }
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("csv.tmp");
        write_csv(&tmp, entries).map_err(|e| match e {
            StoreError::Write { source, .. } => StoreError::Write {
                path: self.path.clone(),
                source,
            },
            other => other,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parse a journal CSV, dropping malformed rows. Returns the parsed
/// entries and the count of rows dropped. Granularity is detected from
/// the presence of a `Day` header.
pub fn read_csv(path: &Path) -> Result<(Vec<Entry>, usize), StoreError> {
    let mut rdr = match ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
    {
        Ok(rdr) => rdr,
        Err(err) => {
            eprintln!("warning: could not read {}: {}", path.display(), err);
            return Ok((Vec::new(), 0));
        }
    };

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(err) => {
            eprintln!("warning: bad header in {}: {}", path.display(), err);
            return Ok((Vec::new(), 0));
        }
    };
    let col = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };
    let (year_col, month_col, pl_col) = match (col("Year"), col("Month"), col("PL")) {
        (Some(y), Some(m), Some(p)) => (y, m, p),
        _ => {
            eprintln!(
                "warning: {} is missing Year/Month/PL columns, treating as empty",
                path.display()
            );
            return Ok((Vec::new(), 0));
        }
    };
    let day_col = col("Day");

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    for (i, record) in rdr.records().enumerate() {
        let line = i + 2; // 1-based, after the header
        let record = match record {
            Ok(r) => r,
            Err(err) => {
                eprintln!("warning: skipping row {}: {}", line, err);
                skipped += 1;
                continue;
            }
        };
        match parse_record(&record, year_col, month_col, day_col, pl_col) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {} // blank row
            Err(reason) => {
                eprintln!("warning: skipping row {}: {}", line, reason);
                skipped += 1;
            }
        }
    }
    Ok((entries, skipped))
}

fn parse_record(
    record: &csv::StringRecord,
    year_col: usize,
    month_col: usize,
    day_col: Option<usize>,
    pl_col: usize,
) -> Result<Option<Entry>, String> {
    let field = |idx: usize| record.get(idx).unwrap_or("");
    if record.iter().all(|f| f.is_empty()) {
        return Ok(None);
    }
    let year: i32 = field(year_col)
        .parse()
        .map_err(|_| format!("bad year '{}'", field(year_col)))?;
    let month: Month = field(month_col)
        .parse()
        .map_err(|_| format!("bad month '{}'", field(month_col)))?;
    let day = match day_col.map(field).filter(|s| !s.is_empty()) {
        Some(raw) => {
            let d: u32 = raw.parse().map_err(|_| format!("bad day '{}'", raw))?;
            if !month.valid_day(year, d) {
                return Err(format!("day {} does not exist in {} {}", d, month, year));
            }
            Some(d)
        }
        None => None,
    };
    // Non-numeric P/L is a dropped row, not a zero.
    let pl: Decimal = field(pl_col)
        .parse()
        .map_err(|_| format!("bad P/L '{}'", field(pl_col)))?;
    Ok(Some(Entry::new(year, month, day, pl)))
}

/// Write entries in the canonical layout. The `Day` column appears only
/// when at least one entry is daily-granularity.
pub fn write_csv(path: &Path, entries: &[Entry]) -> Result<(), StoreError> {
    let mut wtr = csv::Writer::from_path(path).map_err(|err| csv_write_error(path, err))?;
    let with_day = entries.iter().any(|e| e.day.is_some());
    if with_day {
        wtr.write_record(["Year", "Month", "Day", "PL"])
            .map_err(|err| csv_write_error(path, err))?;
    } else {
        wtr.write_record(["Year", "Month", "PL"])
            .map_err(|err| csv_write_error(path, err))?;
    }
    for e in entries {
        let year = e.year.to_string();
        let pl = e.pl.to_string();
        if with_day {
            let day = e.day.map(|d| d.to_string()).unwrap_or_default();
            wtr.write_record([year.as_str(), e.month.name(), day.as_str(), pl.as_str()])
                .map_err(|err| csv_write_error(path, err))?;
        } else {
            wtr.write_record([year.as_str(), e.month.name(), pl.as_str()])
                .map_err(|err| csv_write_error(path, err))?;
        }
    }
    wtr.flush().map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_write_error(path: &Path, err: csv::Error) -> StoreError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => std::io::Error::new(std::io::ErrorKind::InvalidData, format!("{:?}", other)),
    };
    StoreError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// In-memory store for tests and embedding; same merge contract as
/// `CsvStore`, no persistence.
#[derive(Default)]
pub struct MemStore {
    entries: Mutex<Vec<Entry>>,
}

impl MemStore {
    pub fn new() -> Self {
        MemStore::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        MemStore {
            entries: Mutex::new(entries),
        }
    }
}

impl EntryStore for MemStore {
    fn load(&self) -> Result<Vec<Entry>, StoreError> {
        Ok(self.entries.lock().expect("store lock poisoned").clone())
    }

    fn save(&self, entries: &[Entry]) -> Result<(), StoreError> {
        *self.entries.lock().expect("store lock poisoned") = entries.to_vec();
        Ok(())
    }
}

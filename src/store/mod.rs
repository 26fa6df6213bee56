//! CSV-backed demand store.
//!
//! An ordered table of per-day demand rows, one CSV row per day, fully
//! rewritten after every mutation. Single-writer by design: no locking
//! and no atomic rename, matching the original single-user tool.

use crate::error::{DemandaError, Result};
use crate::primitives::DemandRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Header line of the backing file, one named column per tower.
pub const HEADER: &str = "tower_a,tower_b,tower_c";

/// An ordered table of daily demand rows backed by a CSV file.
///
/// Days are 1-indexed positions in the table. Every mutating operation
/// serializes the full table back to disk; when that rewrite fails the
/// in-memory table keeps the mutation and the error says so, letting
/// the caller warn instead of silently losing state.
///
/// # Examples
///
/// ```no_run
/// use demanda::prelude::*;
///
/// let mut store = DemandStore::open("demanda.csv")?;
/// let day = store.append(TowerVector::new(0.2, 0.4, 0.1))?;
/// assert_eq!(day, store.len());
/// # Ok::<(), DemandaError>(())
/// ```
#[derive(Debug)]
pub struct DemandStore {
    rows: Vec<DemandRow>,
    path: PathBuf,
}

impl DemandStore {
    /// Opens an existing demand file and parses every row.
    ///
    /// # Errors
    ///
    /// - [`DemandaError::StoreNotFound`] if the file does not exist
    ///   (the caller decides whether to initialize an empty table).
    /// - [`DemandaError::Malformed`] for a row that is not three
    ///   numeric columns.
    /// - [`DemandaError::Io`] for other read failures.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DemandaError::StoreNotFound(path));
            }
            Err(e) => return Err(DemandaError::Io(e)),
        };

        let rows = parse_rows(&contents)?;
        Ok(Self { rows, path })
    }

    /// Creates a new empty store, writing a header-only file.
    ///
    /// # Errors
    ///
    /// Returns [`DemandaError::Io`] if the file cannot be written.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            rows: Vec::new(),
            path: path.as_ref().to_path_buf(),
        };
        fs::write(&store.path, format!("{HEADER}\n"))?;
        Ok(store)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no days are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in day order (day `d` is `rows()[d - 1]`).
    #[must_use]
    pub fn rows(&self) -> &[DemandRow] {
        &self.rows
    }

    /// Returns the row for a 1-indexed day.
    ///
    /// # Errors
    ///
    /// Returns [`DemandaError::InvalidDay`] when `day` is outside
    /// `1..=len`.
    pub fn row(&self, day: usize) -> Result<&DemandRow> {
        let idx = self.check_day(day)?;
        Ok(&self.rows[idx])
    }

    /// Appends a row at the end; the new day number equals the new
    /// length. Persists the full table afterward.
    ///
    /// # Errors
    ///
    /// Returns [`DemandaError::Persistence`] if the rewrite fails; the
    /// in-memory append is retained.
    pub fn append(&mut self, row: DemandRow) -> Result<usize> {
        self.rows.push(row);
        self.persist()?;
        Ok(self.rows.len())
    }

    /// Removes the row at a 1-indexed day; all later days shift down
    /// by one. Persists the full table afterward.
    ///
    /// # Errors
    ///
    /// - [`DemandaError::InvalidDay`] for an out-of-range day; the
    ///   table is left untouched.
    /// - [`DemandaError::Persistence`] if the rewrite fails; the
    ///   in-memory removal is retained.
    pub fn delete_day(&mut self, day: usize) -> Result<DemandRow> {
        let idx = self.check_day(day)?;
        let removed = self.rows.remove(idx);
        self.persist()?;
        Ok(removed)
    }

    /// Replaces the row at a 1-indexed day in place. Persists the full
    /// table afterward.
    ///
    /// # Errors
    ///
    /// - [`DemandaError::InvalidDay`] for an out-of-range day; the
    ///   table is left untouched.
    /// - [`DemandaError::Persistence`] if the rewrite fails; the
    ///   in-memory edit is retained.
    pub fn edit_day(&mut self, day: usize, row: DemandRow) -> Result<()> {
        let idx = self.check_day(day)?;
        self.rows[idx] = row;
        self.persist()
    }

    /// Discards the in-memory table and re-reads the backing file.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`DemandStore::open`].
    pub fn reload(&mut self) -> Result<()> {
        let reopened = Self::open(&self.path)?;
        self.rows = reopened.rows;
        Ok(())
    }

    /// Maps a 1-indexed day to a row index, rejecting out-of-range
    /// days before anything is mutated.
    fn check_day(&self, day: usize) -> Result<usize> {
        if day == 0 || day > self.rows.len() {
            return Err(DemandaError::InvalidDay {
                day,
                len: self.rows.len(),
            });
        }
        Ok(day - 1)
    }

    /// Full serialize-and-overwrite of the backing file.
    fn persist(&self) -> Result<()> {
        let mut out = String::with_capacity(HEADER.len() + 1 + self.rows.len() * 24);
        out.push_str(HEADER);
        out.push('\n');
        for row in &self.rows {
            let [a, b, c] = row.as_array();
            out.push_str(&format!("{a},{b},{c}\n"));
        }
        fs::write(&self.path, out).map_err(|source| DemandaError::Persistence {
            path: self.path.clone(),
            source,
        })
    }
}

/// Parses the file contents: a header line followed by one
/// three-column numeric row per day. Percentages are not range-checked
/// here; bounds are enforced at the input boundary only.
fn parse_rows(contents: &str) -> Result<Vec<DemandRow>> {
    let mut rows = Vec::new();
    // enumerate is 0-based and counts the header; error sites add 1
    // to report 1-based file lines.
    for (line_no, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(DemandaError::Malformed {
                line: line_no + 1,
                message: format!("expected 3 columns, got {}", fields.len()),
            });
        }
        let mut values = [0.0f32; 3];
        for (slot, field) in values.iter_mut().zip(fields.iter()) {
            *slot = field
                .trim()
                .parse()
                .map_err(|e| DemandaError::Malformed {
                    line: line_no + 1,
                    message: format!("bad number {field:?}: {e}"),
                })?;
        }
        rows.push(DemandRow::new(values[0], values[1], values[2]));
    }
    Ok(rows)
}

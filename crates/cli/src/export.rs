//! CSV export of a solution.
//!
//! The file has a `t,y(t)` header and one row per mesh point. Values are
//! written in Rust's shortest round-trip form, so reading a file back yields
//! the exact `f64`s that were written.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use thiserror::Error;

use euler1d_solvers::euler::Solution;

/// Column names of an exported solution.
pub const HEADER: [&str; 2] = ["t", "y(t)"];

/// Errors that can occur when writing or reading a solution CSV.
///
/// A failed export never affects the in-memory [`Solution`].
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("row {row} is not a (t, y) pair: {reason}")]
    Malformed { row: usize, reason: String },
}

/// Writes `solution` as CSV to any writer.
///
/// # Errors
///
/// Returns an [`ExportError`] if writing or flushing fails.
pub fn write_csv<W: io::Write>(solution: &Solution, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for (t, y) in solution.pairs() {
        wtr.write_record([t.to_string(), y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `solution` as CSV to the file at `path`, replacing it if it exists.
///
/// # Errors
///
/// Returns [`ExportError::Create`] if the file cannot be created, otherwise
/// as [`write_csv`].
pub fn export_csv(solution: &Solution, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_owned(),
        source,
    })?;

    write_csv(solution, BufWriter::new(file))?;
    log::info!("solution exported to `{}`", path.display());
    Ok(())
}

/// Reads `(t, y)` pairs from a CSV written by [`write_csv`].
///
/// # Errors
///
/// Returns [`ExportError::Malformed`] if the header differs from [`HEADER`]
/// or a row is not two numbers, and [`ExportError::Csv`] for CSV syntax
/// errors.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<(f64, f64)>, ExportError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let header = rdr.headers()?;
    if header.iter().ne(HEADER) {
        let found: Vec<&str> = header.iter().collect();
        return Err(ExportError::Malformed {
            row: 0,
            reason: format!("expected header `t,y(t)`, found `{}`", found.join(",")),
        });
    }

    let mut pairs = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let parse = |field: Option<&str>| {
            let field = field.ok_or_else(|| ExportError::Malformed {
                row,
                reason: "missing column".into(),
            })?;
            field.trim().parse::<f64>().map_err(|err| ExportError::Malformed {
                row,
                reason: format!("`{field}`: {err}"),
            })
        };
        pairs.push((parse(record.get(0))?, parse(record.get(1))?));
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use euler1d_core::rhs_fn;
    use euler1d_solvers::{Mesh, euler};

    fn decay(steps: usize) -> Solution {
        let mesh = Mesh::new(0.0, 1.0, steps).unwrap();
        euler::solve_unobserved(&rhs_fn(|t, y| t.cos() - y), mesh, 1.0).unwrap()
    }

    #[test]
    fn header_and_rows() {
        let mut buf = Vec::new();
        write_csv(&decay(2), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "t,y(t)");
        assert_eq!(lines[1], "0,1");
        assert_eq!(lines[2], "0.5,1");
    }

    #[test]
    fn round_trip_is_exact() {
        let solution = decay(37);

        let mut buf = Vec::new();
        write_csv(&solution, &mut buf).unwrap();
        let pairs = read_csv(buf.as_slice()).unwrap();

        assert_eq!(pairs, solution.pairs().collect::<Vec<_>>());
    }

    #[test]
    fn rejects_foreign_header() {
        let err = read_csv("time,value\n0,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Malformed { row: 0, .. }));
    }

    #[test]
    fn rejects_non_numeric_rows() {
        let err = read_csv("t,y(t)\n0,1\n0.5,abc\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Malformed { row: 2, .. }));
    }

    #[test]
    fn unwritable_path_keeps_the_solution() {
        let solution = decay(4);
        let err = export_csv(&solution, "does/not/exist/solution.csv").unwrap_err();

        assert!(matches!(err, ExportError::Create { .. }));
        assert_eq!(solution.values().len(), 5);
    }
}

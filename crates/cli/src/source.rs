//! Stick sources: stdin or a whitespace text file, or a CSV file with
//! `x1,y1,x2,y2` header columns (one stick per row).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use sticks::{parse_sticks, Stick, StickSet};

const CSV_COLUMNS: [&str; 4] = ["x1", "y1", "x2", "y2"];

/// Read sticks from `input`, or from stdin when `None`.
pub fn read_sticks(input: Option<&Path>) -> Result<StickSet> {
    match input {
        None => {
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            parse_sticks(&text).context("parsing sticks from stdin")
        }
        Some(path) if is_csv(path) => read_csv(path),
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_sticks(&text).with_context(|| format!("parsing sticks from {}", path.display()))
        }
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

fn read_csv(path: &Path) -> Result<StickSet> {
    // Full-file schema inference: a float or text cell anywhere types its column.
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(None)
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(CSV_COLUMNS.iter().map(|&c| col(c)).collect::<Vec<_>>())
        .collect()
        .with_context(|| format!("reading stick columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "csv sticks");

    let mut columns = Vec::with_capacity(CSV_COLUMNS.len());
    for name in CSV_COLUMNS {
        let column = df.column(name)?;
        if !column.dtype().is_integer() {
            bail!(
                "{}: column {name} holds {} values, expected integers",
                path.display(),
                column.dtype()
            );
        }
        let column = column
            .strict_cast(&DataType::Int64)
            .with_context(|| format!("{}: column {name} does not fit i64", path.display()))?;
        columns.push(column);
    }
    let x1 = columns[0].i64()?;
    let y1 = columns[1].i64()?;
    let x2 = columns[2].i64()?;
    let y2 = columns[3].i64()?;
    let mut set = StickSet::with_capacity(df.height());
    let rows = x1.into_iter().zip(y1).zip(x2).zip(y2);
    for (row, (((a, b), c), d)) in rows.enumerate() {
        match (a, b, c, d) {
            (Some(a), Some(b), Some(c), Some(d)) => set.push(Stick::from_coords(a, b, c, d)),
            // +2: 1-based, after the header line
            _ => bail!("{}: row {} has an empty cell", path.display(), row + 2),
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticks::Point;
    use tempfile::tempdir;

    #[test]
    fn csv_extension_detection() {
        assert!(is_csv(Path::new("a/b.csv")));
        assert!(is_csv(Path::new("B.CSV")));
        assert!(!is_csv(Path::new("sticks.txt")));
        assert!(!is_csv(Path::new("csv")));
    }

    #[test]
    fn text_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.txt");
        fs::write(&path, "4\n0 0 1 0\n1 0 1 1\n1 1 0 1\n0 1 0 0\n").unwrap();
        let set = read_sticks(Some(&path)).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(sticks::analyze(&set).to_string(), "Yes\nNo\n1.00");
    }

    #[test]
    fn csv_file_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("triangle.csv");
        fs::write(&path, "x1,y1,x2,y2\n0,0,4,0\n4,0,0,3\n0,3,0,0\n").unwrap();
        let set = read_sticks(Some(&path)).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.tally().count(Point::new(0, 3)), 2);
        assert_eq!(sticks::analyze(&set).to_string(), "Yes\nNo\n6.00");
    }

    #[test]
    fn csv_empty_cell_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holes.csv");
        fs::write(&path, "x1,y1,x2,y2\n0,0,4,0\n4,,0,3\n").unwrap();
        let err = read_sticks(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("row 3"), "{err:#}");
    }

    #[test]
    fn csv_fractional_cell_is_rejected_not_truncated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fraction.csv");
        fs::write(&path, "x1,y1,x2,y2\n0,0,4,0\n4,0,1.5,3\n0,3,0,0\n").unwrap();
        let err = read_sticks(Some(&path)).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("column x2") && msg.contains("expected integers"), "{msg}");
    }

    #[test]
    fn csv_text_cell_is_not_reported_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("text.csv");
        fs::write(&path, "x1,y1,x2,y2\n0,0,4,0\nfour,0,0,3\n").unwrap();
        let err = read_sticks(Some(&path)).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("column x1") && !msg.contains("empty cell"), "{msg}");
    }

    #[test]
    fn malformed_text_keeps_parse_error_in_chain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.txt");
        fs::write(&path, "2\n0 0 1 0\n").unwrap();
        let err = read_sticks(Some(&path)).unwrap_err();
        let parse = err.downcast_ref::<sticks::ParseError>().unwrap();
        assert_eq!(
            *parse,
            sticks::ParseError::Truncated {
                expected: 2,
                read: 1
            }
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_sticks(Some(&dir.path().join("nope.txt"))).is_err());
    }
}

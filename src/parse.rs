use crate::error::{Error, Result};
use csv::{ReaderBuilder, StringRecord};
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufReader, Read};
use std::num::IntErrorKind;
use std::path::Path;

/// Loads a matrix of space-separated integers, one row per line.
pub fn load_matrix(file_path: impl AsRef<Path>) -> Result<Array2<i64>> {
    let file = File::open(file_path.as_ref())?;
    let matrix = parse_matrix(BufReader::new(file))?;

    log::debug!(
        "loaded {} as {}x{} matrix",
        file_path.as_ref().display(),
        matrix.nrows(),
        matrix.ncols()
    );

    Ok(matrix)
}

/// Parses space-separated integer rows from any reader.
///
/// Empty tokens (a trailing space, doubled spaces) are skipped. Every row must
/// hold the same number of values as the first one.
pub fn parse_matrix<R: Read>(reader: R) -> Result<Array2<i64>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut values = Vec::new();
    let mut columns = None;
    let mut rows = 0;

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = line_number(&record, index);

        let row = parse_row(&record, line)?;
        if row.is_empty() {
            return Err(Error::EmptyRow { line });
        }

        let expected = *columns.get_or_insert(row.len());
        if row.len() != expected {
            return Err(Error::RaggedRow {
                line,
                expected,
                got: row.len(),
            });
        }

        values.extend(row);
        rows += 1;
    }

    Ok(Array2::from_shape_vec((rows, columns.unwrap_or(0)), values)?)
}

/// First column of a label matrix, one class per sample.
pub fn label_column(matrix: &Array2<i64>) -> Result<Array1<i64>> {
    if matrix.nrows() == 0 {
        return Ok(Array1::zeros(0));
    }

    if matrix.ncols() == 0 {
        return Err(Error::DimensionMismatch {
            expected: 1,
            got: 0,
        });
    }

    Ok(matrix.column(0).to_owned())
}

fn parse_row(record: &StringRecord, line: usize) -> Result<Vec<i64>> {
    record
        .iter()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Error::IntegerOutOfRange {
                        line,
                        token: token.to_owned(),
                    }
                }
                _ => Error::InvalidToken {
                    line,
                    token: token.to_owned(),
                },
            })
        })
        .collect()
}

fn line_number(record: &StringRecord, index: usize) -> usize {
    record
        .position()
        .and_then(|position| usize::try_from(position.line()).ok())
        .unwrap_or(index + 1)
}

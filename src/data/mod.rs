//! Dataset row coercion.
//!
//! Upstream collaborators hand this engine raw tabular rows: ordered cell
//! sequences aligned to a header. Inference and metrics need numeric
//! feature columns, so the engine numerically coerces the required cells
//! and drops any row whose coercion fails or produces a non-finite value.
//! The surviving original row indices are reported so callers can align
//! target labels with the filtered rows.

use crate::error::{InferirError, Result};

/// Numeric feature rows surviving coercion, plus their original indices.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericRows {
    /// One coerced feature vector per surviving row, in input order.
    pub values: Vec<Vec<f64>>,
    /// Original index of each surviving row.
    pub row_indices: Vec<usize>,
}

/// Selects the named `columns` from `rows` and coerces them to `f64`.
///
/// Rows with an unparseable or non-finite cell in any required column are
/// skipped, not errored: bad rows are a data condition the caller inspects
/// via the surviving indices, while an unknown column name is a
/// configuration mistake and fails the whole call.
///
/// # Errors
///
/// Returns a validation error if any requested column is missing from the
/// header.
pub fn numeric_rows(
    header: &[String],
    rows: &[Vec<String>],
    columns: &[String],
) -> Result<NumericRows> {
    let indices: Vec<usize> = columns
        .iter()
        .map(|column| {
            header.iter().position(|h| h == column).ok_or_else(|| {
                InferirError::validation(format!("column {column:?} not found in header"))
            })
        })
        .collect::<Result<_>>()?;

    let mut values = Vec::new();
    let mut row_indices = Vec::new();

    'rows: for (row_idx, row) in rows.iter().enumerate() {
        let mut coerced = Vec::with_capacity(indices.len());
        for &col_idx in &indices {
            let Some(cell) = row.get(col_idx) else {
                continue 'rows;
            };
            match coerce_cell(cell) {
                Some(value) => coerced.push(value),
                None => continue 'rows,
            }
        }
        values.push(coerced);
        row_indices.push(row_idx);
    }

    Ok(NumericRows { values, row_indices })
}

/// `parseFloat`-equivalent coercion: trims the cell, then takes the
/// longest numeric prefix. Returns `None` for non-numeric cells and for
/// non-finite results.
fn coerce_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = trimmed[..end].parse::<f64>() {
            return value.is_finite().then_some(value);
        }
    }
    None
}

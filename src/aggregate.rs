//! The validation and summation pass that turns a grid into per-row totals.

use crate::model::{Amount, Grid, RowCol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Why an aggregation pass was aborted.
///
/// There is one variant per modal warning a front end is expected to show.
/// The whole pass fails on the first faulting row and no totals are
/// returned, not even for rows that had already passed.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AggregateError {
    /// Some amount cell in the faulting row holds a negative value.
    #[error("You entered a negative number")]
    NegativeValue,

    /// The faulting row has an empty destination label or sums to exactly zero.
    #[error("Please enter data into the table")]
    EmptyOrZeroRow,

    /// An amount cell holds non-empty, non-negative text that is not a
    /// number. Interactive edits are pre-filtered, so this only arises from
    /// imported files.
    #[error("The cell at {at} does not contain a number: '{text}'")]
    MalformedCell { at: RowCol, text: String },
}

/// One entry of the aggregation success payload: a destination and the sum
/// of its four expense cells. Entries appear in row order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RowTotal {
    label: String,
    total: Amount,
}

impl RowTotal {
    pub fn new(label: impl Into<String>, total: Amount) -> Self {
        Self {
            label: label.into(),
            total,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

/// Walks the grid in row order, validating and summing each row.
///
/// Empty amount cells contribute nothing to a row's sum. A cell whose text
/// contains a minus sign marks the row negative and is excluded from the
/// sum; once the row has been read, a negative mark aborts the whole pass
/// with [`AggregateError::NegativeValue`]. A row with an empty label or an
/// exactly-zero total aborts with [`AggregateError::EmptyOrZeroRow`]. Rows
/// that pass get their computed total recorded on the grid, displayed with a
/// comma decimal separator, and appended to the payload.
///
/// The returned payload is all-or-nothing: the first faulting row discards
/// everything accumulated so far. Totals are written onto rows as the walk
/// proceeds, so rows before the fault keep their displayed total even when
/// the pass fails.
pub fn aggregate(grid: &mut Grid) -> Result<Vec<RowTotal>, AggregateError> {
    let mut totals = Vec::with_capacity(grid.row_count());

    for (row_ix, row) in grid.rows_mut().iter_mut().enumerate() {
        let mut sum = Decimal::ZERO;
        let mut has_negative = false;

        for (col, cell) in row.amounts() {
            let text = cell.text();
            if text.is_empty() {
                continue;
            }
            let normalized = text.replace(',', ".");
            if normalized.contains('-') {
                has_negative = true;
                continue;
            }
            let amount = Amount::from_str(text).map_err(|_| AggregateError::MalformedCell {
                at: RowCol::new(row_ix, col.index() + 1),
                text: text.to_string(),
            })?;
            sum += amount.value();
        }

        if has_negative {
            debug!("Aborting the pass: row {row_ix} contains a negative amount");
            return Err(AggregateError::NegativeValue);
        }
        if sum.is_zero() || row.label().is_empty() {
            debug!("Aborting the pass: row {row_ix} has no label or sums to zero");
            return Err(AggregateError::EmptyOrZeroRow);
        }

        let total = Amount::new(sum);
        row.set_total(total);
        totals.push(RowTotal::new(row.label().text(), total));
    }

    Ok(totals)
}

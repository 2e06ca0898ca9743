use crate::model::{Cell, ExpenseColumn, Row, RowCol, AMOUNT_COLUMNS};
use crate::Result;
use anyhow::bail;
use serde::{Deserialize, Serialize};

/// The full ordered table of trip rows, the unit of aggregation.
///
/// A grid is created fresh either with a requested number of empty rows or
/// from the lines of an imported file, and is replaced wholesale by either
/// action. Nothing is validated at construction time; bad input is caught by
/// the edit filters and by the aggregation pass.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    /// Creates a grid of `rows` empty rows.
    pub fn empty(rows: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| Row::empty()).collect(),
        }
    }

    /// Builds a grid from lines of whitespace-separated fields, one row per
    /// line. The first field is the destination label and the next four are
    /// the expense amounts in column order. Missing trailing fields leave
    /// those cells empty, and fields past the fifth are dropped.
    pub fn from_lines<S, I>(lines: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let rows = lines
            .into_iter()
            .map(|line| {
                let mut row = Row::empty();
                let mut tokens = line.as_ref().split_whitespace();
                if let Some(label) = tokens.next() {
                    row.label_mut().set_text(label);
                }
                for (col, token) in ExpenseColumn::ALL.into_iter().zip(tokens) {
                    row.amount_mut(col).set_text(token);
                }
                row
            })
            .collect();
        Self { rows }
    }

    /// Builds a grid from a whole imported file.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Reads the raw text of the cell at `at`.
    pub fn cell_text(&self, at: RowCol) -> Result<&str> {
        Ok(self.cell(at)?.text())
    }

    /// Overwrites the raw text of the cell at `at`. The computed total of the
    /// row is cleared because it may no longer match the cells.
    pub fn set_cell_text(&mut self, at: RowCol, text: impl Into<String>) -> Result<()> {
        self.cell_mut(at)?.set_text(text);
        if let Some(row) = self.rows.get_mut(at.row()) {
            row.clear_total();
        }
        Ok(())
    }

    fn cell(&self, at: RowCol) -> Result<&Cell> {
        let Some(row) = self.rows.get(at.row()) else {
            bail!("No cell at {at}: the grid has {} rows", self.rows.len());
        };
        match at.col() {
            0 => Ok(row.label()),
            c if c <= AMOUNT_COLUMNS => Ok(row.amount(ExpenseColumn::ALL[c - 1])),
            _ => bail!(
                "No cell at {at}: rows have {} editable columns",
                AMOUNT_COLUMNS + 1
            ),
        }
    }

    fn cell_mut(&mut self, at: RowCol) -> Result<&mut Cell> {
        let row_count = self.rows.len();
        let Some(row) = self.rows.get_mut(at.row()) else {
            bail!("No cell at {at}: the grid has {row_count} rows");
        };
        match at.col() {
            0 => Ok(row.label_mut()),
            c if c <= AMOUNT_COLUMNS => Ok(row.amount_mut(ExpenseColumn::ALL[c - 1])),
            _ => bail!(
                "No cell at {at}: rows have {} editable columns",
                AMOUNT_COLUMNS + 1
            ),
        }
    }
}

//! Explicit ownership of the one live grid and its latest totals.

use crate::aggregate::{aggregate, AggregateError, RowTotal};
use crate::model::Grid;
use tracing::debug;

/// Owns exactly one grid and the latest successful aggregation payload.
///
/// A front end holds one of these instead of mutating hidden state: all
/// operations are methods, and replacing the grid clears any payload that
/// was computed from the old one. A failed aggregation likewise leaves no
/// payload behind, so `totals` never serves stale data to a chart view.
#[derive(Default, Debug, Clone)]
pub struct Session {
    grid: Grid,
    totals: Option<Vec<RowTotal>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the grid with `rows` empty rows.
    pub fn generate(&mut self, rows: usize) {
        debug!("Generating an empty grid with {rows} rows");
        self.grid = Grid::empty(rows);
        self.totals = None;
    }

    /// Replaces the grid with rows parsed from `text`, one row per line.
    pub fn load_from_text(&mut self, text: &str) {
        self.grid = Grid::from_text(text);
        debug!("Loaded a grid with {} rows", self.grid.row_count());
        self.totals = None;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Runs the aggregation pass over the current grid, storing the payload
    /// on success and clearing it on failure.
    pub fn aggregate(&mut self) -> Result<&[RowTotal], AggregateError> {
        match aggregate(&mut self.grid) {
            Ok(totals) => {
                self.totals = Some(totals);
                Ok(self.totals.as_deref().unwrap_or_default())
            }
            Err(e) => {
                self.totals = None;
                Err(e)
            }
        }
    }

    /// The latest successful payload, if any.
    pub fn totals(&self) -> Option<&[RowTotal]> {
        self.totals.as_deref()
    }
}

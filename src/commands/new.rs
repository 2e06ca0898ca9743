use crate::commands::Out;
use crate::model::{ExpenseColumn, Grid, LABEL_HEADER};
use crate::Result;

/// Creates an empty grid with `rows` rows and reports the field order its
/// lines should be filled in with.
///
/// The import format has no header line, so the column guide goes into the
/// message rather than the grid itself.
pub fn new(rows: usize) -> Result<Out<Grid>> {
    let grid = Grid::empty(rows);
    let mut columns = vec![LABEL_HEADER];
    columns.extend(ExpenseColumn::ALL.iter().map(|c| c.header()));
    let message = format!(
        "Created an empty table with {rows} rows. Fill in one line per trip with \
        whitespace-separated fields in this order: {}",
        columns.join(" ")
    );
    Ok(Out::new(message, grid))
}

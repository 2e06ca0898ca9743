//! Types that represent the core data model, such as `Grid` and `Amount`.
mod amount;
mod cell;
mod grid;
mod row;
mod row_col;

pub use amount::{Amount, AmountFormat};
pub use cell::{Cell, CellKind};
pub use grid::Grid;
pub use row::{ExpenseColumn, Row, AMOUNT_COLUMNS, LABEL_HEADER, TOTAL_HEADER};
pub use row_col::RowCol;

mod aggregate;
pub mod args;
mod chart;
pub mod commands;
mod error;
mod filter;
mod fs;
mod model;
mod session;

pub use aggregate::{aggregate, AggregateError, RowTotal};
pub use chart::{Bar, ChartSeries};
pub use error::Error;
pub use error::Result;
pub use filter::{is_valid_amount_edit, is_valid_label_edit};
pub use model::{
    Amount, AmountFormat, Cell, CellKind, ExpenseColumn, Grid, Row, RowCol, AMOUNT_COLUMNS,
    LABEL_HEADER, TOTAL_HEADER,
};
pub use session::Session;

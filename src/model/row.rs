use crate::model::{Amount, Cell};
use serde::{Deserialize, Serialize};

/// The number of amount cells in every row.
pub const AMOUNT_COLUMNS: usize = 4;

/// The header shown above the label column.
pub const LABEL_HEADER: &str = "Destination";

/// The header shown above the computed total column.
pub const TOTAL_HEADER: &str = "Total";

/// Represents the known expense columns of a row, in declared order.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseColumn {
    #[default]
    Transport,
    Lodging,
    Food,
    Other,
}

serde_plain::derive_display_from_serialize!(ExpenseColumn);
serde_plain::derive_fromstr_from_deserialize!(ExpenseColumn);

impl ExpenseColumn {
    /// All expense columns in their declared (and displayed) order.
    pub const ALL: [ExpenseColumn; AMOUNT_COLUMNS] = [
        ExpenseColumn::Transport,
        ExpenseColumn::Lodging,
        ExpenseColumn::Food,
        ExpenseColumn::Other,
    ];

    /// The header shown above this column.
    pub fn header(&self) -> &'static str {
        match self {
            ExpenseColumn::Transport => "Transport",
            ExpenseColumn::Lodging => "Lodging",
            ExpenseColumn::Food => "Food",
            ExpenseColumn::Other => "Other",
        }
    }

    /// The position of this column among the amount cells, starting at 0.
    pub fn index(&self) -> usize {
        match self {
            ExpenseColumn::Transport => 0,
            ExpenseColumn::Lodging => 1,
            ExpenseColumn::Food => 2,
            ExpenseColumn::Other => 3,
        }
    }
}

/// One trip record: a destination label, four expense cells and, once an
/// aggregation pass has accepted the row, a read-only computed total.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Row {
    label: Cell,
    amounts: [Cell; AMOUNT_COLUMNS],
    total: Option<Amount>,
}

impl Default for Row {
    fn default() -> Self {
        Self::empty()
    }
}

impl Row {
    /// Creates a row with an empty label and four empty amount cells.
    pub fn empty() -> Self {
        Self {
            label: Cell::label(""),
            amounts: [
                Cell::amount(""),
                Cell::amount(""),
                Cell::amount(""),
                Cell::amount(""),
            ],
            total: None,
        }
    }

    pub fn label(&self) -> &Cell {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Cell {
        &mut self.label
    }

    pub fn amount(&self, col: ExpenseColumn) -> &Cell {
        &self.amounts[col.index()]
    }

    pub fn amount_mut(&mut self, col: ExpenseColumn) -> &mut Cell {
        &mut self.amounts[col.index()]
    }

    /// Iterates the amount cells in column order.
    pub fn amounts(&self) -> impl Iterator<Item = (ExpenseColumn, &Cell)> {
        ExpenseColumn::ALL.into_iter().zip(self.amounts.iter())
    }

    /// The computed total, present only after an aggregation pass accepted this row.
    pub fn total(&self) -> Option<Amount> {
        self.total
    }

    pub(crate) fn set_total(&mut self, total: Amount) {
        self.total = Some(total);
    }

    pub(crate) fn clear_total(&mut self) {
        self.total = None;
    }
}

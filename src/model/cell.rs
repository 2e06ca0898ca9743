use serde::{Deserialize, Serialize};

/// The role a cell plays within a row.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// A destination name. Must never contain digits.
    #[default]
    Label,
    /// An expense amount. The raw text is kept until the aggregation pass parses it.
    Amount,
}

serde_plain::derive_display_from_serialize!(CellKind);
serde_plain::derive_fromstr_from_deserialize!(CellKind);

/// A single editable field: its role and its raw text.
///
/// Cells never parse eagerly. An amount cell holds whatever the user or an
/// imported file put in it, and validation happens at edit time (see the
/// filter predicates) and again during aggregation.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Cell {
    kind: CellKind,
    text: String,
}

impl Cell {
    /// Creates a label cell with the given text.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Label,
            text: text.into(),
        }
    }

    /// Creates an amount cell with the given text.
    pub fn amount(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Amount,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

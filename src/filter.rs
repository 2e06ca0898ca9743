//! Per-keystroke edit predicates for grid cells.
//!
//! A form view is expected to call these on every proposed edit and keep the
//! prior text when the predicate returns false. Because they run per
//! keystroke, the amount predicate must accept half-typed numbers such as
//! "-" and "12," as provisionally valid.

/// Returns true if the proposed label text is acceptable: a label may be any
/// string that contains no numeric character.
///
/// "Paris" is accepted, "Paris2" is rejected.
pub fn is_valid_label_edit(text: &str) -> bool {
    !text.chars().any(|c| c.is_numeric())
}

/// Returns true if the proposed amount text is a prefix of a signed decimal
/// number using at most one comma-or-period separator.
///
/// The empty string, a lone minus and a trailing separator are all
/// provisionally valid, since the user may still be typing.
pub fn is_valid_amount_edit(text: &str) -> bool {
    let mut seen_separator = false;
    for (ix, c) in text.chars().enumerate() {
        match c {
            '-' if ix == 0 => {}
            '.' | ',' if !seen_separator => seen_separator = true,
            _ if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    true
}

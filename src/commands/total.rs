use crate::aggregate::RowTotal;
use crate::commands::{read_input, Out};
use crate::{Result, Session};
use std::path::Path;

/// Reads grid lines from `file` (or stdin when `file` is `None`), runs the
/// aggregation pass and reports one `label total` line per destination.
///
/// Any aggregation error aborts the command; no partial totals are printed.
pub fn total(file: Option<&Path>) -> Result<Out<Vec<RowTotal>>> {
    let text = read_input(file)?;
    let mut session = Session::new();
    session.load_from_text(&text);
    let totals = session.aggregate()?.to_vec();

    let message = totals
        .iter()
        .map(|t| format!("{} {}", t.label(), t.total()))
        .collect::<Vec<String>>()
        .join("\n");
    Ok(Out::new(message, totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AggregateError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_total_from_file() {
        let file = write_file("Paris 100 50 20 10\nRome 200 80 40 15\n");
        let out = total(Some(file.path())).unwrap();
        assert_eq!(out.message(), "Paris 180\nRome 335");
        assert_eq!(out.structure().unwrap().len(), 2);
    }

    #[test]
    fn test_total_formats_with_comma() {
        let file = write_file("Paris 100 50,5 20 10\n");
        let out = total(Some(file.path())).unwrap();
        assert_eq!(out.message(), "Paris 180,5");
    }

    #[test]
    fn test_total_negative_input_fails() {
        let file = write_file("Paris 100 50 20 10\nRome -5 10 10 10\n");
        let err = total(Some(file.path())).unwrap_err();
        assert_eq!(
            err.downcast::<AggregateError>().unwrap(),
            AggregateError::NegativeValue
        );
    }

    #[test]
    fn test_total_missing_file_fails() {
        let err = total(Some(Path::new("/no/such/file.txt"))).unwrap_err();
        assert!(err.to_string().contains("Unable to read file"));
    }
}

use crate::chart::ChartSeries;
use crate::commands::{read_input, Out};
use crate::{Result, Session};
use std::path::Path;
use tracing::debug;

/// Reads grid lines from `file` (or stdin), runs the aggregation pass and
/// renders the per-destination totals as a horizontal bar chart `width`
/// characters wide.
pub fn chart(file: Option<&Path>, width: usize) -> Result<Out<ChartSeries>> {
    let text = read_input(file)?;
    let mut session = Session::new();
    session.load_from_text(&text);
    let totals = session.aggregate()?.to_vec();

    match ChartSeries::from_totals(&totals) {
        Some(series) => {
            let rendered = series.render(width);
            Ok(Out::new(rendered, series))
        }
        None => {
            debug!("The table produced no totals, so there is no chart to draw");
            Ok(Out::new_message("Nothing to chart"))
        }
    }
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
    fn test_chart_from_file() {
        let file = write_file("Paris 100 50 20 10\nRome 50 20 10 10\n");
        let out = chart(Some(file.path()), 20).unwrap();
        let series = out.structure().unwrap();
        assert_eq!(series.bars().len(), 2);
        assert!(out.message().contains(&"#".repeat(20)));
    }

    #[test]
    fn test_chart_empty_file_has_no_series() {
        let file = write_file("");
        let out = chart(Some(file.path()), 20).unwrap();
        assert!(out.structure().is_none());
        assert_eq!(out.message(), "Nothing to chart");
    }

    #[test]
    fn test_chart_invalid_input_fails() {
        let file = write_file("Paris 0 0 0 0\n");
        let err = chart(Some(file.path()), 20).unwrap_err();
        assert_eq!(
            err.downcast::<AggregateError>().unwrap(),
            AggregateError::EmptyOrZeroRow
        );
    }
}

use std::fmt::Write;

use vecdump_core::models::SparseVector;

use crate::consts::{CSV_SEPARATOR, INITIAL_CAPACITY};
use crate::error::Result;

///
/// Append a vector to `sink` as one CSV line.
///
/// Every cell `0..size` is written in index order, zeros included, followed by a
/// line break. When `names_as_comments` is set and the vector is named, a
/// `#<name>` line comes first.
///
/// # Arguments:
/// - `vector`: the vector to render
/// - `names_as_comments`: emit the name as a comment line
/// - `sink`: where to append the text
///
pub fn write_csv<W: Write>(vector: &SparseVector, names_as_comments: bool, sink: &mut W) -> Result<()> {
    if names_as_comments {
        if let Some(name) = vector.name() {
            writeln!(sink, "#{}", name)?;
        }
    }

    for (i, element) in vector.iter_all().enumerate() {
        if i > 0 {
            sink.write_str(CSV_SEPARATOR)?;
        }
        write!(sink, "{:?}", element.value)?;
    }
    sink.write_char('\n')?;

    Ok(())
}

///
/// Render a vector as a CSV line, see [`write_csv`].
///
pub fn vector_to_csv_string(vector: &SparseVector, names_as_comments: bool) -> Result<String> {
    let mut csv = String::with_capacity(INITIAL_CAPACITY);
    write_csv(vector, names_as_comments, &mut csv)?;
    Ok(csv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::fmt;

    use crate::error::FormatError;

    #[fixture]
    fn named() -> SparseVector {
        SparseVector::new(3, vec![(0, 1.5), (2, 3.0)])
            .unwrap()
            .with_name("v1")
    }

    #[rstest]
    fn test_dense_values_in_order() {
        let vector = SparseVector::new(3, vec![(2, 3.0), (0, 1.5)]).unwrap();
        assert_eq!(vector_to_csv_string(&vector, false).unwrap(), "1.5,0.0,3.0\n");
    }

    #[rstest]
    fn test_value_count_matches_size() {
        let vector = SparseVector::new(10, vec![(4, 2.25)]).unwrap();
        let csv = vector_to_csv_string(&vector, false).unwrap();
        assert_eq!(csv.trim_end().split(',').count(), 10);
    }

    #[rstest]
    fn test_name_as_comment(named: SparseVector) {
        let csv = vector_to_csv_string(&named, true).unwrap();
        assert_eq!(csv, "#v1\n1.5,0.0,3.0\n");
    }

    #[rstest]
    fn test_name_not_emitted_without_flag(named: SparseVector) {
        let csv = vector_to_csv_string(&named, false).unwrap();
        assert!(!csv.contains('#'));
    }

    #[rstest]
    fn test_unnamed_vector_has_no_comment() {
        let vector = SparseVector::new(1, vec![(0, 1.0)]).unwrap();
        assert_eq!(vector_to_csv_string(&vector, true).unwrap(), "1.0\n");
    }

    #[rstest]
    fn test_empty_vector_is_a_blank_line() {
        let vector = SparseVector::new(0, vec![]).unwrap();
        assert_eq!(vector_to_csv_string(&vector, false).unwrap(), "\n");
    }

    #[rstest]
    fn test_appends_to_existing_sink(named: SparseVector) {
        let mut sink = String::from("header\n");
        write_csv(&named, false, &mut sink).unwrap();
        write_csv(&named, false, &mut sink).unwrap();
        assert_eq!(sink, "header\n1.5,0.0,3.0\n1.5,0.0,3.0\n");
    }

    struct FailingSink;

    impl fmt::Write for FailingSink {
        fn write_str(&mut self, _s: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[rstest]
    fn test_sink_failure_is_propagated(named: SparseVector) {
        let result = write_csv(&named, true, &mut FailingSink);
        assert!(matches!(result, Err(FormatError::Sink(_))));
    }

    #[rstest]
    fn test_large_and_non_finite_values() {
        let vector =
            SparseVector::new(3, vec![(0, 1e7), (1, f64::INFINITY), (2, f64::NAN)]).unwrap();
        assert_eq!(
            vector_to_csv_string(&vector, false).unwrap(),
            "10000000.0,inf,NaN\n"
        );
    }
}

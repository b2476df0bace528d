//! Row limiting helpers.
//!
//! Dialects that page results with a keyword placed right after `SELECT`
//! (such as Informix `SELECT SKIP m FIRST n`) rewrite the query text
//! instead of appending a trailing clause. The rewrite is textual: the
//! first `select` in the text is taken as the statement keyword, even if it
//! sits inside a literal or a comment.

const SELECT_KEYWORD: &str = "select";

/// Byte offset just past the first case-insensitive `select` in `query`.
///
/// Returns `None` when the text contains no `select` at all.
#[must_use]
pub fn end_of_select_keyword(query: &str) -> Option<usize> {
    let needle = SELECT_KEYWORD.as_bytes();
    query
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|start| start + needle.len())
}

/// Offset and row count requested for a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowSelection {
    /// Number of rows to skip.
    pub first_row: Option<i64>,
    /// Maximum number of rows to return.
    pub max_rows: Option<i64>,
}

impl RowSelection {
    /// Creates an empty selection (no limit, no offset).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            first_row: None,
            max_rows: None,
        }
    }

    /// Sets the number of rows to skip.
    #[must_use]
    pub const fn first_row(mut self, first_row: i64) -> Self {
        self.first_row = Some(first_row);
        self
    }

    /// Sets the maximum number of rows to return.
    #[must_use]
    pub const fn max_rows(mut self, max_rows: i64) -> Self {
        self.max_rows = Some(max_rows);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_select_keyword() {
        assert_eq!(end_of_select_keyword("select * from t"), Some(6));
        assert_eq!(end_of_select_keyword("SELECT * FROM t"), Some(6));
        assert_eq!(end_of_select_keyword("  SeLeCt 1"), Some(8));
        assert_eq!(end_of_select_keyword("update t set a = 1"), None);
        assert_eq!(end_of_select_keyword(""), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let sql = "/* selected */ select a from t";
        assert_eq!(end_of_select_keyword(sql), Some(9));
        assert_eq!(&sql[..9], "/* select");
    }

    #[test]
    fn test_non_ascii_prefix() {
        let sql = "-- état\nselect 1";
        let end = end_of_select_keyword(sql).unwrap();
        assert_eq!(&sql[..end], "-- état\nselect");
    }

    #[test]
    fn test_row_selection() {
        let selection = RowSelection::new().first_row(10).max_rows(5);
        assert_eq!(selection.first_row, Some(10));
        assert_eq!(selection.max_rows, Some(5));
        assert_eq!(RowSelection::new(), RowSelection::default());
    }
}

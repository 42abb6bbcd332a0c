/*!
Table cells.

A GFM table row is split on every `|` that is not escaped by a backslash. An
odd number of backslashes before a pipe escapes it, an even number only escapes
themselves:
- `a \| b` is one cell: `a | b`.
- `a \\| b` is two cells: `a \\` and `b`.
- `a \\\| b` is one cell: `a \\| b`.

See [`split_cells()`].
*/
use mdkit_text::escape::EscapedSplit;

/// Iterator over the raw cells of a table row, split on unescaped `|`.
///
/// The cells are neither trimmed nor unescaped. A row with leading and
/// trailing pipes yields empty cells at both ends.
///
/// ## Example
/// ```
/// use mdkit::table::cells;
///
/// assert_eq!(cells(r"| a | b\|c |").collect::<Vec<_>>(), ["", " a ", r" b\|c ", ""]);
/// ```
pub fn cells(row: &str) -> EscapedSplit<'_> {
    EscapedSplit::new(row, b'|')
}

/// Split a table row into exactly `count` cells.
///
/// Extra cells are dropped and missing ones are filled with empty strings.
/// Each cell is trimmed, and escaped pipes (`\|`) in it become plain pipes.
///
/// ## Example
/// ```
/// use mdkit::table::split_cells;
///
/// assert_eq!(split_cells("aaa | bbb | ccc", 3), ["aaa", "bbb", "ccc"]);
/// assert_eq!(split_cells(r"aaa | bb\|b | ccc", 3), ["aaa", "bb|b", "ccc"]);
/// assert_eq!(split_cells(r"aaa | bb\\|b | ccc", 3), ["aaa", r"bb\\", "b"]);
/// assert_eq!(split_cells("a|b", 4), ["a", "b", "", ""]);
/// ```
pub fn split_cells(row: &str, count: usize) -> Vec<String> {
    let mut result: Vec<String> = cells(row).take(count).map(clean_cell).collect();
    result.resize(count, String::new());
    result
}

// Leading or trailing whitespace is ignored per GFM
fn clean_cell(cell: &str) -> String {
    cell.trim().replace(r"\|", "|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split() {
        assert_eq!(split_cells("a|b", 5), ["a", "b", "", "", ""]);
        assert_eq!(split_cells("a|b|c", 2), ["a", "b"]);
        assert_eq!(split_cells("a|b", 0), Vec::<String>::new());
        assert_eq!(split_cells("", 1), [""]);
        assert_eq!(split_cells("", 2), ["", ""]);
    }

    #[test]
    fn outer_pipes() {
        assert_eq!(split_cells("| a | b |", 4), ["", "a", "b", ""]);
    }

    #[test]
    fn escapes() {
        assert_eq!(
            split_cells(r"aaa | bb\\|b | ccc", 5),
            ["aaa", r"bb\\", "b", "ccc", ""]
        );
        assert_eq!(split_cells(r"aaa | bb\\\|b | ccc", 3), ["aaa", r"bb\\|b", "ccc"]);
        assert_eq!(split_cells(r"\|", 1), ["|"]);
        assert_eq!(split_cells(r"`a\|b` | c", 2), ["`a|b`", "c"]);
    }

    #[test]
    fn whitespace() {
        assert_eq!(split_cells("  a\t|\u{3000}b ", 2), ["a", "b"]);
        assert_eq!(split_cells("a  ||  b", 3), ["a", "", "b"]);
    }

    #[test]
    fn raw_cells() {
        assert_eq!(cells("").collect::<Vec<_>>(), [""]);
        assert_eq!(cells(r"a\\|b").collect::<Vec<_>>(), [r"a\\", "b"]);
    }
}

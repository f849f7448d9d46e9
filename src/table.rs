use std::fmt::Display;
use std::fmt::Write as _;

/// Concatenates the items' string forms, inserting `separator` between
/// consecutive entries.
///
/// Usage example:
///
/// ```
/// use natural_str::table::join;
///
/// let joined = join([1, 2, 3], |n| format!("#{n}"), ", ");
/// assert_eq!(joined, "#1, #2, #3");
/// ```
pub fn join<I, F>(items: I, mut to_string: F, separator: &str) -> String
where
    I: IntoIterator,
    F: FnMut(I::Item) -> String,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&to_string(item));
    }
    out
}

/// String form of an optional value, `"null"` when absent.
pub fn display_or_null<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}

/// Rendering options for [`render_table`].
pub struct TableOptions<'a> {
    /// Emitted after every cell, the last of a row included.
    pub separator: &'a str,
    /// Prepends a `Column N` header line.
    pub include_headers: bool,
    /// Prefix of every line; useful for indenting the table.
    pub line_prepend: &'a str,
    /// Suffix of every line, before the newline.
    pub line_append: &'a str,
}

impl Default for TableOptions<'_> {
    fn default() -> Self {
        Self {
            separator: "\t",
            include_headers: false,
            line_prepend: "",
            line_append: "",
        }
    }
}

/// Renders rows of data as newline-terminated text lines, one cell per
/// column with `to_string` applied to each.
///
/// Usage example:
///
/// ```
/// use natural_str::table::{render_table, TableOptions};
///
/// let rows = vec![vec![1, 2], vec![3, 4]];
/// let text = render_table(&rows, |n| n.to_string(), &TableOptions::default());
/// assert_eq!(text, "1\t2\t\n3\t4\t\n");
/// ```
pub fn render_table<T, F>(rows: &[Vec<T>], to_string: F, options: &TableOptions) -> String
where
    F: Fn(&T) -> String,
{
    let columns = rows.first().map_or(0, Vec::len);
    let mut out = String::new();

    if options.include_headers {
        out.push_str(options.line_prepend);
        for column in 1..=columns {
            let _ = write!(out, "Column {}{}", column, options.separator);
        }
        out.push_str(options.line_append);
        out.push('\n');
    }

    for row in rows {
        out.push_str(options.line_prepend);
        for cell in row {
            out.push_str(&to_string(cell));
            out.push_str(options.separator);
        }
        out.push_str(options.line_append);
        out.push('\n');
    }

    out
}

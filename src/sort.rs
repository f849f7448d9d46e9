use crate::natural::{natural_cmp, natural_cmp_opt};

/// Sorts a slice of strings in place in natural order. Uses the standard
/// library's unstable sort, so elements that compare equal may be
/// reordered relative to each other.
///
/// Usage example:
///
/// ```
/// use natural_str::natural_sort;
///
/// let mut files = vec!["item10", "item2", "item1", "ITEM3"];
/// natural_sort(&mut files);
/// assert_eq!(files, ["ITEM3", "item1", "item2", "item10"]);
/// ```
pub fn natural_sort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_unstable_by(|l, r| natural_cmp(l.as_ref(), r.as_ref()));
}

/// Sorts a slice of optional strings in place in natural order. `None`
/// entries order before every present string. Unstable, like
/// [`natural_sort`].
pub fn natural_sort_opt(items: &mut [Option<String>]) {
    items.sort_unstable_by(|l, r| natural_cmp_opt(l.as_deref(), r.as_deref()));
}

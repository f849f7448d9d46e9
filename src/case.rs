/// Uppercases the first character, leaving the rest untouched. Empty in,
/// empty out.
pub fn to_upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spaces out a CamelCase, PascalCase or snake_case identifier into a
/// capitalized, human-readable form: underscores become spaces and a
/// space is inserted at every lowercase-to-uppercase boundary.
///
/// Usage example:
///
/// ```
/// use natural_str::case::nicify;
///
/// assert_eq!(nicify("maxHealthPoints"), "Max Health Points");
/// assert_eq!(nicify("snake_case_name"), "Snake case name");
/// ```
pub fn nicify(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut spaced = String::with_capacity(text.len() + 4);
    let mut prev_lower = false;
    for ch in text.chars() {
        if ch == '_' {
            spaced.push(' ');
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
        prev_lower = ch.is_ascii_lowercase();
    }
    to_upper_first(&spaced)
}

/// Case-folded equality.
pub fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// Case-folded substring test.
pub fn contains_ignore_case(text: &str, value: &str) -> bool {
    text.to_lowercase().contains(&value.to_lowercase())
}

/// Whether any entry contains `needle`. Stops at the first match.
pub fn any_contains<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    items.iter().any(|item| item.as_ref().contains(needle))
}

/// [`any_contains`], ignoring case.
pub fn any_contains_ignore_case<S: AsRef<str>>(items: &[S], needle: &str) -> bool {
    items.iter().any(|item| contains_ignore_case(item.as_ref(), needle))
}

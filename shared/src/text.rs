/// True when the input has nothing but whitespace in it.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Lowercase form used for keyword containment checks.
pub fn fold_case(input: &str) -> String {
    input.to_lowercase()
}

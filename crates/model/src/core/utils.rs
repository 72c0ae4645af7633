/// Escape a string for use inside a single-quoted SQL literal:
/// every `'` becomes `''`.
pub fn escape_sql_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\''); // double the quote
        }
        out.push(ch);
    }
    out
}

/// Keep only the letters and digits of `s`.
pub fn letters_and_digits(s: &str) -> String {
    s.chars().filter(|ch| ch.is_alphanumeric()).collect()
}

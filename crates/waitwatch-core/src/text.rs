/// Keep ASCII letters and digits and replace every run of other characters
/// with a single `separator`.
///
/// Used for city slugs (`'-'`) and export file tags (`'_'`).
#[must_use]
pub fn collapse_non_alphanumeric(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_gap = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push(separator);
            in_gap = true;
        }
    }
    out
}

use regex::Regex;

/// Lowercase a title and collapse every non-alphanumeric run to `_`, for use
/// in filenames (e.g. "Kalyanam 2025!" -> "kalyanam_2025_").
pub fn slugify(s: &str) -> String {
    let re = Regex::new(r"[^a-z0-9]+").unwrap();
    re.replace_all(&s.to_lowercase(), "_").to_string()
}

/// Quantity as printed in a table cell: whole numbers without a decimal
/// point, fractional values as-is. Zero is the caller's "unset" marker and
/// never reaches this function.
pub fn format_quantity(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

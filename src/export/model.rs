use crate::models::ListRow;
use crate::utils::formatting::format_quantity;

/// Column headers for CSV / terminal preview.
pub fn get_headers() -> Vec<&'static str> {
    vec!["s_no", "name", "kg", "gram", "alavu"]
}

/// One row as display cells, with the same blank rules as the document:
/// zero quantities and empty strings show as empty cells.
pub fn row_to_cells(r: &ListRow) -> Vec<String> {
    vec![
        r.s_no.to_string(),
        r.name.clone(),
        if r.kg != 0.0 {
            format_quantity(r.kg)
        } else {
            String::new()
        },
        if r.gram != 0.0 {
            format_quantity(r.gram)
        } else {
            String::new()
        },
        r.alavu.clone(),
    ]
}

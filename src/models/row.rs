use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One line item of a shopping list.
///
/// `kg`/`gram` equal to zero and empty strings mean "unset" and render as
/// blank cells in every output, never as `0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRow {
    #[serde(default)]
    pub s_no: usize,
    pub name: String,
    #[serde(default)]
    pub kg: f64,
    #[serde(default)]
    pub gram: f64,
    #[serde(default)]
    pub alavu: String,
}

impl ListRow {
    /// A row with no name and no quantities carries no information and is
    /// dropped before export.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.kg == 0.0 && self.gram == 0.0
    }
}

/// Drop blank rows, reject malformed quantities and renumber `s_no`
/// sequentially from 1.
///
/// This is the single validation boundary: downstream consumers (document
/// template, CSV/JSON writers, terminal preview) trust the rows they receive.
pub fn sanitize_rows(rows: Vec<ListRow>) -> AppResult<Vec<ListRow>> {
    for row in &rows {
        if !row.kg.is_finite() || row.kg < 0.0 {
            return Err(AppError::Validation(format!(
                "row '{}': kg must be a non-negative number",
                row.name
            )));
        }
        if !row.gram.is_finite() || row.gram < 0.0 {
            return Err(AppError::Validation(format!(
                "row '{}': gram must be a non-negative number",
                row.name
            )));
        }
    }

    let out = rows
        .into_iter()
        .filter(|r| !r.is_blank())
        .enumerate()
        .map(|(i, mut r)| {
            r.s_no = i + 1;
            r
        })
        .collect();

    Ok(out)
}

//! Table rendering utilities for CLI outputs.
//!
//! Widths are computed from display width, not byte length, so Tamil item
//! names line up correctly in the terminal.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&str>) -> Self {
        Self {
            headers: headers.into_iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn col_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }

        widths
    }

    fn render_line(cells: &[String], widths: &[usize], out: &mut String) {
        for (i, cell) in cells.iter().enumerate() {
            let pad = widths[i].saturating_sub(cell.width());
            out.push_str(cell);
            out.push_str(&" ".repeat(pad));
            out.push_str("  ");
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.col_widths();
        let mut out = String::new();

        Self::render_line(&self.headers, &widths, &mut out);

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            Self::render_line(row, &widths, &mut out);
        }

        out
    }
}

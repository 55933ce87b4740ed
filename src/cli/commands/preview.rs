use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::template::page_count;
use crate::export::{get_headers, row_to_cells};
use crate::models::{EventFile, row::sanitize_rows};
use crate::ui::messages::info;
use crate::utils::date::display_date;
use crate::utils::table::Table;
use std::path::Path;

/// Print one list of an event file as an aligned terminal table, followed by
/// the page count an HTML export of the same rows would produce.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Preview { file, list_type } = cmd {
        let event_file = EventFile::load(Path::new(file))?;
        let event = event_file.event_info()?;
        let rows = sanitize_rows(event_file.rows_for(*list_type).to_vec())?;

        let date = event.date.map(display_date).unwrap_or_default();
        println!("{} {} ({})", event.title, date, list_type.tamil_label());
        println!();

        let mut table = Table::new(get_headers());
        for row in &rows {
            table.add_row(row_to_cells(row));
        }
        print!("{}", table.render());

        println!();
        info(format!(
            "{} row(s), {} page(s) when exported.",
            rows.len(),
            page_count(rows.len())
        ));
    }
    Ok(())
}

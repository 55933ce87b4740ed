use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the generated document markup to disk. Conversion to PDF is the
/// job of an external HTML-to-PDF engine fed with this file.
pub(crate) fn export_html(document: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all(document.as_bytes())?;

    notify_export_success("HTML", path);
    Ok(())
}

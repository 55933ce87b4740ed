use crate::config::{Config, FOOTER_MAX_LEN};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::template;
use crate::models::{EventFile, HeaderDesign, ListType, row::sanitize_rows};
use crate::ui::messages::warning;
use crate::utils::date::{file_stamp, today};
use crate::utils::formatting::slugify;
use std::path::{Path, PathBuf};

/// Per-invocation overrides for the values that normally come from the
/// config file or the event file itself.
#[derive(Debug, Default)]
pub struct ExportOptions {
    pub out: Option<String>,
    pub design: Option<HeaderDesign>,
    pub design_url: Option<String>,
    pub footer: Option<String>,
    pub force: bool,
}

/// High-level export orchestration.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one list of an event file.
    ///
    /// Loads and validates the event file, drops blank rows, renumbers the
    /// survivors, resolves header/footer overrides and writes the requested
    /// artifact. The document generator itself stays pure; everything with a
    /// side effect happens here.
    pub fn export(
        cfg: &Config,
        file: &str,
        list_type: ListType,
        format: ExportFormat,
        opts: &ExportOptions,
    ) -> AppResult<()> {
        let event_file = EventFile::load(Path::new(file))?;
        let event = event_file.event_info()?;
        let rows = sanitize_rows(event_file.rows_for(list_type).to_vec())?;

        if rows.is_empty() {
            warning(format!(
                "No {} rows found in '{}'; the document will contain one blank page.",
                list_type.lt_as_str(),
                file
            ));
        }

        let design = opts.design.unwrap_or(cfg.header_design);
        let design_url = opts
            .design_url
            .as_deref()
            .or(cfg.custom_design_url.as_deref());

        let footer = resolve_footer(opts, &event_file, cfg)?;

        let path = match &opts.out {
            Some(out) => PathBuf::from(out),
            None => PathBuf::from(default_file_name(&event.title, list_type, format)),
        };

        ensure_writable(&path, opts.force)?;

        match format {
            ExportFormat::Html => {
                let document = template::generate_document(
                    &event,
                    list_type,
                    &rows,
                    &cfg.profile,
                    design,
                    design_url,
                    &footer,
                );
                export_html(&document, &path)?;
            }
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}

/// Footer precedence: CLI flag, then event file, then config default.
fn resolve_footer(opts: &ExportOptions, event_file: &EventFile, cfg: &Config) -> AppResult<String> {
    let footer = opts
        .footer
        .as_deref()
        .or(event_file.footer.as_deref())
        .or(cfg.footer_text.as_deref())
        .unwrap_or("")
        .to_string();

    if footer.chars().count() > FOOTER_MAX_LEN {
        return Err(AppError::Validation(format!(
            "footer text exceeds {FOOTER_MAX_LEN} characters"
        )));
    }

    Ok(footer)
}

/// Derived output name: `<slug(title)>_<maligai|kaykari>_<YYYYMMDD>.<ext>`,
/// e.g. `kalyanam_maligai_20250205.html`.
pub fn default_file_name(title: &str, list_type: ListType, format: ExportFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        slugify(title.trim()),
        list_type.file_slug(),
        file_stamp(today()),
        format.as_str()
    )
}

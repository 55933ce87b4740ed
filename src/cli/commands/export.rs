use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportOptions};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        list_type,
        format,
        out,
        design,
        design_url,
        footer,
        force,
    } = cmd
    {
        let opts = ExportOptions {
            out: out.clone(),
            design: *design,
            design_url: design_url.clone(),
            footer: footer.clone(),
            force: *force,
        };
        ExportLogic::export(cfg, file, *list_type, *format, &opts)?;
    }
    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ProfileInfo;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Create the configuration directory and write a starter config file with
/// placeholder profile values. An existing file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.config.as_deref().map(Path::new);

    let target = custom
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::config_file);

    if target.exists() {
        info(format!(
            "Configuration already exists: {}",
            target.display()
        ));
        return Ok(());
    }

    let cfg = Config {
        profile: ProfileInfo {
            name: "Your Business".to_string(),
            mobile: "".to_string(),
            address: "".to_string(),
            profile_image: None,
        },
        ..Config::default()
    };

    let path = cfg.save(custom)?;
    success(format!("Config file created: {}", path.display()));
    info("Edit it to set your profile name, mobile and address.");

    Ok(())
}

use crate::errors::{AppError, AppResult};
use crate::models::{HeaderDesign, ProfileInfo};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Footer text is clipped at the UI layer of the original product; the same
/// limit is enforced here at every entry point.
pub const FOOTER_MAX_LEN: usize = 180;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileInfo,
    #[serde(default)]
    pub header_design: HeaderDesign,
    #[serde(default)]
    pub custom_design_url: Option<String>,
    #[serde(default)]
    pub footer_text: Option<String>,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pattiyal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pattiyal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pattiyal.conf")
    }

    /// Load configuration from `custom_path` or the default location.
    /// A missing file yields defaults (empty profile, default header).
    pub fn load(custom_path: Option<&Path>) -> AppResult<Self> {
        let path = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        let cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))?;

        if let Some(footer) = &cfg.footer_text
            && footer.chars().count() > FOOTER_MAX_LEN
        {
            return Err(AppError::Config(format!(
                "footer_text exceeds {FOOTER_MAX_LEN} characters"
            )));
        }

        Ok(cfg)
    }

    /// Write this configuration to `custom_path` or the default location,
    /// creating the parent directory when needed.
    pub fn save(&self, custom_path: Option<&Path>) -> AppResult<PathBuf> {
        let path = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        let mut file = fs::File::create(&path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;

        Ok(path)
    }

    /// Consistency check used by `config --check`: reports the list of
    /// problems instead of failing on the first one.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.profile.name.trim().is_empty() {
            problems.push("profile.name is empty".to_string());
        }
        if self.profile.mobile.trim().is_empty() {
            problems.push("profile.mobile is empty".to_string());
        }
        if self.header_design == HeaderDesign::Custom
            && self
                .custom_design_url
                .as_deref()
                .unwrap_or("")
                .trim()
                .is_empty()
        {
            problems.push(
                "header_design is 'custom' but custom_design_url is not set \
                 (exports will fall back to the profile header)"
                    .to_string(),
            );
        }

        problems
    }
}

use super::row::ListRow;
use crate::errors::{AppError, AppResult};
use crate::models::ListType;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Event data rendered in the title block of every page.
#[derive(Debug, Clone)]
pub struct EventInfo {
    pub title: String,
    pub date: Option<NaiveDate>,
}

/// On-disk input document: one event with its grocery and vegetable lists.
///
/// Read from JSON or YAML depending on the file extension. The `date` field
/// is an ISO `YYYY-MM-DD` string or absent; `footer` is free text shown at
/// the bottom of every exported page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFile {
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub grocery: Vec<ListRow>,
    #[serde(default)]
    pub vegetable: Vec<ListRow>,
    #[serde(default)]
    pub footer: Option<String>,
}

impl EventFile {
    /// Load an event file, dispatching on extension (`.json` vs `.yaml`/`.yml`).
    pub fn load(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::EventFile(display.clone(), e.to_string()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let parsed: EventFile = match ext.as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| AppError::EventFile(display.clone(), e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| AppError::EventFile(display.clone(), e.to_string()))?,
            other => {
                return Err(AppError::EventFile(
                    display,
                    format!("unsupported extension '{other}' (expected json, yaml or yml)"),
                ));
            }
        };

        if parsed.title.trim().is_empty() {
            return Err(AppError::EventFile(display, "event title is required".into()));
        }

        Ok(parsed)
    }

    /// Rows of the requested list, still unsanitized.
    pub fn rows_for(&self, list_type: ListType) -> &[ListRow] {
        match list_type {
            ListType::Grocery => &self.grocery,
            ListType::Vegetable => &self.vegetable,
        }
    }

    /// Event header data with the date parsed to a calendar value.
    pub fn event_info(&self) -> AppResult<EventInfo> {
        let date = match &self.date {
            None => None,
            Some(s) if s.trim().is_empty() => None,
            Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
        };

        Ok(EventInfo {
            title: self.title.trim().to_string(),
            date,
        })
    }
}

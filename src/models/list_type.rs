use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Grocery and vegetable lists are maintained independently per event; a
/// single export always covers exactly one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Grocery,
    Vegetable,
}

impl ListType {
    pub fn lt_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grocery" => Some(Self::Grocery),
            "vegetable" => Some(Self::Vegetable),
            _ => None,
        }
    }

    pub fn lt_as_str(&self) -> &'static str {
        match self {
            ListType::Grocery => "grocery",
            ListType::Vegetable => "vegetable",
        }
    }

    /// Localized label printed under the event title on every page.
    pub fn tamil_label(&self) -> &'static str {
        match self {
            ListType::Grocery => "மளிகை பட்டியல்",
            ListType::Vegetable => "காய்கறி பட்டியல்",
        }
    }

    /// Transliterated slug used in derived output filenames.
    pub fn file_slug(&self) -> &'static str {
        match self {
            ListType::Grocery => "maligai",
            ListType::Vegetable => "kaykari",
        }
    }
}

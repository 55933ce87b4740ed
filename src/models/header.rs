use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Header design selected by the user: the profile-derived header or an
/// uploaded custom banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HeaderDesign {
    Default,
    Custom,
}

impl Default for HeaderDesign {
    fn default() -> Self {
        HeaderDesign::Default
    }
}

/// Resolved header source for one render. The two variants are mutually
/// exclusive: a page shows either the custom banner or the profile block,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSource {
    Profile,
    Custom { url: String },
}

impl HeaderSource {
    /// A custom design without a URL falls back to the profile header.
    pub fn resolve(design: HeaderDesign, custom_url: Option<&str>) -> Self {
        match (design, custom_url) {
            (HeaderDesign::Custom, Some(url)) if !url.is_empty() => HeaderSource::Custom {
                url: url.to_string(),
            },
            _ => HeaderSource::Profile,
        }
    }
}

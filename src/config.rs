use crate::error::HarvestError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Configuration for a harvest session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Root URL of the catalogue site
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the finalized dataset is written and read back from
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

/// Default value for base_url
fn default_base_url() -> String {
    "https://books.toscrape.com".to_string()
}

/// Default value for output_path
fn default_output_path() -> String {
    "books.csv".to_string()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_path: default_output_path(),
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarvestError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// The configured site root as a parsed URL
    pub fn site_url(&self) -> Result<Url, HarvestError> {
        Url::parse(&self.base_url).map_err(|source| HarvestError::BadUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    /// The catalogue directory every item href is resolved against.
    /// The trailing slash matters for relative joins.
    pub fn link_base(&self) -> Result<Url, HarvestError> {
        let site = self.site_url()?;
        site.join("catalogue/").map_err(|source| HarvestError::BadUrl {
            url: self.base_url.clone(),
            source,
        })
    }
}

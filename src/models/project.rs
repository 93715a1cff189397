use serde::{Deserialize, Serialize};

/// One catalog entry. `download_link` is unique across the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub download_link: String,
    pub private: bool,
    pub role: i64,  // minimum role needed to download
}

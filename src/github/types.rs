// GitHub API response types.
// Defines structs for deserializing repository contents listings.

use serde::{Deserialize, Serialize};

/// Kind of item in a contents listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Unknown,
}

/// One item of a `GET /repos/{owner}/{repo}/contents/{path}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub size: u64,
    pub html_url: Option<String>,
    pub download_url: Option<String>,
}

impl DirectoryEntry {
    /// Build a bare entry with only a name and a type.
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            entry_type,
            size: 0,
            html_url: None,
            download_url: None,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, EntryType::File)
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, EntryType::Dir)
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// True once a response reported a limit and the quota is used up.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}

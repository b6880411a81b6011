// GitHub API endpoint functions.
// Fetches and decodes repository contents listings.

use crate::error::Result;
use crate::site::ListingSource;

use super::client::GitHubClient;
use super::types::{DirectoryEntry, RateLimit};

/// Endpoint path for a contents listing, e.g. `octo/courses/contents/python`.
pub fn contents_endpoint(repo_path: &str) -> String {
    format!("/repos/{}", repo_path.trim_start_matches('/'))
}

/// Decode a contents response body.
///
/// The API answers with an object instead of an array when the path names a
/// single file; that shape is rejected here.
pub fn parse_listing(body: &str) -> Result<Vec<DirectoryEntry>> {
    Ok(serde_json::from_str(body)?)
}

impl GitHubClient {
    /// Get the directory listing at `repo_path`.
    pub async fn get_contents(&mut self, repo_path: &str) -> Result<Vec<DirectoryEntry>> {
        let response = self.get(&contents_endpoint(repo_path)).await?;
        let body = response.text().await?;
        parse_listing(&body)
    }
}

impl ListingSource for GitHubClient {
    async fn fetch_listing(&mut self, repo_path: &str) -> Result<Vec<DirectoryEntry>> {
        self.get_contents(repo_path).await
    }

    fn quota(&self) -> Option<RateLimit> {
        Some(*self.rate_limit())
    }
}

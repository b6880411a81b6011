// GitHub API module.
// Provides an unauthenticated client and types for the repository contents API.

#![allow(dead_code)]

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::GitHubClient;
pub use types::*;

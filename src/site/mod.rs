// Course site service.
// Owns the listing source and the shared listing cache used by both entry points.

mod listing;
mod navigation;

use tracing::debug;

use crate::cache::ListingCache;
use crate::error::Result;
use crate::github::{DirectoryEntry, RateLimit};
use crate::lessons::LessonList;

pub use listing::RenderOutcome;
pub use navigation::NavLinks;

/// Where directory listings come from.
pub trait ListingSource {
    /// Fetch the raw directory listing at `repo_path`.
    fn fetch_listing(
        &mut self,
        repo_path: &str,
    ) -> impl Future<Output = Result<Vec<DirectoryEntry>>>;

    /// Latest known API quota, if the source tracks one.
    fn quota(&self) -> Option<RateLimit> {
        None
    }
}

/// Listing renderer and lesson navigator over one source and one cache.
///
/// The cache is only reachable through `&mut self`, so a read followed by a
/// write can never interleave with another entry point.
pub struct CourseSite<S> {
    source: S,
    cache: ListingCache,
}

impl<S: ListingSource> CourseSite<S> {
    pub fn new(source: S) -> Self {
        Self::with_cache(source, ListingCache::new())
    }

    pub fn with_cache(source: S, cache: ListingCache) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &ListingCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch, filter and sort the lessons at `repo_path`.
    async fn load_lessons(&mut self, repo_path: &str) -> Result<LessonList> {
        let entries = self.source.fetch_listing(repo_path).await?;
        let total = entries.len();
        let lessons = LessonList::from_entries(entries);
        debug!(repo_path, total, lessons = lessons.len(), "fetched listing");
        Ok(lessons)
    }
}

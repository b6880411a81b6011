// In-memory listing cache.
// Remembers the last fetched lesson list and the course it belongs to.

use chrono::{DateTime, Utc};

use crate::lessons::LessonList;

/// A lesson list together with the course it was fetched for.
#[derive(Debug, Clone)]
pub struct CachedListing {
    pub course_id: String,
    pub lessons: LessonList,
    /// When the listing was fetched.
    pub fetched_at: DateTime<Utc>,
}

/// Session-wide cache shared by the listing renderer and the lesson navigator.
///
/// Holds at most one listing. Every `set` replaces the previous entry as a
/// whole; there are no partial updates.
#[derive(Debug, Default)]
pub struct ListingCache {
    current: Option<CachedListing>,
}

impl ListingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lessons for `course_id`, if the cache currently belongs to that course.
    pub fn get(&self, course_id: &str) -> Option<&LessonList> {
        self.current
            .as_ref()
            .filter(|cached| cached.course_id == course_id)
            .map(|cached| &cached.lessons)
    }

    /// Replace the cached listing.
    pub fn set(&mut self, course_id: &str, lessons: LessonList) {
        self.current = Some(CachedListing {
            course_id: course_id.to_string(),
            lessons,
            fetched_at: Utc::now(),
        });
    }

    /// Course id of the cached listing, for other widgets.
    pub fn course_id(&self) -> Option<&str> {
        self.current.as_ref().map(|cached| cached.course_id.as_str())
    }

    /// Cached lessons regardless of course.
    pub fn lessons(&self) -> Option<&LessonList> {
        self.current.as_ref().map(|cached| &cached.lessons)
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.current.as_ref().map(|cached| cached.fetched_at)
    }
}

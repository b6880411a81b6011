// Lesson navigator.
// Wires previous/next links on a lesson page from the cached or fetched listing.

use tracing::{debug, warn};

use crate::lessons::LessonList;
use crate::page::Page;

use super::{CourseSite, ListingSource};

/// Neighbours of the current lesson. Both empty when it was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    pub index: Option<usize>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Locate `current` by exact name and return its neighbours.
pub fn neighbor_links(lessons: &LessonList, current: &str) -> NavLinks {
    let Some(index) = lessons.position(current) else {
        return NavLinks::default();
    };

    let prev = index
        .checked_sub(1)
        .and_then(|i| lessons.get(i))
        .map(|entry| entry.name.clone());
    let next = lessons.get(index + 1).map(|entry| entry.name.clone());

    NavLinks {
        index: Some(index),
        prev,
        next,
    }
}

impl<S: ListingSource> CourseSite<S> {
    /// Show and target the previous/next links around `current_lesson`.
    ///
    /// Reuses the cached listing when it belongs to `course_id`. Fetch
    /// failures are logged and leave both links hidden.
    pub async fn setup_navigation<P: Page>(
        &mut self,
        page: &mut P,
        course_id: &str,
        current_lesson: &str,
        prev_id: &str,
        next_id: &str,
        repo_path: &str,
    ) -> NavLinks {
        page.set_visible(prev_id, false);
        page.set_visible(next_id, false);

        let lessons = match self.cache.get(course_id) {
            Some(lessons) => {
                debug!(course_id, "listing cache hit");
                lessons.clone()
            }
            None => {
                debug!(course_id, "listing cache miss");
                match self.load_lessons(repo_path).await {
                    Ok(lessons) => {
                        self.cache.set(course_id, lessons.clone());
                        lessons
                    }
                    Err(err) => {
                        warn!(course_id, repo_path, error = %err, "navigation unavailable");
                        return NavLinks::default();
                    }
                }
            }
        };

        let links = neighbor_links(&lessons, current_lesson);
        if links.index.is_none() {
            debug!(course_id, current_lesson, "lesson not in listing");
        }

        if let Some(prev) = &links.prev {
            page.set_visible(prev_id, true);
            page.set_link_target(prev_id, &format!("./{}", prev));
        }
        if let Some(next) = &links.next {
            page.set_visible(next_id, true);
            page.set_link_target(next_id, &format!("./{}", next));
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::DirectoryEntry;
    use crate::page::{CONTENT_ID, Document, INTRO_ID, NEXT_ID, PREV_ID};
    use crate::site::testing::{FakeResponse, FakeSource};

    const PYTHON: &str = "octo/courses/contents/python";
    const FLUTTER: &str = "octo/courses/contents/flutter";
    const LESSONS: [&str; 3] = ["01-intro.html", "02-loops.html", "03-for-loops.html"];

    fn three_lessons() -> LessonList {
        LessonList::from_entries(LESSONS.iter().map(|n| DirectoryEntry::file(*n)))
    }

    #[test]
    fn test_neighbor_links_middle() {
        let links = neighbor_links(&three_lessons(), "02-loops.html");
        assert_eq!(links.index, Some(1));
        assert_eq!(links.prev.as_deref(), Some("01-intro.html"));
        assert_eq!(links.next.as_deref(), Some("03-for-loops.html"));
    }

    #[test]
    fn test_neighbor_links_boundaries() {
        let first = neighbor_links(&three_lessons(), "01-intro.html");
        assert_eq!(first.prev, None);
        assert_eq!(first.next.as_deref(), Some("02-loops.html"));

        let last = neighbor_links(&three_lessons(), "03-for-loops.html");
        assert_eq!(last.prev.as_deref(), Some("02-loops.html"));
        assert_eq!(last.next, None);
    }

    #[test]
    fn test_neighbor_links_not_found() {
        let links = neighbor_links(&three_lessons(), "02-loops");
        assert_eq!(links, NavLinks::default());
        assert_eq!(neighbor_links(&LessonList::default(), "x"), NavLinks::default());
    }

    #[tokio::test]
    async fn test_first_lesson_shows_only_next() {
        let mut site = CourseSite::new(FakeSource::new().with_files(PYTHON, &LESSONS));
        let mut page = Document::lesson_page();

        site.setup_navigation(&mut page, "python", "01-intro.html", PREV_ID, NEXT_ID, PYTHON)
            .await;

        assert!(!page.is_visible(PREV_ID));
        assert!(page.link_target(PREV_ID).is_none());
        assert!(page.is_visible(NEXT_ID));
        assert_eq!(page.link_target(NEXT_ID), Some("./02-loops.html"));
    }

    #[tokio::test]
    async fn test_last_lesson_shows_only_prev() {
        let mut site = CourseSite::new(FakeSource::new().with_files(PYTHON, &LESSONS));
        let mut page = Document::lesson_page();

        site.setup_navigation(
            &mut page,
            "python",
            "03-for-loops.html",
            PREV_ID,
            NEXT_ID,
            PYTHON,
        )
        .await;

        assert!(page.is_visible(PREV_ID));
        assert_eq!(page.link_target(PREV_ID), Some("./02-loops.html"));
        assert!(!page.is_visible(NEXT_ID));
    }

    #[tokio::test]
    async fn test_unknown_lesson_hides_both() {
        let mut site = CourseSite::new(FakeSource::new().with_files(PYTHON, &LESSONS));
        let mut page = Document::lesson_page();

        let links = site
            .setup_navigation(&mut page, "python", "99-missing.html", PREV_ID, NEXT_ID, PYTHON)
            .await;

        assert_eq!(links, NavLinks::default());
        assert!(!page.is_visible(PREV_ID));
        assert!(!page.is_visible(NEXT_ID));
        assert!(page.link_target(PREV_ID).is_none());
        assert!(page.link_target(NEXT_ID).is_none());
    }

    #[tokio::test]
    async fn test_cache_reuse_and_course_mismatch() {
        let source = FakeSource::new()
            .with_files(PYTHON, &LESSONS)
            .with_files(FLUTTER, &["01-widgets.html", "02-layouts.html"]);
        let mut site = CourseSite::new(source);

        let mut course_page = Document::course_page();
        site.render(&mut course_page, "python", CONTENT_ID, INTRO_ID, PYTHON)
            .await;
        assert_eq!(site.source().requests.len(), 1);

        let mut lesson_page = Document::lesson_page();
        site.setup_navigation(
            &mut lesson_page,
            "python",
            "02-loops.html",
            PREV_ID,
            NEXT_ID,
            PYTHON,
        )
        .await;
        assert_eq!(site.source().requests.len(), 1);
        assert!(lesson_page.is_visible(PREV_ID));
        assert!(lesson_page.is_visible(NEXT_ID));

        let mut lesson_page = Document::lesson_page();
        site.setup_navigation(
            &mut lesson_page,
            "flutter",
            "01-widgets.html",
            PREV_ID,
            NEXT_ID,
            FLUTTER,
        )
        .await;
        assert_eq!(
            site.source().requests,
            vec![PYTHON.to_string(), FLUTTER.to_string()]
        );
        assert_eq!(site.cache().course_id(), Some("flutter"));
        assert_eq!(lesson_page.link_target(NEXT_ID), Some("./02-layouts.html"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_silent() {
        let mut site = CourseSite::new(
            FakeSource::new().with(PYTHON, FakeResponse::Status(404, "Not Found")),
        );
        let mut page = Document::lesson_page();

        let links = site
            .setup_navigation(&mut page, "python", "01-intro.html", PREV_ID, NEXT_ID, PYTHON)
            .await;

        assert_eq!(links, NavLinks::default());
        assert!(!page.is_visible(PREV_ID));
        assert!(!page.is_visible(NEXT_ID));
        assert_eq!(page.text(PREV_ID), Some("Previous"));
        assert!(site.cache().lessons().is_none());
    }

    #[tokio::test]
    async fn test_empty_fetch_replaces_cache() {
        let source = FakeSource::new()
            .with_files(PYTHON, &LESSONS)
            .with(FLUTTER, FakeResponse::Entries(Vec::new()));
        let mut site = CourseSite::new(source);

        let mut page = Document::lesson_page();
        site.setup_navigation(&mut page, "python", "01-intro.html", PREV_ID, NEXT_ID, PYTHON)
            .await;
        let mut page = Document::lesson_page();
        site.setup_navigation(&mut page, "flutter", "01-widgets.html", PREV_ID, NEXT_ID, FLUTTER)
            .await;

        assert_eq!(site.cache().course_id(), Some("flutter"));
        assert!(site.cache().lessons().is_some_and(|l| l.is_empty()));
        assert!(!page.is_visible(PREV_ID));
        assert!(!page.is_visible(NEXT_ID));
    }

    #[tokio::test]
    async fn test_empty_listing_is_reused_from_cache() {
        let mut site =
            CourseSite::new(FakeSource::new().with(FLUTTER, FakeResponse::Entries(Vec::new())));

        for _ in 0..2 {
            let mut page = Document::lesson_page();
            let links = site
                .setup_navigation(&mut page, "flutter", "01-widgets.html", PREV_ID, NEXT_ID, FLUTTER)
                .await;
            assert_eq!(links, NavLinks::default());
        }

        assert_eq!(site.source().requests, vec![FLUTTER.to_string()]);
    }

    #[tokio::test]
    async fn test_missing_buttons_are_tolerated() {
        let mut site = CourseSite::new(FakeSource::new().with_files(PYTHON, &LESSONS));
        let mut page = Document::new();

        let links = site
            .setup_navigation(&mut page, "python", "02-loops.html", PREV_ID, NEXT_ID, PYTHON)
            .await;

        assert_eq!(links.index, Some(1));
        assert!(!page.has_element(PREV_ID));
    }
}

// Listing renderer.
// Fills a course page with its introduction and one button per lesson.

use tracing::{debug, error, info};

use crate::catalog;
use crate::error::Result;
use crate::lessons::format_label;
use crate::page::{
    INTRO_FAILED, INTRO_PLACEHOLDER, LOADING_LESSONS, LessonButton, NO_LESSONS, Page,
    lessons_error,
};

use super::{CourseSite, ListingSource};

/// How a render pass ended. Failures are already shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { lessons: usize },
    Empty,
    Failed(String),
}

impl LessonButton {
    /// Button for a lesson file on the course page.
    pub fn for_lesson(name: &str) -> Self {
        Self {
            label: format_label(name),
            href: format!("./contents/{}", name),
        }
    }
}

impl<S: ListingSource> CourseSite<S> {
    /// Render the course introduction and lesson buttons.
    ///
    /// Never fails: fetch errors end up as a message in the content container.
    pub async fn render<P: Page>(
        &mut self,
        page: &mut P,
        course_id: &str,
        content_id: &str,
        intro_id: &str,
        repo_path: &str,
    ) -> RenderOutcome {
        match catalog::lookup(course_id) {
            Some(course) => page.set_text(intro_id, course.intro),
            None if page.has_element(intro_id) => page.set_text(intro_id, INTRO_PLACEHOLDER),
            None => {}
        }

        if page.has_element(content_id) {
            page.set_text(content_id, LOADING_LESSONS);
        }

        match self.render_lessons(page, course_id, content_id, repo_path).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let reason = err.to_string();
                error!(course_id, repo_path, %reason, "failed to load lessons");
                page.set_text(content_id, &lessons_error(&reason));
                if page.text(intro_id).is_some_and(str::is_empty) {
                    page.set_text(intro_id, INTRO_FAILED);
                }
                RenderOutcome::Failed(reason)
            }
        }
    }

    async fn render_lessons<P: Page>(
        &mut self,
        page: &mut P,
        course_id: &str,
        content_id: &str,
        repo_path: &str,
    ) -> Result<RenderOutcome> {
        let lessons = self.load_lessons(repo_path).await?;

        if lessons.is_empty() {
            info!(course_id, repo_path, "no lessons in listing");
            page.set_text(content_id, NO_LESSONS);
            return Ok(RenderOutcome::Empty);
        }

        let buttons: Vec<LessonButton> = lessons
            .iter()
            .map(|entry| LessonButton::for_lesson(&entry.name))
            .collect();
        let count = lessons.len();

        self.cache.set(course_id, lessons);
        debug!(course_id, count, "cached lesson listing");

        page.render_buttons(content_id, &buttons);
        Ok(RenderOutcome::Rendered { lessons: count })
    }
}

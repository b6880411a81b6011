// App state and main event loop.
// Drives the course and lesson views and handles keyboard input.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::page::{CONTENT_ID, Document, INTRO_ID, NEXT_ID, PREV_ID};
use crate::site::{CourseSite, ListingSource, NavLinks, RenderOutcome};
use crate::state::{LessonCursor, NavigationStack, ViewLevel};
use crate::ui;

/// Main application state.
pub struct App<S> {
    pub site: CourseSite<S>,
    pub course_id: String,
    pub repo_path: String,
    /// Course view, then at most one lesson on top.
    pub nav: NavigationStack,
    pub course_page: Document,
    /// `None` while the listing is loading.
    pub course_outcome: Option<RenderOutcome>,
    pub lesson_page: Document,
    pub lesson_links: NavLinks,
    pub cursor: LessonCursor,
    pub show_help: bool,
    pub should_quit: bool,
}

impl<S: ListingSource> App<S> {
    pub fn new(site: CourseSite<S>, course_id: &str, repo_path: &str) -> Self {
        Self {
            site,
            course_id: course_id.to_string(),
            repo_path: repo_path.to_string(),
            nav: NavigationStack::new(ViewLevel::Course {
                course_id: course_id.to_string(),
            }),
            course_page: Document::course_page(),
            course_outcome: None,
            lesson_page: Document::lesson_page(),
            lesson_links: NavLinks::default(),
            cursor: LessonCursor::new(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop. Opens `lesson` first when given.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        lesson: Option<&str>,
    ) -> io::Result<()> {
        terminal.draw(|frame| ui::draw(frame, self))?;
        self.load_course().await;
        if let Some(lesson) = lesson {
            self.open_lesson(lesson).await;
        }

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events().await?;
        }
        Ok(())
    }

    /// Render the course page from scratch.
    pub async fn load_course(&mut self) {
        self.course_page = Document::course_page();
        self.course_outcome = None;

        let outcome = self
            .site
            .render(
                &mut self.course_page,
                &self.course_id,
                CONTENT_ID,
                INTRO_ID,
                &self.repo_path,
            )
            .await;

        let len = self.lesson_count();
        self.cursor.reset(len, 0);
        self.course_outcome = Some(outcome);
    }

    /// Show a lesson and wire its previous/next links.
    pub async fn open_lesson(&mut self, lesson: &str) {
        self.lesson_page = Document::lesson_page();
        self.lesson_links = self
            .site
            .setup_navigation(
                &mut self.lesson_page,
                &self.course_id,
                lesson,
                PREV_ID,
                NEXT_ID,
                &self.repo_path,
            )
            .await;

        let level = ViewLevel::Lesson {
            course_id: self.course_id.clone(),
            lesson: lesson.to_string(),
        };
        if self.nav.can_go_back() {
            self.nav.replace(level);
        } else {
            self.nav.push(level);
        }

        if let Some(index) = self.lesson_links.index {
            let len = self.lesson_count();
            self.cursor.reset(len, index);
        }
    }

    /// Number of lesson buttons on the course page.
    pub fn lesson_count(&self) -> usize {
        self.course_page.buttons(CONTENT_ID).len()
    }

    /// File name of the highlighted lesson, from the shared listing cache.
    pub fn selected_lesson(&self) -> Option<String> {
        let index = self.cursor.selected()?;
        let lessons = self.site.cache().get(&self.course_id)?;
        lessons.get(index).map(|entry| entry.name.clone())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    async fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code).await;
                }
            }
        }
        Ok(())
    }

    pub async fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            _ if matches!(self.nav.current(), ViewLevel::Lesson { .. }) => {
                self.handle_lesson_key(code).await
            }
            _ => self.handle_course_key(code).await,
        }
    }

    async fn handle_course_key(&mut self, code: KeyCode) {
        let len = self.lesson_count();
        match code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_next(len),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_prev(len),
            KeyCode::Enter => {
                if let Some(lesson) = self.selected_lesson() {
                    self.open_lesson(&lesson).await;
                }
            }
            KeyCode::Char('r') => self.load_course().await,
            _ => {}
        }
    }

    async fn handle_lesson_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(prev) = self.lesson_links.prev.clone() {
                    self.open_lesson(&prev).await;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(next) = self.lesson_links.next.clone() {
                    self.open_lesson(&next).await;
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.nav.pop();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::testing::{FakeResponse, FakeSource};

    const PYTHON: &str = "octo/courses/contents/python";

    fn app() -> App<FakeSource> {
        let source = FakeSource::new().with_files(
            PYTHON,
            &["02-loops.html", "01-intro.html", "03-for-loops.html"],
        );
        App::new(CourseSite::new(source), "python", PYTHON)
    }

    #[tokio::test]
    async fn test_load_course_selects_first_lesson() {
        let mut app = app();
        app.load_course().await;

        assert_eq!(
            app.course_outcome,
            Some(RenderOutcome::Rendered { lessons: 3 })
        );
        assert_eq!(app.lesson_count(), 3);
        assert_eq!(app.selected_lesson().as_deref(), Some("01-intro.html"));
    }

    #[tokio::test]
    async fn test_open_lesson_and_step_through() {
        let mut app = app();
        app.load_course().await;

        app.handle_key(KeyCode::Down).await;
        app.handle_key(KeyCode::Enter).await;
        assert_eq!(
            app.nav.current(),
            &ViewLevel::Lesson {
                course_id: "python".to_string(),
                lesson: "02-loops.html".to_string(),
            }
        );
        assert_eq!(app.lesson_page.link_target(PREV_ID), Some("./01-intro.html"));

        app.handle_key(KeyCode::Right).await;
        assert_eq!(app.nav.depth(), 2);
        assert!(!app.lesson_page.is_visible(NEXT_ID));
        assert_eq!(app.cursor.selected(), Some(2));

        // No next lesson: stays put
        app.handle_key(KeyCode::Char('l')).await;
        assert_eq!(app.lesson_links.index, Some(2));

        app.handle_key(KeyCode::Esc).await;
        assert_eq!(app.nav.depth(), 1);

        // Navigation reused the cached listing.
        assert_eq!(app.site.source().requests.len(), 1);
    }

    #[tokio::test]
    async fn test_reload_refetches() {
        let mut app = app();
        app.load_course().await;
        app.handle_key(KeyCode::Char('r')).await;
        assert_eq!(app.site.source().requests.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_listing_has_nothing_to_open() {
        let source = FakeSource::new().with(PYTHON, FakeResponse::Status(502, "Bad Gateway"));
        let mut app = App::new(CourseSite::new(source), "python", PYTHON);
        app.load_course().await;

        assert!(matches!(app.course_outcome, Some(RenderOutcome::Failed(_))));
        app.handle_key(KeyCode::Enter).await;
        assert_eq!(app.nav.depth(), 1);
    }

    #[tokio::test]
    async fn test_help_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('?')).await;
        assert!(app.show_help);

        // Keys other than close are swallowed while help is shown
        app.handle_key(KeyCode::Down).await;
        assert_eq!(app.cursor.selected(), None);

        app.handle_key(KeyCode::Esc).await;
        assert!(!app.show_help);

        app.handle_key(KeyCode::Char('q')).await;
        assert!(app.should_quit);
    }
}

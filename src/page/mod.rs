// Page rendering port.
// The narrow interface the listing renderer and lesson navigator write through.

mod document;

pub use document::Document;
#[cfg(test)]
pub use document::ElementKind;

/// Element id of the course introduction text.
pub const INTRO_ID: &str = "course-intro";
/// Element id of the lesson button container.
pub const CONTENT_ID: &str = "lesson-list";
/// Element id of the previous-lesson link.
pub const PREV_ID: &str = "prev-lesson";
/// Element id of the next-lesson link.
pub const NEXT_ID: &str = "next-lesson";

pub const INTRO_PLACEHOLDER: &str = "Loading course introduction...";
pub const INTRO_FAILED: &str = "Could not load the course introduction.";
pub const LOADING_LESSONS: &str = "Loading lessons...";
pub const NO_LESSONS: &str = "No lessons found for this course yet.";

/// Message shown in the content container when loading lessons fails.
pub fn lessons_error(reason: &str) -> String {
    format!("Error loading lessons: {}", reason)
}

/// One navigable lesson button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonButton {
    pub label: String,
    pub href: String,
}

/// Elements addressed by id. Every operation on a missing id is a no-op.
pub trait Page {
    fn has_element(&self, id: &str) -> bool;

    /// Current text content of an element.
    fn text(&self, id: &str) -> Option<&str>;

    /// Replace the whole content of an element with plain text.
    fn set_text(&mut self, id: &str, text: &str);

    fn set_visible(&mut self, id: &str, visible: bool);

    fn set_link_target(&mut self, id: &str, href: &str);

    /// Clear a container and append one button per entry, in order.
    fn render_buttons(&mut self, container_id: &str, buttons: &[LessonButton]);
}

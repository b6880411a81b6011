// State management module.
// Handles view navigation and list selection for the terminal browser.

#![allow(dead_code)]

pub mod lessons;
pub mod navigation;

pub use lessons::LessonCursor;
pub use navigation::{BreadcrumbNode, NavigationStack, ViewLevel, course_title};

// Navigation state management.
// View stack and breadcrumb trail for the course and lesson views.

use crate::catalog;
use crate::lessons::format_label;

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
    /// The view level this node represents.
    pub level: ViewLevel,
}

/// The current view level in the navigation hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewLevel {
    /// Course page with the lesson buttons
    Course { course_id: String },
    /// A single lesson with previous/next links
    Lesson { course_id: String, lesson: String },
}

impl ViewLevel {
    /// Get the display title for this view level.
    pub fn title(&self) -> String {
        match self {
            ViewLevel::Course { course_id } => course_title(course_id),
            ViewLevel::Lesson { lesson, .. } => format_label(lesson),
        }
    }

    /// Create a breadcrumb node for this view level.
    pub fn to_breadcrumb(&self) -> BreadcrumbNode {
        BreadcrumbNode {
            label: self.title(),
            level: self.clone(),
        }
    }
}

/// Catalog title, or the raw id for courses the catalog does not know.
pub fn course_title(course_id: &str) -> String {
    catalog::lookup(course_id)
        .map(|course| course.title.to_string())
        .unwrap_or_else(|| course_id.to_string())
}

/// Navigation stack for the browser.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    /// Stack of view levels (bottom = root, top = current)
    stack: Vec<ViewLevel>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given level.
    pub fn new(root: ViewLevel) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current view level.
    pub fn current(&self) -> &ViewLevel {
        // Never empty: `pop` refuses to remove the root.
        &self.stack[self.stack.len() - 1]
    }

    /// Push a new view level onto the stack (drill down).
    pub fn push(&mut self, level: ViewLevel) {
        self.stack.push(level);
    }

    /// Swap the current level for a sibling (previous/next lesson).
    pub fn replace(&mut self, level: ViewLevel) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.stack.push(level);
    }

    /// Pop the current view level (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at root).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.stack
            .iter()
            .map(|level| level.to_breadcrumb())
            .collect()
    }

    /// Reset to root level.
    pub fn reset(&mut self) {
        self.stack.truncate(1);
    }

    /// Get the depth of the navigation stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

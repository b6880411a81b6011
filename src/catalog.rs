// Built-in course catalog.
// Static titles and introductions keyed by course id.

/// Static description of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseMetadata {
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
}

const COURSES: &[CourseMetadata] = &[
    CourseMetadata {
        id: "python",
        title: "Python Programming",
        intro: "Learn Python from the ground up: variables, control flow, functions, \
                and the standard library, one small lesson at a time.",
    },
    CourseMetadata {
        id: "flutter",
        title: "Flutter App Development",
        intro: "Build cross-platform mobile apps with Flutter and Dart, starting \
                with widgets and layouts and ending with state management.",
    },
    CourseMetadata {
        id: "javascript",
        title: "JavaScript Essentials",
        intro: "Get comfortable with modern JavaScript: syntax, the DOM, events, \
                and asynchronous code with promises and async/await.",
    },
    CourseMetadata {
        id: "git",
        title: "Git & GitHub",
        intro: "Track your work with Git, collaborate through GitHub, and learn \
                the branching workflow used by real teams.",
    },
];

/// Look up a course by exact id.
pub fn lookup(course_id: &str) -> Option<&'static CourseMetadata> {
    COURSES.iter().find(|course| course.id == course_id)
}

/// All known courses in catalog order.
pub fn all() -> &'static [CourseMetadata] {
    COURSES
}

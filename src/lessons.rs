// Lesson list derivation and button labels.
// Filters a contents listing down to lesson files in a stable order.

use std::slice;

use crate::github::DirectoryEntry;

/// File extension that marks a listing entry as a lesson page.
pub const LESSON_EXTENSION: &str = ".html";

/// Lesson files of one course, sorted by name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonList {
    entries: Vec<DirectoryEntry>,
}

impl LessonList {
    /// Keep lesson files and sort them by name.
    pub fn from_entries(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        let mut entries: Vec<DirectoryEntry> =
            entries.into_iter().filter(is_lesson).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DirectoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Index of the lesson with exactly this file name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl<'a> IntoIterator for &'a LessonList {
    type Item = &'a DirectoryEntry;
    type IntoIter = slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Whether a listing entry is a lesson page.
pub fn is_lesson(entry: &DirectoryEntry) -> bool {
    entry.is_file() && entry.name.ends_with(LESSON_EXTENSION)
}

/// Human readable label for a lesson file name.
///
/// Strips the lesson extension, turns hyphens into spaces and upper-cases the
/// first character of every word: `03-for-loops.html` becomes `03 For Loops`.
/// The rest of each word is left as written.
pub fn format_label(filename: &str) -> String {
    let stem = filename.strip_suffix(LESSON_EXTENSION).unwrap_or(filename);
    let spaced = stem.replace('-', " ");

    let mut label = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        let is_word_char = c.is_alphanumeric() || c == '_';
        if at_word_start && is_word_char {
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
        at_word_start = !is_word_char;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::EntryType;

    fn sample() -> Vec<DirectoryEntry> {
        vec![
            DirectoryEntry::file("02-loops.html"),
            DirectoryEntry::file("01-intro.html"),
            DirectoryEntry::dir("readme"),
        ]
    }

    #[test]
    fn test_filters_and_sorts() {
        let lessons = LessonList::from_entries(sample());
        assert_eq!(lessons.names(), vec!["01-intro.html", "02-loops.html"]);
    }

    #[test]
    fn test_excludes_non_lesson_files() {
        let lessons = LessonList::from_entries(vec![
            DirectoryEntry::file("README.md"),
            DirectoryEntry::file("style.css"),
            DirectoryEntry::dir("extra.html"),
            DirectoryEntry::new("link.html", EntryType::Symlink),
            DirectoryEntry::file("03-functions.html"),
        ]);
        assert_eq!(lessons.names(), vec!["03-functions.html"]);
    }

    #[test]
    fn test_sorting_is_idempotent() {
        let once = LessonList::from_entries(sample());
        let twice = LessonList::from_entries(once.iter().cloned());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_lexicographic() {
        let lessons = LessonList::from_entries(vec![
            DirectoryEntry::file("10-classes.html"),
            DirectoryEntry::file("9-modules.html"),
            DirectoryEntry::file("01-intro.html"),
        ]);
        assert_eq!(
            lessons.names(),
            vec!["01-intro.html", "10-classes.html", "9-modules.html"]
        );
    }

    #[test]
    fn test_empty_when_only_directories() {
        let lessons = LessonList::from_entries(vec![
            DirectoryEntry::dir("images"),
            DirectoryEntry::dir("solutions"),
        ]);
        assert!(lessons.is_empty());
        assert!(LessonList::from_entries(Vec::new()).is_empty());
    }

    #[test]
    fn test_position() {
        let lessons = LessonList::from_entries(sample());
        assert_eq!(lessons.position("02-loops.html"), Some(1));
        assert_eq!(lessons.position("02-loops"), None);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("03-for-loops.html"), "03 For Loops");
        assert_eq!(format_label("01-intro.html"), "01 Intro");
        assert_eq!(format_label("what-is-git.html"), "What Is Git");
    }

    #[test]
    fn test_format_label_keeps_inner_case() {
        assert_eq!(format_label("02-setting-up-vsCode.html"), "02 Setting Up VsCode");
        assert_eq!(format_label("getting.started.html"), "Getting.Started");
    }

    #[test]
    fn test_format_label_without_extension() {
        assert_eq!(format_label("notes-on-lists"), "Notes On Lists");
    }
}

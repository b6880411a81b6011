// In-memory page document.
// Implements the rendering port and serializes to an HTML fragment.

use super::{CONTENT_ID, INTRO_ID, LessonButton, NEXT_ID, PREV_ID, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Container,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    pub visible: bool,
    pub href: Option<String>,
    pub buttons: Vec<LessonButton>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            text: String::new(),
            visible: true,
            href: None,
            buttons: Vec::new(),
        }
    }
}

/// Ordered set of elements addressed by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<(String, Element)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, replacing any element with the same id.
    pub fn with_element(self, id: &str, kind: ElementKind) -> Self {
        self.with_text(id, kind, "")
    }

    pub fn with_text(mut self, id: &str, kind: ElementKind, text: &str) -> Self {
        let mut element = Element::new(kind);
        element.text = text.to_string();
        match self.element_mut(id) {
            Some(existing) => *existing = element,
            None => self.elements.push((id.to_string(), element)),
        }
        self
    }

    /// Course page: intro text and lesson container.
    pub fn course_page() -> Self {
        Self::new()
            .with_element(INTRO_ID, ElementKind::Text)
            .with_element(CONTENT_ID, ElementKind::Container)
    }

    /// Lesson page: previous and next links.
    pub fn lesson_page() -> Self {
        Self::new()
            .with_text(PREV_ID, ElementKind::Link, "Previous")
            .with_text(NEXT_ID, ElementKind::Link, "Next")
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, element)| element)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements
            .iter_mut()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, element)| element)
    }

    /// Buttons currently rendered in a container.
    pub fn buttons(&self, id: &str) -> &[LessonButton] {
        self.element(id).map(|e| e.buttons.as_slice()).unwrap_or(&[])
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).is_some_and(|e| e.visible)
    }

    pub fn link_target(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|e| e.href.as_deref())
    }

    /// Serialize all elements as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (id, element) in &self.elements {
            let hidden = if element.visible {
                ""
            } else {
                r#" style="display: none;""#
            };
            match element.kind {
                ElementKind::Text => {
                    html.push_str(&format!(
                        "<p id=\"{}\"{}>{}</p>\n",
                        escape_html(id),
                        hidden,
                        escape_html(&element.text)
                    ));
                }
                ElementKind::Container => {
                    html.push_str(&format!("<div id=\"{}\"{}>\n", escape_html(id), hidden));
                    if !element.text.is_empty() {
                        html.push_str(&format!("  <p>{}</p>\n", escape_html(&element.text)));
                    }
                    for button in &element.buttons {
                        html.push_str(&format!(
                            "  <div class=\"lesson-button\"><a href=\"{}\">{}</a></div>\n",
                            escape_html(&button.href),
                            escape_html(&button.label)
                        ));
                    }
                    html.push_str("</div>\n");
                }
                ElementKind::Link => {
                    let href = element
                        .href
                        .as_deref()
                        .map(|h| format!(" href=\"{}\"", escape_html(h)))
                        .unwrap_or_default();
                    html.push_str(&format!(
                        "<a id=\"{}\"{}{}>{}</a>\n",
                        escape_html(id),
                        href,
                        hidden,
                        escape_html(&element.text)
                    ));
                }
            }
        }
        html
    }
}

impl Page for Document {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn text(&self, id: &str) -> Option<&str> {
        self.element(id).map(|e| e.text.as_str())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.element_mut(id) {
            element.text = text.to_string();
            element.buttons.clear();
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.element_mut(id) {
            element.visible = visible;
        }
    }

    fn set_link_target(&mut self, id: &str, href: &str) {
        if let Some(element) = self.element_mut(id) {
            element.href = Some(href.to_string());
        }
    }

    fn render_buttons(&mut self, container_id: &str, buttons: &[LessonButton]) {
        if let Some(element) = self.element_mut(container_id) {
            element.text.clear();
            element.buttons = buttons.to_vec();
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

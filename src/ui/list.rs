// Lesson list and lesson view rendering.
// Draws the course document with loading, empty, and error states.

use ratatui::{prelude::*, widgets::*};

use crate::lessons::format_label;
use crate::page::{CONTENT_ID, Document, NEXT_ID, PREV_ID, Page};
use crate::site::RenderOutcome;
use crate::state::LessonCursor;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the lesson buttons of the course page.
pub fn render_lessons(
    frame: &mut Frame,
    page: &Document,
    outcome: Option<&RenderOutcome>,
    cursor: &mut LessonCursor,
    area: Rect,
) {
    let block = Block::default().borders(Borders::ALL).title(" Lessons ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let status = page.text(CONTENT_ID).unwrap_or_default();
    match outcome {
        None => render_loading(frame, inner, status),
        Some(RenderOutcome::Failed(_)) => render_error(frame, inner, status),
        Some(RenderOutcome::Empty) => render_empty(frame, inner, status),
        Some(RenderOutcome::Rendered { .. }) => {
            let items: Vec<ListItem> = page
                .buttons(CONTENT_ID)
                .iter()
                .map(|button| {
                    ListItem::new(Line::from(vec![
                        Span::raw(button.label.clone()),
                        Span::styled(
                            format!("  {}", button.href),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let list_widget = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, inner, &mut cursor.list_state);
        }
    }
}

/// Label for a link target such as `./02-loops.html`.
fn target_label(href: &str) -> String {
    format_label(href.trim_start_matches("./"))
}

/// Render a single lesson with its previous/next links.
pub fn render_lesson(frame: &mut Frame, page: &Document, lesson: &str, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            format_label(lesson),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("./contents/{}", lesson),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    let links = [(PREV_ID, "← "), (NEXT_ID, "→ ")];
    let mut any_visible = false;
    for (id, arrow) in links {
        if let (true, Some(href)) = (page.is_visible(id), page.link_target(id)) {
            any_visible = true;
            let text = page.text(id).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::styled(arrow, Style::default().fg(Color::Yellow)),
                Span::styled(format!("{}: ", text), Style::default().fg(Color::DarkGray)),
                Span::raw(target_label(href)),
            ]));
        }
    }
    if !any_visible {
        lines.push(Line::from(Span::styled(
            "No neighbouring lessons",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Lesson "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

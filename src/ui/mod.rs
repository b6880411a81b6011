// UI module for rendering the TUI.
// Draws the course document, the lesson view, the status bar and help.

mod breadcrumb;
mod list;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::page::{INTRO_ID, Page};
use crate::site::ListingSource;
use crate::state::{ViewLevel, course_title};

/// Main draw function that renders the entire UI.
pub fn draw<S: ListingSource>(frame: &mut Frame, app: &mut App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Breadcrumb
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let breadcrumbs = app.nav.breadcrumbs();
    breadcrumb::draw_breadcrumb(
        frame,
        &breadcrumbs,
        chunks[0],
        app.site.cache().fetched_at(),
    );

    match app.nav.current().clone() {
        ViewLevel::Course { course_id } => draw_course(frame, app, &course_id, chunks[1]),
        ViewLevel::Lesson { lesson, .. } => {
            list::render_lesson(frame, &app.lesson_page, &lesson, chunks[1])
        }
    }

    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the course view: introduction above the lesson list.
fn draw_course<S: ListingSource>(frame: &mut Frame, app: &mut App<S>, course_id: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let intro = app.course_page.text(INTRO_ID).unwrap_or_default();
    let intro_widget = Paragraph::new(intro.to_string())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", course_title(course_id))),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(intro_widget, chunks[0]);

    list::render_lessons(
        frame,
        &app.course_page,
        app.course_outcome.as_ref(),
        &mut app.cursor,
        chunks[1],
    );
}

/// Draw the status bar with keybinding hints, cached listing and rate limit.
fn draw_status_bar<S: ListingSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let in_lesson = matches!(app.nav.current(), ViewLevel::Lesson { .. });

    let mut hints = if in_lesson {
        vec![
            Span::raw(" ←→ "),
            Span::styled("Prev/Next", Style::default().fg(Color::DarkGray)),
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Open", Style::default().fg(Color::DarkGray)),
            Span::raw("  r "),
            Span::styled("Reload", Style::default().fg(Color::DarkGray)),
            Span::raw("  ? "),
            Span::styled("Help", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    };

    let cache = app.site.cache();
    if let (Some(course_id), Some(lessons)) = (cache.course_id(), cache.lessons()) {
        hints.push(Span::styled(
            format!("  Cached: {} ({} lessons)", course_id, lessons.len()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Add rate limit info on the right if available
    if let Some(rate) = app.site.source().quota().filter(|rate| rate.limit > 0) {
        let rate_color = if rate.remaining < 10 {
            Color::Red
        } else if rate.remaining < 30 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 46.min(area.width);
    let popup_height = 13.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(k, Style::default().fg(Color::Cyan)),
            Span::raw(desc),
        ])
    };

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        key("  ↑/↓ or j/k    ", "Select lesson"),
        key("  Enter         ", "Open lesson"),
        key("  ←/→ or h/l    ", "Previous / next lesson"),
        key("  Esc           ", "Back to course / close help"),
        key("  r             ", "Reload lesson list"),
        key("  ?             ", "Show/hide this help"),
        key("  q             ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

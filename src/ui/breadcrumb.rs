// Breadcrumb rendering for navigation trail.
// Shows the course and lesson path with the listing fetch time on the right.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::BreadcrumbNode;

/// Format timestamp for display with local timezone.
fn format_timestamp(dt: &DateTime<Utc>) -> String {
    let local: DateTime<chrono::Local> = dt.with_timezone(&chrono::Local);
    local.format("fetched %H:%M:%S").to_string()
}

/// Render the breadcrumb trail.
pub fn draw_breadcrumb(
    frame: &mut Frame,
    breadcrumbs: &[BreadcrumbNode],
    area: Rect,
    timestamp: Option<DateTime<Utc>>,
) {
    let mut spans = vec![Span::styled("Courses", Style::default().fg(Color::White))];

    for (i, node) in breadcrumbs.iter().enumerate() {
        spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));

        let style = if i == breadcrumbs.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(node.label.clone(), style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);

    if let Some(ts) = timestamp {
        let timestamp_para = Paragraph::new(Line::from(Span::styled(
            format_timestamp(&ts),
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Right);
        frame.render_widget(
            timestamp_para,
            Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: 1,
            },
        );
    }
}

//! Search overlay rendering
//!
//! A centered modal over the current view: a query input line and the
//! live hit list across both datasets.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::search::MIN_QUERY_LEN;

/// Renders the search overlay on top of the current view
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let overlay_area = centered_rect(64, 18, area);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        Line::from(vec![
            Span::styled("› ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}▌", app.search_query),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
    ];

    if app.search_query.trim().len() < MIN_QUERY_LEN {
        lines.push(Line::from(Span::styled(
            format!("Type at least {} characters to search", MIN_QUERY_LEN),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let hits = app.search_hits();
        if hits.is_empty() {
            lines.push(Line::from(Span::styled(
                "No results found.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (idx, hit) in hits.iter().enumerate() {
                let selected = idx == app.search_selected;
                let marker = if selected { "▸ " } else { "  " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                lines.push(Line::from(vec![
                    Span::styled(marker.to_string(), style),
                    Span::styled(
                        format!("{:<9}", hit.kind.label()),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(hit.title.clone(), style),
                    Span::raw("  "),
                    Span::styled(hit.subtitle.clone(), Style::default().fg(Color::Gray)),
                ]));
            }
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑↓ select  Enter open  Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), overlay_area);
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(height),
            Constraint::Min(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width),
            Constraint::Min(1),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::data::Property;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_short_query_shows_min_length_hint() {
        let mut app = App::new();
        app.search_query = "s".to_string();

        let content = render_to_string(&app);

        assert!(content.contains("Type at least 2 characters"));
        assert!(content.contains("Search"));
    }

    #[test]
    fn test_matching_query_lists_hits_with_kind_label() {
        let mut app = App::new();
        app.properties = vec![Property {
            title: Some("Skyline Towers".to_string()),
            location: Some("Baner".to_string()),
            property_type: Some("3 BHK Apartment".to_string()),
            price: None,
            possession: None,
            image_url: None,
        }];
        app.search_query = "skyline".to_string();

        let content = render_to_string(&app);

        assert!(content.contains("PROPERTY"));
        assert!(content.contains("Skyline Towers"));
    }

    #[test]
    fn test_no_matches_shows_empty_message() {
        let mut app = App::new();
        app.search_query = "zzzz".to_string();

        let content = render_to_string(&app);

        assert!(content.contains("No results found."));
    }
}

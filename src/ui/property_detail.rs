//! Property detail screen rendering
//!
//! Re-looks the property up by its navigation identity against the
//! (re-loaded) dataset and renders the detail fragment: price tag, spec
//! grid, generated overview, and the normalized image URL.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::{find_property, ListingRef};
use crate::render::property_detail;

/// Renders the property detail screen
///
/// An identity that no longer resolves (the dataset shrank or was reordered
/// since the link was minted) renders the not-found notice instead.
pub fn render(frame: &mut Frame, app: &App, listing_ref: &ListingRef) {
    let area = frame.area();

    let Some(property) = find_property(&app.properties, listing_ref) else {
        let notice = Paragraph::new("Property Not Found.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, area);
        return;
    };

    let detail = property_detail(property);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {} ", detail.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    let spec_label = |label: &str| {
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray))
    };

    let lines = vec![
        Line::from(Span::styled(
            detail.location.clone(),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            detail.price.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![spec_label("Type"), Span::raw(detail.property_type.clone())]),
        Line::from(vec![spec_label("Possession"), Span::raw(detail.possession.clone())]),
        Line::from(vec![spec_label("Location"), Span::raw(detail.location.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            "Property Overview",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(detail.description.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::Gray)),
            Span::styled(detail.image.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc back  j/k scroll  r refresh  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll_offset, 0));

    frame.render_widget(paragraph, area);
}

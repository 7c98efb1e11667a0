//! Market insight (blog) screens
//!
//! The list screen shows every post in server order with featured posts
//! starred; the detail screen shows the single-post payload when the feed
//! returned one, falling back to the record from the list dataset.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::ListingRef;
use crate::render::{blog_cards, blog_detail};
use crate::ui::property_list::{render_footer, render_header};

/// Placeholder line shown when the dataset is empty
const EMPTY_PLACEHOLDER: &str = "No insights available.";

/// Renders the blog list screen
pub fn render_list(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Branded header
            Constraint::Min(3),    // Post list
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], "Market Insights");

    let cards = blog_cards(&app.blog_posts);

    if cards.is_empty() {
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, chunks[1]);
    } else {
        let items: Vec<ListItem> = cards
            .iter()
            .map(|card| {
                let star = if card.featured { "★ " } else { "" };

                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{}{}", star, card.title),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw("  "),
                        Span::styled(card.heading.clone(), Style::default().fg(Color::Gray)),
                    ]),
                    Line::from(Span::styled(
                        format!("  {}", card.summary.clone().unwrap_or_default()),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut state = ListState::default();
        state.select(Some(app.selected_index));
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    render_footer(frame, app, chunks[2]);
}

/// Renders the blog detail screen
pub fn render_detail(frame: &mut Frame, app: &App, _listing_ref: &ListingRef) {
    let area = frame.area();

    let Some(post) = app.open_post.as_ref() else {
        let notice = Paragraph::new("Article not found.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(notice, area);
        return;
    };

    let detail = blog_detail(post);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {} ", detail.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Published on {}", detail.date),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled("Image: ", Style::default().fg(Color::Gray)),
            Span::styled(detail.image.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    // Paragraph breaks in the body become blank lines
    for part in detail.body.split('\n') {
        lines.push(Line::from(part.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc back  j/k scroll  r refresh  q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll_offset, 0));

    frame.render_widget(paragraph, area);
}

//! Property list screen rendering
//!
//! Renders the property grid as a selectable list of cards built by the
//! fragment layer, with a branded header and a key-hint footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use chrono::Local;

use crate::app::App;
use crate::render::{featured_blog_cards, property_cards, ListingCard};

/// Placeholder line shown when the dataset is empty
const EMPTY_PLACEHOLDER: &str = "No properties found.";

/// Placeholder line shown in the rail when no post is flagged featured
const NO_FEATURED_PLACEHOLDER: &str = "No featured insights.";

/// Renders the property list screen
///
/// The front page of the browser: the property grid plus, when any posts
/// are flagged featured, a compact insights rail beneath it.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let featured = featured_blog_cards(&app.blog_posts);
    // The rail collapses only when there are no posts at all; posts without a
    // featured flag still get the rail with its placeholder line.
    let rail_height: u16 = if app.blog_posts.is_empty() {
        0
    } else {
        featured.len().clamp(1, 3) as u16 + 2 // rows plus block borders
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Branded header
            Constraint::Min(3),              // Card list
            Constraint::Length(rail_height), // Featured insights
            Constraint::Length(1),           // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], "Properties");
    render_cards(frame, app, chunks[1]);
    if rail_height > 0 {
        render_featured_rail(frame, &featured, chunks[2]);
    }
    render_footer(frame, app, chunks[3]);
}

/// Renders the featured-insights rail below the property grid
fn render_featured_rail(frame: &mut Frame, featured: &[ListingCard], area: Rect) {
    if featured.is_empty() {
        let placeholder = Paragraph::new(NO_FEATURED_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Featured Insights "),
            );
        frame.render_widget(placeholder, area);
        return;
    }

    let lines: Vec<Line> = featured
        .iter()
        .take(3)
        .map(|card| {
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    card.heading.clone(),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
                Span::styled(
                    card.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let rail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Featured Insights "),
    );
    frame.render_widget(rail, area);
}

/// Renders the branded header shared by the list screens
pub fn render_header(frame: &mut Frame, area: Rect, section: &str) {
    let now = Local::now();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "PEAKSQUARE ESTATES",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(section.to_string(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(
                now.format("%a %b %d, %H:%M").to_string(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width.saturating_sub(1) as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders the card list or the empty-dataset placeholder
fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cards = property_cards(&app.properties);

    if cards.is_empty() {
        let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = cards.iter().map(card_item).collect();

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
    frame.render_stateful_widget(list, area, &mut state);
}

/// Builds one list row from a card descriptor
fn card_item(card: &ListingCard) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                card.heading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(card.label.clone(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.title),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// Renders the key-hint footer with data freshness
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let freshness = app
        .last_refresh
        .map(|t| format!("updated {}", t.format("%H:%M")))
        .unwrap_or_default();

    let footer = Line::from(vec![
        Span::styled(
            "↑↓ navigate  Enter open  Tab insights  / search  r refresh  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(freshness, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}

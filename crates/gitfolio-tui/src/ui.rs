// UI rendering logic
use crate::{App, InputMode};
use gitfolio_core::{BadgeKind, CardView, Palette, PhotoSource};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a single card takes, borders included
pub const CARD_HEIGHT: u16 = 7;

fn color(c: gitfolio_core::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// How many cards fit side by side
pub fn grid_columns(width: u16) -> usize {
    if width < 80 {
        1
    } else if width < 130 {
        2
    } else {
        3
    }
}

/// First grid row to draw so that `selected_row` stays on screen
pub fn first_visible_row(selected_row: usize, rows_fit: usize) -> usize {
    if rows_fit == 0 {
        return selected_row;
    }
    (selected_row + 1).saturating_sub(rows_fit)
}

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.portfolio.theme().palette();

    // Paint the whole screen in the mode's background first
    let background = Block::default().style(
        Style::default()
            .bg(color(palette.background))
            .fg(color(palette.foreground)),
    );
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Cards
            Constraint::Length(2), // Status + key hints
        ])
        .split(frame.area());

    render_header(frame, app, &palette, chunks[0]);
    render_search_input(frame, app, &palette, chunks[1]);
    render_cards(frame, app, &palette, chunks[2]);
    render_footer(frame, app, &palette, chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let surface = app.portfolio.surface();

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let photo = match (surface.avatar.photo_source, surface.avatar.src.as_deref()) {
        (_, None) => "—".to_string(),
        (PhotoSource::Local, Some(src)) => format!("local: {}", src),
        (PhotoSource::Remote, Some(src)) => src.to_string(),
    };

    let left = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.owner),
            Style::default()
                .fg(color(palette.title))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(photo, Style::default().fg(color(palette.muted))),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.border))),
    );

    let right = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} repos", surface.repo_count),
            Style::default().fg(color(palette.accent)),
        ),
        Span::raw("  "),
        Span::styled(
            surface.theme_icon.clone(),
            Style::default().fg(color(palette.foreground)),
        ),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.border))),
    );

    frame.render_widget(left, header_chunks[0]);
    frame.render_widget(right, header_chunks[1]);
}

fn render_search_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let surface = app.portfolio.surface();
    let searching = app.input_mode == InputMode::Searching;

    let border = if searching {
        palette.border_focused
    } else {
        palette.border
    };

    let text = if surface.search.is_empty() && !searching {
        Span::styled(
            app.portfolio.locale().search_placeholder(),
            Style::default().fg(color(palette.muted)),
        )
    } else {
        Span::styled(
            surface.search.as_str(),
            Style::default().fg(color(palette.foreground)),
        )
    };

    let (offset, _) = search_window(surface.search.chars().count(), area.width);
    let input = Paragraph::new(Line::from(text)).scroll((0, offset)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" / ")
            .border_style(Style::default().fg(color(border))),
    );

    frame.render_widget(input, area);

    // Show cursor when in search mode
    if searching {
        let (_, cursor) = search_window(surface.search.chars().count(), area.width);
        frame.set_cursor_position((area.x.saturating_add(cursor).saturating_add(1), area.y + 1));
    }
}

/// Horizontal scroll and cursor column inside a bordered input `width` wide.
///
/// The query tail stays visible and the cursor never passes the right border.
pub fn search_window(query_len: usize, width: u16) -> (u16, u16) {
    let inner = width.saturating_sub(2) as usize;
    let room = inner.saturating_sub(1);
    let offset = query_len.saturating_sub(room);
    let cursor = (query_len - offset).min(inner);
    (offset.min(u16::MAX as usize) as u16, cursor as u16)
}

fn render_cards(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let cards = app.cards();
    if cards.is_empty() {
        return;
    }

    let columns = grid_columns(area.width);
    let rows_fit = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(app.selected_index / columns, rows_fit);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_fit])
        .split(area);

    for (slot, row_area) in row_areas.iter().enumerate() {
        let row = first_row + slot;
        let start = row * columns;
        if start >= cards.len() {
            break;
        }

        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cell_areas.iter().enumerate() {
            let index = start + col;
            if let Some(card) = cards.get(index) {
                render_card(frame, card, index == app.selected_index, palette, *cell);
            }
        }
    }
}

fn render_card(frame: &mut Frame, card: &CardView, selected: bool, palette: &Palette, area: Rect) {
    let (border, bg) = if selected {
        (palette.border_focused, palette.selected_bg)
    } else {
        (palette.border, palette.background)
    };

    let mut badges = Vec::new();
    for badge in &card.meta {
        let fg = match badge.kind {
            BadgeKind::Language => palette.language,
            BadgeKind::Stars => palette.stars,
            BadgeKind::Forks => palette.forks,
            BadgeKind::Updated => palette.muted,
        };
        if !badges.is_empty() {
            badges.push(Span::raw("  "));
        }
        badges.push(Span::styled(badge.text.clone(), Style::default().fg(color(fg))));
    }

    let links = Line::from(vec![
        Span::styled(
            format!("[⏎] {}", card.open.label),
            Style::default().fg(color(palette.subtitle)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[c] {}", card.code.label),
            Style::default().fg(color(palette.subtitle)),
        ),
    ]);

    let lines = vec![
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().fg(color(palette.foreground)),
        )),
        Line::from(""),
        Line::from(badges),
        links,
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default()
                .fg(color(palette.title))
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(color(border)))
        .style(Style::default().bg(color(bg)));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let surface = app.portfolio.surface();
    let locale = app.portfolio.locale();

    let mut status = vec![Span::styled(
        format!(" {}", surface.status),
        Style::default().fg(color(palette.foreground)),
    )];
    if surface.load_more_visible {
        status.push(Span::raw("  "));
        status.push(Span::styled(
            format!("[m] {}", locale.load_more_label()),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Searching => " ESC/ENTER: done",
        InputMode::Normal => " j/k: move | /: search | ENTER: open | c: code | m: more | t: theme | q: quit",
    };

    let footer = Paragraph::new(vec![
        Line::from(status),
        Line::from(vec![
            Span::styled(hints, Style::default().fg(color(palette.muted))),
            Span::styled(
                format!("  © {}", surface.year),
                Style::default().fg(color(palette.muted)),
            ),
        ]),
    ]);

    frame.render_widget(footer, area);
}

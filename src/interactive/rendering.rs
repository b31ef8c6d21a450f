//! TUI rendering with ratatui
//!
//! Gallows, word progress, statistics and the input box.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::MAX_WRONG;
use crate::output::formatters::{attempts_pips, guessed_list};
use crate::output::gallows;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and stats
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let stage = app.view.as_ref().map_or(0, |view| view.stage);
    let color = if stage >= MAX_WRONG as usize {
        Color::Red
    } else {
        Color::White
    };

    let drawing = Paragraph::new(gallows(stage))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Word
            Constraint::Length(6), // Stats
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);

    let content = if let Some(view) = &app.view {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Category: ", label),
                Span::raw(app.source.clone().unwrap_or_default()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                view.mask.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Guessed:  ", label),
                Span::raw(guessed_list(&view.guessed)),
            ]),
            Line::from(vec![
                Span::styled("Attempts: ", label),
                Span::styled(
                    attempts_pips(view.attempts_remaining, MAX_WRONG),
                    Style::default().fg(Color::Red),
                ),
                Span::raw(format!(" ({} left)", view.attempts_remaining)),
            ]),
        ];
        if let Some(word) = &app.revealed {
            lines.push(Line::from(vec![
                Span::styled("Answer:   ", label),
                Span::styled(word.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
        lines
    } else {
        let mut lines = vec![Line::from("Choose a category to draw a word.")];
        if !app.categories.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Categories:", label)));
            lines.extend(
                app.categories
                    .iter()
                    .map(|name| Line::from(format!("  • {name}"))),
            );
            lines.push(Line::from("  • all"));
        }
        lines
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let totals = Paragraph::new(format!(
        "Games: {}  Wins: {}  Losses: {}  Score: {}  Avg: {:.2}",
        stats.games_played,
        stats.wins,
        stats.losses,
        stats.total_score,
        stats.average_score_per_game
    ))
    .block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(totals, chunks[0]);

    let gauge = Gauge::default()
        .block(Block::default().title(" Win Rate ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(stats.win_rate.clamp(0.0, 100.0) as u16)
        .label(format!("{:.2}%", stats.win_rate));
    f.render_widget(gauge, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let color = match app.input_mode {
        InputMode::Category => Color::Cyan,
        InputMode::Guess => Color::Yellow,
        InputMode::FullWord => Color::Magenta,
        InputMode::Confirm => Color::Red,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(app.prompt.as_str())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Guess => "Enter: Submit | ESC: Clear | Ctrl-C: Exit",
        InputMode::FullWord => "Enter: Submit | ESC: Cancel | Ctrl-C: Exit",
        InputMode::Category | InputMode::Confirm => "Enter: Submit | Ctrl-C: Exit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

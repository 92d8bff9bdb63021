//! TUI rendering with ratatui
//!
//! Layout and widgets for the word ladder interface.

use super::app::{App, InputMode, MessageStyle};
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
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Ladder
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪜 WORD LADDER - Interactive Mode")
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

/// One rung with the changed letter highlighted
fn rung_line(index: usize, previous: Option<&str>, word: &str) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{index:>3}  "),
        Style::default().fg(Color::DarkGray),
    )];

    for (i, ch) in word.chars().enumerate() {
        let changed = previous.is_some_and(|p| p.chars().nth(i) != Some(ch));
        let style = if changed {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(ch.to_string(), style));
    }

    Line::from(spans)
}

fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Ladder ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content: Vec<Line> = match &app.current {
        Some(result) => match &result.outcome {
            Ok(ladder) => {
                let words = ladder.words();
                let mut lines: Vec<Line> = words
                    .iter()
                    .enumerate()
                    .map(|(i, word)| {
                        let previous = i.checked_sub(1).map(|p| words[p].text());
                        rung_line(i, previous, word.text())
                    })
                    .collect();
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Number of Steps: {}", ladder.steps()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )));
                lines
            }
            Err(not_found) => vec![Line::from(Span::styled(
                not_found.to_string(),
                Style::default().fg(Color::Red),
            ))],
        },
        None => vec![Line::from("Enter a starting and ending word to find a ladder.")],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Search effort gauge
            Constraint::Percentage(50), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_search_effort(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_effort(f: &mut Frame, app: &App, area: Rect) {
    let total = app.dictionary.len().max(1);
    let expanded = app.current.as_ref().map_or(0, |r| r.stats.expanded);
    let percent = ((expanded * 100) / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Dictionary Explored ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{expanded}/{total} words expanded"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(10)
        .map(|entry| {
            let (outcome, style) = match entry.steps {
                Some(steps) => (format!("{steps} steps"), Style::default().fg(Color::Green)),
                None => ("no ladder".to_string(), Style::default().fg(Color::Red)),
            };
            ListItem::new(format!("{} → {}  {outcome}", entry.start, entry.end)).style(style)
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::StartWord => (
            " Starting Word | Enter to confirm, ESC to clear/quit ",
            app.start_input.clone(),
            Color::Yellow,
        ),
        InputMode::EndWord => (
            " Ending Word | Enter to search, ESC to go back ",
            format!(
                "{} → {}",
                app.start.as_ref().map_or("", |w| w.text()),
                app.end_input
            ),
            Color::Cyan,
        ),
        InputMode::Viewing => (
            " Press 'n' or Enter for a new search, 'q' to quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let dictionary_text = format!(
        "Dictionary: {} × {} letters",
        app.dictionary.len(),
        app.dictionary.word_length()
    );
    f.render_widget(
        Paragraph::new(dictionary_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Searches: {} | Found: {}",
        app.stats.searches, app.stats.found
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let average_text = format!("Avg steps: {:.1}", app.average_steps());
    f.render_widget(
        Paragraph::new(average_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Ctrl-C: Quit | Enter: Submit | ESC: Back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

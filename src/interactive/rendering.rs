//! TUI rendering with ratatui
//!
//! Progress dashboard for the current game.

use super::app::{App, InputMode, MessageStyle};
use crate::engine::CombinationStatus;
use crate::output::formatters::{format_bucket, status_symbol};
use crate::progress::Bucket;
use crate::store::GameStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: GameStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Overall gauge
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_progress_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_overall(f, app, chunks[3]);
}

fn bucket_style(bucket: &Bucket) -> Style {
    if bucket.expected == 0 {
        Style::default().fg(Color::DarkGray)
    } else if bucket.is_complete() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn render_header<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let header = Paragraph::new(format!("🧩 PARAULÒGIC  {}", app.report.letters))
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

fn render_progress_panel<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_letter_table(f, app, chunks[0]);
    render_recommendations(f, app, chunks[1]);
}

fn render_letter_table<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let progress = &app.report.progress;
    let lengths: Vec<usize> = progress.per_length.keys().copied().collect();

    let mut lines = Vec::new();
    if lengths.is_empty() {
        lines.push(Line::from("No letter clues yet. Try ':letter t 4 3'."));
    } else {
        let mut head = vec![Span::raw(format!("{:<4}", ""))];
        head.extend(lengths.iter().map(|len| {
            Span::styled(format!("{len:>10}"), Style::default().fg(Color::Cyan))
        }));
        head.push(Span::styled(
            format!("{:>10}", "Σ"),
            Style::default().fg(Color::Cyan),
        ));
        lines.push(Line::from(head));

        for (letter, row) in &progress.per_letter {
            let mut spans = vec![Span::styled(
                format!("{:<4}", letter.to_ascii_uppercase()),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            for len in &lengths {
                spans.push(match row.lengths.get(len) {
                    Some(bucket) => {
                        Span::styled(format!("{:>10}", format_bucket(bucket)), bucket_style(bucket))
                    }
                    None => Span::styled(format!("{:>10}", "·"), Style::default().fg(Color::DarkGray)),
                });
            }
            spans.push(Span::styled(
                format!("{:>10}", format_bucket(&row.total)),
                bucket_style(&row.total),
            ));
            lines.push(Line::from(spans));
        }

        let mut total = vec![Span::styled(
            format!("{:<4}", "Σ"),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        total.extend(progress.per_length.values().map(|bucket| {
            Span::styled(format!("{:>10}", format_bucket(bucket)), bucket_style(bucket))
        }));
        lines.push(Line::from(total));
    }

    let table = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Letters · {} found ", app.report.found_count))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(table, area);
}

fn render_recommendations<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let mut lines = Vec::new();
    for rec in &app.report.recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", rec.letter.to_ascii_uppercase()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} × {} letters", rec.shortest_missing, rec.shortest_length),
                Style::default().fg(Color::Red),
            ),
            Span::raw(format!("  ({} missing)", rec.total_missing)),
        ]));

        let prefixes: Vec<String> = rec
            .prefixes
            .iter()
            .take(6)
            .map(|l| format!("{}({})", l.key, l.missing))
            .collect();
        let subgroups: Vec<String> = rec
            .subgroups
            .iter()
            .take(4)
            .map(|l| format!("{}({})", l.key, l.missing))
            .collect();
        if !prefixes.is_empty() {
            lines.push(Line::styled(
                format!("   {}", prefixes.join(" ")),
                Style::default().fg(Color::Green),
            ));
        }
        if !subgroups.is_empty() {
            lines.push(Line::styled(
                format!("   {}", subgroups.join(" ")),
                Style::default().fg(Color::Magenta),
            ));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from("Nothing missing for the clues entered."));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Where to search next ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_side_panel<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    render_exploration(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_exploration<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let Some(result) = &app.exploration else {
        let help = Paragraph::new(vec![
            Line::from(":explore <prefix> <length>"),
            Line::from(":mark <combination> correct|tried|untried"),
            Line::from(":total <n>   :letter <l> <len> <n>"),
            Line::from(":subgroups egir-8 ...   :prefixes tr-5 ..."),
            Line::from(":clear-tried   :close   :quit"),
            Line::from("-word removes a found word"),
        ])
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Commands ")
                .borders(Borders::ALL),
        );
        f.render_widget(help, area);
        return;
    };

    let items: Vec<ListItem> = result
        .combinations
        .iter()
        .map(|annotated| {
            let style = match annotated.status {
                CombinationStatus::Correct => Style::default().fg(Color::Green),
                CombinationStatus::Tried => Style::default().fg(Color::Red),
                CombinationStatus::Untried => Style::default().fg(Color::White),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", status_symbol(annotated.status)), style),
                Span::styled(
                    format!("{:<12}", annotated.combination.text.to_uppercase()),
                    style,
                ),
                Span::styled(
                    format!("{:>4}", annotated.combination.score),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let missing = result
        .prefix_progress
        .map_or_else(String::new, |b| format!(" · {} missing", b.missing));
    let title = format!(
        " {} · {} letters · {}/{} shown{missing} ",
        result.prefix.to_uppercase(),
        result.length,
        result.combinations.len(),
        result.total
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_input<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Words => (
            " Found words (comma separated, -word to remove) | ':' for commands | ESC quits ",
            Color::Yellow,
        ),
        InputMode::Command => (" Command | ESC to cancel ", Color::Cyan),
    };
    let prompt = match app.input_mode {
        InputMode::Words => "",
        InputMode::Command => ":",
    };

    let input = Paragraph::new(format!("{prompt}{}", app.input_buffer))
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

fn render_overall<S: GameStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let overall = app.report.progress.overall();
    // Cast is safe: clamped to [0, 100]
    let percent = overall.percent().clamp(0.0, 100.0).round() as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "{} / {} words · {} missing · {} tried combinations",
            overall.found,
            overall.expected,
            overall.missing,
            app.game.tried().len()
        ));

    f.render_widget(gauge, area);
}

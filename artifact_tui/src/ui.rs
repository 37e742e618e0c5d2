//! UI rendering

mod artifacts_view;
mod help_view;
mod monster_view;
mod results_view;
mod setup_view;

use crate::app::{App, LoadStatus, Tab, Tone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Monster => monster_view::draw(f, app, chunks[1]),
        Tab::Setup => setup_view::draw(f, app, chunks[1]),
        Tab::Artifacts => artifacts_view::draw(f, app, chunks[1]),
        Tab::Results => results_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    // Feedback from the last action replaces the key list
    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let common_keys = vec![("Tab", "Next tab"), ("Ctrl+C", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Monster => vec![
            ("type", "Search"),
            ("↑/↓", "Select"),
            ("Enter", "Pick"),
            ("Esc", "Clear"),
        ],
        Tab::Setup => vec![
            ("↑/↓", "Field"),
            ("←/→", "Change"),
            ("Enter/Space", "Toggle/apply"),
        ],
        Tab::Artifacts => vec![
            ("↑/↓", "Field"),
            ("←/→", "Slot pick / switch A-B"),
            ("0-9 ,", "Type %"),
        ],
        Tab::Results => vec![],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = match &app.monster {
        Some(monster) => format!(" Artifact Comparator: {} ", monster.display_name()),
        None => " Artifact Comparator ".to_string(),
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Bar of `width` cells filled in proportion to `current / max`
pub fn score_bar(current: f64, max: f64, width: u16, filled_color: Color) -> Line<'static> {
    let percent = if max > 0.0 { (current / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = (percent * width as f64) as usize;
    let empty = (width as usize).saturating_sub(filled);

    Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(filled_color)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn value_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Label with a highlight when the field has focus
pub fn field_label(name: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if focused { "▶ " } else { "  " };
    Span::styled(format!("{}{:18}", marker, name), style)
}

pub fn placeholder() -> Span<'static> {
    Span::styled(crate::app::PLACEHOLDER_SELECT, Style::default().fg(Color::DarkGray))
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Good => Color::Green,
        Tone::Bad => Color::Red,
        Tone::Neutral => Color::White,
    }
}

pub fn status_line(label: &str, status: &LoadStatus) -> Line<'static> {
    let (text, color) = match status {
        LoadStatus::Idle => ("-".to_string(), Color::DarkGray),
        LoadStatus::Loading => ("Loading...".to_string(), Color::Yellow),
        LoadStatus::Ready => ("OK".to_string(), Color::Green),
        LoadStatus::Failed(e) => (format!("Error: {}", e), Color::Red),
    };
    Line::from(vec![
        Span::styled(format!("{:20}", label), Style::default().fg(Color::Gray)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

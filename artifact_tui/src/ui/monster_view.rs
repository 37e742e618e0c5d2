//! Monster tab - search-as-you-type picker and the picked monster

use super::{section_header, status_line, value_line};
use crate::app::{App, LoadStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_picker(f, app, chunks[0]);
    draw_monster(f, app, chunks[1]);
}

fn draw_picker(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let search = if app.query.is_empty() {
        let hint = match app.catalog_status {
            LoadStatus::Loading => "Loading monster list...",
            _ => "Type to search...",
        };
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::styled(app.query.clone(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    };
    f.render_widget(
        Paragraph::new(search).block(Block::default().borders(Borders::ALL).title(" Monster ")),
        chunks[0],
    );

    let matches = app.filtered_monsters();
    let mut lines: Vec<Line> = vec![];

    let header = match &app.catalog_status {
        LoadStatus::Loading => "Loading...".to_string(),
        LoadStatus::Failed(e) => format!("Could not load the list: {}", e),
        _ if app.query.trim().is_empty() => format!("Showing {} (type to filter)", matches.len()),
        _ => format!("{} matches", matches.len()),
    };
    lines.push(Line::from(Span::styled(header, Style::default().fg(Color::DarkGray))));

    if matches.is_empty() && app.catalog_status == LoadStatus::Ready {
        lines.push(Line::from(Span::styled("No matches.", Style::default().fg(Color::Gray))));
    }

    for (i, monster) in matches.iter().enumerate() {
        let is_selected = i == app.selected_index;
        let is_picked = app.picked.as_ref().map(|p| p.id) == Some(monster.id);

        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else if is_picked {
            ("* ", Style::default().fg(Color::Green))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(monster.name.clone(), style),
            Span::styled(
                monster.element.as_ref().map(|e| format!(" ({})", e)).unwrap_or_default(),
                Style::default().fg(element_color(monster.element.as_deref())),
            ),
        ]));
    }

    // Keep the selection in view (header line plus borders)
    let visible = chunks[1].height.saturating_sub(3) as usize;
    let scroll = (app.selected_index + 1).saturating_sub(visible);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Awakened monsters "))
        .scroll((scroll as u16, 0));

    f.render_widget(paragraph, chunks[1]);
}

fn draw_monster(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![section_header("Selection")];

    match &app.picked {
        Some(item) => lines.push(value_line("Picked", item.display_name())),
        None => lines.push(Line::from(Span::styled(
            "  No monster picked",
            Style::default().fg(Color::DarkGray),
        ))),
    }
    lines.push(status_line("Lookup", &app.monster_status));

    if let Some(monster) = &app.monster {
        let base = monster.base_stats();
        lines.push(Line::from(""));
        lines.push(section_header("Max level stats"));
        lines.push(value_line("HP", app.format(base.max_hp)));
        lines.push(value_line("ATK", app.format(base.max_attack)));
        lines.push(value_line("DEF", app.format(base.max_defense)));
        lines.push(value_line("SPD", app.format(base.speed)));

        lines.push(Line::from(""));
        lines.push(section_header("Leader skill"));
        match &app.monster_leader {
            Some(skill) => lines.push(value_line("Skill", skill.describe())),
            None => lines.push(Line::from(Span::styled(
                "  none",
                Style::default().fg(Color::DarkGray),
            ))),
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Details "));

    f.render_widget(paragraph, area);
}

fn element_color(element: Option<&str>) -> Color {
    match element {
        Some("Fire") => Color::Red,
        Some("Water") => Color::Blue,
        Some("Wind") => Color::Yellow,
        Some("Light") => Color::White,
        Some("Dark") => Color::Magenta,
        _ => Color::Gray,
    }
}

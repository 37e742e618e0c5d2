//! Setup tab - siege, leader skill and rune bonuses shared by both builds

use super::{field_label, placeholder, section_header};
use crate::app::{App, SetupField};
use artifact_core::numeric::to_input_text;
use artifact_core::{LeaderAttribute, TOWERS, SIEGE_BONUS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_fields(f, app, chunks[0]);
    draw_bonuses(f, app, chunks[1]);
}

fn draw_fields(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.setup_field();
    let mut lines = vec![section_header("Mode")];

    let siege = if app.siege_active {
        Span::styled("[x] Siege War", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ] Siege War", Style::default().fg(Color::Gray))
    };
    lines.push(Line::from(vec![field_label("Siege War?", focused == SetupField::Siege), siege]));

    lines.push(Line::from(""));
    lines.push(section_header("Leader"));

    let attribute = if app.leader.attribute == LeaderAttribute::None {
        placeholder()
    } else {
        Span::styled(app.leader.attribute.label(), Style::default().fg(Color::White))
    };
    lines.push(Line::from(vec![
        field_label("Attribute", focused == SetupField::LeaderAttribute),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        attribute,
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]));

    let value = if app.leader.attribute == LeaderAttribute::None {
        Span::styled("-", Style::default().fg(Color::DarkGray))
    } else if app.leader.amount == 0.0 {
        placeholder()
    } else {
        Span::styled(format!("{}%", app.leader.amount), Style::default().fg(Color::White))
    };
    lines.push(Line::from(vec![
        field_label("Value", focused == SetupField::LeaderValue),
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        value,
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]));

    let own = match (&app.monster, &app.monster_leader) {
        (None, _) => Span::styled("(no monster)", Style::default().fg(Color::DarkGray)),
        (Some(_), None) => Span::styled("(none)", Style::default().fg(Color::DarkGray)),
        (Some(_), Some(skill)) => Span::styled(
            format!("[Enter] {}", skill.describe()),
            Style::default().fg(Color::Cyan),
        ),
    };
    lines.push(Line::from(vec![field_label("Own leader", focused == SetupField::OwnLeader), own]));

    lines.push(Line::from(""));
    lines.push(section_header("Rune bonus (without artifacts)"));

    for field in SetupField::all() {
        if let SetupField::Rune(attribute) = field {
            let label = format!("{} bonus", attribute.label());
            lines.push(Line::from(vec![
                field_label(&label, focused == *field),
                Span::styled(
                    to_input_text(app.runes.get(*attribute)),
                    Style::default().fg(Color::White),
                ),
            ]));
        }
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Setup "));
    f.render_widget(paragraph, area);
}

fn draw_bonuses(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        section_header("Percent bonuses"),
        Line::from(Span::styled(
            "Total = Base × (1 + Towers + Leader + Siege) + Runes + Artifacts",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    let leader = artifact_core::leader_contribution(&app.leader);
    for attribute in artifact_core::Attribute::all() {
        let siege = if app.siege_active { SIEGE_BONUS.get(*attribute) } else { 0.0 };
        let total = TOWERS.get(*attribute) + leader.get(*attribute) + siege;
        lines.push(Line::from(vec![
            Span::styled(format!("  {:4}", attribute.label()), Style::default().fg(Color::White)),
            Span::styled(
                format!(" towers {:>3.0}%", TOWERS.get(*attribute) * 100.0),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("  leader {:>3.0}%", leader.get(*attribute) * 100.0),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("  siege {:>3.0}%", siege * 100.0),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(format!("  = +{:.0}%", total * 100.0), Style::default().fg(Color::Yellow)),
        ]));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Bonuses "));
    f.render_widget(paragraph, area);
}

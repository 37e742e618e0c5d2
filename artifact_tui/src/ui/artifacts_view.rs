//! Artifacts tab - damage percentages and flat main stats of A and B

use super::{field_label, placeholder, section_header};
use crate::app::{App, ArtifactField};
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

    draw_build(f, app, 0, chunks[0]);
    draw_build(f, app, 1, chunks[1]);
}

fn draw_build(f: &mut Frame, app: &App, index: usize, area: Rect) {
    let build = &app.builds[index];
    let active = app.artifact_build == index;
    let mut lines = vec![section_header("% damage per attribute")];

    for field in ArtifactField::all() {
        let focused = active && app.artifact_field() == *field;
        match field {
            ArtifactField::Weight(attribute) => {
                let text = build.weight_text(*attribute);
                let value = if text.is_empty() {
                    let hint = if *attribute == artifact_core::Attribute::Hp { "0,0" } else { "0" };
                    Span::styled(hint, Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(text.to_string(), Style::default().fg(Color::White))
                };
                lines.push(Line::from(vec![
                    field_label(&format!("% per {}", attribute.label()), focused),
                    value,
                    Span::styled(" %", Style::default().fg(Color::Gray)),
                ]));
            }
            ArtifactField::Slot(slot) => {
                if *slot == 0 {
                    lines.push(Line::from(""));
                    lines.push(section_header("Main stat"));
                }
                let pick = match build.flats[*slot].label() {
                    None => vec![placeholder()],
                    Some((main, bonus)) => vec![
                        Span::styled(format!("{} ", main), Style::default().fg(Color::White)),
                        Span::styled(bonus, Style::default().fg(Color::Green)),
                    ],
                };
                let mut spans = vec![
                    field_label(&format!("Artifact {}", slot + 1), focused),
                    Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                ];
                spans.extend(pick);
                spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
                lines.push(Line::from(spans));
            }
        }
    }

    let weights = build.weights();
    let flats = build.to_build().flat_equipment_bonus;
    lines.push(Line::from(""));
    lines.push(section_header("Parsed"));
    lines.push(Line::from(Span::styled(
        format!(
            "  weights HP {} / ATK {} / DEF {} / SPD {}",
            weights.hp, weights.attack, weights.defense, weights.speed
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        format!(
            "  flats   HP +{} / ATK +{} / DEF +{}",
            app.format(flats.hp),
            app.format(flats.attack),
            app.format(flats.defense)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    let title = format!(" Artifact {} ", if index == 0 { "A" } else { "B" });
    let border = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );

    f.render_widget(paragraph, area);
}

//! Results tab - scores, totals and how each total is built

use super::{score_bar, section_header, tone_color};
use crate::app::{App, Tone};
use artifact_core::stat_block::{StatBlock, StatRow};
use artifact_core::{Attribute, ComparisonResult, Winner};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = app.result() else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "Pick a monster to see the results.",
            Style::default().fg(Color::Gray),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Results "));
        f.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    draw_summary(f, app, &result, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_breakdown(f, app, "A", &result.block_a, columns[0]);
    draw_breakdown(f, app, "B", &result.block_b, columns[1]);
}

fn draw_summary(f: &mut Frame, app: &App, result: &ComparisonResult, area: Rect) {
    let max = result.score_a.max(result.score_b);
    let bar_width = area.width.saturating_sub(42).min(60);
    let builds = [
        ("Artifact A", &result.comparison.a),
        ("Artifact B", &result.comparison.b),
    ];

    let mut lines = vec![];
    for (index, (name, damage)) in builds.into_iter().enumerate() {
        let color = tone_color(Tone::for_build(result.winner, index));
        let main_axis = damage.dominant_axis().map(|a| a.label()).unwrap_or("-");
        let mut spans = vec![
            Span::styled(
                format!("{:12}", name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>10}  ", app.format(damage.score)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ];
        spans.extend(score_bar(damage.score, max, bar_width, color).spans);
        spans.push(Span::styled(
            format!("  mostly {}", main_axis),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    for attribute in Attribute::all() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} total (A / B)", attribute.label()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!(
                    "  {} / {}",
                    app.format(result.total_a.get(*attribute)),
                    app.format(result.total_b.get(*attribute))
                ),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let verdict = match result.winner {
        Winner::Tie => "Tie".to_string(),
        winner => format!(
            "Artifact {} by {}",
            winner.symbol(),
            app.format(result.margin().abs())
        ),
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Winner: {} ", verdict)),
    );

    f.render_widget(paragraph, area);
}

fn draw_breakdown(f: &mut Frame, app: &App, name: &str, block: &StatBlock, area: Rect) {
    let mut lines = vec![section_header("Totals")];
    for row in block.rows() {
        lines.extend(row_lines(app, &row));
    }

    lines.push(Line::from(""));
    lines.push(section_header("Sources"));
    for contribution in block.contributions() {
        let delta = &contribution.delta;
        let mut parts: Vec<String> = vec![];
        for attribute in Attribute::all() {
            let increased = delta.increased.get(*attribute);
            let flat = delta.flat.get(*attribute);
            if increased != 0.0 {
                parts.push(format!("{} {:+.0}%", attribute.label(), increased * 100.0));
            }
            if flat != 0.0 {
                parts.push(format!("{} +{}", attribute.label(), app.format(flat)));
            }
        }
        if delta.base != artifact_core::Stats::ZERO {
            parts.push("base".to_string());
        }
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", contribution.source_id),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(parts.join(", "), Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Artifact {} breakdown ", name)),
    );

    f.render_widget(paragraph, area);
}

fn row_lines(app: &App, row: &StatRow) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!("{:6}", row.attribute.label()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("= {}", app.format(row.total)),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(app.format(row.base), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" ×{:.2}", 1.0 + row.increased),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                format!("({:+.0}%)", row.increased * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!(" +{}", app.format(row.flat)),
                Style::default().fg(Color::Blue),
            ),
        ]),
    ]
}

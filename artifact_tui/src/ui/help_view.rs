//! Help tab view

use super::section_header;
use crate::app::App;
use artifact_core::config::{ARTIFACT_FLAT_ATTACK, ARTIFACT_FLAT_DEFENSE, ARTIFACT_FLAT_HP};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("F1-F5", "Jump to tab (Monster/Setup/Artifacts/Results/Help)"),
        key_line("↑/↓", "Move between fields / list entries"),
        key_line("Ctrl+C / Ctrl+Q", "Quit"),
        Line::from(""),
        section_header("Monster"),
        key_line("type", "Search by name or element"),
        key_line("Enter", "Pick the highlighted monster"),
        key_line("Esc", "Clear the search and the pick"),
        Line::from(""),
        section_header("Setup & Artifacts"),
        key_line("←/→", "Change selector / switch artifact A-B"),
        key_line("Enter / Space", "Toggle siege, apply the monster's own leader"),
        key_line("0-9 ,", "Type into the focused field"),
        Line::from(""),
        section_header("Calculation"),
        Line::from(Span::styled(
            "  Total = Base × (1 + Towers + Leader + Siege) + Runes + Artifact flats",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  Towers: HP +20%, ATK +41%, DEF +20%, SPD +15%"),
        Line::from("  Siege:  HP/ATK/DEF +20%"),
        Line::from(format!(
            "  Artifact flats: HP +{}, ATK +{}, DEF +{}",
            app.format(ARTIFACT_FLAT_HP),
            app.format(ARTIFACT_FLAT_ATTACK),
            app.format(ARTIFACT_FLAT_DEFENSE)
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Score = Σ Total × (% per attribute / 100)",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("  The higher score wins; equal scores are a tie."),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

//! Application state

use crate::config::AppConfig;
use crate::lookup::{LookupEvent, LookupWorker};
use artifact_core::catalog::{
    CreatureLookup, LeaderSkill, MonsterCatalog, MonsterDetail, MonsterListItem,
};
use artifact_core::numeric::{
    parse_decimal, sanitize_decimal_input, sanitize_integer_input, to_input_text,
};
use artifact_core::{
    evaluate, ArtifactFlat, Attribute, Build, ComparisonInput, ComparisonResult, LeaderAttribute,
    LeaderChoice, Stats, Winner,
};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Text shown where nothing has been picked yet
pub const PLACEHOLDER_SELECT: &str = "Select…";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Monster,
    Setup,
    Artifacts,
    Results,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Monster, Tab::Setup, Tab::Artifacts, Tab::Results, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Monster => "Monster",
            Tab::Setup => "Setup",
            Tab::Artifacts => "Artifacts",
            Tab::Results => "Results",
            Tab::Help => "Help",
        }
    }
}

/// Progress of a background lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Fields of the setup tab, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Siege,
    LeaderAttribute,
    LeaderValue,
    OwnLeader,
    Rune(Attribute),
}

impl SetupField {
    pub fn all() -> &'static [SetupField] {
        &[
            SetupField::Siege,
            SetupField::LeaderAttribute,
            SetupField::LeaderValue,
            SetupField::OwnLeader,
            SetupField::Rune(Attribute::Hp),
            SetupField::Rune(Attribute::Attack),
            SetupField::Rune(Attribute::Defense),
            SetupField::Rune(Attribute::Speed),
        ]
    }
}

/// Fields of one artifact build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactField {
    Weight(Attribute),
    Slot(usize),
}

impl ArtifactField {
    pub fn all() -> &'static [ArtifactField] {
        &[
            ArtifactField::Weight(Attribute::Hp),
            ArtifactField::Weight(Attribute::Attack),
            ArtifactField::Weight(Attribute::Defense),
            ArtifactField::Weight(Attribute::Speed),
            ArtifactField::Slot(0),
            ArtifactField::Slot(1),
        ]
    }
}

/// How a build's score should be presented next to the other one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Bad,
    Neutral,
}

impl Tone {
    /// Tone of build `index` (0 = A, 1 = B) given the verdict
    pub fn for_build(winner: Winner, index: usize) -> Tone {
        match (winner, index) {
            (Winner::Tie, _) => Tone::Neutral,
            (Winner::A, 0) | (Winner::B, 1) => Tone::Good,
            _ => Tone::Bad,
        }
    }
}

/// Raw form state of one artifact
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildInput {
    /// Damage percentage per axis as typed
    pub weights: [String; 4],
    pub flats: [ArtifactFlat; 2],
}

impl BuildInput {
    pub fn weight_text(&self, attribute: Attribute) -> &str {
        &self.weights[axis_index(attribute)]
    }

    /// Type a character into a weight field.
    ///
    /// The HP field takes a decimal comma; the others take digits only.
    pub fn push_weight_char(&mut self, attribute: Attribute, c: char) {
        let text = &mut self.weights[axis_index(attribute)];
        text.push(c);
        *text = match attribute {
            Attribute::Hp => sanitize_decimal_input(text),
            _ => sanitize_integer_input(text),
        };
    }

    pub fn pop_weight_char(&mut self, attribute: Attribute) {
        self.weights[axis_index(attribute)].pop();
    }

    pub fn weights(&self) -> Stats {
        let mut weights = Stats::ZERO;
        for attribute in Attribute::all() {
            weights.set(*attribute, parse_decimal(self.weight_text(*attribute)));
        }
        weights
    }

    pub fn to_build(&self) -> Build {
        Build::from_picks(&self.flats, self.weights())
    }
}

fn axis_index(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Hp => 0,
        Attribute::Attack => 1,
        Attribute::Defense => 2,
        Attribute::Speed => 3,
    }
}

pub struct App {
    pub config: AppConfig,
    pub current_tab: Tab,
    pub should_quit: bool,
    worker: LookupWorker,

    // Monster picker
    pub catalog: MonsterCatalog,
    pub catalog_status: LoadStatus,
    pub query: String,
    pub selected_index: usize,
    pub picked: Option<MonsterListItem>,
    pub monster: Option<MonsterDetail>,
    pub monster_leader: Option<LeaderSkill>,
    pub monster_status: LoadStatus,

    // Setup
    pub siege_active: bool,
    pub leader: LeaderChoice,
    pub runes: Stats,
    pub setup_focus: usize,

    // Artifacts
    pub builds: [BuildInput; 2],
    pub artifact_build: usize,
    pub artifact_focus: usize,

    /// One-line feedback shown in the footer
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, lookup: Arc<dyn CreatureLookup>, runtime: Handle) -> Self {
        let worker = LookupWorker::new(lookup, runtime);
        worker.request_monster_list();

        App {
            config,
            current_tab: Tab::Monster,
            should_quit: false,
            worker,
            catalog: MonsterCatalog::default(),
            catalog_status: LoadStatus::Loading,
            query: String::new(),
            selected_index: 0,
            picked: None,
            monster: None,
            monster_leader: None,
            monster_status: LoadStatus::Idle,
            siege_active: false,
            leader: LeaderChoice::none(),
            runes: Stats::ZERO,
            setup_focus: 0,
            builds: [BuildInput::default(), BuildInput::default()],
            artifact_build: 0,
            artifact_focus: 0,
            status_message: None,
        }
    }

    // ===== Lookups =====

    /// Apply finished background lookups
    pub fn poll_lookups(&mut self) {
        for event in self.worker.poll() {
            match event {
                LookupEvent::MonsterList(Ok(list)) => {
                    self.catalog = MonsterCatalog::new(list);
                    self.catalog_status = LoadStatus::Ready;
                    self.selected_index = 0;
                }
                LookupEvent::MonsterList(Err(e)) => {
                    tracing::error!(error = %e, "monster list lookup failed");
                    self.catalog_status = LoadStatus::Failed(e.to_string());
                }
                LookupEvent::Monster { result: Ok(found), .. } => {
                    tracing::info!(
                        id = found.monster.id,
                        name = %found.monster.name,
                        "monster ready"
                    );
                    self.monster = Some(found.monster);
                    self.monster_leader = found.leader_skill;
                    self.monster_status = LoadStatus::Ready;
                }
                LookupEvent::Monster { id, result: Err(e), .. } => {
                    tracing::error!(id, error = %e, "monster lookup failed");
                    self.monster = None;
                    self.monster_leader = None;
                    self.monster_status = LoadStatus::Failed(e.to_string());
                }
            }
        }
    }

    // ===== Derived state =====

    /// Picker entries matching the current query
    pub fn filtered_monsters(&self) -> Vec<&MonsterListItem> {
        self.catalog.search(&self.query)
    }

    pub fn comparison_input(&self) -> ComparisonInput {
        ComparisonInput {
            base: self.monster.as_ref().map(MonsterDetail::base_stats),
            leader: self.leader,
            siege_active: self.siege_active,
            flat_user_bonus: self.runes,
            build_a: self.builds[0].to_build(),
            build_b: self.builds[1].to_build(),
        }
    }

    /// Comparison of both builds; `None` until a monster is loaded
    pub fn result(&self) -> Option<ComparisonResult> {
        evaluate(&self.comparison_input())
    }

    pub fn setup_field(&self) -> SetupField {
        SetupField::all()[self.setup_focus]
    }

    pub fn artifact_field(&self) -> ArtifactField {
        ArtifactField::all()[self.artifact_focus]
    }

    pub fn leader_values(&self) -> &[f64] {
        self.config.leader_values.values(self.leader.attribute)
    }

    pub fn format(&self, value: f64) -> String {
        self.config.display.format(value)
    }

    // ===== Tabs =====

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    // ===== Input =====

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Monster => self.selected_index = self.selected_index.saturating_sub(1),
            Tab::Setup => self.setup_focus = self.setup_focus.saturating_sub(1),
            Tab::Artifacts => self.artifact_focus = self.artifact_focus.saturating_sub(1),
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Monster => {
                let count = self.filtered_monsters().len();
                if self.selected_index + 1 < count {
                    self.selected_index += 1;
                }
            }
            Tab::Setup => {
                if self.setup_focus + 1 < SetupField::all().len() {
                    self.setup_focus += 1;
                }
            }
            Tab::Artifacts => {
                if self.artifact_focus + 1 < ArtifactField::all().len() {
                    self.artifact_focus += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Setup => self.cycle_setup_field(false),
            Tab::Artifacts => self.cycle_artifact_field(false),
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Setup => self.cycle_setup_field(true),
            Tab::Artifacts => self.cycle_artifact_field(true),
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Monster => self.pick_selected(),
            Tab::Setup => match self.setup_field() {
                SetupField::Siege => self.toggle_siege(),
                SetupField::OwnLeader => self.use_own_leader(),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn on_escape(&mut self) {
        if self.current_tab == Tab::Monster {
            self.clear_monster();
        }
    }

    pub fn on_char(&mut self, c: char) {
        match self.current_tab {
            Tab::Monster => {
                self.query.push(c);
                self.on_query_changed();
            }
            Tab::Setup => match self.setup_field() {
                SetupField::Rune(attribute) => self.push_rune_char(attribute, c),
                SetupField::Siege if c == ' ' => self.toggle_siege(),
                SetupField::OwnLeader if c == ' ' => self.use_own_leader(),
                _ => {}
            },
            Tab::Artifacts => {
                if let ArtifactField::Weight(attribute) = self.artifact_field() {
                    self.builds[self.artifact_build].push_weight_char(attribute, c);
                }
            }
            _ => {}
        }
    }

    pub fn on_backspace(&mut self) {
        match self.current_tab {
            Tab::Monster => {
                if self.query.pop().is_some() {
                    self.on_query_changed();
                }
            }
            Tab::Setup => {
                if let SetupField::Rune(attribute) = self.setup_field() {
                    let mut text = to_input_text(self.runes.get(attribute));
                    text.pop();
                    self.runes.set(attribute, parse_decimal(&text));
                }
            }
            Tab::Artifacts => {
                if let ArtifactField::Weight(attribute) = self.artifact_field() {
                    self.builds[self.artifact_build].pop_weight_char(attribute);
                }
            }
            _ => {}
        }
    }

    // ===== Monster picker =====

    /// Editing the search drops the current pick
    fn on_query_changed(&mut self) {
        self.selected_index = 0;
        if self.picked.is_some() {
            self.picked = None;
            self.monster = None;
            self.monster_leader = None;
            self.monster_status = LoadStatus::Idle;
            self.worker.cancel();
        }
    }

    /// Select the highlighted entry and start its lookup
    pub fn pick_selected(&mut self) {
        let selected = self.filtered_monsters().get(self.selected_index).map(|m| (*m).clone());
        let Some(item) = selected else {
            return;
        };
        self.pick(item);
    }

    pub fn pick(&mut self, item: MonsterListItem) {
        tracing::info!(id = item.id, name = %item.display_name(), "monster picked");
        self.worker.request_monster(item.id);
        self.picked = Some(item);
        self.monster = None;
        self.monster_leader = None;
        self.monster_status = LoadStatus::Loading;
        self.status_message = None;
    }

    pub fn clear_monster(&mut self) {
        self.query.clear();
        self.selected_index = 0;
        self.picked = None;
        self.monster = None;
        self.monster_leader = None;
        self.monster_status = LoadStatus::Idle;
        self.worker.cancel();
    }

    // ===== Setup =====

    pub fn toggle_siege(&mut self) {
        self.siege_active = !self.siege_active;
    }

    /// Change the leader attribute; the value goes back to unselected
    pub fn set_leader_attribute(&mut self, attribute: LeaderAttribute) {
        self.leader = LeaderChoice::new(attribute, 0.0);
    }

    /// Step the leader value through "unselected" and the allowed values
    pub fn cycle_leader_value(&mut self, forward: bool) {
        let values = self.leader_values();
        if values.is_empty() {
            return;
        }
        // Slot 0 is the unselected state
        let slots = values.len() + 1;
        let current = values
            .iter()
            .position(|v| *v == self.leader.amount)
            .map(|i| i + 1)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let amount = if next == 0 { 0.0 } else { values[next - 1] };
        self.leader.amount = amount;
    }

    /// Copy the loaded monster's own leader skill into the leader selector
    pub fn use_own_leader(&mut self) {
        let Some(skill) = &self.monster_leader else {
            self.status_message = Some("This monster has no leader skill".to_string());
            return;
        };
        let choice = skill.to_choice();
        if choice.is_active() {
            self.leader = choice;
            self.status_message = Some(format!("Leader set to {}", skill.describe()));
        } else {
            self.status_message =
                Some(format!("{} does not affect HP/ATK/DEF/SPD", skill.describe()));
        }
    }

    fn cycle_setup_field(&mut self, forward: bool) {
        match self.setup_field() {
            SetupField::Siege => self.toggle_siege(),
            SetupField::LeaderAttribute => {
                let all = LeaderAttribute::all();
                let idx = all.iter().position(|a| *a == self.leader.attribute).unwrap_or(0);
                let next = if forward {
                    (idx + 1) % all.len()
                } else {
                    (idx + all.len() - 1) % all.len()
                };
                self.set_leader_attribute(all[next]);
            }
            SetupField::LeaderValue => self.cycle_leader_value(forward),
            SetupField::OwnLeader | SetupField::Rune(_) => {}
        }
    }

    /// Rune fields hold numbers; typing edits their comma-decimal text form
    fn push_rune_char(&mut self, attribute: Attribute, c: char) {
        if !(c.is_ascii_digit() || c == ',' || c == '.' || c == '-') {
            return;
        }
        let mut text = to_input_text(self.runes.get(attribute));
        if text == "0" {
            text.clear();
        }
        text.push(c);
        self.runes.set(attribute, parse_decimal(&text));
    }

    // ===== Artifacts =====

    fn cycle_artifact_field(&mut self, forward: bool) {
        match self.artifact_field() {
            ArtifactField::Slot(slot) => {
                let flat = &mut self.builds[self.artifact_build].flats[slot];
                *flat = if forward { flat.next() } else { flat.prev() };
            }
            ArtifactField::Weight(_) => self.artifact_build = 1 - self.artifact_build,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifact_core::LocalCatalog;
    use std::sync::OnceLock;
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    const CATALOG: &str = r#"{
        "monsters": [
            {"id": 10, "name": "Testmon", "awaken_level": 1, "element": "Fire", "speed": 100,
             "max_lvl_hp": 10000, "max_lvl_attack": 1000, "max_lvl_defense": 1000, "leader_skill": 3},
            {"id": 11, "name": "Lushen", "awaken_level": 1, "element": "Wind", "speed": 103,
             "max_lvl_hp": 9225, "max_lvl_attack": 900, "max_lvl_defense": 461, "leader_skill": null},
            {"id": 12, "name": "Lushen", "awaken_level": 1, "element": "Fire", "speed": 103,
             "max_lvl_hp": 9225, "max_lvl_attack": 900, "max_lvl_defense": 461, "leader_skill": 4}
        ],
        "leader_skills": [
            {"id": 3, "attribute": "Attack Power", "amount": 30, "area": "General", "element": null},
            {"id": 4, "attribute": "Critical Rate", "amount": 24, "area": "General", "element": null}
        ]
    }"#;

    fn runtime() -> &'static Runtime {
        static RUNTIME: OnceLock<Runtime> = OnceLock::new();
        RUNTIME.get_or_init(|| Runtime::new().unwrap())
    }

    fn app() -> App {
        let lookup = Arc::new(LocalCatalog::from_json(CATALOG).unwrap());
        let mut app = App::new(AppConfig::default(), lookup, runtime().handle().clone());
        wait_until(&mut app, |app| app.catalog_status != LoadStatus::Loading);
        app
    }

    fn wait_until(app: &mut App, done: impl Fn(&App) -> bool) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while !done(app) && Instant::now() < deadline {
            app.poll_lookups();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_char(c);
        }
    }

    fn load_testmon(app: &mut App) {
        type_text(app, "testmon");
        app.on_enter();
        wait_until(app, |app| app.monster_status != LoadStatus::Loading);
        assert_eq!(app.monster_status, LoadStatus::Ready);
    }

    #[test]
    fn test_catalog_loaded_sorted() {
        let app = app();
        assert_eq!(app.catalog_status, LoadStatus::Ready);
        let names: Vec<String> = app.filtered_monsters().iter().map(|m| m.display_name()).collect();
        assert_eq!(names, vec!["Lushen (Fire)", "Lushen (Wind)", "Testmon (Fire)"]);
    }

    #[test]
    fn test_search_and_pick() {
        let mut app = app();
        type_text(&mut app, "lushen wi");
        let matches = app.filtered_monsters();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 11);

        app.on_enter();
        assert_eq!(app.monster_status, LoadStatus::Loading);
        wait_until(&mut app, |app| app.monster.is_some());
        assert_eq!(app.monster.as_ref().map(|m| m.id), Some(11));
    }

    #[test]
    fn test_no_result_without_monster() {
        let app = app();
        assert!(app.result().is_none());
    }

    #[test]
    fn test_end_to_end_comparison() {
        let mut app = app();
        load_testmon(&mut app);

        // Leader ATK 30% through the monster's own skill
        app.current_tab = Tab::Setup;
        app.setup_focus = SetupField::all()
            .iter()
            .position(|f| *f == SetupField::OwnLeader)
            .unwrap();
        app.on_enter();
        assert_eq!(app.leader, LeaderChoice::new(LeaderAttribute::Attack, 30.0));

        app.current_tab = Tab::Artifacts;
        app.artifact_build = 0;
        app.artifact_focus = 1;
        type_text(&mut app, "100");
        app.artifact_build = 1;
        app.artifact_focus = 0;
        type_text(&mut app, "50");

        let result = app.result().unwrap();
        assert!((result.total_a.attack - 1710.0).abs() < 1e-6);
        assert!((result.score_a - 1710.0).abs() < 1e-6);
        assert!((result.score_b - 6000.0).abs() < 1e-6);
        assert_eq!(result.winner, Winner::B);
    }

    #[test]
    fn test_editing_query_drops_pick() {
        let mut app = app();
        load_testmon(&mut app);
        app.on_backspace();
        assert!(app.picked.is_none());
        assert!(app.monster.is_none());
        assert!(app.result().is_none());
    }

    #[test]
    fn test_escape_clears_picker() {
        let mut app = app();
        load_testmon(&mut app);
        app.on_escape();
        assert!(app.query.is_empty());
        assert!(app.monster.is_none());
        assert_eq!(app.monster_status, LoadStatus::Idle);
    }

    #[test]
    fn test_own_leader_outside_model() {
        let mut app = app();
        type_text(&mut app, "lushen fire");
        app.on_enter();
        wait_until(&mut app, |app| app.monster_status != LoadStatus::Loading);

        app.use_own_leader();
        assert_eq!(app.leader, LeaderChoice::none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_leader_value_cycle() {
        let mut app = app();
        app.cycle_leader_value(true);
        assert_eq!(app.leader.amount, 0.0, "no values without an attribute");

        app.set_leader_attribute(LeaderAttribute::Speed);
        app.cycle_leader_value(true);
        assert_eq!(app.leader.amount, 10.0);
        app.cycle_leader_value(false);
        assert_eq!(app.leader.amount, 0.0);
        app.cycle_leader_value(false);
        assert_eq!(app.leader.amount, 33.0);

        app.set_leader_attribute(LeaderAttribute::Hp);
        assert_eq!(app.leader.amount, 0.0);
    }

    #[test]
    fn test_weight_fields_sanitize() {
        let mut build = BuildInput::default();
        for c in "12,5,3x".chars() {
            build.push_weight_char(Attribute::Hp, c);
        }
        assert_eq!(build.weight_text(Attribute::Hp), "12,53");

        for c in "1,5a".chars() {
            build.push_weight_char(Attribute::Attack, c);
        }
        assert_eq!(build.weight_text(Attribute::Attack), "15");
        assert_eq!(build.weights(), Stats::new(12.53, 15.0, 0.0, 0.0));
    }

    #[test]
    fn test_rune_fields() {
        let mut app = app();
        app.current_tab = Tab::Setup;
        app.setup_focus = SetupField::all()
            .iter()
            .position(|f| *f == SetupField::Rune(Attribute::Hp))
            .unwrap();
        type_text(&mut app, "1500");
        assert_eq!(app.runes.hp, 1500.0);
        app.on_backspace();
        assert_eq!(app.runes.hp, 150.0);
        type_text(&mut app, "x");
        assert_eq!(app.runes.hp, 150.0);
    }

    #[test]
    fn test_artifact_slots_cycle() {
        let mut app = app();
        app.current_tab = Tab::Artifacts;
        app.artifact_focus = 4;
        app.on_right();
        app.on_right();
        assert_eq!(app.builds[0].flats[0], ArtifactFlat::Attack);
        app.on_left();
        assert_eq!(app.builds[0].flats[0], ArtifactFlat::Defense);
        assert_eq!(app.builds[0].to_build().flat_equipment_bonus, Stats::new(0.0, 0.0, 100.0, 0.0));
    }

    #[test]
    fn test_labels() {
        let names: Vec<&str> = Tab::all().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Monster", "Setup", "Artifacts", "Results", "Help"]);
        assert_eq!(PLACEHOLDER_SELECT, "Select…");
    }

    #[test]
    fn test_tone_for_build() {
        assert_eq!(Tone::for_build(Winner::A, 0), Tone::Good);
        assert_eq!(Tone::for_build(Winner::A, 1), Tone::Bad);
        assert_eq!(Tone::for_build(Winner::B, 1), Tone::Good);
        assert_eq!(Tone::for_build(Winner::Tie, 0), Tone::Neutral);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Monster);
        app.set_tab(3);
        assert_eq!(app.current_tab, Tab::Results);
    }
}

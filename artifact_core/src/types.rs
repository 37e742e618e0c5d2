//! Core types specific to artifact_core

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul};

/// One of the four stat axes a monster has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Hp,
    Attack,
    Defense,
    Speed,
}

impl Attribute {
    /// Get all attributes in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Hp,
            Attribute::Attack,
            Attribute::Defense,
            Attribute::Speed,
        ]
    }

    /// Short label used by the UI
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Hp => "HP",
            Attribute::Attack => "ATK",
            Attribute::Defense => "DEF",
            Attribute::Speed => "SPD",
        }
    }
}

/// A value per stat axis.
///
/// Used for base stats, flat bonuses, percentage multipliers and damage
/// weights alike. Arithmetic is plain per-axis floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub hp: f64,
    #[serde(default)]
    pub attack: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub speed: f64,
}

impl Stats {
    pub const ZERO: Stats = Stats::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(hp: f64, attack: f64, defense: f64, speed: f64) -> Self {
        Stats {
            hp,
            attack,
            defense,
            speed,
        }
    }

    /// Vector with a single non-zero axis
    pub fn single(attribute: Attribute, value: f64) -> Self {
        let mut stats = Stats::ZERO;
        stats.set(attribute, value);
        stats
    }

    pub fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Hp => self.hp,
            Attribute::Attack => self.attack,
            Attribute::Defense => self.defense,
            Attribute::Speed => self.speed,
        }
    }

    pub fn set(&mut self, attribute: Attribute, value: f64) {
        match attribute {
            Attribute::Hp => self.hp = value,
            Attribute::Attack => self.attack = value,
            Attribute::Defense => self.defense = value,
            Attribute::Speed => self.speed = value,
        }
    }

    /// Apply `f` to every axis
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Stats::new(f(self.hp), f(self.attack), f(self.defense), f(self.speed))
    }

    /// Combine two vectors axis by axis
    pub fn zip_with(self, other: Stats, f: impl Fn(f64, f64) -> f64) -> Self {
        Stats::new(
            f(self.hp, other.hp),
            f(self.attack, other.attack),
            f(self.defense, other.defense),
            f(self.speed, other.speed),
        )
    }

    /// Sum of all four axes
    pub fn sum(&self) -> f64 {
        self.hp + self.attack + self.defense + self.speed
    }

    /// Replace non-finite components with zero
    pub fn sanitized(self) -> Self {
        self.map(crate::numeric::finite_or_zero)
    }

    /// Number of axes with a non-zero value
    pub fn non_zero_axes(&self) -> usize {
        Attribute::all()
            .iter()
            .filter(|a| self.get(**a) != 0.0)
            .count()
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Mul<f64> for Stats {
    type Output = Stats;

    fn mul(self, rhs: f64) -> Stats {
        self.map(|v| v * rhs)
    }
}

impl std::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Stats {
        iter.fold(Stats::ZERO, |acc, s| acc + s)
    }
}

/// A monster's stats at max level with nothing applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureBaseStats {
    pub max_hp: f64,
    pub max_attack: f64,
    pub max_defense: f64,
    pub speed: f64,
}

impl CreatureBaseStats {
    pub fn new(max_hp: f64, max_attack: f64, max_defense: f64, speed: f64) -> Self {
        CreatureBaseStats {
            max_hp,
            max_attack,
            max_defense,
            speed,
        }
    }

    /// The base stats as a stat vector
    pub fn as_stats(&self) -> Stats {
        Stats::new(self.max_hp, self.max_attack, self.max_defense, self.speed)
    }
}

/// Which axis a leader skill boosts, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderAttribute {
    #[default]
    None,
    Hp,
    Attack,
    Defense,
    Speed,
}

impl LeaderAttribute {
    /// Get all choices in selector order
    pub fn all() -> &'static [LeaderAttribute] {
        &[
            LeaderAttribute::None,
            LeaderAttribute::Hp,
            LeaderAttribute::Attack,
            LeaderAttribute::Defense,
            LeaderAttribute::Speed,
        ]
    }

    /// The stat axis this choice targets
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            LeaderAttribute::None => None,
            LeaderAttribute::Hp => Some(Attribute::Hp),
            LeaderAttribute::Attack => Some(Attribute::Attack),
            LeaderAttribute::Defense => Some(Attribute::Defense),
            LeaderAttribute::Speed => Some(Attribute::Speed),
        }
    }

    pub fn label(&self) -> &'static str {
        self.attribute().map(|a| a.label()).unwrap_or("None")
    }
}

impl From<Attribute> for LeaderAttribute {
    fn from(attribute: Attribute) -> Self {
        match attribute {
            Attribute::Hp => LeaderAttribute::Hp,
            Attribute::Attack => LeaderAttribute::Attack,
            Attribute::Defense => LeaderAttribute::Defense,
            Attribute::Speed => LeaderAttribute::Speed,
        }
    }
}

/// Leader skill selection: an axis and a percentage (30.0 = +30%)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderChoice {
    pub attribute: LeaderAttribute,
    pub amount: f64,
}

impl LeaderChoice {
    pub fn new(attribute: LeaderAttribute, amount: f64) -> Self {
        LeaderChoice { attribute, amount }
    }

    /// No leader skill
    pub fn none() -> Self {
        LeaderChoice::default()
    }

    /// Whether this choice contributes anything
    pub fn is_active(&self) -> bool {
        self.attribute != LeaderAttribute::None && self.amount.is_finite() && self.amount > 0.0
    }
}

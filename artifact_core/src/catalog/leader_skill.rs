//! Leader skills as listed by Swarfarm

use crate::types::{LeaderAttribute, LeaderChoice};
use serde::{Deserialize, Serialize};

/// A leader skill record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderSkill {
    pub id: u32,
    /// Swarfarm attribute name, e.g. "Attack Power"
    pub attribute: String,
    /// Percentage, 33 = +33%
    pub amount: f64,
    /// Where the skill applies: "General", "Arena", "Guild", "Dungeon", "Element"
    #[serde(default)]
    pub area: String,
    /// Element restriction when `area` is "Element"
    #[serde(default)]
    pub element: Option<String>,
}

impl LeaderSkill {
    /// The stat axis this skill boosts, if the calculator models it
    pub fn leader_attribute(&self) -> LeaderAttribute {
        match self.attribute.as_str() {
            "HP" => LeaderAttribute::Hp,
            "Attack Power" => LeaderAttribute::Attack,
            "Defense" => LeaderAttribute::Defense,
            "Attack Speed" => LeaderAttribute::Speed,
            _ => LeaderAttribute::None,
        }
    }

    /// Leader choice equivalent to this skill.
    ///
    /// Skills on axes the calculator does not model (crit rate,
    /// resistance, accuracy...) map to no leader.
    pub fn to_choice(&self) -> LeaderChoice {
        match self.leader_attribute() {
            LeaderAttribute::None => LeaderChoice::none(),
            attribute => LeaderChoice::new(attribute, self.amount),
        }
    }

    /// Short description, e.g. "ATK +33% (Guild)"
    pub fn describe(&self) -> String {
        let target = match self.leader_attribute() {
            LeaderAttribute::None => self.attribute.clone(),
            attribute => attribute.label().to_string(),
        };
        let scope = match (&self.area[..], &self.element) {
            ("Element", Some(element)) => format!(" ({})", element),
            ("General", _) | ("", _) => String::new(),
            (area, _) => format!(" ({})", area),
        };
        format!("{} +{}%{}", target, self.amount, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(attribute: &str, amount: f64, area: &str) -> LeaderSkill {
        LeaderSkill {
            id: 1,
            attribute: attribute.to_string(),
            amount,
            area: area.to_string(),
            element: None,
        }
    }

    #[test]
    fn test_attribute_mapping() {
        assert_eq!(skill("HP", 30.0, "General").leader_attribute(), LeaderAttribute::Hp);
        assert_eq!(
            skill("Attack Power", 30.0, "General").leader_attribute(),
            LeaderAttribute::Attack
        );
        assert_eq!(skill("Defense", 30.0, "General").leader_attribute(), LeaderAttribute::Defense);
        assert_eq!(
            skill("Attack Speed", 24.0, "General").leader_attribute(),
            LeaderAttribute::Speed
        );
        assert_eq!(
            skill("Critical Rate", 24.0, "General").leader_attribute(),
            LeaderAttribute::None
        );
    }

    #[test]
    fn test_to_choice() {
        let choice = skill("Attack Power", 33.0, "Guild").to_choice();
        assert_eq!(choice, LeaderChoice::new(LeaderAttribute::Attack, 33.0));
        assert!(!skill("Resistance", 40.0, "General").to_choice().is_active());
    }

    #[test]
    fn test_describe() {
        assert_eq!(skill("Attack Power", 33.0, "Guild").describe(), "ATK +33% (Guild)");
        assert_eq!(skill("HP", 15.0, "General").describe(), "HP +15%");

        let mut elemental = skill("Defense", 30.0, "Element");
        elemental.element = Some("Water".to_string());
        assert_eq!(elemental.describe(), "DEF +30% (Water)");
    }

    #[test]
    fn test_deserialize_swarfarm_shape() {
        let json = r#"{"id": 12, "url": "https://swarfarm.com/api/v2/leader-skills/12/",
            "attribute": "Attack Speed", "amount": 24, "area": "General", "element": null}"#;
        let skill: LeaderSkill = serde_json::from_str(json).unwrap();
        assert_eq!(skill.id, 12);
        assert!((skill.amount - 24.0).abs() < f64::EPSILON);
        assert_eq!(skill.element, None);
    }
}

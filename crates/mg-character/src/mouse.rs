//! The finished character record.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use mg_mechanics::BaseStats;
use mg_tables::{TableResult, TableSet, background_for, roll_birthsign, roll_coat, roll_detail};

/// Gear every mouse starts with besides its background items.
pub const STANDARD_GEAR: [&str; 2] = ["Torches", "Rations"];

/// Placeholder for the weapon the player picks.
pub const WEAPON_OF_CHOICE: &str = "<+Weapon of Choice>";

/// Cosmetic traits resolved from the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    /// Birthsign.
    pub sign: String,
    /// Disposition linked to the birthsign.
    pub disposition: String,
    /// Coat color.
    pub color: String,
    /// Coat pattern.
    pub pattern: String,
    /// Physical detail.
    pub detail: String,
    /// Background picked by HP and Pips.
    pub background: String,
    /// First background item.
    pub item1: String,
    /// Second background item.
    pub item2: String,
}

impl Traits {
    /// Roll birthsign, coat, and detail, then look up the background.
    pub fn resolve(tables: &TableSet, stats: &BaseStats, rng: &mut StdRng) -> TableResult<Self> {
        let birthsign = roll_birthsign(&tables.birthsigns, rng)?;
        let (color, pattern) = roll_coat(&tables.coat, rng)?;
        let detail = roll_detail(&tables.details, rng)?;
        let background = background_for(&tables.backgrounds, stats.hp, stats.pips)?;

        Ok(Self {
            sign: birthsign.sign.clone(),
            disposition: birthsign.disposition.clone(),
            color: color.to_string(),
            pattern: pattern.to_string(),
            detail: detail.to_string(),
            background: background.background.clone(),
            item1: background.item1.clone(),
            item2: background.item2.clone(),
        })
    }
}

/// A generated mouse: accepted attributes plus traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mouse {
    /// Accepted base attributes.
    #[serde(flatten)]
    pub stats: BaseStats,
    /// Attempts the rejection loop needed.
    pub tries: u64,
    /// Resolved cosmetic traits.
    #[serde(flatten)]
    pub traits: Traits,
}

impl Mouse {
    /// Starting inventory: background items, standard gear, and the weapon slot.
    pub fn items(&self) -> Vec<&str> {
        let mut items = vec![self.traits.item1.as_str(), self.traits.item2.as_str()];
        items.extend(STANDARD_GEAR);
        items.push(WEAPON_OF_CHOICE);
        items
    }
}

impl std::fmt::Display for Mouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = &self.traits;
        writeln!(f, "{} Tries: {}", self.stats, self.tries)?;
        writeln!(f, "Sign: {} | Disposition: {}", t.sign, t.disposition)?;
        writeln!(f, "Color: {} | Pattern: {} | Detail: {}", t.color, t.pattern, t.detail)?;
        writeln!(f, "Background: {}", t.background)?;
        write!(f, "Items: {}", self.items().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn sample() -> Mouse {
        Mouse {
            stats: BaseStats {
                strength: 11,
                dexterity: 9,
                willpower: 10,
                hp: 2,
                pips: 2,
            },
            tries: 1,
            traits: Traits {
                sign: "Star".to_string(),
                disposition: "Brave / Reckless".to_string(),
                color: "Chocolate".to_string(),
                pattern: "Solid".to_string(),
                detail: "Scarred body".to_string(),
                background: "Beetleherd".to_string(),
                item1: "Hireling: Loyal beetle".to_string(),
                item2: "Pole, 6\"".to_string(),
            },
        }
    }

    #[test]
    fn sheet_layout() {
        let expected = [
            "STR: 11 DEX: 9 WIL: 10 HP: 2 Pips: 2 Tries: 1",
            "Sign: Star | Disposition: Brave / Reckless",
            "Color: Chocolate | Pattern: Solid | Detail: Scarred body",
            "Background: Beetleherd",
            "Items: Hireling: Loyal beetle, Pole, 6\", Torches, Rations, <+Weapon of Choice>",
        ]
        .join("\n");
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn items_include_standard_gear() {
        let mouse = sample();
        let items = mouse.items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], "Hireling: Loyal beetle");
        assert_eq!(items[2], "Torches");
        assert_eq!(items[4], WEAPON_OF_CHOICE);
    }

    #[test]
    fn json_is_flat() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["str"], 11);
        assert_eq!(value["pips"], 2);
        assert_eq!(value["tries"], 1);
        assert_eq!(value["sign"], "Star");
        assert_eq!(value["item2"], "Pole, 6\"");
    }

    #[test]
    fn resolve_uses_hp_and_pips_for_background() {
        let tables = TableSet::builtin().unwrap();
        let stats = BaseStats {
            strength: 7,
            dexterity: 7,
            willpower: 7,
            hp: 3,
            pips: 5,
        };
        let mut rng = StdRng::seed_from_u64(42);
        let traits = Traits::resolve(&tables, &stats, &mut rng).unwrap();
        assert_eq!(traits.background, "Wall rover");
        assert_eq!(traits.item1, "Fishhook");
        assert!(tables.coat.colors.contains(&traits.color));
        assert!(tables.details.details.contains(&traits.detail));
        assert!(
            tables
                .birthsigns
                .entries
                .iter()
                .any(|b| b.sign == traits.sign && b.disposition == traits.disposition)
        );
    }
}

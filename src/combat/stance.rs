//! Combat stance
//!
//! Stance trades damage dealt against damage taken, and the pairing of
//! attacker and defender stances shifts the to-hit chance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::MeleeConfig;

/// Combat stance - every combatant is always in exactly one stance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Stance {
    /// Hits harder, gets hit harder
    Aggressive,
    #[default]
    Balanced,
    /// Hits softer, gets hit softer
    Defensive,
}

impl Stance {
    /// Multiplier on damage this combatant deals
    pub fn damage_dealt_multiplier(&self) -> f32 {
        match self {
            Stance::Aggressive => 1.2,
            Stance::Balanced => 1.0,
            Stance::Defensive => 0.8,
        }
    }

    /// Multiplier on damage this combatant takes
    pub fn damage_taken_multiplier(&self) -> f32 {
        match self {
            Stance::Aggressive => 1.2,
            Stance::Balanced => 1.0,
            Stance::Defensive => 0.8,
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stance::Aggressive => "aggressive",
            Stance::Balanced => "balanced",
            Stance::Defensive => "defensive",
        };
        f.write_str(name)
    }
}

impl FromStr for Stance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aggressive" => Ok(Stance::Aggressive),
            "balanced" => Ok(Stance::Balanced),
            "defensive" => Ok(Stance::Defensive),
            other => Err(format!("unknown stance: {}", other)),
        }
    }
}

/// How the attacker's stance fares against the defender's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StanceMatchup {
    Favourable,
    Neutral,
    Unfavourable,
}

impl StanceMatchup {
    /// Compare attacker and defender stances.
    ///
    /// Only the aggressive/defensive pairing matters; balanced is neutral
    /// to everything.
    pub fn compare(attacker: Stance, defender: Stance) -> Self {
        match (attacker, defender) {
            (Stance::Aggressive, Stance::Defensive) => StanceMatchup::Favourable,
            (Stance::Defensive, Stance::Aggressive) => StanceMatchup::Unfavourable,
            _ => StanceMatchup::Neutral,
        }
    }

    /// Flat to-hit adjustment
    pub fn to_hit_bonus(&self, config: &MeleeConfig) -> f32 {
        match self {
            StanceMatchup::Favourable => config.favourable_stance_to_hit,
            StanceMatchup::Neutral => 0.0,
            StanceMatchup::Unfavourable => config.unfavourable_stance_to_hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_multipliers() {
        assert_eq!(Stance::Aggressive.damage_dealt_multiplier(), 1.2);
        assert_eq!(Stance::Defensive.damage_dealt_multiplier(), 0.8);
        assert_eq!(Stance::Balanced.damage_taken_multiplier(), 1.0);
        assert_eq!(Stance::Aggressive.damage_taken_multiplier(), 1.2);
    }

    #[test]
    fn test_matchup_table() {
        use Stance::*;
        assert_eq!(
            StanceMatchup::compare(Aggressive, Defensive),
            StanceMatchup::Favourable
        );
        assert_eq!(
            StanceMatchup::compare(Defensive, Aggressive),
            StanceMatchup::Unfavourable
        );
        for other in [Aggressive, Balanced, Defensive] {
            assert_eq!(StanceMatchup::compare(Balanced, other), StanceMatchup::Neutral);
            assert_eq!(StanceMatchup::compare(other, Balanced), StanceMatchup::Neutral);
        }
        assert_eq!(
            StanceMatchup::compare(Aggressive, Aggressive),
            StanceMatchup::Neutral
        );
    }

    #[test]
    fn test_matchup_bonus() {
        let config = MeleeConfig::default();
        assert_eq!(StanceMatchup::Favourable.to_hit_bonus(&config), 20.0);
        assert_eq!(StanceMatchup::Unfavourable.to_hit_bonus(&config), -10.0);
        assert_eq!(StanceMatchup::Neutral.to_hit_bonus(&config), 0.0);
    }

    #[test]
    fn test_parse_stance() {
        assert_eq!("Aggressive".parse::<Stance>(), Ok(Stance::Aggressive));
        assert!("reckless".parse::<Stance>().is_err());
    }
}
